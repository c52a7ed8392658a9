//! Folio admin server and seed tool.
//!
//! ```text
//! folio serve --admin-password <password>
//! folio seed [--reset]
//! ```

use clap::Parser;
use folio::app::{self, AppError};
use folio::config::Cli;
use folio::telemetry;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json)?;
    if let Err(err) = app::run(cli).await {
        tracing::error!(error = %err, "folio exited with an error");
        return Err(err);
    }
    Ok(())
}
