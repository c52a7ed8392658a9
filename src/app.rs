//! Process wiring for the `folio` binary.

use mockable::DefaultClock;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::admin::session::AdminPassword;
use crate::admin::{
    AdminSettings, AdminState, InMemoryBackend, PostgresBackend, Views, build_router,
};
use crate::config::{Cli, Command, ServeArgs};
use crate::data_dir::DataDir;
use crate::portfolio::{
    adapters::{memory::InMemoryPortfolioRepository, postgres::PostgresPortfolioRepository},
    services::PortfolioService,
};
use crate::roadmap::{
    adapters::{memory::InMemoryTodoRepository, postgres::PostgresTodoRepository},
    services::RoadmapService,
};
use crate::seed::{SeedReport, Seeder};
use crate::storage::{self, PgPool};

/// Error type returned by the binary entry point.
pub type AppError = Box<dyn std::error::Error + Send + Sync>;

/// Admin state over process-local stores.
#[must_use]
pub fn in_memory_state(views: Views, settings: AdminSettings) -> AdminState<InMemoryBackend> {
    AdminState::new(
        RoadmapService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        ),
        PortfolioService::new(Arc::new(InMemoryPortfolioRepository::new())),
        views,
        settings,
    )
}

/// Admin state over `PostgreSQL` stores sharing one pool.
#[must_use]
pub fn postgres_state(
    pool: &PgPool,
    views: Views,
    settings: AdminSettings,
) -> AdminState<PostgresBackend> {
    AdminState::new(
        RoadmapService::new(
            Arc::new(PostgresTodoRepository::new(pool.clone())),
            Arc::new(DefaultClock),
        ),
        PortfolioService::new(Arc::new(PostgresPortfolioRepository::new(pool.clone()))),
        views,
        settings,
    )
}

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns an error when the database, templates, listener or seed files
/// fail.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let data_dir = DataDir::new(cli.data_dir);
    match cli.command {
        Command::Serve(args) => serve(cli.database_url.as_deref(), data_dir, args).await,
        Command::Seed { reset } => {
            let report = seed(cli.database_url.as_deref(), &data_dir, reset).await?;
            info!(?report, "seed finished");
            Ok(())
        }
    }
}

async fn open_database(url: &str) -> Result<PgPool, AppError> {
    let pool = storage::connect(url)?;
    storage::ensure_schema(&pool).await?;
    Ok(pool)
}

async fn serve(
    database_url: Option<&str>,
    data_dir: DataDir,
    args: ServeArgs,
) -> Result<(), AppError> {
    let views = Views::load()?;
    let settings = AdminSettings {
        password: AdminPassword::new(&args.admin_password),
        data_dir: data_dir.clone(),
        resume_file: args.resume_file,
    };

    let router = if let Some(url) = database_url {
        let pool = open_database(url).await?;
        build_router(postgres_state(&pool, views, settings))
    } else {
        warn!("DATABASE_URL is not set; records are kept in memory only");
        let state = in_memory_state(views, settings);
        Seeder::new(&state.roadmap, &state.portfolio)
            .run(&data_dir, false)
            .await?;
        build_router(state)
    };

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "admin server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("admin server stopped");
    Ok(())
}

async fn seed(
    database_url: Option<&str>,
    data_dir: &DataDir,
    reset: bool,
) -> Result<SeedReport, AppError> {
    let Some(url) = database_url else {
        return Err("the seed command needs DATABASE_URL".into());
    };
    let pool = open_database(url).await?;
    let roadmap = RoadmapService::new(
        Arc::new(PostgresTodoRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    );
    let portfolio = PortfolioService::new(Arc::new(PostgresPortfolioRepository::new(pool)));
    Ok(Seeder::new(&roadmap, &portfolio)
        .run(data_dir, reset)
        .await?)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
