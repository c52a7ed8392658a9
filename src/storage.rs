//! `PostgreSQL` connection pooling and schema bootstrap.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tracing::info;

/// `PostgreSQL` connection pool type shared by every repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-18-000000_create_folio_tables/up.sql");

/// Errors raised while opening the database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
    /// Applying the schema failed.
    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] diesel::result::Error),
    /// The blocking bootstrap task did not complete.
    #[error("schema bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`StorageError::Pool`] when no connection can be established.
pub fn connect(database_url: &str) -> Result<PgPool, StorageError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().build(manager)?)
}

/// Creates any missing tables. Safe to run on every start.
///
/// # Errors
///
/// Returns [`StorageError`] when a connection cannot be obtained or the
/// schema statements fail.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
        let mut connection = pool.get()?;
        connection.batch_execute(CREATE_SCHEMA_SQL)?;
        Ok(())
    })
    .await??;
    info!("database schema ready");
    Ok(())
}
