//! `PostgreSQL` adapters for catalogue persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresPortfolioRepository;
