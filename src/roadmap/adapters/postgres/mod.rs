//! `PostgreSQL` adapters for roadmap persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresTodoRepository;
