//! In-memory adapters for catalogue persistence.

mod catalog;

pub use catalog::{CatalogTable, InMemoryPortfolioRepository, MemoryTable, PortfolioTables};
