//! Port contracts for the portfolio catalogue.

pub mod repository;

pub use repository::{
    CatalogRepository, CatalogRepositoryError, CatalogRepositoryResult, PortfolioRepository,
};
