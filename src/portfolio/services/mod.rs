//! Application services for the portfolio catalogue.

mod catalog;

pub use catalog::{PortfolioError, PortfolioResult, PortfolioService, PortfolioStats};
