//! Folio: portfolio back office with a single-active-task roadmap.
//!
//! # Architecture
//!
//! Folio follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`roadmap`]: Task roadmap that keeps at most one task active
//! - [`portfolio`]: Projects, certificates and skills
//! - [`admin`]: Session-guarded HTTP surface over both
//! - [`seed`]: Bulk loading from JSON files

pub mod admin;
pub mod app;
pub mod config;
pub mod data_dir;
pub mod portfolio;
pub mod roadmap;
pub mod seed;
pub mod storage;
pub mod telemetry;
