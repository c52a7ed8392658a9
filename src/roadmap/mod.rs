//! Personal task roadmap.
//!
//! The roadmap tracks tasks through `Pending`, `Active`, `Paused` and `Done`
//! and keeps at most one task `Active` at any time. The module follows the
//! hexagonal layout used across the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The roadmap state machine in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
