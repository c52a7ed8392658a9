//! Portfolio catalogue: projects, certificates and skills.
//!
//! These are flat records with no lifecycle beyond add, edit and delete.
//! The module follows the same hexagonal layout as [`crate::roadmap`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The catalogue service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
