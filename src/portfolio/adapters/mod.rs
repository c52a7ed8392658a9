//! Adapter implementations for catalogue ports.

pub mod memory;
pub mod postgres;
