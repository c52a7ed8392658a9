//! Adapter implementations for roadmap ports.

pub mod memory;
pub mod postgres;
