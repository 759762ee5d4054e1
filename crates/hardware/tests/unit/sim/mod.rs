//! Simulation layer tests.

/// Machine-code listing parsing and file loading.
pub mod loader;
