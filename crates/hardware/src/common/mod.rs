//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared across all components. It includes:
//! 1. **Address Type:** A 13-bit word address that cannot index out of range.
//! 2. **Constants:** Register count, memory size, and address masks.
//! 3. **Access Classification:** Cache levels and HIT/MISS/SW classification.
//! 4. **Error Handling:** Load, configuration, and simulation errors.

/// Word address type.
pub mod addr;

/// Machine constants.
pub mod constants;

/// Cache level and access classification.
pub mod data;

/// Error types.
pub mod error;

pub use addr::WordAddr;
pub use data::{AccessKind, CacheLevel};
pub use error::{ConfigError, GeometryError, LoadError, SimError};
