//! Unit tests for common components.

/// Word address masking and offset arithmetic.
pub mod address_arithmetic;
