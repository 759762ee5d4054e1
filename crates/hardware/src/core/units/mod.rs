//! Execution units and functional components.
//!
//! This module contains the ALU and the cache model.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Cache hierarchy implementation (L1, optional L2) with LRU replacement.
pub mod cache;
