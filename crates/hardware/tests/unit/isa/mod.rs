//! ISA unit tests.
