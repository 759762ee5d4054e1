//! Loader tests.

/// Loading listings from disk.
pub mod file_loading;

/// Parsing listing text.
pub mod listing_parsing;
