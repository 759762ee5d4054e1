//! CPU execution tests.


/// Loads and stores with and without caches.
pub mod load_store;
