//! Simulated catalog fetch.

mod loader;

pub use loader::{CatalogLoader, DEFAULT_LATENCY};
