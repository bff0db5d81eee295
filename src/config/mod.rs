//! Configuration for the demo binary.
//!
//! The board itself takes no configuration; these settings only choose
//! how the catalog is simulated and which exchange mode the board uses.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BoardConfig, CatalogConfig, Config, MAX_CATALOG_SIZE, MIN_CATALOG_SIZE};
