use serde::{Deserialize, Serialize};

use crate::board::ExchangeMode;

pub const MIN_CATALOG_SIZE: usize = 12;
pub const MAX_CATALOG_SIZE: usize = 22;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

/// How the simulated fetch behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated latency in milliseconds (default: 2000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of cards produced, 12..=22 (default: 12).
    #[serde(default = "default_size")]
    pub size: usize,
    /// Shuffle the palette with this seed. Fixed order when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Board behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub mode: ExchangeMode,
    /// Drop highlight state of cards moved by an exchange (default: true).
    #[serde(default = "default_clear_targets")]
    pub clear_targets_on_exchange: bool,
}

fn default_latency_ms() -> u64 {
    2000
}

fn default_size() -> usize {
    MIN_CATALOG_SIZE
}

fn default_clear_targets() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            size: default_size(),
            seed: None,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mode: ExchangeMode::default(),
            clear_targets_on_exchange: default_clear_targets(),
        }
    }
}
