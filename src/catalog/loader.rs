use std::time::Duration;

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cancel::CancelToken;
use crate::card::{Card, CardColor, IdSource, UuidIdSource};
use crate::config::{CatalogConfig, MAX_CATALOG_SIZE, MIN_CATALOG_SIZE};

pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// Produces the card list after a fixed simulated latency.
///
/// Loading never fails. Cancellation only shortens the wait; the caller
/// still receives the full list and decides whether to use it.
pub struct CatalogLoader {
    latency: Duration,
    size: usize,
    seed: Option<u64>,
    ids: Mutex<Box<dyn IdSource>>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            size: MIN_CATALOG_SIZE,
            seed: None,
            ids: Mutex::new(Box::new(UuidIdSource)),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let loader = Self::new()
            .with_latency(Duration::from_millis(config.latency_ms))
            .with_size(config.size);
        match config.seed {
            Some(seed) => loader.with_seed(seed),
            None => loader,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Clamped to 12..=22.
    pub fn with_size(mut self, size: usize) -> Self {
        let clamped = size.clamp(MIN_CATALOG_SIZE, MAX_CATALOG_SIZE);
        if clamped != size {
            tracing::warn!(requested = size, used = clamped, "Catalog size clamped");
        }
        self.size = clamped;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Mutex::new(Box::new(ids));
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Waits out the latency, then returns a fresh catalog.
    pub async fn load(&self) -> Vec<Card> {
        tokio::time::sleep(self.latency).await;
        self.catalog()
    }

    /// Like [`load`](Self::load), but a fired token cuts the wait short.
    pub async fn load_until(&self, cancel: &CancelToken) -> Vec<Card> {
        tokio::select! {
            _ = tokio::time::sleep(self.latency) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Catalog delay interrupted");
            }
        }
        self.catalog()
    }

    /// Builds the catalog immediately. Every call mints new ids.
    pub fn catalog(&self) -> Vec<Card> {
        let mut colors: Vec<CardColor> = CardColor::PALETTE
            .iter()
            .copied()
            .cycle()
            .take(self.size)
            .collect();

        if let Some(seed) = self.seed {
            colors.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        }

        let mut ids = self.ids.lock();
        let cards: Vec<Card> = colors
            .into_iter()
            .map(|color| Card {
                id: ids.next_id(),
                color,
            })
            .collect();

        tracing::info!(count = cards.len(), seeded = self.seed.is_some(), "Catalog loaded");
        cards
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("latency", &self.latency)
            .field("size", &self.size)
            .field("seed", &self.seed)
            .finish()
    }
}
