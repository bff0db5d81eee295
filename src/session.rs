//! Screen lifetime: one catalog load on mount, cancellation on teardown.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::board::ExchangeBoard;
use crate::cancel::CancelToken;
use crate::catalog::CatalogLoader;

/// Board handle shared between the presentation layer and the load task.
///
/// Observers run while this lock is held and must not lock it again.
pub type SharedBoard = Arc<Mutex<ExchangeBoard>>;

pub struct BoardSession {
    board: SharedBoard,
    loader: Arc<CatalogLoader>,
    cancel: CancelToken,
    load_task: Mutex<Option<JoinHandle<()>>>,
    mounted: Mutex<bool>,
}

impl BoardSession {
    pub fn new(board: ExchangeBoard, loader: CatalogLoader) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            loader: Arc::new(loader),
            cancel: CancelToken::new(),
            load_task: Mutex::new(None),
            mounted: Mutex::new(false),
        }
    }

    pub fn board(&self) -> SharedBoard {
        Arc::clone(&self.board)
    }

    /// Starts the catalog load. Only the first call does anything.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) -> bool {
        let mut mounted = self.mounted.lock();
        if *mounted {
            tracing::debug!("Session already mounted");
            return false;
        }
        *mounted = true;

        let board = Arc::clone(&self.board);
        let loader = Arc::clone(&self.loader);
        let cancel = self.cancel.clone();

        let handle = tokio::spawn(async move {
            let items = loader.load_until(&cancel).await;
            if cancel.is_cancelled() {
                tracing::debug!(count = items.len(), "Session torn down, discarding catalog");
                return;
            }
            board.lock().initialize(items);
        });
        *self.load_task.lock() = Some(handle);
        true
    }

    /// Cancels a pending load. The board is left as it is.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the load task started by [`mount`](Self::mount), if any.
    pub async fn wait_loaded(&self) {
        let handle = self.load_task.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Catalog load task failed");
            }
        }
    }
}

impl Drop for BoardSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for BoardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardSession")
            .field("loader", &self.loader)
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}
