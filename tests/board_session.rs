use std::sync::Arc;
use std::time::Duration;

use cardswap::board::{BoardIntent, BoardState, ExchangeBoard};
use cardswap::card::SequentialIdSource;
use cardswap::catalog::CatalogLoader;
use cardswap::session::BoardSession;
use parking_lot::Mutex;

fn session(latency: Duration) -> BoardSession {
    let loader = CatalogLoader::new()
        .with_latency(latency)
        .with_id_source(SequentialIdSource::default());
    BoardSession::new(ExchangeBoard::new(), loader)
}

#[tokio::test(start_paused = true)]
async fn mount_populates_board_after_latency() {
    let session = session(Duration::from_secs(2));
    let board = session.board();

    assert!(session.mount());
    assert!(!board.lock().is_loaded());

    session.wait_loaded().await;

    let board = board.lock();
    assert_eq!(board.items().len(), 12);
    assert_eq!(board.items()[0].id.as_str(), "card-1");
    assert!(board.targeted_ids().is_empty());
}

#[tokio::test(start_paused = true)]
async fn second_mount_is_ignored() {
    let session = session(Duration::from_millis(10));
    assert!(session.mount());
    assert!(!session.mount());
    session.wait_loaded().await;
    assert_eq!(session.board().lock().items()[11].id.as_str(), "card-12");
}

#[tokio::test(start_paused = true)]
async fn teardown_discards_pending_load() {
    let session = session(Duration::from_secs(2));
    session.mount();

    tokio::time::sleep(Duration::from_millis(100)).await;
    session.teardown();
    session.wait_loaded().await;

    assert!(session.is_torn_down());
    assert!(!session.board().lock().is_loaded());
}

#[tokio::test(start_paused = true)]
async fn observers_hear_about_load() {
    let session = session(Duration::from_millis(10));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.board().lock().subscribe(Box::new(move |state: &BoardState, intent: &BoardIntent| {
        sink.lock().push((intent.name(), state.items.len()));
    }));

    session.mount();
    session.wait_loaded().await;

    assert_eq!(*seen.lock(), vec![("initialize", 12)]);
}
