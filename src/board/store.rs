//! Owned board store with change notification.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::board::intent::BoardIntent;
use crate::board::reducer::BoardReducer;
use crate::board::state::{BoardState, ExchangeMode};
use crate::card::{Card, CardId};
use crate::config::BoardConfig;
use crate::mvi::Reducer;

/// Called with the new state and the intent that produced it.
pub type Observer = Box<dyn FnMut(&BoardState, &BoardIntent) + Send>;

/// Handle returned by [`ExchangeBoard::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The board a presentation layer drives.
///
/// Every mutation goes through [`dispatch`](Self::dispatch). Invalid ids
/// never fail; the command is declined and the `bool` results report
/// whether anything happened. Observers only hear about dispatches that
/// changed the state.
pub struct ExchangeBoard {
    state: BoardState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl ExchangeBoard {
    pub fn new() -> Self {
        Self::with_state(BoardState::default())
    }

    pub fn with_mode(mode: ExchangeMode) -> Self {
        Self::with_state(BoardState {
            mode,
            ..BoardState::default()
        })
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::with_state(BoardState {
            mode: config.mode,
            clear_targets_on_exchange: config.clear_targets_on_exchange,
            ..BoardState::default()
        })
    }

    fn with_state(state: BoardState) -> Self {
        Self {
            state,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn items(&self) -> &[Card] {
        &self.state.items
    }

    pub fn targeted_ids(&self) -> &BTreeSet<CardId> {
        &self.state.targeted
    }

    pub fn is_targeted(&self, id: &CardId) -> bool {
        self.state.is_targeted(id)
    }

    pub fn dragging(&self) -> Option<&CardId> {
        self.state.dragging.as_ref()
    }

    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.state.position(id)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Runs `intent` through the reducer. Returns whether the state changed.
    pub fn dispatch(&mut self, intent: BoardIntent) -> bool {
        let previous = self.state.clone();
        let next = BoardReducer::reduce(std::mem::take(&mut self.state), intent.clone());
        self.state = next;

        if self.state == previous {
            tracing::debug!(intent = intent.name(), "Board intent declined");
            return false;
        }

        tracing::debug!(
            intent = intent.name(),
            items = self.state.items.len(),
            targeted = self.state.targeted.len(),
            "Board state changed"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state, &intent);
        }
        true
    }

    /// Replaces all cards and clears every highlight. Cards repeating an
    /// earlier id are dropped.
    pub fn initialize(&mut self, items: Vec<Card>) {
        if self.is_loaded() {
            tracing::warn!("Board initialized more than once, replacing items");
        }
        let unique: HashSet<&CardId> = items.iter().map(|card| &card.id).collect();
        if unique.len() != items.len() {
            tracing::warn!(
                dropped = items.len() - unique.len(),
                "Duplicate card ids, keeping first occurrence"
            );
        }
        self.dispatch(BoardIntent::Initialize { items });
    }

    /// Swaps two cards. False when either id is missing or both are equal.
    pub fn exchange(&mut self, source: &CardId, target: &CardId) -> bool {
        let before = self.state.items.clone();
        self.dispatch(BoardIntent::Exchange {
            source: source.clone(),
            target: target.clone(),
        });
        self.state.items != before
    }

    /// Adds or removes a drop highlight. Returns whether the set changed.
    pub fn set_targeted(&mut self, id: &CardId, targeted: bool) -> bool {
        self.dispatch(BoardIntent::SetTargeted {
            id: id.clone(),
            targeted,
        })
    }

    /// Records the card a drag started from. False for unknown ids.
    pub fn begin_drag(&mut self, id: &CardId) -> bool {
        self.dispatch(BoardIntent::BeginDrag { id: id.clone() });
        self.state.dragging.as_ref() == Some(id)
    }

    /// Ends a drag over `target`. Returns whether the card order changed.
    pub fn drop_card(&mut self, source: &CardId, target: &CardId) -> bool {
        let before = self.state.items.clone();
        self.dispatch(BoardIntent::Drop {
            source: source.clone(),
            target: target.clone(),
        });
        self.state.items != before
    }

    /// [`drop_card`](Self::drop_card) with the card from [`begin_drag`](Self::begin_drag)
    /// as source. False when no drag is in progress.
    pub fn drop_card_on(&mut self, target: &CardId) -> bool {
        let Some(source) = self.state.dragging.clone() else {
            tracing::debug!(card = %target, "Drop without a drag in progress");
            return false;
        };
        self.drop_card(&source, target)
    }

    /// Returns false when no drag was in progress.
    pub fn cancel_drag(&mut self) -> bool {
        self.dispatch(BoardIntent::CancelDrag)
    }
}

impl Default for ExchangeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExchangeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeBoard")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;
    use std::sync::{Arc, Mutex};

    fn board() -> ExchangeBoard {
        let mut board = ExchangeBoard::new();
        board.initialize(vec![
            Card::new("A", CardColor::Red),
            Card::new("B", CardColor::Blue),
        ]);
        board
    }

    #[test]
    fn observer_hears_changes_only() {
        let mut board = board();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        board.subscribe(Box::new(move |_: &BoardState, intent: &BoardIntent| {
            sink.lock().unwrap().push(intent.name());
        }));

        assert!(!board.exchange(&"A".into(), &"A".into()));
        assert!(board.exchange(&"A".into(), &"B".into()));
        assert!(!board.set_targeted(&"Z".into(), true));

        assert_eq!(*seen.lock().unwrap(), vec!["exchange"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut board = board();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let sub = board.subscribe(Box::new(move |_: &BoardState, _: &BoardIntent| {
            *sink.lock().unwrap() += 1
        }));

        board.exchange(&"A".into(), &"B".into());
        assert!(board.unsubscribe(sub));
        assert!(!board.unsubscribe(sub));
        board.exchange(&"A".into(), &"B".into());

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn drop_card_on_without_drag_is_noop() {
        let mut board = board();
        assert!(!board.drop_card_on(&"B".into()));
        assert_eq!(board.items()[0].id.as_str(), "A");
    }
}
