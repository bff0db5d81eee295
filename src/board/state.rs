//! Board state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::mvi::UiState;

/// What a completed drag-and-drop does to the card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeMode {
    /// Source and target trade places; nothing else moves.
    #[default]
    Swap,
    /// Source is pulled out and reinserted at the target's index.
    Reorder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardState {
    /// Display order.
    pub items: Vec<Card>,
    /// Cards currently highlighted as drop targets.
    pub targeted: BTreeSet<CardId>,
    /// Card picked up by the gesture in progress, if any.
    pub dragging: Option<CardId>,
    pub mode: ExchangeMode,
    /// Remove exchanged cards from `targeted` so highlights do not dangle.
    pub clear_targets_on_exchange: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            targeted: BTreeSet::new(),
            dragging: None,
            mode: ExchangeMode::default(),
            clear_targets_on_exchange: true,
        }
    }
}

impl UiState for BoardState {}

impl BoardState {
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.items.iter().position(|card| &card.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn is_targeted(&self, id: &CardId) -> bool {
        self.targeted.contains(id)
    }

    pub fn is_loaded(&self) -> bool {
        !self.items.is_empty()
    }

    /// Positions of two distinct cards, or `None` if either is missing or
    /// both ids are the same.
    pub(crate) fn pair_positions(
        &self,
        source: &CardId,
        target: &CardId,
    ) -> Option<(usize, usize)> {
        if source == target {
            return None;
        }
        Some((self.position(source)?, self.position(target)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardColor;

    fn state() -> BoardState {
        BoardState {
            items: vec![
                Card::new("A", CardColor::Red),
                Card::new("B", CardColor::Blue),
            ],
            ..BoardState::default()
        }
    }

    #[test]
    fn default_is_empty_swap_board() {
        let state = BoardState::default();
        assert!(!state.is_loaded());
        assert!(state.targeted.is_empty());
        assert_eq!(state.mode, ExchangeMode::Swap);
        assert!(state.clear_targets_on_exchange);
    }

    #[test]
    fn pair_positions_rejects_same_and_missing() {
        let state = state();
        assert_eq!(
            state.pair_positions(&"A".into(), &"B".into()),
            Some((0, 1))
        );
        assert_eq!(state.pair_positions(&"A".into(), &"A".into()), None);
        assert_eq!(state.pair_positions(&"A".into(), &"Z".into()), None);
    }
}
