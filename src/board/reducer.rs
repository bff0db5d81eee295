use std::collections::HashSet;

use crate::board::intent::BoardIntent;
use crate::board::state::{BoardState, ExchangeMode};
use crate::card::CardId;
use crate::mvi::Reducer;

pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoardIntent::Initialize { items } => {
                // Ids must stay unique; later twins are dropped.
                let mut seen = HashSet::new();
                state.items = items
                    .into_iter()
                    .filter(|card| seen.insert(card.id.clone()))
                    .collect();
                state.targeted.clear();
                state.dragging = None;
                state
            }
            BoardIntent::Exchange { source, target } => swap(state, &source, &target),
            BoardIntent::SetTargeted { id, targeted } => {
                if targeted {
                    // Unknown ids would leave a highlight nothing can clear.
                    if state.contains(&id) {
                        state.targeted.insert(id);
                    }
                } else {
                    state.targeted.remove(&id);
                }
                state
            }
            BoardIntent::BeginDrag { id } => {
                if state.contains(&id) {
                    state.dragging = Some(id);
                }
                state
            }
            BoardIntent::Drop { source, target } => {
                let mut state = match state.mode {
                    ExchangeMode::Swap => swap(state, &source, &target),
                    ExchangeMode::Reorder => reorder(state, &source, &target),
                };
                state.dragging = None;
                state.targeted.remove(&target);
                state
            }
            BoardIntent::CancelDrag => {
                state.dragging = None;
                state
            }
        }
    }
}

fn swap(mut state: BoardState, source: &CardId, target: &CardId) -> BoardState {
    let Some((from, to)) = state.pair_positions(source, target) else {
        return state;
    };
    state.items.swap(from, to);
    clear_moved_targets(&mut state, source, target);
    state
}

fn reorder(mut state: BoardState, source: &CardId, target: &CardId) -> BoardState {
    let Some((from, to)) = state.pair_positions(source, target) else {
        return state;
    };
    let card = state.items.remove(from);
    state.items.insert(to, card);
    clear_moved_targets(&mut state, source, target);
    state
}

fn clear_moved_targets(state: &mut BoardState, source: &CardId, target: &CardId) {
    if state.clear_targets_on_exchange {
        state.targeted.remove(source);
        state.targeted.remove(target);
    }
}
