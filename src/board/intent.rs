//! Commands a presentation layer sends to the board.

use crate::card::{Card, CardId};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardIntent {
    /// Catalog arrived. Replaces every card and clears highlights. Only the
    /// first card with a given id is kept.
    Initialize { items: Vec<Card> },
    /// Swap two cards by id. Ignored when either is missing or they match.
    Exchange { source: CardId, target: CardId },
    /// Turn the drop highlight of a card on or off.
    SetTargeted { id: CardId, targeted: bool },
    /// A drag gesture picked up a card.
    BeginDrag { id: CardId },
    /// A drag gesture ended over `target`; dispatched by
    /// [`ExchangeBoard::drop_card`](super::ExchangeBoard::drop_card). Always
    /// ends the gesture, and moves cards according to the board's
    /// [`ExchangeMode`](super::ExchangeMode).
    Drop { source: CardId, target: CardId },
    /// The drag gesture was abandoned.
    CancelDrag,
}

impl Intent for BoardIntent {}

impl BoardIntent {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            BoardIntent::Initialize { .. } => "initialize",
            BoardIntent::Exchange { .. } => "exchange",
            BoardIntent::SetTargeted { .. } => "set_targeted",
            BoardIntent::BeginDrag { .. } => "begin_drag",
            BoardIntent::Drop { .. } => "drop",
            BoardIntent::CancelDrag => "cancel_drag",
        }
    }
}
