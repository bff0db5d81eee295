//! Shared test fixtures.

#![allow(dead_code)]

use cardswap::board::ExchangeBoard;
use cardswap::card::{Card, CardColor, CardId};

pub fn card(id: &str, color: CardColor) -> Card {
    Card::new(id, color)
}

pub fn id(id: &str) -> CardId {
    CardId::from(id)
}

/// `[A(red), B(blue), C(green)]`
pub fn abc() -> Vec<Card> {
    vec![
        card("A", CardColor::Red),
        card("B", CardColor::Blue),
        card("C", CardColor::Green),
    ]
}

pub fn abc_board() -> ExchangeBoard {
    let mut board = ExchangeBoard::new();
    board.initialize(abc());
    board
}

pub fn order(board: &ExchangeBoard) -> Vec<String> {
    board.items().iter().map(|c| c.id.to_string()).collect()
}
