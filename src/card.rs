//! Cards and card identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, unique card identifier.
///
/// Assigned once when the card is created and never reused within a board.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Display color of a card. The board never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Gray,
    Cyan,
    Mint,
    Indigo,
    Brown,
}

impl CardColor {
    /// Catalog palette, in catalog order.
    pub const PALETTE: [CardColor; 12] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
        CardColor::Orange,
        CardColor::Purple,
        CardColor::Pink,
        CardColor::Gray,
        CardColor::Cyan,
        CardColor::Mint,
        CardColor::Indigo,
        CardColor::Brown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Orange => "orange",
            CardColor::Purple => "purple",
            CardColor::Pink => "pink",
            CardColor::Gray => "gray",
            CardColor::Cyan => "cyan",
            CardColor::Mint => "mint",
            CardColor::Indigo => "indigo",
            CardColor::Brown => "brown",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: CardColor,
}

impl Card {
    pub fn new(id: impl Into<CardId>, color: CardColor) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

/// Source of fresh card ids.
///
/// Injected into the catalog loader so tests can produce predictable ids
/// while the default stays random.
pub trait IdSource: Send {
    fn next_id(&mut self) -> CardId;
}

/// Random v4 UUIDs, hyphenated upper-case like the ids the demo shows.
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> CardId {
        CardId::new(uuid::Uuid::new_v4().to_string().to_uppercase())
    }
}

/// `prefix-1`, `prefix-2`, ... Counters never rewind, so ids are not reused.
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new("card")
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> CardId {
        let id = CardId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIdSource::default();
        assert_eq!(ids.next_id().as_str(), "card-1");
        assert_eq!(ids.next_id().as_str(), "card-2");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIdSource;
        let seen: HashSet<CardId> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn color_displays_lowercase_name() {
        assert_eq!(CardColor::Indigo.to_string(), "indigo");
        assert_eq!(
            serde_json::to_string(&CardColor::Mint).unwrap(),
            "\"mint\""
        );
    }
}
