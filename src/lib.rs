//! State core for a drag-and-drop card exchange screen.
//!
//! A [`catalog::CatalogLoader`] simulates fetching cards, an
//! [`board::ExchangeBoard`] holds their order and drop-target highlights,
//! and a [`session::BoardSession`] ties the two to a screen's lifetime.
//! Rendering is left to whatever presentation layer drives the board.

pub mod board;
pub mod cancel;
pub mod card;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod session;
