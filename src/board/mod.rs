//! The exchange board: ordered cards plus drop-target highlighting.
//!
//! [`BoardReducer`] holds every transition rule. [`ExchangeBoard`] owns a
//! [`BoardState`], runs intents through the reducer and notifies
//! observers when something actually changed.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::BoardIntent;
pub use reducer::BoardReducer;
pub use state::{BoardState, ExchangeMode};
pub use store::{ExchangeBoard, Observer, SubscriptionId};
