//! Marker trait for reducer-owned state.

/// State handed to reducers and observers.
///
/// `PartialEq` lets the store skip notifications for intents that did
/// not change anything; `Default` is the pre-load state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
