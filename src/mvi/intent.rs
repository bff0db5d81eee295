//! Marker trait for commands dispatched by a presentation layer.

/// A command value: a user gesture (drag started, dropped on a card) or a
/// system event (catalog loaded) expressed as plain data.
pub trait Intent: Send + 'static {}
