//! Model-View-Intent primitives the board is built on.
//!
//! Presentation layers never mutate board state directly. They dispatch
//! intents, a reducer folds each intent into the previous state, and the
//! store tells observers about the result.
//!
//! ```text
//! gesture ──→ Intent ──→ Reducer ──→ State ──→ render
//!    ↑                                        │
//!    └────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
