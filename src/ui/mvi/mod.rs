//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every piece of UI state in mailroom changes the same way:
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑                                                  │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data describing everything a view needs to render
//! - **Intent**: a typed request to change that state
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Store**: the single owner of a state value and its only update path

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
