//! Inbox feature module: the application's message state.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Route, messages and unread counter
//! - `intent.rs` - AddMessage, MarkMessageRead, ChangeRoute
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::InboxIntent;
pub use reducer::InboxReducer;
pub use state::{InboxState, Message, Route};
