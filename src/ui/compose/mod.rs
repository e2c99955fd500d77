//! Compose form feature module.
//!
//! Holds the local draft (subject, body, focused field) and the
//! required-field check that gates submission. The inbox reducer never
//! validates; this form is the only place empty messages are rejected.

mod intent;
mod reducer;
mod state;

pub use intent::ComposeIntent;
pub use reducer::ComposeReducer;
pub use state::{ComposeField, ComposeState, Draft, FormError};
