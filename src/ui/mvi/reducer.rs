//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. No I/O, no logging,
/// no clocks; side effects belong to whoever dispatches.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
