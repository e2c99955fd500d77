//! Owned state container with a single update entry point.

use super::reducer::Reducer;

/// Holds the current state of one reducer.
///
/// There is no global instance: whoever owns the `Store` owns the state, and
/// `dispatch` is the only way to change it.
pub struct Store<R: Reducer> {
    state: R::State,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer on the current state and keep the result.
    pub fn dispatch(&mut self, intent: R::Intent) -> &R::State {
        tracing::debug!(?intent, "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = R::reduce(current, intent);
        &self.state
    }
}
