//! Base trait for UI state in the MVI architecture.

use std::fmt::Debug;

/// Marker trait for UI state objects.
///
/// States are values: a reducer consumes one and produces the next, so an
/// old state a caller kept (by cloning) is never affected by a transition.
/// `Default` is the initial state and lets the store move the current value
/// out while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Debug + Send + 'static {}
