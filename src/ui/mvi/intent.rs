//! Base trait for intents in the MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// An intent is a closed, typed request to transition state: a key press
/// translated by the view, a form submission, a navigation event. Each
/// variant carries exactly the fields its transition needs.
///
/// `Debug` is required so the store can log every dispatch.
pub trait Intent: Debug + Send + 'static {}
