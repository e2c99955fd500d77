use crate::ui::compose::state::FormError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ComposeIntent {
    /// Type a character into the focused field.
    Insert(char),
    /// Insert pasted text into the focused field.
    Paste(String),
    Backspace,
    /// Enter key. Moves from subject to body; inserts a line break in body.
    Newline,
    FocusNext,
    FocusPrev,
    /// Submission was blocked by a missing field.
    Reject(FormError),
    /// Clear the draft after a successful submission.
    Reset,
}

impl Intent for ComposeIntent {}
