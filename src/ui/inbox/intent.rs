use crate::ui::inbox::state::{Message, Route};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum InboxIntent {
    /// Append a new unread message. Fields are stored as given.
    AddMessage { subject: String, body: String },
    /// Mark `message` read and move it to the end of the list.
    /// Carries the full current value of the message, not just its id.
    MarkMessageRead { message: Message },
    ChangeRoute { route: Route },
}

impl Intent for InboxIntent {}
