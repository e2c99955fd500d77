use crate::ui::mvi::UiState;

/// Which view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Form,
    Messages,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Number of messages in the inbox when this one was added.
    pub id: usize,
    pub subject: String,
    pub body: String,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InboxState {
    pub route: Route,
    /// Display order. Messages move to the end when marked read.
    pub messages: Vec<Message>,
    /// Always equal to the number of messages with `read == false`.
    pub unread_messages: usize,
}

impl UiState for InboxState {}

impl InboxState {
    pub fn message(&self, id: usize) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn has_unread(&self) -> bool {
        self.unread_messages > 0
    }
}
