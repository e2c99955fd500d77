use crate::ui::compose::{ComposeIntent, ComposeReducer, ComposeState};
use crate::ui::inbox::{InboxIntent, InboxReducer, InboxState, Route};
use crate::ui::mvi::Store;

/// Root of the view tree.
///
/// Owns both stores and the list selection. Every state change made in
/// response to input goes through one of the two `dispatch` calls here.
#[derive(Default)]
pub struct App {
    should_quit: bool,
    inbox: Store<InboxReducer>,
    compose: Store<ComposeReducer>,
    /// Index into `inbox.messages` of the highlighted entry.
    selection: usize,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn inbox(&self) -> &InboxState {
        self.inbox.state()
    }

    pub fn compose(&self) -> &ComposeState {
        self.compose.state()
    }

    pub fn route(&self) -> Route {
        self.inbox().route
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn show_messages(&mut self) {
        self.change_route(Route::Messages);
    }

    pub fn show_form(&mut self) {
        self.change_route(Route::Form);
    }

    fn change_route(&mut self, route: Route) {
        if self.route() != route {
            tracing::info!(?route, "route changed");
        }
        self.inbox.dispatch(InboxIntent::ChangeRoute { route });
    }

    pub fn edit_form(&mut self, intent: ComposeIntent) {
        self.compose.dispatch(intent);
    }

    /// Paste only lands in the compose form.
    pub fn paste(&mut self, text: &str) {
        if self.route() == Route::Form {
            self.edit_form(ComposeIntent::Paste(text.to_string()));
        }
    }

    /// Submit the compose form.
    ///
    /// Adds the message, switches to the message list, and clears the
    /// draft, as three separate dispatches. Returns false (and records the
    /// error in the form) when a required field is empty.
    pub fn submit_form(&mut self) -> bool {
        match self.compose().validate() {
            Ok(draft) => {
                self.inbox.dispatch(InboxIntent::AddMessage {
                    subject: draft.subject,
                    body: draft.body,
                });
                self.change_route(Route::Messages);
                self.compose.dispatch(ComposeIntent::Reset);
                self.selection = self.inbox().messages.len().saturating_sub(1);
                true
            }
            Err(error) => {
                tracing::warn!(%error, "form submission rejected");
                self.compose.dispatch(ComposeIntent::Reject(error));
                false
            }
        }
    }

    /// Move the highlight by `delta`, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.inbox().messages.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1) as isize;
        self.selection = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// "Click" the highlighted message.
    ///
    /// Unread messages are marked read (and move to the end of the list);
    /// read ones are left alone. Returns whether anything was dispatched.
    pub fn activate_selected(&mut self) -> bool {
        let Some(message) = self.inbox().messages.get(self.selection) else {
            return false;
        };
        if message.read {
            return false;
        }
        let message = message.clone();
        tracing::info!(id = message.id, "message marked read");
        self.inbox.dispatch(InboxIntent::MarkMessageRead { message });
        self.selection = self
            .selection
            .min(self.inbox().messages.len().saturating_sub(1));
        true
    }
}
