//! Reducer for the inbox.

use crate::ui::inbox::intent::InboxIntent;
use crate::ui::inbox::state::{InboxState, Message};
use crate::ui::mvi::Reducer;

/// Pure transition function for [`InboxState`].
///
/// Marking a message read is idempotent: an already-read or unknown id
/// leaves the state untouched, so `unread_messages` never drifts from the
/// actual count of unread messages.
pub struct InboxReducer;

impl Reducer for InboxReducer {
    type State = InboxState;
    type Intent = InboxIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InboxIntent::AddMessage { subject, body } => {
                let InboxState {
                    route,
                    mut messages,
                    unread_messages,
                } = state;
                let id = messages.len();
                messages.push(Message {
                    id,
                    subject,
                    body,
                    read: false,
                });
                InboxState {
                    route,
                    messages,
                    unread_messages: unread_messages + 1,
                }
            }
            InboxIntent::MarkMessageRead { message } => {
                let is_unread = state
                    .message(message.id)
                    .is_some_and(|current| !current.read);
                if !is_unread {
                    return state;
                }

                let InboxState {
                    route,
                    mut messages,
                    unread_messages,
                } = state;
                messages.retain(|current| current.id != message.id);
                messages.push(Message {
                    read: true,
                    ..message
                });
                InboxState {
                    route,
                    messages,
                    unread_messages: unread_messages.saturating_sub(1),
                }
            }
            InboxIntent::ChangeRoute { route } => InboxState { route, ..state },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::inbox::state::Route;

    fn add(state: InboxState, subject: &str, body: &str) -> InboxState {
        InboxReducer::reduce(
            state,
            InboxIntent::AddMessage {
                subject: subject.to_string(),
                body: body.to_string(),
            },
        )
    }

    #[test]
    fn add_keeps_route() {
        let state = InboxState {
            route: Route::Messages,
            ..InboxState::default()
        };
        let state = add(state, "a", "b");
        assert_eq!(state.route, Route::Messages);
    }

    #[test]
    fn add_stores_empty_fields_unchanged() {
        let state = add(InboxState::default(), "", "");
        assert_eq!(state.messages[0].subject, "");
        assert_eq!(state.messages[0].body, "");
        assert_eq!(state.unread_messages, 1);
    }

    #[test]
    fn mark_read_uses_payload_content() {
        let state = add(InboxState::default(), "old", "body");
        let mut payload = state.messages[0].clone();
        payload.subject = "edited".to_string();

        let state = InboxReducer::reduce(state, InboxIntent::MarkMessageRead { message: payload });
        assert_eq!(state.messages[0].subject, "edited");
        assert!(state.messages[0].read);
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let state = add(InboxState::default(), "a", "b");
        let ghost = Message {
            id: 42,
            subject: "ghost".to_string(),
            body: String::new(),
            read: false,
        };
        let next = InboxReducer::reduce(
            state.clone(),
            InboxIntent::MarkMessageRead { message: ghost },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn mark_read_keeps_ids_unique_for_later_adds() {
        let state = add(InboxState::default(), "a", "1");
        let state = add(state, "b", "2");
        let first = state.messages[0].clone();
        let state = InboxReducer::reduce(state, InboxIntent::MarkMessageRead { message: first });
        let state = add(state, "c", "3");

        let mut ids: Vec<usize> = state.messages.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn inconsistent_counter_does_not_underflow() {
        let state = InboxState {
            route: Route::Messages,
            messages: vec![Message {
                id: 0,
                subject: "s".to_string(),
                body: "b".to_string(),
                read: false,
            }],
            unread_messages: 0,
        };
        let message = state.messages[0].clone();
        let state = InboxReducer::reduce(state, InboxIntent::MarkMessageRead { message });
        assert_eq!(state.unread_messages, 0);
    }
}
