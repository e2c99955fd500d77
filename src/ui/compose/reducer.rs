use crate::ui::compose::intent::ComposeIntent;
use crate::ui::compose::state::{ComposeField, ComposeState};
use crate::ui::mvi::Reducer;

pub struct ComposeReducer;

impl Reducer for ComposeReducer {
    type State = ComposeState;
    type Intent = ComposeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposeIntent::Insert(ch) => edit(state, |text| text.push(ch)),
            ComposeIntent::Paste(text) => {
                let focus = state.focus;
                edit(state, |field| match focus {
                    // Subject is a single line
                    ComposeField::Subject => field.extend(
                        text.chars()
                            .filter(|ch| *ch != '\r')
                            .map(|ch| if ch == '\n' { ' ' } else { ch }),
                    ),
                    ComposeField::Body => field.extend(text.chars().filter(|ch| *ch != '\r')),
                })
            }
            ComposeIntent::Backspace => edit(state, |text| {
                text.pop();
            }),
            ComposeIntent::Newline => match state.focus {
                ComposeField::Subject => ComposeState {
                    focus: ComposeField::Body,
                    ..state
                },
                ComposeField::Body => edit(state, |text| text.push('\n')),
            },
            ComposeIntent::FocusNext => ComposeState {
                focus: state.focus.next(),
                ..state
            },
            ComposeIntent::FocusPrev => ComposeState {
                focus: state.focus.prev(),
                ..state
            },
            ComposeIntent::Reject(error) => ComposeState {
                focus: error.field(),
                error: Some(error),
                ..state
            },
            ComposeIntent::Reset => ComposeState::default(),
        }
    }
}

/// Apply `change` to the focused field and clear any pending error.
fn edit(mut state: ComposeState, change: impl FnOnce(&mut String)) -> ComposeState {
    let text = match state.focus {
        ComposeField::Subject => &mut state.subject,
        ComposeField::Body => &mut state.body,
    };
    change(text);
    state.error = None;
    state
}
