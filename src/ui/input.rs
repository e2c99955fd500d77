use crate::ui::app::App;
use crate::ui::compose::ComposeIntent;
use crate::ui::inbox::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into calls on the app.
///
/// Navigation and quit work on every route; everything else is routed to
/// the handler of the active view.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.show_messages();
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.show_form();
        return;
    }

    match app.route() {
        Route::Form => handle_form_key(app, key),
        Route::Messages => handle_messages_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    let intent = match key.code {
        KeyCode::Tab => ComposeIntent::FocusNext,
        KeyCode::BackTab => ComposeIntent::FocusPrev,
        KeyCode::Enter => ComposeIntent::Newline,
        KeyCode::Backspace => ComposeIntent::Backspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ComposeIntent::Insert(ch)
        }
        _ => return,
    };
    app.edit_form(intent);
}

fn handle_messages_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
