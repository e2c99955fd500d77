mod common;

use common::{compose, ctrl, render_rows, screen_contains};
use mailroom::ui::app::App;
use mailroom::ui::input::handle_key;

#[test]
fn nav_shows_unread_count() {
    let mut app = App::new();
    let rows = render_rows(&app, 100, 24);
    assert!(screen_contains(&rows, "Messages (0 new)"));
    assert!(screen_contains(&rows, "Add new message"));

    compose(&mut app, "Hi", "There");
    let rows = render_rows(&app, 100, 24);
    assert!(screen_contains(&rows, "Messages (1 new)"));
}

#[test]
fn form_shows_fields_and_submit() {
    let app = App::new();
    let rows = render_rows(&app, 100, 24);
    assert!(screen_contains(&rows, "New message"));
    assert!(screen_contains(&rows, "Subject"));
    assert!(screen_contains(&rows, "Body"));
    assert!(screen_contains(&rows, "[ Submit! ]"));
}

#[test]
fn form_shows_validation_error() {
    let mut app = App::new();
    app.submit_form();
    let rows = render_rows(&app, 100, 24);
    assert!(screen_contains(&rows, "Subject is required"));
    assert!(!screen_contains(&rows, "[ Submit! ]"));
}

#[test]
fn banner_shown_while_unread() {
    let mut app = App::new();
    compose(&mut app, "Hi", "There");
    compose(&mut app, "Second", "Message");
    let rows = render_rows(&app, 100, 30);
    assert!(screen_contains(&rows, "You have 2 new messages!"));
    assert!(screen_contains(&rows, "Hi"));
    assert!(screen_contains(&rows, "There"));
    assert!(screen_contains(&rows, "Second"));
}

#[test]
fn banner_hidden_when_all_read() {
    let mut app = App::new();
    compose(&mut app, "Hi", "There");
    app.activate_selected();
    let rows = render_rows(&app, 100, 24);
    assert!(!screen_contains(&rows, "new messages!"));
    assert!(screen_contains(&rows, "Hi"));
}

#[test]
fn empty_list_shows_placeholder() {
    let mut app = App::new();
    handle_key(&mut app, ctrl('o'));
    let rows = render_rows(&app, 100, 24);
    assert!(screen_contains(&rows, "No messages yet"));
    assert!(!screen_contains(&rows, "new messages!"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new();
    compose(&mut app, "Hi", "There");
    render_rows(&app, 8, 3);
    handle_key(&mut app, ctrl('n'));
    render_rows(&app, 8, 5);
}

#[test]
fn banner_survives_short_terminal() {
    let mut app = App::new();
    compose(&mut app, "Hi", "There");
    // 9 rows leave a single row inside the message list block
    let rows = render_rows(&app, 100, 9);
    assert!(screen_contains(&rows, "You have 1 new messages!"));
}
