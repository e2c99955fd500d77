//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mailroom::ui::app::App;
use mailroom::ui::input::handle_key;
use mailroom::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Feed every char of `text` as a key press.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

/// Fill in the form through the keyboard and submit it.
pub fn compose(app: &mut App, subject: &str, body: &str) {
    handle_key(app, ctrl('n'));
    type_text(app, subject);
    handle_key(app, key(KeyCode::Enter));
    type_text(app, body);
    handle_key(app, ctrl('s'));
}

/// Render one frame and return the screen as one string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
