use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// Poll timed out, or an event the UI does not react to arrived.
    Tick,
}

/// Synchronous terminal event source.
///
/// Everything runs on the caller's thread: `next` blocks for at most one
/// tick and returns whatever crossterm produced in that window.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> io::Result<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Tick);
        }

        let event = match event::read()? {
            Event::Key(key) => AppEvent::Key(key),
            Event::Paste(text) => AppEvent::Paste(text),
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => AppEvent::Tick,
        };
        Ok(event)
    }
}
