use crate::config::Config;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI until the user quits.
pub fn run(config: &Config) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(config.ui.tick_rate());
    let mut app = App::new();
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "mailroom started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Paste(text) => app.paste(&text),
            AppEvent::Resize(cols, rows) => tracing::debug!(cols, rows, "terminal resized"),
            AppEvent::Tick => {}
        }
    }

    drop(guard);
    tracing::info!(
        messages = app.inbox().messages.len(),
        unread = app.inbox().unread_messages,
        "mailroom stopped"
    );
    Ok(())
}
