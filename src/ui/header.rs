use crate::ui::inbox::{InboxState, Route};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, UNREAD};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation bar: a link to the message list showing the unread count,
/// and a link to the compose form. The active route is highlighted.
pub struct Nav<'a> {
    state: &'a InboxState,
}

impl<'a> Nav<'a> {
    pub fn new(state: &'a InboxState) -> Self {
        Self { state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let hotkey_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let messages_style = self.link_style(Route::Messages);
        let count_style = if self.state.has_unread() {
            messages_style.fg(UNREAD).add_modifier(Modifier::BOLD)
        } else {
            messages_style
        };

        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled("Messages (", messages_style),
            Span::styled(self.state.unread_messages.to_string(), count_style),
            Span::styled(" new)", messages_style),
            Span::styled(" Ctrl+O", hotkey_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Add new message", self.link_style(Route::Form)),
            Span::styled(" Ctrl+N", hotkey_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn link_style(&self, route: Route) -> Style {
        if self.state.route == route {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    }
}
