use crate::ui::app::App;
use crate::ui::compose::{ComposeField, ComposeState};
use crate::ui::footer::Footer;
use crate::ui::header::Nav;
use crate::ui::inbox::{InboxState, Message, Route};
use crate::ui::layout::{form_regions, layout_regions, messages_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, ERROR, GLOBAL_BORDER, HEADER_TEXT, UNREAD};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (nav, body, footer) = layout_regions(frame.area());

    frame.render_widget(Nav::new(app.inbox()).widget(), nav);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Form => draw_form(frame, app.compose(), body),
        Route::Messages => draw_messages(frame, app.inbox(), app.selection(), body),
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);
}

fn draw_form(frame: &mut Frame<'_>, form: &ComposeState, area: Rect) {
    let block = section_block("New message");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let (subject_area, body_area, status_area) = form_regions(inner);
    for (field, field_area) in [
        (ComposeField::Subject, subject_area),
        (ComposeField::Body, body_area),
    ] {
        let focused = form.focus == field;
        let border = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(GLOBAL_BORDER)
        };
        let label = match form.error {
            Some(error) if error.field() == field => format!("{} *", field.label()),
            _ => field.label().to_string(),
        };
        let input = Paragraph::new(form.field(field).to_string())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(label)
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        frame.render_widget(input, field_area);

        if focused {
            frame.set_cursor_position(input_cursor(form.field(field), field_area));
        }
    }

    let status = match form.error {
        Some(error) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled(" [ Submit! ]", Style::default().fg(ACCENT)),
            Span::styled(
                " Ctrl+S",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ]),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Cursor after the last character of `text`, clamped to the inside of a
/// bordered input box. Wrapping is ignored; the cursor sits on the last
/// visible row when the text is taller than the box.
fn input_cursor(text: &str, area: Rect) -> Position {
    let inner_width = area.width.saturating_sub(2).max(1);
    let inner_height = area.height.saturating_sub(2).max(1);
    let line_count = u16::try_from(text.split('\n').count()).unwrap_or(u16::MAX);
    let last_line = text.rsplit('\n').next().unwrap_or("");
    let column = u16::try_from(last_line.chars().count())
        .unwrap_or(u16::MAX)
        .min(inner_width - 1);
    let row = line_count.saturating_sub(1).min(inner_height - 1);
    Position::new(area.x + 1 + column, area.y + 1 + row)
}

fn draw_messages(frame: &mut Frame<'_>, inbox: &InboxState, selection: usize, area: Rect) {
    let block = section_block("Messages");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (banner_area, list_area) = messages_regions(inner, inbox.has_unread());
    if let Some(banner_area) = banner_area {
        frame.render_widget(Paragraph::new(banner_line(inbox.unread_messages)), banner_area);
    }

    if inbox.messages.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            " No messages yet. Press Ctrl+N to write one.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )));
        frame.render_widget(placeholder, list_area);
        return;
    }

    let items: Vec<ListItem> = inbox.messages.iter().map(message_item).collect();
    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state =
        ListState::default().with_selected(Some(selection.min(inbox.messages.len() - 1)));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn banner_line(unread: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(" You have ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            unread.to_string(),
            Style::default().fg(UNREAD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" new messages!", Style::default().fg(HEADER_TEXT)),
    ])
}

fn message_item(message: &Message) -> ListItem<'static> {
    let (marker, subject_style) = if message.read {
        (" ", Style::default().fg(HEADER_TEXT))
    } else {
        (
            "●",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(UNREAD)),
        Span::styled(message.subject.clone(), subject_style),
    ])];
    lines.extend(message.body.lines().map(|line| {
        Line::from(Span::styled(
            format!("   {line}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))
    }));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_single_line() {
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(input_cursor("Hi", area), Position::new(3, 1));
    }

    #[test]
    fn cursor_moves_to_last_line() {
        let area = Rect::new(2, 5, 20, 6);
        assert_eq!(input_cursor("a\nbcd", area), Position::new(6, 7));
    }

    #[test]
    fn cursor_clamped_inside_box() {
        let area = Rect::new(0, 0, 6, 3);
        assert_eq!(input_cursor("abcdefghij", area), Position::new(4, 1));
    }

    #[test]
    fn cursor_saturates_on_oversized_text() {
        let area = Rect::new(0, 0, 20, 5);
        // 65_537 chars would wrap to 1 with a plain cast
        let long_line = "x".repeat(usize::from(u16::MAX) + 2);
        assert_eq!(input_cursor(&long_line, area), Position::new(18, 1));

        let many_lines = "\n".repeat(usize::from(u16::MAX) + 1);
        assert_eq!(input_cursor(&many_lines, area), Position::new(1, 3));
    }
}
