use ratatui::layout::{Constraint, Layout, Rect};

/// Split the screen into nav bar, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Subject input, body input, and one status line for errors and the
/// submit hint.
pub fn form_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [subject, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);
    (subject, body, status)
}

/// Optional banner line above the message list. The banner wins over the
/// list when only one row is available.
pub fn messages_regions(area: Rect, with_banner: bool) -> (Option<Rect>, Rect) {
    if !with_banner || area.height == 0 {
        return (None, area);
    }
    let [banner, list] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    (Some(banner), list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_terminal_does_not_overflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn banner_dropped_when_not_needed() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(messages_regions(area, false), (None, area));
        let (banner, list) = messages_regions(area, true);
        assert_eq!(banner.map(|b| b.height), Some(1));
        assert_eq!(list.height, 9);
    }

    #[test]
    fn banner_kept_in_single_row() {
        let area = Rect::new(0, 0, 40, 1);
        let (banner, list) = messages_regions(area, true);
        assert_eq!(banner, Some(area));
        assert_eq!(list.height, 0);
    }

    #[test]
    fn banner_dropped_without_rows() {
        let area = Rect::new(0, 0, 40, 0);
        assert_eq!(messages_regions(area, true), (None, area));
    }
}
