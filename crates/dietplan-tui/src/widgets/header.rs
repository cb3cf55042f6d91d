//! Header bar widget
//!
//! App title, the current route and the backend host.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Diet Planner";

/// Main header showing app title, route title and backend
pub struct MainHeader<'a> {
    route_title: &'a str,
    backend: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(route_title: &'a str) -> Self {
        Self {
            route_title,
            backend: None,
        }
    }

    /// Show the backend base URL right-aligned, when it fits
    pub fn with_backend(mut self, backend: &'a str) -> Self {
        self.backend = Some(backend);
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::styled("  ›  ", styles::text_muted()),
            Span::styled(self.route_title, styles::text_bright_bold()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if let Some(backend) = self.backend {
            let backend_width = backend.width() as u16 + 1;
            if title_width + backend_width + 2 <= inner.width {
                let x = inner.right() - backend_width;
                buf.set_string(x, inner.y, backend, styles::text_muted());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_titles() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("7-Day Plan"), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "Diet Planner"));
        assert!(term.line_contains(1, "7-Day Plan"));
    }

    #[test]
    fn test_header_shows_backend_when_room() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("Nutrition Analyzer").with_backend("http://localhost:8000");
        term.render_widget(header, Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "http://localhost:8000"));
    }

    #[test]
    fn test_header_hides_backend_when_narrow() {
        let mut term = TestTerminal::compact();
        let header = MainHeader::new("Diet Plan Generator")
            .with_backend("https://ai-dietplan-92ld.onrender.com");
        term.render_widget(header, Rect::new(0, 0, 40, 3));

        assert!(!term.buffer_contains("onrender"));
    }

    #[test]
    fn test_header_zero_height_does_not_panic() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("x"), Rect::new(0, 0, 80, 1));
    }
}
