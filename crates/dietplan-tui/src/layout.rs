//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title and current route
    pub header: Rect,

    /// Route body (form, plan cards, nutrition editor)
    pub content: Rect,

    /// Single-row keybinding hints
    pub hints: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        hints: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.content.y, 3);
        assert_eq!(layout.content.height, 20); // 24 - 3 - 1
        assert_eq!(layout.hints.y, 23);
        assert_eq!(layout.hints.height, 1);
    }

    #[test]
    fn test_create_layout_full_width() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.content.width, 120);
        assert_eq!(layout.hints.width, 120);
    }

    #[test]
    fn test_create_layout_tiny_terminal() {
        let area = Rect::new(0, 0, 40, 5);
        let layout = create(area);

        // Heights never exceed the available area
        assert!(layout.header.height + layout.content.height + layout.hints.height <= 5);
    }
}
