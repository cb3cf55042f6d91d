//! Nutrition breakdown popup
//!
//! Modal overlay over the nutrition screen. The whole popup, backdrop
//! included, is drawn at the opacity sampled from the popup's fade tween.

use dietplan_core::{format_number, NutritionResult};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::{button, modal_overlay};
use crate::theme::styles;

pub const POPUP_TITLE: &str = " Nutrition Breakdown ";
pub const LOADING_TEXT: &str = "Loading...";
pub const CLOSE_LABEL: &str = "Close";

pub struct NutritionPopup<'a> {
    result: Option<&'a NutritionResult>,
    scroll: u16,
    opacity: f32,
}

impl<'a> NutritionPopup<'a> {
    pub fn new(result: Option<&'a NutritionResult>) -> Self {
        Self {
            result,
            scroll: 0,
            opacity: 1.0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Popup body: totals, macros, then one entry per breakdown item
pub fn body_lines(result: &NutritionResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total Calories: ", styles::text_secondary()),
            Span::styled(
                format_number(result.total_calories),
                styles::accent_bold(),
            ),
        ]),
        Line::from(Span::styled(
            format!("Protein: {} g", format_number(result.macros.protein)),
            styles::text_primary(),
        )),
        Line::from(Span::styled(
            format!("Carbs: {} g", format_number(result.macros.carbs)),
            styles::text_primary(),
        )),
        Line::from(Span::styled(
            format!("Fat: {} g", format_number(result.macros.fat)),
            styles::text_primary(),
        )),
    ];

    for item in &result.breakdown {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            item.item.clone(),
            styles::text_bright_bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Calories: {} | P: {} | C: {} | F: {}",
                format_number(item.calories),
                format_number(item.protein),
                format_number(item.carbs),
                format_number(item.fat)
            ),
            styles::text_secondary(),
        )));
    }
    lines
}

impl Widget for NutritionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.opacity <= 0.0 {
            return;
        }

        modal_overlay::dim_background(buf, area, 0.6 * self.opacity);

        let popup_area = modal_overlay::centered_rect_percent(70, 80, area);
        if popup_area.height < 5 || popup_area.width < 10 {
            return;
        }
        modal_overlay::render_shadow(buf, popup_area);
        Clear.render(popup_area, buf);

        let block = styles::modal_block(POPUP_TITLE).title_alignment(Alignment::Center);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Close button
        ])
        .split(inner.inner(Margin::new(1, 0)));

        match self.result {
            Some(result) => {
                let lines = body_lines(result);
                let max_scroll = (lines.len() as u16).saturating_sub(chunks[0].height);
                Paragraph::new(lines)
                    .scroll((self.scroll.min(max_scroll), 0))
                    .render(chunks[0], buf);
            }
            None => {
                Paragraph::new(Span::styled(LOADING_TEXT, styles::text_muted()))
                    .alignment(Alignment::Center)
                    .render(chunks[0], buf);
            }
        }

        Paragraph::new(Line::from(button(CLOSE_LABEL, true)))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        // Shadow sits one cell outside the popup
        let faded = Rect::new(
            popup_area.x,
            popup_area.y,
            popup_area.width.saturating_add(1),
            popup_area.height.saturating_add(1),
        );
        modal_overlay::fade_area(buf, faded, self.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use dietplan_core::{BreakdownItem, Macros};

    fn result(items: usize) -> NutritionResult {
        NutritionResult {
            total_calories: 620.0,
            macros: Macros {
                protein: 18.5,
                carbs: 90.0,
                fat: 20.0,
            },
            breakdown: (1..=items)
                .map(|n| BreakdownItem {
                    item: format!("Item {}", n),
                    calories: 100.0 * n as f64,
                    protein: 5.0,
                    carbs: 12.5,
                    fat: 3.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_renders_totals_and_macros() {
        let r = result(1);
        let mut term = TestTerminal::new();
        term.render_widget(NutritionPopup::new(Some(&r)), term.area());

        assert!(term.buffer_contains("Nutrition Breakdown"));
        assert!(term.buffer_contains("Total Calories: 620"));
        assert!(term.buffer_contains("Protein: 18.5 g"));
        assert!(term.buffer_contains("Carbs: 90 g"));
        assert!(term.buffer_contains("Fat: 20 g"));
        assert!(term.buffer_contains("Item 1"));
        assert!(term.buffer_contains("Calories: 100 | P: 5 | C: 12.5 | F: 3"));
        assert!(term.buffer_contains(CLOSE_LABEL));
    }

    #[test]
    fn test_loading_without_result() {
        let mut term = TestTerminal::new();
        term.render_widget(NutritionPopup::new(None), term.area());

        assert!(term.buffer_contains(LOADING_TEXT));
    }

    #[test]
    fn test_scroll_moves_body() {
        let r = result(10);
        let mut term = TestTerminal::new();
        term.render_widget(NutritionPopup::new(Some(&r)).scroll(6), term.area());

        assert!(!term.buffer_contains("Total Calories"));
        assert!(term.buffer_contains("Item 3"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let r = result(10);
        let mut term = TestTerminal::new();
        term.render_widget(NutritionPopup::new(Some(&r)).scroll(500), term.area());

        // Last entry still on screen
        assert!(term.buffer_contains("Item 10"));
    }

    #[test]
    fn test_zero_opacity_renders_nothing() {
        let r = result(1);
        let mut term = TestTerminal::new();
        term.render_widget(NutritionPopup::new(Some(&r)).opacity(0.0), term.area());

        assert!(!term.buffer_contains("Nutrition Breakdown"));
    }

    #[test]
    fn test_partial_opacity_fades_colors() {
        let r = result(1);
        let mut full = TestTerminal::new();
        full.render_widget(NutritionPopup::new(Some(&r)), full.area());
        let mut half = TestTerminal::new();
        half.render_widget(NutritionPopup::new(Some(&r)).opacity(0.5), half.area());

        // Text is still laid out, but the popup background is darker
        assert!(half.buffer_contains("Total Calories: 620"));
        let center = (40u16, 12u16);
        assert_eq!(full.buffer()[center].bg, palette::POPUP_BG);
        assert_ne!(half.buffer()[center].bg, palette::POPUP_BG);
    }
}
