//! Nutrition editor widget (Nutrition route)

use dietplan_app::nutrition_state::{NutritionFocus, NutritionState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text_fit::tail_to_width;
use super::{button, CURSOR};
use crate::theme::{palette, styles};

pub const ANALYZE_LABEL: &str = "Analyze Nutrition";
pub const ANALYZING_INDICATOR: &str = "Analyzing…";
pub const EDITOR_TITLE: &str = " Foods (item: quantity, one per line) ";

pub struct NutritionView<'a> {
    state: &'a NutritionState,
}

impl<'a> NutritionView<'a> {
    pub fn new(state: &'a NutritionState) -> Self {
        Self { state }
    }

    fn render_editor(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == NutritionFocus::Editor;
        let block = styles::glass_block(focused)
            .title(EDITOR_TITLE)
            .title_style(if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            })
            .style(Style::default().bg(palette::INPUT_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Cursor sits at the end of the text, keep the last rows in view
        let text_width = inner.width.saturating_sub(1) as usize;
        let rows: Vec<&str> = self.state.text.split('\n').collect();
        let last = rows.len() - 1;
        let skip = rows.len().saturating_sub(inner.height as usize);

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, row)| {
                let mut spans = vec![Span::styled(
                    tail_to_width(row, text_width),
                    styles::text_primary(),
                )];
                if focused && i == last {
                    spans.push(Span::styled(CURSOR, styles::accent()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for NutritionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(3),    // Editor
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button + status
        ])
        .split(area);

        self.render_editor(chunks[0], buf);

        let mut spans = vec![
            Span::raw(" "),
            button(
                ANALYZE_LABEL,
                self.state.focus == NutritionFocus::AnalyzeButton,
            ),
        ];
        if self.state.status.is_submitting() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(ANALYZING_INDICATOR, styles::status_pending()));
        }
        buf.set_line(chunks[2].x, chunks[2].y, &Line::from(spans), chunks[2].width);
    }
}
