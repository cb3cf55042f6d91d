//! Blocking alert dialog

use dietplan_app::AlertState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::text_fit::wrap_to_width;
use super::{button, modal_overlay};
use crate::theme::styles;

pub const OK_LABEL: &str = "OK";

const MAX_WIDTH: u16 = 56;
const MIN_WIDTH: u16 = 24;

/// Alert dialog widget
pub struct AlertDialog<'a> {
    alert: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area, 0.6);

        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(MIN_WIDTH);
        let text_width = width.saturating_sub(4) as usize;
        let message_rows = wrap_to_width(&self.alert.message, text_width);

        // Borders, spacer, message, spacer, button
        let height = message_rows.len() as u16 + 5;
        let modal_area = modal_overlay::centered_rect(width, height, area);

        modal_overlay::render_shadow(buf, modal_area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.alert.title);
        let block = styles::modal_block(&title)
            .title_alignment(Alignment::Center)
            .title_style(styles::status_red().add_modifier(Modifier::BOLD));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut lines = vec![Line::default()];
        lines.extend(
            message_rows
                .into_iter()
                .map(|row| Line::from(Span::styled(row, styles::text_primary()))),
        );
        lines.push(Line::default());
        lines.push(Line::from(button(OK_LABEL, true)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
