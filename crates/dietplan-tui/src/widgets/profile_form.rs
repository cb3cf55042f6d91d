//! Profile form widget (Home route)

use dietplan_app::form_state::{FormField, FormFocus, FormState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::text_fit::tail_to_width;
use super::{button, CURSOR};
use crate::theme::{palette, styles};

pub const GENERATE_LABEL: &str = "Generate 7-Day Plan";
pub const NUTRITION_LABEL: &str = "Nutrition Analyzer";
pub const GENERATING_INDICATOR: &str = "Generating plan…";

/// Label column width, fits "Cuisine Preference" plus the focus marker
const LABEL_WIDTH: u16 = 22;
const MAX_INPUT_WIDTH: u16 = 44;

pub struct ProfileFormView<'a> {
    form: &'a FormState,
}

impl<'a> ProfileFormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == FormFocus::Field(field);

        let (marker, label_style) = if focused {
            ("› ", styles::accent_bold())
        } else {
            ("  ", styles::text_secondary())
        };
        let label = Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(field.label(), label_style),
        ]);
        buf.set_line(area.x, area.y, &label, LABEL_WIDTH.min(area.width));

        let input_x = area.x + LABEL_WIDTH;
        if input_x >= area.right() {
            return;
        }
        let input_width = (area.right() - input_x).min(MAX_INPUT_WIDTH);
        let input = Rect::new(input_x, area.y, input_width, 1);
        buf.set_style(input, Style::default().bg(palette::INPUT_BG));

        // Leading pad plus room for the cursor
        let text_width = input_width.saturating_sub(2) as usize;
        let value = self.form.fields.value(field);

        let mut spans = vec![Span::raw(" ")];
        if value.is_empty() {
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            if let Some(placeholder) = field.placeholder() {
                spans.push(Span::styled(
                    placeholder,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ));
            }
        } else {
            let visible = tail_to_width(value, text_width);
            spans.push(Span::styled(visible, styles::text_primary()));
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }
        buf.set_line(input.x, input.y, &Line::from(spans), input.width);
    }
}

impl Widget for ProfileFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Your Profile ")
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1),                           // Spacer
            Constraint::Length(FormField::ALL.len() as u16), // Fields
            Constraint::Length(1),                           // Spacer
            Constraint::Length(1),                           // Buttons
            Constraint::Length(1),                           // Spacer
            Constraint::Length(1),                           // Status
            Constraint::Min(0),
        ])
        .split(inner);

        let fields_area = chunks[1];
        for (row, field) in FormField::ALL.iter().enumerate() {
            let y = fields_area.y + row as u16;
            if y >= fields_area.bottom() {
                break;
            }
            let row_area = Rect::new(fields_area.x + 1, y, fields_area.width.saturating_sub(1), 1);
            self.render_field(*field, row_area, buf);
        }

        let buttons = Line::from(vec![
            Span::raw("   "),
            button(GENERATE_LABEL, self.form.focus == FormFocus::GenerateButton),
            Span::raw("   "),
            button(NUTRITION_LABEL, self.form.focus == FormFocus::NutritionButton),
        ]);
        buf.set_line(chunks[3].x, chunks[3].y, &buttons, chunks[3].width);

        if self.form.status.is_submitting() {
            let status = Line::from(vec![
                Span::raw("   "),
                Span::styled(GENERATING_INDICATOR, styles::status_pending()),
            ]);
            buf.set_line(chunks[5].x, chunks[5].y, &status, chunks[5].width);
        }
    }
}
