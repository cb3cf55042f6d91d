//! Plan cards widget (DietResult route)
//!
//! One bordered card per day, in plan order. Every card is laid out into an
//! off-screen buffer and the window around the selected card is copied to
//! the frame, so partially visible cards clip cleanly at the edges.

use std::time::Instant;

use dietplan_app::animation::PRESS_SCALE;
use dietplan_app::plan_view_state::PlanViewState;
use dietplan_core::{format_number, DayPlan};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::text_fit::wrap_to_width;
use crate::theme::{palette, styles};

pub const EMPTY_PLAN_MESSAGE: &str = "This plan has no days.";

/// Horizontal inset of a card at rest; a pressed card grows into it
const CARD_MARGIN: u16 = 1;
const CARD_GAP: u16 = 1;

pub struct PlanCards<'a> {
    view: &'a PlanViewState,
    now: Instant,
}

impl<'a> PlanCards<'a> {
    pub fn new(view: &'a PlanViewState, now: Instant) -> Self {
        Self { view, now }
    }

    /// Press emphasis of card `index` in 0.0..=1.0
    fn emphasis(&self, index: usize) -> f32 {
        let scale = self.view.card_scale(index, self.now);
        ((scale - 1.0) / (PRESS_SCALE - 1.0)).clamp(0.0, 1.0)
    }

    fn card_block(&self, index: usize, day_key: &str) -> Block<'static> {
        let selected = index == self.view.selected;
        let emphasis = self.emphasis(index);

        let (border_type, border_color) = if !selected {
            (BorderType::Rounded, palette::BORDER_DIM)
        } else if emphasis >= 0.5 {
            (
                BorderType::Thick,
                styles::blend(palette::BORDER_ACTIVE, palette::BORDER_PRESSED, emphasis),
            )
        } else {
            (
                BorderType::Rounded,
                styles::blend(palette::BORDER_ACTIVE, palette::BORDER_PRESSED, emphasis),
            )
        };

        let title_style = if selected {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(format!(" {} ", day_key), title_style))
            .style(Style::default().bg(palette::CARD_BG))
    }
}

/// Card body rows for one day, wrapped to `width`
pub fn card_lines(position: usize, day: &DayPlan, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "DAY {} — {} kcal",
            position,
            format_number(day.total_calories)
        ),
        styles::accent_bold(),
    ))];

    for (meal_name, meal) in day.meals.iter() {
        lines.push(Line::from(Span::styled(
            meal_name.to_string(),
            styles::text_bright_bold(),
        )));
        for row in wrap_to_width(&meal.items_label(), width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row, styles::text_primary()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("Calories: {}", format_number(meal.calories)),
                styles::text_secondary(),
            ),
        ]));
    }
    lines
}

/// First row to show so the card spanning `top..bottom` is visible
fn scroll_offset(top: u16, bottom: u16, view_height: u16) -> u16 {
    if bottom <= view_height {
        0
    } else if bottom - top > view_height {
        top
    } else {
        bottom - view_height
    }
}

impl Widget for PlanCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.view.plan.is_empty() {
            let text = vec![
                Line::default(),
                Line::from(Span::styled(EMPTY_PLAN_MESSAGE, styles::text_secondary())),
                Line::from(Span::styled("Press Esc to go back", styles::text_muted())),
            ];
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let card_width = area.width.saturating_sub(CARD_MARGIN * 2);
        let body_width = card_width.saturating_sub(2);

        // Lay out every card eagerly
        let mut cards = Vec::with_capacity(self.view.card_count());
        let mut y: u16 = 0;
        for (index, (day_key, day)) in self.view.plan.iter().enumerate() {
            let lines = card_lines(index + 1, day, body_width);
            let height = (lines.len() as u16).saturating_add(2);
            cards.push((index, day_key, lines, y, height));
            y = y.saturating_add(height).saturating_add(CARD_GAP);
        }
        let total_height = y.saturating_sub(CARD_GAP).max(1);

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, total_height));
        canvas.set_style(canvas.area, Style::default().bg(palette::DEEPEST_BG));

        let mut selected_span = (0, 0);
        for (index, day_key, lines, top, height) in cards {
            let margin = if self.emphasis(index) >= 0.5 {
                0
            } else {
                CARD_MARGIN
            };
            let rect = Rect::new(margin, top, area.width.saturating_sub(margin * 2), height)
                .intersection(canvas.area);

            let block = self.card_block(index, day_key);
            Paragraph::new(lines)
                .block(block)
                .render(rect, &mut canvas);

            if index == self.view.selected {
                selected_span = (top, top.saturating_add(height));
            }
        }

        let offset = scroll_offset(selected_span.0, selected_span.1, area.height);
        for row in 0..area.height {
            let src_y = offset.saturating_add(row);
            if src_y >= total_height {
                break;
            }
            for col in 0..area.width {
                if let (Some(src), Some(dst)) = (
                    canvas.cell((col, src_y)).cloned(),
                    buf.cell_mut((area.x + col, area.y + row)),
                ) {
                    *dst = src;
                }
            }
        }
    }
}
