//! Semantic style builders.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Pending request indicators
pub fn status_pending() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::ITALIC)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---
/// "Black on accent" when focused, muted pill otherwise
pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BUTTON_INACTIVE_BG)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Opacity ---

/// Linear blend from `from` toward `to`; `t` is clamped to 0.0..=1.0
///
/// Named colors cannot be mixed and switch over at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Fade `style` toward the screen background; opacity 1.0 leaves it unchanged
pub fn with_opacity(style: Style, opacity: f32) -> Style {
    let mut faded = style;
    if let Some(fg) = style.fg {
        faded.fg = Some(blend(palette::DEEPEST_BG, fg, opacity));
    }
    if let Some(bg) = style.bg {
        faded.bg = Some(blend(palette::DEEPEST_BG, bg, opacity));
    }
    faded
}
