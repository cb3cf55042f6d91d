//! Color palette.
//!
//! RGB values throughout so overlays can be faded by blending.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16); // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 21, 28); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds
pub const INPUT_BG: Color = Color::Rgb(22, 27, 34); // Text field backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);
pub const BORDER_PRESSED: Color = Color::Rgb(16, 185, 129);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);
pub const CONTRAST_FG: Color = Color::Rgb(10, 12, 16); // Text on accent backgrounds

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Buttons ---
pub const BUTTON_INACTIVE_BG: Color = Color::Rgb(40, 46, 58);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
