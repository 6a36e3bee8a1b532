//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const INDEX_COLOR: Color = Color::DarkGray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);

pub const CORRECT: Color = Color::Green;
pub const INCORRECT: Color = Color::Red;

pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

pub fn header_style() -> Style {
    Style::new().bold()
}

pub fn cursor_style() -> Style {
    Style::new().reversed()
}

/// Dimmed stand-in for a reduced-opacity dragged row.
pub fn dragging_style() -> Style {
    Style::new().add_modifier(Modifier::DIM | Modifier::ITALIC)
}
