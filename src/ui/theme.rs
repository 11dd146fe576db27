//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Accent for the selected tick, overridable from the config file.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x73, 0x00);
/// Colour of every unselected tick.
pub const NEUTRAL: Color = Color::Rgb(0xED, 0xED, 0xED);

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── strip ──────────────────────────────────────────────────
    pub fn tick_style() -> Style {
        Style::default().fg(NEUTRAL)
    }

    pub fn selected_tick_style(accent: Color) -> Style {
        Style::default().fg(accent)
    }

    pub fn label_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
