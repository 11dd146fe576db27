//! Central application state.
//!
//! Everything the event loop mutates is gathered here; rendering reads
//! `&AppState`, handlers take `&mut AppState`.

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::picker::DatePicker;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Picker,
    Help,
}

/// Top-level application state.
pub struct AppState {
    /// The date picker itself — selection, hover, glide.
    pub picker: DatePicker,
    /// Terminal area of the last draw, used for mouse hit-testing.
    pub terminal_area: Rect,
    /// View shown on the next draw.
    pub active_view: ActiveView,
    /// Keybindings and picker settings.
    pub config: AppConfig,
    /// Set on Enter — the selected date is printed when the loop exits.
    pub confirmed: bool,
    /// Breaks the main event loop when set.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(picker: DatePicker, config: AppConfig) -> Self {
        Self {
            picker,
            terminal_area: Rect::default(),
            active_view: ActiveView::default(),
            config,
            confirmed: false,
            should_quit: false,
        }
    }
}
