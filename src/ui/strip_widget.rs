//! Custom Ratatui widget that renders a [`DatePicker`] as a row of
//! tick bars growing up from the baseline.
//!
//! Heights come from the picker in eighths of a cell row, so the bars
//! animate smoothly with lower-block glyphs instead of whole-cell jumps.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::core::picker::DatePicker;

use super::theme::{self, Theme};

/// Lower block glyphs indexed by filled eighths minus one.
const LOWER_EIGHTHS: [char; 7] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇'];
/// Height units that fill one cell row.
const UNITS_PER_ROW: u16 = 8;

/// The strip widget itself — created fresh each frame.
pub struct StripWidget<'a> {
    picker: &'a DatePicker,
    accent: Color,
}

impl<'a> StripWidget<'a> {
    pub fn new(picker: &'a DatePicker) -> Self {
        Self {
            picker,
            accent: theme::ACCENT,
        }
    }

    /// Override the accent colour (user config).
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for StripWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = self.picker.layout();
        let tick_cols = (layout.tick_width() as u16).max(1);

        for index in 0..layout.num_ticks() {
            let offset = layout.x_of(index);
            if offset + f64::from(tick_cols) > f64::from(area.width) {
                break;
            }
            let x = area.x + offset as u16;
            let height = self.picker.tick_height(index);
            let style = if index == self.picker.selected_index() {
                Theme::selected_tick_style(self.accent)
            } else {
                Theme::tick_style()
            };

            // Bottom-aligned: row 0 is the baseline, each row holds 8 units.
            for row in 0..area.height {
                let filled = height.saturating_sub(row * UNITS_PER_ROW).min(UNITS_PER_ROW);
                if filled == 0 {
                    break;
                }
                let glyph = if filled == UNITS_PER_ROW {
                    '█'
                } else {
                    LOWER_EIGHTHS[usize::from(filled) - 1]
                };
                let y = area.y + area.height - 1 - row;
                for col in 0..tick_cols {
                    buf[(x + col, y)].set_char(glyph).set_style(style);
                }
            }
        }
    }
}
