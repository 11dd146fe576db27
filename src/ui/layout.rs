//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows the tick bars occupy: 24 height units at 8 units per cell row.
pub const STRIP_ROWS: u16 = 3;

/// Primary screen layout: the date label above a centered tick strip,
/// with a bottom status bar.
pub struct AppLayout {
    pub label_area: Rect,
    pub strip_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area. The label and
    /// strip are `strip_width` columns wide, centered both ways. The
    /// strip rect spans the full mapped width (trailing gap included) so
    /// hit-testing matches the position→index mapping.
    pub fn from_area(area: Rect, strip_width: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),             // top filler
                Constraint::Length(1),          // date label
                Constraint::Length(STRIP_ROWS), // tick bars
                Constraint::Min(0),             // bottom filler
                Constraint::Length(1),          // status bar
            ])
            .split(area);

        Self {
            label_area: centered_columns(chunks[1], strip_width),
            strip_area: centered_columns(chunks[2], strip_width),
            status_area: chunks[4],
        }
    }
}

/// A `width`-column rect centered inside `area`, clamped to fit.
fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
