//! Popup overlay widgets — the key-binding help screen.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::{Action, AppConfig};

// ───────────────────────────────────────── help popup ────────

/// Key-binding reference overlay, with the selectable date range at the
/// bottom.
pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // One row per action, plus blanks, the range line and the borders.
        let height = (Action::ALL.len() as u16) + 6;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        // Labels and keys are separate paragraphs over the same rows so
        // each side keeps its own alignment.
        let mut labels = vec![Line::raw("")];
        let mut keys = vec![Line::raw("")];
        for &action in Action::ALL {
            labels.push(Line::styled(
                format!("  {}", action.label()),
                Style::default().fg(Color::White),
            ));
            keys.push(Line::styled(
                format!("{}  ", self.config.display_bindings(action)),
                Style::default().fg(Color::Yellow),
            ));
        }

        let dim = Style::default().fg(Color::DarkGray);
        labels.push(Line::raw(""));
        labels.push(
            Line::styled(
                format!(
                    "{} to {}   Esc: close",
                    self.earliest.format("%b %d %Y"),
                    self.latest.format("%b %d %Y"),
                ),
                dim,
            )
            .alignment(Alignment::Center),
        );

        Paragraph::new(labels).render(inner, buf);
        Paragraph::new(keys)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
