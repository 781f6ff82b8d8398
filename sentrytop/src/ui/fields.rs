//! Caption/value lists for scalar metrics and system identity.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::screen::Screen;
use crate::ui::theme::{HEADER_FG, MUTED};

/// `entries` are (caption, slot) pairs; slots not yet written show a dash.
pub fn draw_fields(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[(&str, String)],
    screen: &Screen,
) {
    let width = entries.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
    let lines: Vec<Line> = entries
        .iter()
        .map(|(caption, slot)| {
            let value = match screen.field(slot) {
                Some(v) => Span::styled(v.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                None => Span::styled("-", Style::default().fg(MUTED)),
            };
            Line::from(vec![
                Span::styled(format!("{caption:<width$}  "), Style::default().fg(HEADER_FG)),
                value,
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(p, area);
}
