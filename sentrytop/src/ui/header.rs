//! Top header: tab bar plus the backend being polled.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Tabs},
};

use crate::ui::theme::{HEADER_FG, MUTED};
use crate::view::{visibility, Panel, ViewState};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, view: &ViewState, target: &str) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(48)])
        .split(area);

    let titles: Vec<Line> = Panel::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!("{} {}", i + 1, p.title())))
        .collect();
    let selected = visibility(view).iter().position(|(_, on)| *on).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(HEADER_FG).add_modifier(Modifier::BOLD))
        .divider("|");
    f.render_widget(tabs, cols[0]);

    let right = Paragraph::new(format!("sentrytop: {target}  (q to quit)"))
        .style(Style::default().fg(MUTED))
        .right_aligned();
    f.render_widget(right, cols[1]);
}
