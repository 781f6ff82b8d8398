//! Connection and top-host tables with zebra striping.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::sink::TableId;
use crate::ui::theme::{HEADER_FG, ZEBRA_BG};
use crate::ui::util::truncate_middle;

const CONN_COLS: [Constraint; 5] = [
    Constraint::Percentage(30), // Source
    Constraint::Percentage(30), // Destination
    Constraint::Length(8),      // Protocol
    Constraint::Length(12),     // Bytes
    Constraint::Length(10),     // Packets
];

const HOST_COLS: [Constraint; 2] = [Constraint::Percentage(60), Constraint::Length(14)];

struct TableLayout {
    title: &'static str,
    headers: &'static [&'static str],
    widths: &'static [Constraint],
    // leading columns holding addresses, elided when too wide
    addr_cols: usize,
}

fn layout(table: TableId) -> TableLayout {
    match table {
        TableId::Connections => TableLayout {
            title: "Top Connections",
            headers: &["Source", "Destination", "Proto", "Bytes", "Packets"],
            widths: &CONN_COLS,
            addr_cols: 2,
        },
        TableId::Hosts => TableLayout {
            title: "Top Hosts",
            headers: &["IP", "Bytes"],
            widths: &HOST_COLS,
            addr_cols: 1,
        },
    }
}

pub fn draw_table(f: &mut ratatui::Frame<'_>, area: Rect, table: TableId, rows: &[Vec<String>]) {
    let l = layout(table);
    // rough per-column budget for address columns
    let addr_w = (area.width.saturating_sub(2) as usize * 30 / 100).max(8);

    let body = rows.iter().enumerate().map(|(i, cells)| {
        let style = if i % 2 == 1 {
            Style::default().bg(ZEBRA_BG)
        } else {
            Style::default()
        };
        Row::new(
            cells
                .iter()
                .enumerate()
                .map(|(c, text)| {
                    if c < l.addr_cols {
                        Cell::from(truncate_middle(text, addr_w))
                    } else {
                        Cell::from(text.clone())
                    }
                })
                .collect::<Vec<_>>(),
        )
        .style(style)
    });

    let header = Row::new(l.headers.to_vec())
        .style(Style::default().fg(HEADER_FG).add_modifier(Modifier::BOLD));

    let t = Table::new(body, l.widths.to_vec())
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", l.title, rows.len())),
        );
    f.render_widget(t, area);
}
