//! Line charts fed from the chart slots (CPU, memory, network in/out).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::charts::ChartId;
use crate::format::format_bytes;
use crate::screen::ChartData;
use crate::ui::theme::{CPU_LINE, MEM_LINE, MUTED, NET_IN_LINE, NET_OUT_LINE};

fn line_colors(id: ChartId) -> &'static [Color] {
    match id {
        ChartId::Cpu => &[CPU_LINE],
        ChartId::Memory => &[MEM_LINE],
        ChartId::Network => &[NET_IN_LINE, NET_OUT_LINE],
    }
}

fn axis_value(id: ChartId, v: f64) -> String {
    match id {
        ChartId::Network => format!("{}/s", format_bytes(v.max(0.0) as u64)),
        _ => format!("{v:.0}"),
    }
}

fn chart_title(id: ChartId, data: &ChartData) -> String {
    let now: Vec<String> = data
        .series
        .iter()
        .zip(id.series_names())
        .filter_map(|(s, name)| s.last().map(|v| format!("{name}: {}", axis_value(id, *v))))
        .collect();
    if now.is_empty() {
        id.title().to_string()
    } else {
        format!("{} (now: {})", id.title(), now.join(" | "))
    }
}

pub fn draw_line_chart(f: &mut ratatui::Frame<'_>, area: Rect, id: ChartId, data: Option<&ChartData>) {
    let Some(d) = data.filter(|d| !d.labels.is_empty()) else {
        let waiting = Paragraph::new("waiting for data...")
            .style(Style::default().fg(MUTED))
            .block(Block::default().borders(Borders::ALL).title(id.title()));
        f.render_widget(waiting, area);
        return;
    };

    // x is the slot index inside the window
    let points: Vec<Vec<(f64, f64)>> = d
        .series
        .iter()
        .map(|s| s.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect())
        .collect();
    let datasets: Vec<Dataset<'_>> = points
        .iter()
        .zip(id.series_names())
        .zip(line_colors(id))
        .map(|((pts, name), color)| {
            Dataset::default()
                .name(*name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(pts)
        })
        .collect();

    let x_max = d.labels.len().saturating_sub(1).max(1) as f64;
    let peak = d.series.iter().flatten().fold(0.0_f64, |a, &b| a.max(b));
    let y_max = id.y_max().unwrap_or_else(|| (peak * 1.1).max(1.0));

    let first = d.labels.first().cloned().unwrap_or_default();
    let last = d.labels.last().cloned().unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(chart_title(id, d)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw(axis_value(id, 0.0)),
                    Span::raw(axis_value(id, y_max)),
                ]),
        );
    f.render_widget(chart, area);
}
