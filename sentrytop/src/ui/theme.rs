//! Shared UI theme constants.

use ratatui::style::Color;

// Chart line colors
pub const CPU_LINE: Color = Color::Rgb(54, 162, 235);
pub const MEM_LINE: Color = Color::Rgb(255, 99, 132);
pub const NET_IN_LINE: Color = Color::Rgb(75, 192, 192);
pub const NET_OUT_LINE: Color = Color::Rgb(153, 102, 255);

pub const HEADER_FG: Color = Color::Cyan;
pub const ZEBRA_BG: Color = Color::Rgb(30, 30, 38);
pub const MUTED: Color = Color::DarkGray;
