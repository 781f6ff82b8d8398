//! UI module root: exposes drawing functions for individual panels.

pub mod charts;
pub mod fields;
pub mod header;
pub mod tables;
pub mod theme;
pub mod util;
