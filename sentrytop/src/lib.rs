//! Library surface for the sentrytop client (used by integration tests and the binary).

pub mod app;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod format;
pub mod history;
pub mod logging;
pub mod render;
pub mod scheduler;
pub mod screen;
pub mod sink;
pub mod types;
pub mod ui;
pub mod view;
