//! File-backed tracing setup. The terminal belongs to the UI, so diagnostics
//! (fetch failures included) go to a log file instead of stderr.

use std::{fs, fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SENTRYTOP_LOG";

pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
