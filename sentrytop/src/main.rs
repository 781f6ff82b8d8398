//! Entry point for the sentrytop TUI. Parses args, resolves settings and runs the App.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use sentrytop::app::App;
use sentrytop::config::{config_path, load_config, Config, Overrides};
use sentrytop::logging::init_file_logging;

#[derive(Parser, Debug)]
#[command(
    name = "sentrytop",
    version,
    about = "Live terminal dashboard for a NetSentry monitoring backend"
)]
struct Cli {
    /// Backend base URL, e.g. http://127.0.0.1:8080
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Backend base URL (same as the positional URL)
    #[arg(short = 'u', long = "url", value_name = "URL", conflicts_with = "url")]
    url_flag: Option<String>,

    /// Refresh interval in milliseconds
    #[arg(short = 'i', long)]
    interval_ms: Option<u64>,

    /// Rows requested for the connection and host tables
    #[arg(short = 'l', long)]
    limit: Option<usize>,

    /// Per-request timeout in milliseconds (default: wait for every response)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Config file (default: $XDG_CONFIG_HOME/sentrytop/config.json)
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file (default: next to the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone().or_else(|| self.url_flag.clone()),
            interval_ms: self.interval_ms,
            limit: self.limit,
            timeout_ms: self.timeout_ms,
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(config_path);
    let (file_cfg, load_err) = match load_config(&path) {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let cfg = file_cfg.merge(cli.overrides());
    let settings = cfg.validate().context("invalid configuration")?;

    if cli.print_config {
        if let Some(e) = &load_err {
            eprintln!("warning: {e}; using defaults");
        }
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_file_logging(&settings.log_file)
        .with_context(|| format!("opening log file {}", settings.log_file.display()))?;
    if let Some(e) = load_err {
        warn!(error = %e, "config file ignored, using defaults");
    }

    let mut app = App::new(settings.base_url.as_str());
    app.run(&settings).await
}
