//! Settings: optional JSON config file merged with command-line overrides.
//! Stored under XDG config dir: $XDG_CONFIG_HOME/sentrytop/config.json (fallback ~/.config/sentrytop/config.json)

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

pub const DEFAULT_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid backend url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url must be http or https, got {0:?}")]
    Scheme(String),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub interval_ms: u64,
    pub limit: usize,
    // unset: requests wait as long as the backend takes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            interval_ms: DEFAULT_INTERVAL_MS,
            limit: DEFAULT_LIMIT,
            timeout_ms: None,
            log_file: None,
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub interval_ms: Option<u64>,
    pub limit: Option<usize>,
    pub timeout_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Validated runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: Url,
    pub interval: Duration,
    pub limit: usize,
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("sentrytop")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sentrytop")
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn default_log_path() -> PathBuf {
    config_dir().join("sentrytop.log")
}

/// A missing file is not an error: defaults apply.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl Config {
    pub fn merge(mut self, o: Overrides) -> Self {
        if let Some(v) = o.url {
            self.url = v;
        }
        if let Some(v) = o.interval_ms {
            self.interval_ms = v;
        }
        if let Some(v) = o.limit {
            self.limit = v;
        }
        if o.timeout_ms.is_some() {
            self.timeout_ms = o.timeout_ms;
        }
        if o.log_file.is_some() {
            self.log_file = o.log_file;
        }
        self
    }

    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let base_url = Url::parse(&self.url).map_err(|source| ConfigError::Url {
            url: self.url.clone(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Scheme(self.url.clone()));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Zero("interval_ms"));
        }
        if self.limit == 0 {
            return Err(ConfigError::Zero("limit"));
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Zero("timeout_ms"));
        }
        Ok(Settings {
            base_url,
            interval: Duration::from_millis(self.interval_ms),
            limit: self.limit,
            timeout: self.timeout_ms.map(Duration::from_millis),
            log_file: self.log_file.clone().unwrap_or_else(default_log_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let td = tempfile::tempdir().unwrap();
        let cfg = load_config(&td.path().join("nope.json")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("config.json");
        fs::write(&p, r#"{"url":"http://sentry:9090","limit":25}"#).unwrap();
        let cfg = load_config(&p).unwrap();
        assert_eq!(cfg.url, "http://sentry:9090");
        assert_eq!(cfg.limit, 25);
        assert_eq!(cfg.interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn malformed_file_is_reported() {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("config.json");
        fs::write(&p, "{not json").unwrap();
        assert!(matches!(load_config(&p), Err(ConfigError::Malformed { .. })));
    }

    #[test]
    fn cli_overrides_file() {
        let cfg = Config {
            limit: 25,
            ..Config::default()
        }
        .merge(Overrides {
            url: Some("https://gw/ns".into()),
            interval_ms: Some(500),
            ..Overrides::default()
        });
        assert_eq!(cfg.url, "https://gw/ns");
        assert_eq!(cfg.interval_ms, 500);
        assert_eq!(cfg.limit, 25);
        let s = cfg.validate().unwrap();
        assert_eq!(s.interval, Duration::from_millis(500));
        assert_eq!(s.base_url.as_str(), "https://gw/ns");
        assert_eq!(s.timeout, None);
    }

    #[test]
    fn timeout_is_opt_in() {
        let s = Config::default().validate().unwrap();
        assert_eq!(s.timeout, None);

        let cfg = Config::default().merge(Overrides {
            timeout_ms: Some(750),
            ..Overrides::default()
        });
        assert_eq!(cfg.validate().unwrap().timeout, Some(Duration::from_millis(750)));

        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("config.json");
        fs::write(&p, r#"{"timeout_ms":1200}"#).unwrap();
        assert_eq!(load_config(&p).unwrap().timeout_ms, Some(1200));

        let zero = Config {
            timeout_ms: Some(0),
            ..Config::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Zero("timeout_ms"))));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let bad_url = Config {
            url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(bad_url.validate(), Err(ConfigError::Url { .. })));

        let ws = Config {
            url: "ws://host/ws".into(),
            ..Config::default()
        };
        assert!(matches!(ws.validate(), Err(ConfigError::Scheme(_))));

        let zero = Config {
            interval_ms: 0,
            ..Config::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Zero("interval_ms"))));

        let zero = Config {
            limit: 0,
            ..Config::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Zero("limit"))));
    }
}
