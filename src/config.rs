use std::cmp;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable pointing at the configuration file.
const CONFIG_ENV: &str = "ONESHOTD_CONFIG";

/// Default configuration file name, looked up in the working directory.
const CONFIG_FILE: &str = "oneshotd.yaml";

/// Worker floor applied when hardware detection yields a tiny count.
const MIN_WORKERS: usize = 2;

/// Top-level server configuration.
///
/// Loaded from a YAML file when one is present; every field falls back to a
/// default so an empty (or absent) file yields a runnable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the acceptor binds to. Port 0 picks an ephemeral port.
    pub listen_addr: String,
    /// Worker thread count; 0 means twice the detected hardware concurrency.
    pub workers: usize,
    /// Upper bound on the buffered request head (request line or header block).
    pub max_request_buffer: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root all targets are resolved under.
    pub root: PathBuf,
    /// Document served for the target `/`.
    pub default_document: String,
    /// Document served in place of a missing target.
    pub error_document: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            workers: 0,
            max_request_buffer: 4096,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
            default_document: "home.html".to_string(),
            error_document: "error.html".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration file named by `ONESHOTD_CONFIG` (default
    /// `oneshotd.yaml`). A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());

        if Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)?;
            Self::from_yaml(&text)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(text)?;
        Ok(cfg)
    }
}

impl ServerConfig {
    /// Effective worker count: the configured value, or twice the detected
    /// hardware concurrency (never below the floor) when left at 0.
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            cmp::max(num_cpus::get() * 2, MIN_WORKERS)
        }
    }
}
