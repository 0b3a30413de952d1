use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scheduler::DEFAULT_SCHEDULE_TITLE;

pub const CATALOG_ENV: &str = "SCHEDULE_PLANNER_CATALOG";
pub const TITLE_ENV: &str = "SCHEDULE_PLANNER_TITLE";
pub const HTTP_ADDR_ENV: &str = "SCHEDULE_PLANNER_HTTP_ADDR";

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup settings shared by the CLI and the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Catalog file to load at startup. No catalog means an empty one.
    pub catalog_path: Option<PathBuf>,
    pub schedule_title: String,
    pub http_addr: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            schedule_title: DEFAULT_SCHEDULE_TITLE.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies any of the `SCHEDULE_PLANNER_*` variables present in the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_ENV).filter(|value| !value.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(title) = lookup(TITLE_ENV) {
            self.schedule_title = title;
        }
        if let Some(addr) = lookup(HTTP_ADDR_ENV).filter(|value| !value.trim().is_empty()) {
            self.http_addr = addr;
        }
        self
    }
}
