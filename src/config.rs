//! Runtime configuration loaded from environment variables.
//!
//! The binary builds an [`ExplorerConfig`] with [`ExplorerConfig::from_env`] and then applies
//! command-line overrides on top.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::ingestion::{
    CompositeObserver, CsvOptions, FileObserver, IngestionObserver, IngestionOptions, ListingSource,
    LogObserver,
};

pub const ENV_DATA: &str = "RENT_EXPLORER_DATA";
pub const ENV_HAS_HEADERS: &str = "RENT_EXPLORER_HAS_HEADERS";
pub const ENV_COPYRIGHT: &str = "RENT_EXPLORER_COPYRIGHT";
pub const ENV_HEADER: &str = "RENT_EXPLORER_HEADER";
pub const ENV_HOME_CURRENCY: &str = "RENT_EXPLORER_HOME_CURRENCY";
pub const ENV_LOG_FILE: &str = "RENT_EXPLORER_LOG_FILE";

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// CSV file to load; `None` loads the built-in sample.
    pub data_path: Option<PathBuf>,
    /// Whether the CSV file starts with a header row.
    pub has_headers: bool,
    /// Copyright line printed under every report.
    pub copyright: String,
    /// Report header (at most 30 characters; longer values are dropped).
    pub header: String,
    /// Home currency; `None` asks the user.
    pub home_currency: Option<String>,
    /// Append ingestion events to this file as JSON lines.
    pub log_file: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            has_headers: true,
            copyright: String::new(),
            header: String::new(),
            home_currency: None,
            log_file: None,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_path: non_empty(ENV_DATA).map(PathBuf::from),
            has_headers: non_empty(ENV_HAS_HEADERS)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.has_headers),
            copyright: lookup(ENV_COPYRIGHT).unwrap_or(defaults.copyright),
            header: lookup(ENV_HEADER).unwrap_or(defaults.header),
            home_currency: non_empty(ENV_HOME_CURRENCY).map(|v| v.trim().to_ascii_uppercase()),
            log_file: non_empty(ENV_LOG_FILE).map(PathBuf::from),
        }
    }

    /// The configured listing source.
    pub fn source(&self) -> ListingSource {
        match &self.data_path {
            Some(path) => ListingSource::Csv(path.clone()),
            None => ListingSource::Sample,
        }
    }

    /// Ingestion options: log every outcome, and mirror it to the log file when one is set.
    pub fn ingestion_options(&self) -> IngestionOptions {
        let mut observers: Vec<Arc<dyn IngestionObserver>> = vec![Arc::new(LogObserver)];
        if let Some(path) = &self.log_file {
            observers.push(Arc::new(FileObserver::new(path)));
        }

        IngestionOptions {
            csv: CsvOptions {
                has_headers: self.has_headers,
                ..CsvOptions::default()
            },
            observer: Some(Arc::new(CompositeObserver::new(observers))),
            ..IngestionOptions::default()
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Some(true),
        "false" | "f" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
