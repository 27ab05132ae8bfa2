//! Settings file for the uploader.
//!
//! Read from `./upload.ron` (or `--config`), then overridden by command-line
//! flags. A missing default file just means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use serde::{Deserialize, Serialize};
use upload_engine::{DownloadSettings, EngineConfig, GenerateSettings};

use super::cli::Cli;

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "upload.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub server_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub download_timeout_secs: u64,
    pub max_download_bytes: u64,
    pub download_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let generate = GenerateSettings::default();
        let download = DownloadSettings::default();
        Self {
            server_url: generate.base_url,
            connect_timeout_secs: generate.connect_timeout.as_secs(),
            request_timeout_secs: generate.request_timeout.map(|t| t.as_secs()),
            download_timeout_secs: download.request_timeout.as_secs(),
            max_download_bytes: download.max_bytes,
            download_dir: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads the explicit file if given (it must exist), else the default file
    /// if present, else defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILENAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = ron::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        engine_info!("Loaded settings from {:?}", path);
        Ok(config)
    }

    pub(crate) fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.server_url = server.clone();
        }
        if let Some(secs) = cli.request_timeout_secs {
            self.request_timeout_secs = Some(secs);
        }
        if let Some(dir) = &cli.download_dir {
            self.download_dir = Some(dir.clone());
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    pub(crate) fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::for_service(self.server_url.clone());
        config.generate.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config.generate.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        config.download.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config.download.request_timeout = Duration::from_secs(self.download_timeout_secs);
        config.download.max_bytes = self.max_download_bytes;
        config
    }
}
