use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::engine_info;
use futures_util::StreamExt;

use crate::filename::artifact_filename;
use crate::generate::map_reqwest_error;
use crate::store::ArtifactStore;
use crate::{EngineError, FailureKind};

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    /// Locators returned by the service are resolved against this.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Fetches generated documents and stores them in a local directory.
#[derive(Debug, Clone)]
pub struct ArtifactDownloader {
    settings: DownloadSettings,
}

impl ArtifactDownloader {
    pub fn new(settings: DownloadSettings) -> Self {
        Self { settings }
    }

    /// Absolute locators are used as is; relative ones hang off `base_url`.
    pub fn resolve(&self, locator: &str) -> Result<reqwest::Url, EngineError> {
        reqwest::Url::parse(&self.settings.base_url)
            .and_then(|base| base.join(locator))
            .map_err(|err| EngineError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    pub async fn download(&self, locator: &str, output_dir: &Path) -> Result<PathBuf, EngineError> {
        let url = self.resolve(locator)?;
        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| EngineError::new(FailureKind::Network, err.to_string()))?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }

        let filename = artifact_filename(&url);
        let path = ArtifactStore::new(output_dir).save(&filename, &bytes)?;
        engine_info!("Saved {} ({} bytes) to {:?}", url, bytes.len(), path);
        Ok(path)
    }

    fn too_large(&self, actual: Option<u64>) -> EngineError {
        EngineError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}
