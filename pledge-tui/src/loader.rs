//! Dataset sources: local JSON files and HTTP endpoints.

use crate::config::{SourceKind, TuiConfig};
use async_trait::async_trait;
use pledge_core::{Dataset, DatasetSource, LoadError, LoadResult};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use std::path::PathBuf;
use std::time::Duration;

/// Reads the document from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> LoadResult<Dataset> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| LoadError::Io {
                location: self.describe(),
                reason: err.to_string(),
            })?;
        Dataset::from_json_slice(&bytes)
    }
}

/// Fetches the document with a single uncached GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> LoadResult<Self> {
        let url = url.into();
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| LoadError::Http {
                url: url.clone(),
                reason: err.to_string(),
            })?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> LoadResult<Dataset> {
        let http_error = |err: reqwest::Error| LoadError::Http {
            url: self.url.clone(),
            reason: err.to_string(),
        };

        let response = self.client.get(&self.url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(http_error)?;
        Dataset::from_json_slice(&bytes)
    }
}

/// Build the source named by the config.
pub fn source_from_config(config: &TuiConfig) -> LoadResult<Box<dyn DatasetSource>> {
    let location = config.source.location.trim();
    match config.source.kind {
        SourceKind::File => Ok(Box::new(FileSource::new(location))),
        SourceKind::Http => {
            let timeout = Duration::from_millis(config.request_timeout_ms);
            Ok(Box::new(HttpSource::new(location, timeout)?))
        }
    }
}
