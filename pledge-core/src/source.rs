//! Dataset source trait.
//!
//! A source is awaited exactly once per session. Implementations live with the
//! front end (file and HTTP loaders in `pledge-tui`, fixtures in
//! `pledge-test-utils`).

use crate::error::LoadResult;
use crate::model::Dataset;
use async_trait::async_trait;

/// Something that can produce the raw promise document.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and error notices.
    fn describe(&self) -> String;

    /// Fetch and parse the document.
    async fn load(&self) -> LoadResult<Dataset>;
}

/// Source backed by an already-parsed dataset.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    dataset: Dataset,
}

impl InMemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for InMemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn load(&self) -> LoadResult<Dataset> {
        Ok(self.dataset.clone())
    }
}
