//! Promise records and the dataset document.

use crate::error::LoadResult;
use crate::status::{status_or_empty, Status};
use serde::{Deserialize, Deserializer, Serialize};

/// Subject shown when the document does not name one.
pub const DEFAULT_SUBJECT: &str = "Mayor";

/// One tracked public commitment.
///
/// Records are built once when the dataset is parsed and never mutated.
/// Missing text fields deserialize to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromiseRecord {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub promise: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub category: String,
    #[serde(default, deserialize_with = "status_or_empty")]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl PromiseRecord {
    pub fn new(promise: impl Into<String>, category: impl Into<String>, status: Status) -> Self {
        Self {
            promise: promise.into(),
            category: category.into(),
            status,
            ..Self::default()
        }
    }

    pub fn with_target_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.target_deadline = Some(deadline.into());
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Deadline to display: `target_deadline` wins over `deadline`.
    ///
    /// Empty strings count as absent, so an empty target falls back to the
    /// plain deadline.
    pub fn display_deadline(&self) -> &str {
        [&self.target_deadline, &self.deadline]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Source link, if one is present and non-empty.
    pub fn source_link(&self) -> Option<&str> {
        self.source_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The loaded document: an optional subject and the ordered promise list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub promises: Vec<PromiseRecord>,
}

impl Dataset {
    pub fn new(subject: Option<String>, promises: Vec<PromiseRecord>) -> Self {
        Self { subject, promises }
    }

    /// Parse a dataset from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> LoadResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Subject name, falling back to [`DEFAULT_SUBJECT`] when absent or blank.
    pub fn subject(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SUBJECT)
    }

    pub fn len(&self) -> usize {
        self.promises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promises.is_empty()
    }
}

fn empty_if_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
