//! Promise status codes and their display labels.

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a tracked promise.
///
/// Unknown codes are kept verbatim in [`Status::Other`] and compare equal only
/// to the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    InProgress,
    Completed,
    Broken,
    Stalled,
    Pending,
    Other(String),
}

impl Status {
    /// The five statuses the dashboard knows how to label.
    pub const KNOWN: [Status; 5] = [
        Status::InProgress,
        Status::Completed,
        Status::Broken,
        Status::Stalled,
        Status::Pending,
    ];

    /// Raw status code as it appears in the source document.
    pub fn code(&self) -> &str {
        match self {
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Broken => "broken",
            Status::Stalled => "stalled",
            Status::Pending => "pending",
            Status::Other(code) => code,
        }
    }

    /// Parse a status code. Never fails; unknown codes become `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "in_progress" => Status::InProgress,
            "completed" => Status::Completed,
            "broken" => Status::Broken,
            "stalled" => Status::Stalled,
            "pending" => Status::Pending,
            other => Status::Other(other.to_string()),
        }
    }

    /// Human-readable label. Unknown codes render as themselves.
    pub fn label(&self) -> &str {
        match self {
            Status::InProgress => "In progress",
            Status::Completed => "Completed",
            Status::Broken => "Broken",
            Status::Stalled => "Stalled",
            Status::Pending => "Pending",
            Status::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl From<String> for Status {
    fn from(code: String) -> Self {
        match Status::from_code(&code) {
            Status::Other(_) => Status::Other(code),
            known => known,
        }
    }
}

impl From<&str> for Status {
    fn from(code: &str) -> Self {
        Status::from_code(code)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Status::from_code(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Label lookup on a raw code, for callers that never parsed into [`Status`].
pub fn status_label(code: &str) -> &str {
    match code {
        "in_progress" => "In progress",
        "completed" => "Completed",
        "broken" => "Broken",
        "stalled" => "Stalled",
        "pending" => "Pending",
        other => other,
    }
}

/// Deserialize a status that may be absent or `null`.
pub(crate) fn status_or_empty<'de, D>(deserializer: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<String>::deserialize(deserializer)?;
    Ok(code.map(Status::from).unwrap_or_default())
}
