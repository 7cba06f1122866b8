//! Search, category and status filtering over promise records.
//!
//! All three clauses must hold for a record to be kept. Filtering never
//! reorders: the result is always a subsequence of the input.

use crate::model::PromiseRecord;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Option value that selects every category or status.
pub const ALL: &str = "all";

/// Category clause of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Status clause of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: &Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// Options offered by the status selector, `All` first.
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(Status::KNOWN.into_iter().map(StatusFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            StatusFilter::All
        } else {
            StatusFilter::Only(Status::from_code(s))
        })
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => f.write_str(status.code()),
        }
    }
}

/// Current filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search. Trimmed and matched case-insensitively.
    pub query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: CategoryFilter, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            category,
            status,
        }
    }

    /// Criteria that keep every record.
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty()
            && self.category == CategoryFilter::All
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, record: &PromiseRecord) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Criteria with the query normalized once per pass.
struct Matcher<'a> {
    needle: String,
    criteria: &'a FilterCriteria,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            needle: criteria.query.trim().to_lowercase(),
            criteria,
        }
    }

    fn matches(&self, record: &PromiseRecord) -> bool {
        self.matches_query(record)
            && self.criteria.category.matches(&record.category)
            && self.criteria.status.matches(&record.status)
    }

    fn matches_query(&self, record: &PromiseRecord) -> bool {
        self.needle.is_empty()
            || record.promise.to_lowercase().contains(&self.needle)
            || record.category.to_lowercase().contains(&self.needle)
    }
}

/// Records matching `criteria`, in input order.
pub fn filter_promises<'a>(
    promises: &'a [PromiseRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PromiseRecord> {
    let matcher = Matcher::new(criteria);
    promises.iter().filter(|p| matcher.matches(p)).collect()
}

/// Positions of the records matching `criteria`, ascending.
pub fn filter_indices(promises: &[PromiseRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    promises
        .iter()
        .enumerate()
        .filter(|(_, p)| matcher.matches(p))
        .map(|(idx, _)| idx)
        .collect()
}

/// Distinct categories, sorted ascending, for the category selector.
pub fn category_options(promises: &[PromiseRecord]) -> Vec<String> {
    promises
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
