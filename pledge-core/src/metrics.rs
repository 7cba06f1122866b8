//! Status counts for the summary cards.

use crate::model::PromiseRecord;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Per-status counts over the whole collection.
///
/// `total` is the collection size; the other fields count exact status
/// matches, so records with other statuses only show up in `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardMetrics {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub broken: usize,
}

/// Which summary card a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Total,
    InProgress,
    Completed,
    Broken,
}

/// Presentation-ready summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub label: &'static str,
    pub value: usize,
    pub icon: &'static str,
}

/// Count records by status.
pub fn aggregate(promises: &[PromiseRecord]) -> CardMetrics {
    promises.iter().fold(
        CardMetrics {
            total: promises.len(),
            ..CardMetrics::default()
        },
        |mut metrics, record| {
            match record.status {
                Status::InProgress => metrics.in_progress += 1,
                Status::Completed => metrics.completed += 1,
                Status::Broken => metrics.broken += 1,
                _ => {}
            }
            metrics
        },
    )
}

impl CardMetrics {
    /// Cards in display order.
    pub fn cards(&self) -> [SummaryCard; 4] {
        [
            SummaryCard {
                kind: CardKind::Total,
                label: "Total Promises",
                value: self.total,
                icon: "◎",
            },
            SummaryCard {
                kind: CardKind::InProgress,
                label: "In Progress",
                value: self.in_progress,
                icon: "◷",
            },
            SummaryCard {
                kind: CardKind::Completed,
                label: "Completed",
                value: self.completed,
                icon: "✓",
            },
            SummaryCard {
                kind: CardKind::Broken,
                label: "Broken",
                value: self.broken,
                icon: "✕",
            },
        ]
    }

    /// Records whose status is not one of the three counted ones.
    pub fn other(&self) -> usize {
        self.total - (self.in_progress + self.completed + self.broken)
    }
}
