//! PLEDGE Test Utilities
//!
//! Shared test infrastructure for the PLEDGE workspace:
//! - Mock dataset sources
//! - Proptest generators for records, datasets and filter criteria
//! - Fixtures for the documented dashboard scenarios
//! - Custom assertions for ordering and score invariants

// Re-export core types for convenience
pub use pledge_core::{
    CategoryFilter, Dataset, DatasetSource, FilterCriteria, LoadError, LoadResult, PromiseRecord,
    ScoreResult, Status, StatusFilter,
};

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// MOCK SOURCES
// ============================================================================

/// Dataset source that serves a fixed document and counts how often it is
/// asked for it.
#[derive(Debug, Default)]
pub struct MockSource {
    dataset: Dataset,
    loads: AtomicUsize,
}

impl MockSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of completed `load` calls.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for MockSource {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    async fn load(&self) -> LoadResult<Dataset> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.dataset.clone())
    }
}

/// Dataset source that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingSource {
    error: LoadError,
}

impl FailingSource {
    pub fn new(error: LoadError) -> Self {
        Self { error }
    }

    /// A source whose payload does not parse.
    pub fn malformed() -> Self {
        Self::new(LoadError::Malformed {
            reason: "expected value at line 1 column 1".to_string(),
        })
    }
}

#[async_trait]
impl DatasetSource for FailingSource {
    fn describe(&self) -> String {
        "failing".to_string()
    }

    async fn load(&self) -> LoadResult<Dataset> {
        Err(self.error.clone())
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for PLEDGE types.

    use super::*;
    use proptest::prelude::*;

    /// Category names drawn from a small pool so filters hit often.
    pub const CATEGORIES: [&str; 5] = ["Education", "Housing", "Infrastructure", "Safety", ""];

    /// Any status, including a few unrecognized codes.
    pub fn arb_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::InProgress),
            Just(Status::Completed),
            Just(Status::Broken),
            Just(Status::Stalled),
            Just(Status::Pending),
            "[a-z_]{1,10}".prop_map(|code| Status::from_code(&code)),
        ]
    }

    /// Only completed/broken/other, to drive the score to its extremes.
    pub fn arb_scoring_status() -> impl Strategy<Value = Status> {
        prop_oneof![
            3 => Just(Status::Completed),
            3 => Just(Status::Broken),
            1 => Just(Status::Pending),
        ]
    }

    pub fn arb_category() -> impl Strategy<Value = String> {
        prop::sample::select(CATEGORIES.to_vec()).prop_map(str::to_string)
    }

    pub fn arb_deadline() -> impl Strategy<Value = Option<String>> {
        prop::option::of((2020u32..2030, 1u32..13, 1u32..29).prop_map(|(y, m, d)| {
            format!("{:04}-{:02}-{:02}", y, m, d)
        }))
    }

    pub fn arb_record() -> impl Strategy<Value = PromiseRecord> {
        (
            "[A-Za-z ]{0,24}",
            arb_category(),
            arb_status(),
            arb_deadline(),
            arb_deadline(),
            prop::option::of("https://[a-z]{3,8}\\.org/[a-z]{1,8}"),
        )
            .prop_map(
                |(promise, category, status, target_deadline, deadline, source_url)| PromiseRecord {
                    promise,
                    category,
                    status,
                    target_deadline,
                    deadline,
                    source_url,
                },
            )
    }

    pub fn arb_records(max: usize) -> impl Strategy<Value = Vec<PromiseRecord>> {
        prop::collection::vec(arb_record(), 0..max)
    }

    pub fn arb_dataset() -> impl Strategy<Value = Dataset> {
        (prop::option::of("[A-Z][a-z]{2,10}"), arb_records(40))
            .prop_map(|(subject, promises)| Dataset::new(subject, promises))
    }

    pub fn arb_category_filter() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            arb_category().prop_map(CategoryFilter::Only),
        ]
    }

    pub fn arb_status_filter() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![
            Just(StatusFilter::All),
            arb_status().prop_map(StatusFilter::Only),
        ]
    }

    pub fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        ("[a-z ]{0,4}", arb_category_filter(), arb_status_filter())
            .prop_map(|(query, category, status)| FilterCriteria::new(query, category, status))
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for the documented dashboard scenarios.

    use super::*;

    /// Build records from status codes alone.
    pub fn records_with_statuses(statuses: &[Status]) -> Vec<PromiseRecord> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| PromiseRecord::new(format!("Promise {}", i + 1), "General", status.clone()))
            .collect()
    }

    /// Two completed, one broken.
    pub fn two_completed_one_broken() -> Vec<PromiseRecord> {
        records_with_statuses(&[Status::Completed, Status::Completed, Status::Broken])
    }

    /// "Build a bridge" (Infrastructure, broken) and "Fund schools"
    /// (Education, completed).
    pub fn bridge_and_schools() -> Vec<PromiseRecord> {
        vec![
            PromiseRecord::new("Build a bridge", "Infrastructure", Status::Broken),
            PromiseRecord::new("Fund schools", "Education", Status::Completed),
        ]
    }

    /// Record carrying both deadline fields.
    pub fn record_with_both_deadlines() -> PromiseRecord {
        PromiseRecord::new("Repave Main Street", "Infrastructure", Status::InProgress)
            .with_target_deadline("2025-01-01")
            .with_deadline("2024-06-01")
    }

    /// A realistic document covering every known status and one unknown.
    pub fn sample_document() -> serde_json::Value {
        serde_json::json!({
            "subject": "Mayor",
            "promises": [
                {"promise": "Build a bridge", "category": "Infrastructure", "status": "broken",
                 "target_deadline": "2025-01-01", "deadline": "2024-06-01",
                 "source_url": "https://example.org/bridge"},
                {"promise": "Fund schools", "category": "Education", "status": "completed"},
                {"promise": "Hire 100 teachers", "category": "Education", "status": "in_progress",
                 "deadline": "2026-09-01"},
                {"promise": "Open night shelters", "category": "Housing", "status": "stalled"},
                {"promise": "Publish the budget", "status": "pending"},
                {"promise": "Plant 10,000 trees", "category": "Environment", "status": "on_hold"}
            ]
        })
    }

    pub fn sample_dataset() -> Dataset {
        serde_json::from_value(sample_document()).unwrap_or_default()
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for PLEDGE-specific invariants.

    use super::*;

    /// Assert `sub` appears in `all` in the same relative order.
    #[track_caller]
    pub fn assert_subsequence(sub: &[&PromiseRecord], all: &[PromiseRecord]) {
        let mut remaining = all.iter();
        for wanted in sub {
            assert!(
                remaining.any(|candidate| std::ptr::eq(candidate, *wanted)),
                "Record {:?} is missing or out of order",
                wanted.promise
            );
        }
    }

    /// Assert a score is in range and its label agrees with its percentage.
    #[track_caller]
    pub fn assert_score_consistent(score: &ScoreResult) {
        assert!(score.pct <= 100, "pct out of range: {}", score.pct);
        assert!(score.total_count >= 1, "total_count must be at least 1");
        assert_eq!(score.label, pledge_core::ScoreLabel::from_pct(score.pct));
    }
}
