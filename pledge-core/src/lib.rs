//! PLEDGE Core - Promise Tracker Engine
//!
//! Turns a collection of promise records into dashboard view-models:
//! per-status card counts, an accountability score with a qualitative
//! label, category/status option lists and a filtered record list.
//!
//! Everything here is synchronous and pure except [`DashboardModel::load`],
//! which awaits a [`DatasetSource`] exactly once.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod score;
pub mod source;
pub mod status;

pub use dashboard::{DashboardModel, PromiseRow};
pub use error::{LoadError, LoadResult};
pub use filter::{
    category_options, filter_indices, filter_promises, CategoryFilter, FilterCriteria,
    StatusFilter, ALL,
};
pub use metrics::{aggregate, CardKind, CardMetrics, SummaryCard};
pub use model::{Dataset, PromiseRecord, DEFAULT_SUBJECT};
pub use score::{
    compute_score, compute_score_with_scale, ScoreLabel, ScoreResult, ScoreScale,
    MODERATE_THRESHOLD, STRONG_THRESHOLD,
};
pub use source::{DatasetSource, InMemorySource};
pub use status::{status_label, Status};
