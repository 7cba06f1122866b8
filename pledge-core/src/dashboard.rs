//! Dashboard orchestration.
//!
//! [`DashboardModel`] owns the only mutable session state: the current filter
//! criteria and the positions of the records they keep. The dataset itself is
//! shared read-only. Metrics, score and category options are computed once
//! when the model is built; every filter change runs one full filter pass.

use crate::filter::{category_options, filter_indices, CategoryFilter, FilterCriteria, StatusFilter};
use crate::metrics::{aggregate, CardMetrics};
use crate::model::{Dataset, PromiseRecord};
use crate::score::{compute_score_with_scale, ScoreResult, ScoreScale};
use crate::source::DatasetSource;
use crate::status::Status;
use crate::LoadResult;
use std::sync::Arc;

/// One row of the promise table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseRow<'a> {
    pub promise: &'a str,
    pub category: &'a str,
    pub status: &'a Status,
    pub status_label: &'a str,
    pub deadline: &'a str,
    pub source_url: Option<&'a str>,
}

impl<'a> From<&'a PromiseRecord> for PromiseRow<'a> {
    fn from(record: &'a PromiseRecord) -> Self {
        Self {
            promise: &record.promise,
            category: &record.category,
            status: &record.status,
            status_label: record.status.label(),
            deadline: record.display_deadline(),
            source_url: record.source_link(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardModel {
    dataset: Arc<Dataset>,
    scale: ScoreScale,
    metrics: CardMetrics,
    score: ScoreResult,
    categories: Vec<String>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
}

impl DashboardModel {
    /// Build the initial view: metrics, score, category options and an
    /// unfiltered record list.
    pub fn new(dataset: impl Into<Arc<Dataset>>, scale: ScoreScale) -> Self {
        let dataset = dataset.into();
        let metrics = aggregate(&dataset.promises);
        let score = compute_score_with_scale(&dataset.promises, scale);
        let categories = category_options(&dataset.promises);
        let visible = (0..dataset.promises.len()).collect();

        tracing::debug!(
            records = metrics.total,
            categories = categories.len(),
            pct = score.pct,
            label = %score.label,
            "Dashboard model built"
        );

        Self {
            dataset,
            scale,
            metrics,
            score,
            categories,
            criteria: FilterCriteria::default(),
            visible,
        }
    }

    /// Await the source once and build the model from its document.
    pub async fn load(source: &dyn DatasetSource, scale: ScoreScale) -> LoadResult<Self> {
        let location = source.describe();
        match source.load().await {
            Ok(dataset) => {
                tracing::info!(
                    source = %location,
                    records = dataset.len(),
                    subject = dataset.subject(),
                    "Dataset loaded"
                );
                Ok(Self::new(dataset, scale))
            }
            Err(err) => {
                tracing::error!(source = %location, error = %err, "Dataset load failed");
                Err(err)
            }
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn subject(&self) -> &str {
        self.dataset.subject()
    }

    /// Dashboard heading, e.g. `Mayor Promise Tracker`.
    pub fn title(&self) -> String {
        format!("{} Promise Tracker", self.subject())
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    pub fn metrics(&self) -> &CardMetrics {
        &self.metrics
    }

    pub fn score(&self) -> &ScoreResult {
        &self.score
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Records kept by the current criteria, in dataset order.
    pub fn filtered(&self) -> impl Iterator<Item = &PromiseRecord> + '_ {
        self.visible.iter().map(|&idx| &self.dataset.promises[idx])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn rows(&self) -> Vec<PromiseRow<'_>> {
        self.filtered().map(PromiseRow::from).collect()
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.criteria.query.push(ch);
        self.recompute();
    }

    pub fn pop_query_char(&mut self) {
        if self.criteria.query.pop().is_some() {
            self.recompute();
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.recompute();
    }

    /// Move the category selector one option forward or back, wrapping
    /// through `All`.
    pub fn cycle_category(&mut self, forward: bool) {
        let options: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Only))
            .collect();
        let next = step(&options, &self.criteria.category, forward);
        self.set_category(next);
    }

    pub fn cycle_status(&mut self, forward: bool) {
        let options = StatusFilter::options();
        let next = step(&options, &self.criteria.status, forward);
        self.set_status(next);
    }

    pub fn reset_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.dataset.promises, &self.criteria);
        tracing::debug!(
            query = %self.criteria.query,
            category = %self.criteria.category,
            status = %self.criteria.status,
            visible = self.visible.len(),
            total = self.dataset.len(),
            "Filters applied"
        );
    }
}

fn step<T: PartialEq + Clone>(options: &[T], current: &T, forward: bool) -> T {
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None => 0,
    };
    options[next].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ScoreLabel;

    fn dataset() -> Dataset {
        Dataset::new(
            Some("Governor".to_string()),
            vec![
                PromiseRecord::new("Build a bridge", "Infrastructure", Status::Broken)
                    .with_target_deadline("2025-01-01")
                    .with_deadline("2024-06-01"),
                PromiseRecord::new("Fund schools", "Education", Status::Completed)
                    .with_source_url("https://example.org/schools"),
                PromiseRecord::new("Hire teachers", "Education", Status::InProgress),
            ],
        )
    }

    fn visible_promises(model: &DashboardModel) -> Vec<&str> {
        model.filtered().map(|r| r.promise.as_str()).collect()
    }

    #[test]
    fn test_initial_view() {
        let model = DashboardModel::new(dataset(), ScoreScale::Percent);
        assert_eq!(model.title(), "Governor Promise Tracker");
        assert_eq!(model.metrics().total, 3);
        assert_eq!(model.metrics().in_progress, 1);
        assert_eq!(model.score().pct, 50);
        assert_eq!(model.score().label, ScoreLabel::Moderate);
        assert_eq!(model.categories(), ["Education", "Infrastructure"]);
        assert_eq!(model.filtered_len(), 3);
        assert!(model.criteria().is_identity());
    }

    #[test]
    fn test_rows_resolve_display_fields() {
        let model = DashboardModel::new(dataset(), ScoreScale::Unit);
        let rows = model.rows();
        assert_eq!(rows[0].deadline, "2025-01-01");
        assert_eq!(rows[0].status_label, "Broken");
        assert_eq!(rows[1].source_url, Some("https://example.org/schools"));
        assert_eq!(rows[2].status_label, "In progress");
        assert_eq!(rows[2].deadline, "");
    }

    #[test]
    fn test_query_edits_recompute() {
        let mut model = DashboardModel::new(dataset(), ScoreScale::Unit);
        for ch in "TEACH".chars() {
            model.push_query_char(ch);
        }
        assert_eq!(visible_promises(&model), vec!["Hire teachers"]);

        model.pop_query_char();
        model.pop_query_char();
        model.pop_query_char();
        assert_eq!(visible_promises(&model), vec!["Hire teachers"]);

        model.set_query("");
        assert_eq!(model.filtered_len(), 3);
        model.pop_query_char();
        assert_eq!(model.filtered_len(), 3);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut model = DashboardModel::new(dataset(), ScoreScale::Unit);
        model.cycle_category(true);
        assert_eq!(model.criteria().category, CategoryFilter::Only("Education".to_string()));
        assert_eq!(visible_promises(&model), vec!["Fund schools", "Hire teachers"]);

        model.cycle_category(true);
        assert_eq!(visible_promises(&model), vec!["Build a bridge"]);

        model.cycle_category(true);
        assert_eq!(model.criteria().category, CategoryFilter::All);

        model.cycle_category(false);
        assert_eq!(
            model.criteria().category,
            CategoryFilter::Only("Infrastructure".to_string())
        );
    }

    #[test]
    fn test_cycle_status_and_reset() {
        let mut model = DashboardModel::new(dataset(), ScoreScale::Unit);
        model.cycle_status(true);
        assert_eq!(model.criteria().status, StatusFilter::Only(Status::InProgress));
        assert_eq!(visible_promises(&model), vec!["Hire teachers"]);

        model.cycle_status(false);
        model.cycle_status(false);
        assert_eq!(model.criteria().status, StatusFilter::Only(Status::Pending));
        assert_eq!(model.filtered_len(), 0);

        model.set_query("bridge");
        model.reset_filters();
        assert!(model.criteria().is_identity());
        assert_eq!(model.filtered_len(), 3);
    }

    #[test]
    fn test_filtering_leaves_aggregates_alone() {
        let mut model = DashboardModel::new(dataset(), ScoreScale::Unit);
        let metrics = *model.metrics();
        let score = *model.score();
        model.set_status(StatusFilter::Only(Status::Completed));
        assert_eq!(model.filtered_len(), 1);
        assert_eq!(*model.metrics(), metrics);
        assert_eq!(*model.score(), score);
    }

    #[test]
    fn test_step_unknown_current_starts_over() {
        let options = vec![1, 2, 3];
        assert_eq!(step(&options, &9, true), 1);
        assert_eq!(step(&options, &3, true), 1);
        assert_eq!(step(&options, &1, false), 3);
    }
}
