//! Accountability score.
//!
//! Completed promises add one point, broken promises subtract one, and the
//! net is divided by the collection size. The resulting ratio in `[-1, 1]` is
//! shifted to `[0, 2]`, multiplied by the scale factor, rounded and clamped to
//! `[0, 100]`.
//!
//! The default factor is 1 ([`ScoreScale::Unit`]), which leaves the score in
//! `0..=2` so it always reads as `Weak`. Published dashboards show exactly
//! these numbers, so changing the default would change them.
//! [`ScoreScale::Percent`] multiplies by 50 and spans the whole percentage
//! range.

use crate::model::PromiseRecord;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of the `Strong` band.
pub const STRONG_THRESHOLD: u8 = 67;
/// Lower bound (inclusive) of the `Moderate` band.
pub const MODERATE_THRESHOLD: u8 = 34;

/// Multiplier applied to the shifted ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    /// Factor 1.
    #[default]
    Unit,
    /// Factor 50, mapping `[-1, 1]` onto `[0, 100]`.
    Percent,
}

impl ScoreScale {
    pub fn factor(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 50.0,
        }
    }
}

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Strong,
    Moderate,
    Weak,
}

impl ScoreLabel {
    /// Classify a percentage. Every caller that needs a band goes through here.
    pub fn from_pct(pct: u8) -> Self {
        if pct >= STRONG_THRESHOLD {
            ScoreLabel::Strong
        } else if pct >= MODERATE_THRESHOLD {
            ScoreLabel::Moderate
        } else {
            ScoreLabel::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Strong => "Strong",
            ScoreLabel::Moderate => "Moderate",
            ScoreLabel::Weak => "Weak",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score plus the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub pct: u8,
    pub label: ScoreLabel,
    pub completed_count: usize,
    pub broken_count: usize,
    /// Collection size, or 1 for an empty collection.
    pub total_count: usize,
}

impl ScoreResult {
    /// Sentence explaining where the score comes from.
    pub fn description(&self) -> String {
        format!(
            "Based on {} completed and {} broken promises out of {} total commitments.",
            self.completed_count, self.broken_count, self.total_count
        )
    }
}

/// Score a collection using the default scale.
pub fn compute_score(promises: &[PromiseRecord]) -> ScoreResult {
    compute_score_with_scale(promises, ScoreScale::default())
}

/// Score a collection with an explicit scale factor.
pub fn compute_score_with_scale(promises: &[PromiseRecord], scale: ScoreScale) -> ScoreResult {
    let total = promises.len().max(1);
    let completed = count_status(promises, &Status::Completed);
    let broken = count_status(promises, &Status::Broken);

    let raw = (completed as f64 - broken as f64) / total as f64;
    let pct = ((raw + 1.0) * scale.factor()).round().clamp(0.0, 100.0) as u8;

    ScoreResult {
        pct,
        label: ScoreLabel::from_pct(pct),
        completed_count: completed,
        broken_count: broken,
        total_count: total,
    }
}

fn count_status(promises: &[PromiseRecord], status: &Status) -> usize {
    promises.iter().filter(|p| &p.status == status).count()
}
