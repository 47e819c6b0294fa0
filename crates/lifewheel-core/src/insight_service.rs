//! Derived read-only queries over the wizard state. Recomputed on demand,
//! never cached.

use lifewheel_domain::{Dimension, Period, WizardState, DIMENSIONS};

/// A dimension paired with its prior-period score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionScore {
    pub dimension: &'static Dimension,
    pub score: u8,
}

/// A positive improvement gap between the two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapEntry {
    pub dimension: &'static Dimension,
    pub prior: u8,
    pub target: u8,
    pub gap: i8,
}

pub struct InsightService;

impl InsightService {
    /// Highest-scoring dimension of the prior period. Ties resolve to the
    /// first catalog entry (strict comparison).
    pub fn highest(state: &WizardState) -> DimensionScore {
        let mut best = DimensionScore {
            dimension: &DIMENSIONS[0],
            score: state.prior_scores.get(DIMENSIONS[0].key),
        };
        for dimension in &DIMENSIONS[1..] {
            let score = state.prior_scores.get(dimension.key);
            if score > best.score {
                best = DimensionScore { dimension, score };
            }
        }
        best
    }

    /// Lowest-scoring dimension of the prior period, first-seen-wins.
    pub fn lowest(state: &WizardState) -> DimensionScore {
        let mut worst = DimensionScore {
            dimension: &DIMENSIONS[0],
            score: state.prior_scores.get(DIMENSIONS[0].key),
        };
        for dimension in &DIMENSIONS[1..] {
            let score = state.prior_scores.get(dimension.key);
            if score < worst.score {
                worst = DimensionScore { dimension, score };
            }
        }
        worst
    }

    /// The top `count` dimensions by positive target-minus-prior gap.
    /// Zero and negative gaps are excluded outright; ties keep catalog
    /// order (stable sort); fewer than `count` qualifiers return fewer.
    pub fn top_gaps(state: &WizardState, count: usize) -> Vec<GapEntry> {
        let mut entries: Vec<GapEntry> = DIMENSIONS
            .iter()
            .map(|dimension| {
                let prior = state.prior_scores.get(dimension.key);
                let target = state.target_scores.get(dimension.key);
                GapEntry {
                    dimension,
                    prior,
                    target,
                    gap: target as i8 - prior as i8,
                }
            })
            .filter(|entry| entry.gap > 0)
            .collect();
        entries.sort_by(|a, b| b.gap.cmp(&a.gap));
        entries.truncate(count);
        entries
    }

    /// Average over all nine dimension scores plus joy. Every caller
    /// (summary screen, exports) shares this divisor so displayed numbers
    /// never disagree.
    pub fn average(state: &WizardState, period: Period) -> f64 {
        let total = state.scores(period).total() + state.joy(period) as u32;
        total as f64 / (DIMENSIONS.len() + 1) as f64
    }
}
