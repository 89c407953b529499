//! Tunable scoring constants. Every threshold the engine bands on lives here
//! so it can be changed from the rule file without touching code.

use ablepath_core::models::effectiveness::InterpretationBands;
use ablepath_core::models::rating::Rating;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Availability or freshness score when the device record lacks the data.
pub const UNKNOWN_SCORE: f64 = 0.5;

/// Availability score for each price band, cheapest first.
pub const PRICE_BAND_SCORES: [f64; 4] = [0.9, 0.75, 0.6, 0.45];

/// Freshness score for recent, current and stale records.
pub const FRESHNESS_SCORES: [f64; 3] = [0.9, 0.7, 0.5];

/// Maps importance 1..=5 onto a multiplier centred on 1.0 at importance 3.
pub fn importance_multiplier(importance: Rating, step: f64) -> f64 {
    1.0 + (f64::from(importance.get()) - 3.0) * step
}

/// Width of the range a score can take, unknown values included.
pub(crate) fn score_span(scores: &[f64]) -> f64 {
    let (min, max) = scores
        .iter()
        .chain(std::iter::once(&UNKNOWN_SCORE))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| (lo.min(s), hi.max(s)));
    max - min
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Policy {
    /// Score given to a category matched by a conjunctive code rule.
    pub code_match_score: f64,
    pub price_bands: PriceBands,
    pub freshness: FreshnessWindows,
    pub weights: ScoreWeights,
    /// Multiplier change per importance point away from the midpoint (3).
    pub importance_step: f64,
    pub interpretation: InterpretationBands,
    /// Descending by `min_score`; the first step reached wins.
    pub point_steps: Vec<PointStep>,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            code_match_score: 0.7,
            price_bands: PriceBands::default(),
            freshness: FreshnessWindows::default(),
            weights: ScoreWeights::default(),
            importance_step: 0.05,
            interpretation: InterpretationBands::default(),
            point_steps: vec![
                PointStep { min_score: 12, points: 30 },
                PointStep { min_score: 8, points: 20 },
                PointStep { min_score: 4, points: 10 },
                PointStep { min_score: 1, points: 5 },
            ],
        }
    }
}

/// Upper bounds (exclusive) of the three cheapest price bands, in KRW.
/// Anything at or above `high` falls in the fourth band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBands {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Default for PriceBands {
    fn default() -> Self {
        PriceBands {
            low: 100_000.0,
            mid: 500_000.0,
            high: 1_500_000.0,
        }
    }
}

/// Age limits, in days, for the two freshest bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FreshnessWindows {
    pub recent_days: i64,
    pub current_days: i64,
}

impl Default for FreshnessWindows {
    fn default() -> Self {
        FreshnessWindows {
            recent_days: 30,
            current_days: 120,
        }
    }
}

/// Weights of the final score. Availability and freshness can only reorder
/// devices whose match scores are close; a keyword match always stays ahead
/// of a code match (checked when the rule set is validated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreWeights {
    pub match_score: f64,
    pub availability: f64,
    pub freshness: f64,
}

impl ScoreWeights {
    /// Largest change availability and freshness together can make to a
    /// final score.
    pub fn secondary_swing(&self) -> f64 {
        self.availability * score_span(&PRICE_BAND_SCORES)
            + self.freshness * score_span(&FRESHNESS_SCORES)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            match_score: 0.75,
            availability: 0.15,
            freshness: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointStep {
    pub min_score: i32,
    pub points: u32,
}
