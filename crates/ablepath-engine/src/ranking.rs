//! Ordering candidate devices by relevance, price and data freshness.

use ablepath_core::models::device::CandidateDevice;
use ablepath_core::models::rating::Rating;
use ablepath_core::models::recommendation::{CategoryMatch, RankedResult};
use ablepath_rules::policy::{
    FRESHNESS_SCORES, FreshnessWindows, PRICE_BAND_SCORES, Policy, PriceBands,
};
use jiff::Timestamp;

pub use ablepath_rules::policy::{UNKNOWN_SCORE, importance_multiplier};

const SECONDS_PER_DAY: i64 = 86_400;

/// A device joined with the category match that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub device: CandidateDevice,
    pub category_match: CategoryMatch,
}

pub fn availability_score(price: Option<f64>, bands: &PriceBands) -> f64 {
    let Some(price) = price.filter(|p| p.is_finite() && *p >= 0.0) else {
        return UNKNOWN_SCORE;
    };
    if price < bands.low {
        PRICE_BAND_SCORES[0]
    } else if price < bands.mid {
        PRICE_BAND_SCORES[1]
    } else if price < bands.high {
        PRICE_BAND_SCORES[2]
    } else {
        PRICE_BAND_SCORES[3]
    }
}

/// Timestamps in the future count as recent.
pub fn freshness_score(
    last_updated: Option<Timestamp>,
    now: Timestamp,
    windows: &FreshnessWindows,
) -> f64 {
    let Some(last_updated) = last_updated else {
        return UNKNOWN_SCORE;
    };
    let age_secs = now.duration_since(last_updated).as_secs();
    if age_secs <= windows.recent_days * SECONDS_PER_DAY {
        FRESHNESS_SCORES[0]
    } else if age_secs <= windows.current_days * SECONDS_PER_DAY {
        FRESHNESS_SCORES[1]
    } else {
        FRESHNESS_SCORES[2]
    }
}

/// Score and order candidates, best first.
///
/// The sort is stable, so candidates with equal final scores keep their
/// input order. An empty input yields an empty list.
pub fn rank(
    policy: &Policy,
    candidates: Vec<Candidate>,
    importance: Option<Rating>,
    now: Timestamp,
) -> Vec<RankedResult> {
    let multiplier = importance
        .map(|i| importance_multiplier(i, policy.importance_step))
        .unwrap_or(1.0);
    let weights = policy.weights;

    let mut results: Vec<RankedResult> = candidates
        .into_iter()
        .map(|Candidate { device, category_match }| {
            let match_score = (category_match.score * multiplier).clamp(0.0, 1.0);
            let availability_score = availability_score(device.price, &policy.price_bands);
            let freshness_score =
                freshness_score(device.last_updated, now, &policy.freshness);
            let final_score = weights.match_score * match_score
                + weights.availability * availability_score
                + weights.freshness * freshness_score;

            RankedResult {
                device,
                category_label: category_match.label,
                match_score,
                availability_score,
                freshness_score,
                final_score,
                match_reason: category_match.reason,
                matched_codes: category_match.matched_codes,
            }
        })
        .collect();

    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    results
}
