use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::rating::Rating;
use crate::error::CoreError;

/// Ratings collected after a recommended device has been in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EffectivenessInput {
    pub importance: Rating,
    pub pre_difficulty: Rating,
    pub post_difficulty: Rating,
}

impl EffectivenessInput {
    /// Validate raw request values. Missing or out-of-range fields are
    /// rejected with a message naming the field; nothing is clamped.
    pub fn from_raw(
        importance: Option<i64>,
        pre_difficulty: Option<i64>,
        post_difficulty: Option<i64>,
    ) -> Result<Self, CoreError> {
        Ok(EffectivenessInput {
            importance: Rating::required("importance", importance)?,
            pre_difficulty: Rating::required("pre_difficulty", pre_difficulty)?,
            post_difficulty: Rating::required("post_difficulty", post_difficulty)?,
        })
    }
}

/// Qualitative band of an effectiveness score. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    Worsened,
    #[serde(rename = "none")]
    NoChange,
    Minor,
    Moderate,
    Good,
    Excellent,
}

impl Interpretation {
    /// The single banding function for effectiveness scores. Every consumer
    /// goes through here so labels cannot disagree between views.
    pub fn from_score(score: i32, bands: &InterpretationBands) -> Self {
        if score < 0 {
            Interpretation::Worsened
        } else if score >= bands.excellent {
            Interpretation::Excellent
        } else if score >= bands.good {
            Interpretation::Good
        } else if score >= bands.moderate {
            Interpretation::Moderate
        } else if score >= bands.minor {
            Interpretation::Minor
        } else {
            Interpretation::NoChange
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interpretation::Excellent => "Excellent",
            Interpretation::Good => "Good",
            Interpretation::Moderate => "Moderate",
            Interpretation::Minor => "Minor",
            Interpretation::NoChange => "None",
            Interpretation::Worsened => "Worsened",
        }
    }
}

/// Lower bounds (inclusive) of the positive interpretation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretationBands {
    pub excellent: i32,
    pub good: i32,
    pub moderate: i32,
    pub minor: i32,
}

impl Default for InterpretationBands {
    fn default() -> Self {
        InterpretationBands {
            excellent: 12,
            good: 8,
            moderate: 4,
            minor: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EffectivenessResult {
    /// `(pre - post) * importance`. Unclamped; spans -20..=20 for valid input.
    pub effectiveness_score: i32,
    pub improvement: i32,
    pub improvement_percentage: f64,
    pub interpretation: Interpretation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Everything derived from one completed rating form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub result: EffectivenessResult,
    pub points: u32,
    pub sentiment: Option<Sentiment>,
}

/// An evaluation ready to hand to the caller's store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub id: Uuid,
    pub recommendation_id: Option<String>,
    pub device_id: Option<String>,
    pub input: EffectivenessInput,
    pub evaluation: Evaluation,
    pub feedback: Option<String>,
    pub created_at: jiff::Timestamp,
}
