use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::code::{CodeSet, CodeSetRepr};
use super::device::CandidateDevice;

/// A condition code paired with its registry description, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchedCode {
    pub code: String,
    pub description: String,
}

/// Which kind of mapping rule produced a category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MatchSource {
    /// The input text mentioned the category, or one of its trigger codes was present.
    Keyword,
    /// Every code required by a conjunctive code rule was present.
    Code,
}

/// A device-standard category selected for the current input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryMatch {
    pub category_id: String,
    pub label: String,
    pub description: String,
    pub score: f64,
    pub matched_codes: Vec<MatchedCode>,
    pub reason: String,
    pub source: MatchSource,
}

/// One device in a ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedResult {
    pub device: CandidateDevice,
    pub category_label: String,
    pub match_score: f64,
    pub availability_score: f64,
    pub freshness_score: f64,
    pub final_score: f64,
    pub match_reason: String,
    pub matched_codes: Vec<MatchedCode>,
}

/// Output of the full recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    /// The code set after consistency enforcement.
    #[ts(as = "CodeSetRepr")]
    pub code_set: CodeSet,
    pub applied_rule_ids: Vec<String>,
    pub categories: Vec<CategoryMatch>,
    pub results: Vec<RankedResult>,
}
