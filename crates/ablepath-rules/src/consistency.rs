use std::collections::BTreeMap;

use ablepath_core::models::code::CodeCategory;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A keyword-triggered correction applied to an upstream extraction.
///
/// When any trigger keyword occurs in the lowercased input text, the
/// required codes are added to their categories and every forbidden code is
/// removed from all categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsistencyRule {
    pub id: String,
    pub trigger_keywords: Vec<String>,
    #[serde(default)]
    pub required_codes: BTreeMap<CodeCategory, Vec<String>>,
    #[serde(default)]
    pub forbidden_codes: Vec<String>,
}

impl ConsistencyRule {
    /// `text` must already be lowercased.
    pub fn is_triggered_by(&self, text: &str) -> bool {
        self.trigger_keywords.iter().any(|k| text.contains(k.as_str()))
    }
}
