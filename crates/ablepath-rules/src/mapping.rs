use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A device-standard category that recommendations can point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeviceCategory {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Fires only when every listed code is present in the code set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeMappingRule {
    pub required_codes: Vec<String>,
    pub category_id: String,
    pub label: String,
    /// Overrides the policy's default code-match score for this rule.
    #[serde(default)]
    pub score: Option<f64>,
}

impl CodeMappingRule {
    pub fn effective_score(&self, default_score: f64) -> f64 {
        self.score.unwrap_or(default_score)
    }
}

/// Fires when the input text mentions the category directly, or when any of
/// its trigger codes is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeywordMappingRule {
    pub category_id: String,
    pub label: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub trigger_codes: Vec<String>,
    pub score_boost: f64,
    /// Supports `{label}` and `{trigger}` placeholders.
    pub reason_template: String,
}

impl KeywordMappingRule {
    /// First keyword found in `text`, which must already be lowercased.
    pub fn matching_keyword(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| text.contains(k))
    }

    pub fn render_reason(&self, trigger: &str) -> String {
        self.reason_template
            .replace("{label}", &self.label)
            .replace("{trigger}", trigger)
    }
}
