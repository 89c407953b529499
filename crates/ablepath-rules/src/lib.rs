//! ablepath-rules
//!
//! Static rule tables and scoring policy. Pure data: the code registry,
//! consistency rules, category mapping rules, the sentiment lexicon, and the
//! tunable thresholds. Loaded once at startup into an immutable [`RuleSet`]
//! that is handed to every engine call.

pub mod consistency;
pub mod error;
pub mod lexicon;
pub mod mapping;
pub mod policy;
pub mod registry;
pub mod tables;
mod validate;

use std::path::Path;

use ablepath_core::models::code::normalize_code;
use serde::{Deserialize, Serialize};
use tracing::info;

use consistency::ConsistencyRule;
use error::RuleError;
use lexicon::SentimentLexicon;
use mapping::{CodeMappingRule, DeviceCategory, KeywordMappingRule};
use policy::Policy;
use registry::CodeRegistry;

/// Every table the engine consults, validated as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    pub registry: CodeRegistry,
    pub consistency_rules: Vec<ConsistencyRule>,
    pub categories: Vec<DeviceCategory>,
    pub code_rules: Vec<CodeMappingRule>,
    pub keyword_rules: Vec<KeywordMappingRule>,
    pub sentiment: SentimentLexicon,
    pub policy: Policy,
}

/// On-disk shape. Any section left out falls back to the built-in table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    registry: Option<CodeRegistry>,
    consistency_rules: Option<Vec<ConsistencyRule>>,
    categories: Option<Vec<DeviceCategory>>,
    code_rules: Option<Vec<CodeMappingRule>>,
    keyword_rules: Option<Vec<KeywordMappingRule>>,
    sentiment: Option<SentimentLexicon>,
    policy: Option<Policy>,
}

impl RuleSet {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        let mut rules = RuleSet {
            registry: CodeRegistry::new(tables::codes::builtin()),
            consistency_rules: tables::consistency::builtin(),
            categories: tables::categories::builtin_categories(),
            code_rules: tables::categories::builtin_code_rules(),
            keyword_rules: tables::categories::builtin_keyword_rules(),
            sentiment: tables::sentiment::builtin(),
            policy: Policy::default(),
        };
        rules.normalize();
        rules
    }

    /// Parse and validate a rule document.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let file: RuleFile = serde_json::from_str(json)?;
        let builtin = RuleSet::builtin();
        let mut rules = RuleSet {
            registry: file.registry.unwrap_or(builtin.registry),
            consistency_rules: file.consistency_rules.unwrap_or(builtin.consistency_rules),
            categories: file.categories.unwrap_or(builtin.categories),
            code_rules: file.code_rules.unwrap_or(builtin.code_rules),
            keyword_rules: file.keyword_rules.unwrap_or(builtin.keyword_rules),
            sentiment: file.sentiment.unwrap_or(builtin.sentiment),
            policy: file.policy.unwrap_or(builtin.policy),
        };
        rules.normalize();
        rules.validate()?;
        Ok(rules)
    }

    /// Read a rule document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rules = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            codes = rules.registry.len(),
            consistency_rules = rules.consistency_rules.len(),
            code_rules = rules.code_rules.len(),
            keyword_rules = rules.keyword_rules.len(),
            "rule tables loaded"
        );
        Ok(rules)
    }

    /// Check cross-table consistency. Any failure is a configuration error.
    pub fn validate(&self) -> Result<(), RuleError> {
        validate::validate(self)
    }

    pub fn category(&self, id: &str) -> Option<&DeviceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Keywords match against lowercased text and codes are stored
    /// lowercase, so the tables are brought into the same form once here.
    fn normalize(&mut self) {
        fn lower_all(items: &mut [String]) {
            for item in items {
                *item = item.to_lowercase();
            }
        }
        fn codes_all(items: &mut [String]) {
            for item in items {
                *item = normalize_code(item);
            }
        }

        for rule in &mut self.consistency_rules {
            lower_all(&mut rule.trigger_keywords);
            codes_all(&mut rule.forbidden_codes);
            for codes in rule.required_codes.values_mut() {
                codes_all(codes);
            }
        }
        for rule in &mut self.code_rules {
            codes_all(&mut rule.required_codes);
        }
        for rule in &mut self.keyword_rules {
            lower_all(&mut rule.keywords);
            codes_all(&mut rule.trigger_codes);
        }
        lower_all(&mut self.sentiment.positive);
        lower_all(&mut self.sentiment.negative);
    }
}
