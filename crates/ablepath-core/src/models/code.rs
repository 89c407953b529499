use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The three families of condition codes. A code's family is fixed by its
/// first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CodeCategory {
    /// `b` codes: physiological and mental functions.
    BodyFunction,
    /// `d` codes: activities and participation.
    Activity,
    /// `e` codes: environmental factors.
    Environment,
}

impl CodeCategory {
    /// Every category, in the order used to flatten a [`CodeSet`].
    pub const ALL: [CodeCategory; 3] = [
        CodeCategory::BodyFunction,
        CodeCategory::Activity,
        CodeCategory::Environment,
    ];

    /// Infer the category from a code's prefix letter. Case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim_start().chars().next()?.to_ascii_lowercase() {
            'b' => Some(CodeCategory::BodyFunction),
            'd' => Some(CodeCategory::Activity),
            'e' => Some(CodeCategory::Environment),
            _ => None,
        }
    }

    pub fn prefix(self) -> char {
        match self {
            CodeCategory::BodyFunction => 'b',
            CodeCategory::Activity => 'd',
            CodeCategory::Environment => 'e',
        }
    }
}

/// Canonical form of a code string: trimmed and lowercased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionCode {
    pub code: String,
    pub description: String,
    pub category: CodeCategory,
}

/// Condition codes grouped by category.
///
/// Each category keeps insertion order and never holds the same code twice.
/// The flattened view is always body functions, then activities, then
/// environment, so it cannot drift out of sync with the buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CodeSetRepr", try_from = "CodeSetRepr")]
pub struct CodeSet {
    body_functions: Vec<String>,
    activities: Vec<String>,
    environment: Vec<String>,
}

impl CodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a flat list, placing each code by its prefix.
    pub fn from_codes<I, S>(codes: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for code in codes {
            set.insert(code.as_ref())?;
        }
        Ok(set)
    }

    /// Insert a code into the category its prefix implies.
    ///
    /// Returns `Ok(true)` if the set changed and `Ok(false)` if the code was
    /// already present.
    pub fn insert(&mut self, code: &str) -> Result<bool, CoreError> {
        let category =
            CodeCategory::from_code(code).ok_or_else(|| CoreError::InvalidCode(code.to_string()))?;
        Ok(self.insert_in(category, code))
    }

    /// Insert a code into an explicit category. Returns whether the set changed.
    pub fn insert_in(&mut self, category: CodeCategory, code: &str) -> bool {
        let code = normalize_code(code);
        if code.is_empty() {
            return false;
        }
        let bucket = self.bucket_mut(category);
        if bucket.contains(&code) {
            return false;
        }
        bucket.push(code);
        true
    }

    /// Remove a code from every category. Returns whether anything was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let code = normalize_code(code);
        let mut removed = false;
        for category in CodeCategory::ALL {
            let bucket = self.bucket_mut(category);
            let before = bucket.len();
            bucket.retain(|c| *c != code);
            removed |= bucket.len() != before;
        }
        removed
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.iter().any(|c| c == code)
    }

    pub fn codes(&self, category: CodeCategory) -> &[String] {
        match category {
            CodeCategory::BodyFunction => &self.body_functions,
            CodeCategory::Activity => &self.activities,
            CodeCategory::Environment => &self.environment,
        }
    }

    fn bucket_mut(&mut self, category: CodeCategory) -> &mut Vec<String> {
        match category {
            CodeCategory::BodyFunction => &mut self.body_functions,
            CodeCategory::Activity => &mut self.activities,
            CodeCategory::Environment => &mut self.environment,
        }
    }

    /// All codes in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.body_functions
            .iter()
            .chain(&self.activities)
            .chain(&self.environment)
            .map(String::as_str)
    }

    pub fn normalized_codes(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.body_functions.len() + self.activities.len() + self.environment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wire form of a [`CodeSet`]. `normalized_codes` is written out for
/// consumers and ignored on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, rename = "CodeSet")]
pub struct CodeSetRepr {
    #[serde(default, alias = "b")]
    pub body_functions: Vec<String>,
    #[serde(default, alias = "d")]
    pub activities: Vec<String>,
    #[serde(default, alias = "e")]
    pub environment: Vec<String>,
    #[serde(default)]
    pub normalized_codes: Vec<String>,
}

impl From<CodeSet> for CodeSetRepr {
    fn from(set: CodeSet) -> Self {
        let normalized_codes = set.normalized_codes();
        CodeSetRepr {
            body_functions: set.body_functions,
            activities: set.activities,
            environment: set.environment,
            normalized_codes,
        }
    }
}

impl TryFrom<CodeSetRepr> for CodeSet {
    type Error = CoreError;

    fn try_from(repr: CodeSetRepr) -> Result<Self, Self::Error> {
        let mut set = CodeSet::new();
        for (category, codes) in [
            (CodeCategory::BodyFunction, &repr.body_functions),
            (CodeCategory::Activity, &repr.activities),
            (CodeCategory::Environment, &repr.environment),
        ] {
            for code in codes {
                match CodeCategory::from_code(code) {
                    Some(actual) if actual == category => {
                        set.insert_in(category, code);
                    }
                    _ => return Err(CoreError::InvalidCode(code.clone())),
                }
            }
        }
        Ok(set)
    }
}
