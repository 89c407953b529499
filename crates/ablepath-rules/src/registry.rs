use std::collections::HashMap;

use ablepath_core::models::code::{CodeCategory, ConditionCode, normalize_code};
use ablepath_core::models::recommendation::MatchedCode;
use serde::{Deserialize, Serialize};

/// Lookup table of known condition codes and their descriptions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ConditionCode>", into = "Vec<ConditionCode>")]
pub struct CodeRegistry {
    codes: Vec<ConditionCode>,
    index: HashMap<String, usize>,
}

impl CodeRegistry {
    /// Build a registry. Codes are normalized; a repeated code keeps its
    /// first entry in the index (validation reports the duplicate).
    pub fn new(codes: Vec<ConditionCode>) -> Self {
        let codes: Vec<ConditionCode> = codes
            .into_iter()
            .map(|c| ConditionCode {
                code: normalize_code(&c.code),
                ..c
            })
            .collect();
        let mut index = HashMap::with_capacity(codes.len());
        for (i, c) in codes.iter().enumerate() {
            index.entry(c.code.clone()).or_insert(i);
        }
        CodeRegistry { codes, index }
    }

    pub fn lookup(&self, code: &str) -> Option<&ConditionCode> {
        self.index
            .get(&normalize_code(code))
            .map(|&i| &self.codes[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Pair each known code with its description. Unknown codes are skipped.
    pub fn describe<'a, I>(&self, codes: I) -> Vec<MatchedCode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        codes
            .into_iter()
            .filter_map(|code| self.lookup(code))
            .map(|c| MatchedCode {
                code: c.code.clone(),
                description: c.description.clone(),
            })
            .collect()
    }

    pub fn by_category(&self, category: CodeCategory) -> impl Iterator<Item = &ConditionCode> {
        self.codes.iter().filter(move |c| c.category == category)
    }

    pub fn all(&self) -> &[ConditionCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<Vec<ConditionCode>> for CodeRegistry {
    fn from(codes: Vec<ConditionCode>) -> Self {
        CodeRegistry::new(codes)
    }
}

impl From<CodeRegistry> for Vec<ConditionCode> {
    fn from(registry: CodeRegistry) -> Self {
        registry.codes
    }
}
