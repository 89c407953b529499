//! Strict parsing of the upstream code extraction.
//!
//! The language model that reads the user's description replies with a JSON
//! object listing condition codes per category, sometimes wrapped in a
//! fenced ```json block. Everything downstream works on a [`CodeSet`], so
//! the shape is checked once here and the result is either a parsed set or
//! an explicit [`Extraction::Malformed`].

use serde::Deserialize;

use crate::error::CoreError;
use crate::models::code::{CodeCategory, CodeSet, normalize_code};

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Parsed(ParsedExtraction),
    Malformed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExtraction {
    pub code_set: CodeSet,
    pub summary: Option<String>,
    /// Entries that were not recognisable condition codes.
    pub rejected: Vec<String>,
}

impl Extraction {
    pub fn into_result(self) -> Result<ParsedExtraction, CoreError> {
        match self {
            Extraction::Parsed(parsed) => Ok(parsed),
            Extraction::Malformed { reason } => Err(CoreError::MalformedExtraction(reason)),
        }
    }
}

#[derive(Deserialize)]
struct RawExtraction {
    #[serde(default, alias = "b")]
    body_functions: Option<Vec<serde_json::Value>>,
    #[serde(default, alias = "d")]
    activities: Option<Vec<serde_json::Value>>,
    #[serde(default, alias = "e")]
    environment: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    summary: Option<String>,
}

/// Parse raw model output into a code set.
pub fn parse_extraction(raw: &str) -> Extraction {
    let Some(json_str) = locate_json(raw) else {
        return Extraction::Malformed {
            reason: "no JSON object found in extraction".to_string(),
        };
    };

    let parsed: RawExtraction = match serde_json::from_str(json_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Extraction::Malformed {
                reason: format!("extraction does not match expected shape: {e}"),
            };
        }
    };

    if parsed.body_functions.is_none() && parsed.activities.is_none() && parsed.environment.is_none()
    {
        return Extraction::Malformed {
            reason: "extraction contains no code lists".to_string(),
        };
    }

    let mut code_set = CodeSet::new();
    let mut rejected = Vec::new();

    let lists = [parsed.body_functions, parsed.activities, parsed.environment];
    for value in lists.into_iter().flatten().flatten() {
        let serde_json::Value::String(code) = value else {
            rejected.push(value.to_string());
            continue;
        };
        let code = normalize_code(&code);
        if code.is_empty() {
            continue;
        }
        // Codes listed under the wrong key are filed by their prefix.
        match CodeCategory::from_code(&code) {
            Some(category) if is_code_shaped(&code) => {
                code_set.insert_in(category, &code);
            }
            _ => rejected.push(code),
        }
    }

    Extraction::Parsed(ParsedExtraction {
        code_set,
        summary: parsed.summary.filter(|s| !s.trim().is_empty()),
        rejected,
    })
}

/// A prefix letter followed by at least one digit, digits only.
fn is_code_shaped(code: &str) -> bool {
    let digits = &code[1..];
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn locate_json(raw: &str) -> Option<&str> {
    if let Some(start) = raw.find("```json") {
        let body_start = start + "```json".len();
        let body_end = raw[body_start..].find("```")?;
        return Some(raw[body_start..body_start + body_end].trim());
    }
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
