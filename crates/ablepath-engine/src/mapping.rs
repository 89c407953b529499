//! Condition codes and free text to device-standard categories.

use std::collections::HashMap;

use ablepath_core::models::code::CodeSet;
use ablepath_core::models::recommendation::{CategoryMatch, MatchSource, MatchedCode};
use ablepath_rules::RuleSet;

/// Ordered collection of matches keyed by category id. The first match for a
/// category fixes its score, label and reason; later matches for the same
/// category only contribute their codes to the explanation.
#[derive(Default)]
struct MatchAccumulator {
    matches: Vec<CategoryMatch>,
    by_category: HashMap<String, usize>,
}

impl MatchAccumulator {
    fn offer(&mut self, candidate: CategoryMatch) {
        match self.by_category.get(&candidate.category_id) {
            Some(&i) => {
                let existing = &mut self.matches[i].matched_codes;
                for code in candidate.matched_codes {
                    if !existing.iter().any(|c| c.code == code.code) {
                        existing.push(code);
                    }
                }
            }
            None => {
                self.by_category
                    .insert(candidate.category_id.clone(), self.matches.len());
                self.matches.push(candidate);
            }
        }
    }

    fn into_matches(self) -> Vec<CategoryMatch> {
        self.matches
    }
}

/// Select categories for the given text and codes.
///
/// Keyword rule matches come first, then code rule matches, each group in
/// rule order. No score sorting happens here. Without text only trigger
/// codes and code rules can fire.
pub fn match_categories(
    rules: &RuleSet,
    input_text: Option<&str>,
    code_set: &CodeSet,
) -> Vec<CategoryMatch> {
    let text = input_text.map(str::to_lowercase);
    let mut acc = MatchAccumulator::default();

    for rule in &rules.keyword_rules {
        let present_triggers: Vec<&str> = rule
            .trigger_codes
            .iter()
            .map(String::as_str)
            .filter(|code| code_set.contains(code))
            .collect();
        let keyword = text.as_deref().and_then(|t| rule.matching_keyword(t));

        let Some(trigger) = keyword.or_else(|| present_triggers.first().copied()) else {
            continue;
        };

        acc.offer(CategoryMatch {
            category_id: rule.category_id.clone(),
            label: rule.label.clone(),
            description: rule.description.clone(),
            score: rule.score_boost,
            matched_codes: rules.registry.describe(present_triggers.iter().copied()),
            reason: rule.render_reason(trigger),
            source: MatchSource::Keyword,
        });
    }

    let default_score = rules.policy.code_match_score;
    for rule in &rules.code_rules {
        if !rule.required_codes.iter().all(|code| code_set.contains(code)) {
            continue;
        }

        let matched_codes = rules
            .registry
            .describe(rule.required_codes.iter().map(String::as_str));
        let description = rules
            .category(&rule.category_id)
            .map(|c| c.description.clone())
            .unwrap_or_default();

        acc.offer(CategoryMatch {
            category_id: rule.category_id.clone(),
            label: rule.label.clone(),
            description,
            score: rule.effective_score(default_score),
            reason: code_reason(&rule.label, &matched_codes),
            matched_codes,
            source: MatchSource::Code,
        });
    }

    acc.into_matches()
}

fn code_reason(label: &str, codes: &[MatchedCode]) -> String {
    let listed: Vec<String> = codes
        .iter()
        .map(|c| format!("{} ({})", c.code, c.description))
        .collect();
    format!("{label} addresses {}.", listed.join(" and "))
}
