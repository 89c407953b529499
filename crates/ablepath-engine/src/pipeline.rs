use ablepath_core::models::code::CodeSet;
use ablepath_core::models::device::CandidateDevice;
use ablepath_core::models::rating::Rating;
use ablepath_core::models::recommendation::Recommendation;
use ablepath_rules::RuleSet;
use jiff::Timestamp;
use tracing::info;

use crate::mapping::match_categories;
use crate::ranking::{Candidate, rank};
use crate::validator::enforce;

#[derive(Debug, Clone)]
pub struct RecommendationRequest<'a> {
    pub text: &'a str,
    /// Codes from the upstream extraction, if any were produced.
    pub prior: Option<CodeSet>,
    pub candidates: Vec<CandidateDevice>,
    pub importance: Option<Rating>,
    pub now: Timestamp,
}

/// Run consistency enforcement, category mapping and ranking in sequence.
///
/// A device is recommended through the first category match that shares
/// its category id; devices in unmatched categories are left out.
pub fn recommend(rules: &RuleSet, request: RecommendationRequest<'_>) -> Recommendation {
    let enforcement = enforce(
        rules,
        request.text,
        Some(request.prior.unwrap_or_default()),
    );
    let code_set = enforcement.code_set.unwrap_or_default();

    if enforcement.changed {
        info!(
            applied_rules = ?enforcement.applied_rule_ids,
            "consistency rules adjusted extracted codes"
        );
    }

    let text = Some(request.text).filter(|t| !t.trim().is_empty());
    let categories = match_categories(rules, text, &code_set);

    let candidates: Vec<Candidate> = request
        .candidates
        .into_iter()
        .filter_map(|device| {
            let category_match = categories
                .iter()
                .find(|m| m.category_id == device.category_id)?
                .clone();
            Some(Candidate {
                device,
                category_match,
            })
        })
        .collect();

    let results = rank(&rules.policy, candidates, request.importance, request.now);

    info!(
        codes = code_set.len(),
        categories = categories.len(),
        results = results.len(),
        "recommendation ranked"
    );

    Recommendation {
        code_set,
        applied_rule_ids: enforcement.applied_rule_ids,
        categories,
        results,
    }
}
