use std::collections::HashSet;

use ablepath_core::models::code::CodeCategory;
use ablepath_core::models::rating::Rating;

use crate::RuleSet;
use crate::error::RuleError;
use crate::policy::importance_multiplier;

fn fail<T>(message: impl Into<String>) -> Result<T, RuleError> {
    Err(RuleError::Configuration(message.into()))
}

pub(crate) fn validate(rules: &RuleSet) -> Result<(), RuleError> {
    validate_registry(rules)?;
    validate_consistency_rules(rules)?;
    validate_mapping_rules(rules)?;
    validate_sentiment(rules)?;
    validate_policy(rules)?;
    validate_precedence(rules)
}

fn is_blank(item: &str) -> bool {
    item.trim().is_empty()
}

fn validate_registry(rules: &RuleSet) -> Result<(), RuleError> {
    if rules.registry.is_empty() {
        return fail("code registry is empty");
    }
    let mut seen = HashSet::new();
    for entry in rules.registry.all() {
        match CodeCategory::from_code(&entry.code) {
            Some(category) if category == entry.category => {}
            Some(category) => {
                return fail(format!(
                    "registry code {} is listed as {:?} but its prefix implies {:?}",
                    entry.code, entry.category, category
                ));
            }
            None => return fail(format!("registry code {:?} has an unknown prefix", entry.code)),
        }
        if !seen.insert(entry.code.as_str()) {
            return fail(format!("registry code {} is listed twice", entry.code));
        }
    }
    Ok(())
}

fn require_known(rules: &RuleSet, code: &str, context: &str) -> Result<(), RuleError> {
    if rules.registry.contains(code) {
        Ok(())
    } else {
        fail(format!("{context} references unknown code {code}"))
    }
}

fn validate_consistency_rules(rules: &RuleSet) -> Result<(), RuleError> {
    let mut ids = HashSet::new();
    for rule in &rules.consistency_rules {
        let context = format!("consistency rule {:?}", rule.id);
        if rule.id.trim().is_empty() {
            return fail("consistency rule with empty id");
        }
        if !ids.insert(rule.id.as_str()) {
            return fail(format!("{context} is declared twice"));
        }
        if rule.trigger_keywords.is_empty() {
            return fail(format!("{context} has no trigger keywords"));
        }
        // A blank keyword is a substring of every input.
        if rule.trigger_keywords.iter().any(|k| is_blank(k)) {
            return fail(format!("{context} has a blank trigger keyword"));
        }
        for (category, codes) in &rule.required_codes {
            for code in codes {
                require_known(rules, code, &context)?;
                if CodeCategory::from_code(code) != Some(*category) {
                    return fail(format!("{context} requires {code} under {category:?}"));
                }
            }
        }
        for code in &rule.forbidden_codes {
            require_known(rules, code, &context)?;
        }
    }
    Ok(())
}

fn validate_mapping_rules(rules: &RuleSet) -> Result<(), RuleError> {
    if rules.code_rules.is_empty() && rules.keyword_rules.is_empty() {
        return fail("no category mapping rules configured");
    }

    let mut category_ids = HashSet::new();
    for category in &rules.categories {
        if !category_ids.insert(category.id.as_str()) {
            return fail(format!("device category {} is declared twice", category.id));
        }
    }

    let default_score = rules.policy.code_match_score;
    let mut max_code_score: f64 = 0.0;
    for rule in &rules.code_rules {
        let context = format!("code rule for category {}", rule.category_id);
        if !category_ids.contains(rule.category_id.as_str()) {
            return fail(format!("{context} points at an undeclared category"));
        }
        if rule.label.trim().is_empty() {
            return fail(format!("{context} has an empty label"));
        }
        if rule.required_codes.is_empty() {
            return fail(format!("{context} requires no codes"));
        }
        for code in &rule.required_codes {
            require_known(rules, code, &context)?;
        }
        let score = rule.effective_score(default_score);
        if !(0.0..=1.0).contains(&score) {
            return fail(format!("{context} has score {score} outside [0, 1]"));
        }
        max_code_score = max_code_score.max(score);
    }

    for rule in &rules.keyword_rules {
        let context = format!("keyword rule for category {}", rule.category_id);
        if !category_ids.contains(rule.category_id.as_str()) {
            return fail(format!("{context} points at an undeclared category"));
        }
        if rule.label.trim().is_empty() || rule.description.trim().is_empty() {
            return fail(format!("{context} has an empty label or description"));
        }
        if rule.keywords.is_empty() && rule.trigger_codes.is_empty() {
            return fail(format!("{context} has neither keywords nor trigger codes"));
        }
        if rule.keywords.iter().any(|k| is_blank(k)) || rule.trigger_codes.iter().any(|c| is_blank(c)) {
            return fail(format!("{context} has a blank keyword or trigger code"));
        }
        for code in &rule.trigger_codes {
            require_known(rules, code, &context)?;
        }
        // Explicit mentions must outrank anything inferred from codes alone.
        if rule.score_boost <= max_code_score || rule.score_boost > 1.0 {
            return fail(format!(
                "{context} has score boost {} which must be above every code rule score ({max_code_score}) and at most 1",
                rule.score_boost
            ));
        }
    }
    Ok(())
}

fn validate_sentiment(rules: &RuleSet) -> Result<(), RuleError> {
    let lexicon = &rules.sentiment;
    if lexicon.positive.is_empty() || lexicon.negative.is_empty() {
        return fail("sentiment lexicon needs both positive and negative keywords");
    }
    if lexicon
        .positive
        .iter()
        .chain(&lexicon.negative)
        .any(|k| k.trim().is_empty())
    {
        return fail("sentiment lexicon contains an empty keyword");
    }
    Ok(())
}

fn validate_policy(rules: &RuleSet) -> Result<(), RuleError> {
    let policy = &rules.policy;

    let bands = policy.price_bands;
    if !(bands.low > 0.0 && bands.low < bands.mid && bands.mid < bands.high) {
        return fail("price bands must be positive and strictly increasing");
    }

    let windows = policy.freshness;
    if !(windows.recent_days > 0 && windows.recent_days < windows.current_days) {
        return fail("freshness windows must be positive and strictly increasing");
    }

    let weights = policy.weights;
    if weights.match_score < 0.0 || weights.availability < 0.0 || weights.freshness < 0.0 {
        return fail("score weights must be non-negative");
    }
    if weights.match_score <= weights.availability + weights.freshness {
        return fail("match weight must exceed availability and freshness weights combined");
    }

    if !(policy.importance_step > 0.0 && policy.importance_step <= 0.25) {
        return fail("importance step must be in (0, 0.25]");
    }

    let bands = policy.interpretation;
    if !(bands.excellent > bands.good && bands.good > bands.moderate && bands.moderate > bands.minor)
    {
        return fail("interpretation bands must be strictly decreasing");
    }
    if bands.minor < 1 {
        return fail("the lowest positive interpretation band must start at 1 or above");
    }

    for pair in policy.point_steps.windows(2) {
        if pair[0].min_score <= pair[1].min_score || pair[0].points < pair[1].points {
            return fail("point steps must be ordered by descending threshold and points");
        }
    }
    if policy.point_steps.iter().any(|step| step.min_score < 1) {
        return fail("point steps cannot award points for zero or negative effectiveness");
    }
    Ok(())
}

/// Availability and freshness must never lift a code-only match over a
/// keyword match, at any importance rating.
fn validate_precedence(rules: &RuleSet) -> Result<(), RuleError> {
    let policy = &rules.policy;
    let min_boost = rules
        .keyword_rules
        .iter()
        .map(|r| r.score_boost)
        .fold(f64::INFINITY, f64::min);
    let max_code = rules
        .code_rules
        .iter()
        .map(|r| r.effective_score(policy.code_match_score))
        .fold(f64::NEG_INFINITY, f64::max);
    if !min_boost.is_finite() || !max_code.is_finite() {
        return Ok(());
    }

    let swing = policy.weights.secondary_swing();
    for value in Rating::MIN..=Rating::MAX {
        let importance = Rating::new(i64::from(value))
            .map_err(|e| RuleError::Configuration(e.to_string()))?;
        let multiplier = importance_multiplier(importance, policy.importance_step);
        let gap = (min_boost * multiplier).clamp(0.0, 1.0)
            - (max_code * multiplier).clamp(0.0, 1.0);
        let margin = policy.weights.match_score * gap;
        if margin <= swing {
            return fail(format!(
                "at importance {value} a keyword match leads a code match by {margin:.4}, \
                 which availability and freshness ({swing:.4}) can overturn"
            ));
        }
    }
    Ok(())
}
