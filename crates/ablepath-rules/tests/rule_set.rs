use std::io::Write;

use ablepath_core::models::code::CodeCategory;
use ablepath_rules::RuleSet;
use ablepath_rules::error::RuleError;

#[test]
fn builtin_tables_validate() {
    let rules = RuleSet::builtin();
    rules.validate().unwrap();
    assert!(!rules.registry.is_empty());
    assert!(!rules.consistency_rules.is_empty());
}

#[test]
fn registry_lookup_is_case_insensitive() {
    let rules = RuleSet::builtin();
    let entry = rules.registry.lookup("D450").unwrap();
    assert_eq!(entry.code, "d450");
    assert_eq!(entry.description, "Walking");
    assert_eq!(entry.category, CodeCategory::Activity);
    assert!(rules.registry.lookup("d999").is_none());
}

#[test]
fn describe_skips_unknown_codes() {
    let rules = RuleSet::builtin();
    let described = rules.registry.describe(["b230", "x1", "e125"]);
    let codes: Vec<_> = described.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, vec!["b230", "e125"]);
    assert_eq!(described[0].description, "Hearing functions");
}

#[test]
fn registry_lists_by_category() {
    let rules = RuleSet::builtin();
    assert!(
        rules
            .registry
            .by_category(CodeCategory::Environment)
            .all(|c| c.code.starts_with('e'))
    );
}

#[test]
fn empty_document_falls_back_to_builtin() {
    let rules = RuleSet::from_json("{}").unwrap();
    assert_eq!(rules.registry.len(), RuleSet::builtin().registry.len());
}

#[test]
fn policy_section_can_be_partial() {
    let rules = RuleSet::from_json(r#"{"policy": {"code_match_score": 0.5}}"#).unwrap();
    assert_eq!(rules.policy.code_match_score, 0.5);
    assert_eq!(rules.policy.weights.match_score, 0.75);
}

#[test]
fn keywords_and_codes_are_normalized_on_load() {
    let json = r#"{
        "consistency_rules": [{
            "id": "upper",
            "trigger_keywords": ["WHEELCHAIR"],
            "required_codes": {"activity": ["D465"]},
            "forbidden_codes": ["D450"]
        }]
    }"#;
    let rules = RuleSet::from_json(json).unwrap();
    let rule = &rules.consistency_rules[0];
    assert_eq!(rule.trigger_keywords, vec!["wheelchair"]);
    assert_eq!(rule.required_codes[&CodeCategory::Activity], vec!["d465"]);
    assert_eq!(rule.forbidden_codes, vec!["d450"]);
}

fn assert_configuration_error(json: &str) {
    match RuleSet::from_json(json) {
        Err(RuleError::Configuration(_)) => {}
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn empty_registry_is_fatal() {
    assert_configuration_error(r#"{"registry": []}"#);
}

#[test]
fn registry_prefix_must_match_category() {
    assert_configuration_error(
        r#"{"registry": [{"code": "b230", "description": "Hearing", "category": "activity"}]}"#,
    );
}

#[test]
fn keyword_boost_must_outrank_code_rules() {
    let json = r#"{
        "keyword_rules": [{
            "category_id": "22-06",
            "label": "Aids for hearing",
            "description": "Hearing aids",
            "keywords": ["hearing aid"],
            "score_boost": 0.6,
            "reason_template": "{label}"
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn consistency_rule_codes_must_be_registered() {
    let json = r#"{
        "consistency_rules": [{
            "id": "ghost",
            "trigger_keywords": ["ghost"],
            "required_codes": {"activity": ["d999"]}
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn required_code_must_sit_in_its_category() {
    let json = r#"{
        "consistency_rules": [{
            "id": "misfiled",
            "trigger_keywords": ["walk"],
            "required_codes": {"environment": ["d450"]}
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn code_rule_must_point_at_declared_category() {
    let json = r#"{
        "code_rules": [{"required_codes": ["d450"], "category_id": "99-99", "label": "Nowhere"}]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn match_weight_must_dominate() {
    assert_configuration_error(
        r#"{"policy": {"weights": {"match_score": 0.4, "availability": 0.3, "freshness": 0.3}}}"#,
    );
}

#[test]
fn secondary_scores_cannot_overturn_keyword_precedence_at_low_importance() {
    // Margin 0.7 * (0.81 - 0.63) = 0.126 at importance 1, swing 0.13.
    assert_configuration_error(
        r#"{"policy": {"weights": {"match_score": 0.7, "availability": 0.2, "freshness": 0.1}}}"#,
    );
}

#[test]
fn steep_importance_step_erodes_keyword_precedence() {
    assert_configuration_error(r#"{"policy": {"importance_step": 0.25}}"#);
}

#[test]
fn default_weights_keep_keyword_precedence() {
    let rules = RuleSet::builtin();
    let weights = rules.policy.weights;
    let margin = weights.match_score * (0.9 - 0.7) * (1.0 - 2.0 * rules.policy.importance_step);
    assert!(margin > weights.secondary_swing());
}

#[test]
fn blank_consistency_trigger_keyword_is_rejected() {
    let json = r#"{
        "consistency_rules": [{
            "id": "x",
            "trigger_keywords": ["", "wheelchair"],
            "required_codes": {"activity": ["d465"]}
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn whitespace_keyword_rule_keyword_is_rejected() {
    let json = r#"{
        "keyword_rules": [{
            "category_id": "12-22",
            "label": "Manual wheelchairs",
            "description": "Wheelchairs",
            "keywords": ["wheelchair", "  "],
            "score_boost": 0.95,
            "reason_template": "{label}"
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn blank_trigger_code_is_rejected() {
    let json = r#"{
        "keyword_rules": [{
            "category_id": "22-24",
            "label": "Telephoning aids",
            "description": "Phones",
            "keywords": [],
            "trigger_codes": [""],
            "score_boost": 0.9,
            "reason_template": "{label}"
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn keyword_rule_needs_a_label() {
    let json = r#"{
        "keyword_rules": [{
            "category_id": "22-06",
            "label": "",
            "description": "",
            "keywords": ["hearing aid"],
            "score_boost": 0.95,
            "reason_template": "{label}"
        }]
    }"#;
    assert_configuration_error(json);
}

#[test]
fn builtin_keyword_rules_carry_their_category_text() {
    let rules = RuleSet::builtin();
    for rule in &rules.keyword_rules {
        let category = rules.category(&rule.category_id).unwrap();
        assert_eq!(rule.label, category.label, "{}", rule.category_id);
        assert_eq!(rule.description, category.description, "{}", rule.category_id);
    }
}

#[test]
fn price_bands_must_increase() {
    assert_configuration_error(
        r#"{"policy": {"price_bands": {"low": 500000, "mid": 100000, "high": 1500000}}}"#,
    );
}

#[test]
fn interpretation_bands_must_decrease() {
    assert_configuration_error(
        r#"{"policy": {"interpretation": {"excellent": 4, "good": 8, "moderate": 2, "minor": 1}}}"#,
    );
}

#[test]
fn unknown_sections_are_rejected() {
    assert!(matches!(
        RuleSet::from_json(r#"{"rulez": []}"#),
        Err(RuleError::Serialization(_))
    ));
}

#[test]
fn load_reads_rule_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"policy": {{"importance_step": 0.1}}}}"#).unwrap();
    let rules = RuleSet::load(file.path()).unwrap();
    assert_eq!(rules.policy.importance_step, 0.1);
}

#[test]
fn load_reports_missing_file() {
    assert!(matches!(
        RuleSet::load("/nonexistent/ablepath-rules.json"),
        Err(RuleError::Io { .. })
    ));
}
