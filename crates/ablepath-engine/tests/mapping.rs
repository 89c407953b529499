use std::collections::HashMap;

use ablepath_core::models::code::CodeSet;
use ablepath_core::models::recommendation::MatchSource;
use ablepath_engine::mapping::match_categories;
use ablepath_engine::validator::enforce;
use ablepath_rules::RuleSet;
use proptest::prelude::*;

fn codes(list: &[&str]) -> CodeSet {
    CodeSet::from_codes(list).unwrap()
}

#[test]
fn hearing_scenario_surfaces_hearing_category() {
    let rules = RuleSet::builtin();
    let text = "보청기 때문에 전화 통화가 어려워요";
    let set = enforce(&rules, text, Some(CodeSet::new())).code_set.unwrap();

    let matches = match_categories(&rules, Some(text), &set);
    let ids: Vec<_> = matches.iter().map(|m| m.category_id.as_str()).collect();
    assert_eq!(ids, vec!["22-06", "22-24"]);

    let hearing = &matches[0];
    assert_eq!(hearing.source, MatchSource::Keyword);
    assert_eq!(hearing.score, 0.95);
    assert!(hearing.reason.contains("보청기"));
    // The code rule for the same category only adds to the explanation.
    let hearing_codes: Vec<_> = hearing.matched_codes.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(hearing_codes, vec!["b230"]);
}

#[test]
fn code_rules_require_every_code() {
    let rules = RuleSet::builtin();
    let only_walking = match_categories(&rules, None, &codes(&["d450"]));
    let ids: Vec<_> = only_walking.iter().map(|m| m.category_id.as_str()).collect();
    assert_eq!(ids, vec!["12-03"]);

    let with_mobility_products = match_categories(&rules, None, &codes(&["d450", "e120"]));
    let ids: Vec<_> = with_mobility_products
        .iter()
        .map(|m| m.category_id.as_str())
        .collect();
    assert_eq!(ids, vec!["12-06", "12-03"]);
    assert!(with_mobility_products.iter().all(|m| m.score == 0.7));
    assert!(
        with_mobility_products
            .iter()
            .all(|m| m.source == MatchSource::Code)
    );
}

#[test]
fn code_order_in_set_does_not_matter() {
    let rules = RuleSet::builtin();
    let a = match_categories(&rules, None, &codes(&["e120", "d450"]));
    let b = match_categories(&rules, None, &codes(&["d450", "e120"]));
    assert_eq!(a, b);
}

#[test]
fn keyword_matches_precede_code_matches_without_sorting() {
    let rules = RuleSet::builtin();
    let matches = match_categories(&rules, Some("목욕할 때 미끄러워요"), &codes(&["d450"]));
    let ids: Vec<_> = matches.iter().map(|m| m.category_id.as_str()).collect();
    assert_eq!(ids, vec!["09-33", "12-03"]);
    assert_eq!(matches[0].source, MatchSource::Keyword);
    assert_eq!(matches[1].source, MatchSource::Code);
}

#[test]
fn trigger_code_fires_keyword_rule_without_text() {
    let rules = RuleSet::builtin();
    let matches = match_categories(&rules, None, &codes(&["d360"]));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].category_id, "22-24");
    assert_eq!(matches[0].source, MatchSource::Keyword);
    assert_eq!(matches[0].score, 0.9);
    assert!(matches[0].reason.contains("d360"));
}

#[test]
fn absent_text_disables_keywords_only() {
    let rules = RuleSet::builtin();
    let matches = match_categories(&rules, None, &codes(&["d510"]));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source, MatchSource::Code);
}

#[test]
fn nothing_matching_yields_empty_list() {
    let rules = RuleSet::builtin();
    assert!(match_categories(&rules, Some("오늘 날씨가 좋네요"), &CodeSet::new()).is_empty());
}

#[test]
fn categories_are_never_emitted_twice() {
    let rules = RuleSet::builtin();
    let matches = match_categories(
        &rules,
        Some("hearing aid and telephone, 전화 and 보청기"),
        &codes(&["b230", "d360", "d330", "b320"]),
    );
    let mut ids: Vec<_> = matches.iter().map(|m| m.category_id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn explicit_mention_outranks_every_code_match_to_the_same_category() {
    let rules = RuleSet::builtin();
    let mut code_scores: HashMap<String, f64> = HashMap::new();
    for rule in &rules.code_rules {
        let set = CodeSet::from_codes(&rule.required_codes).unwrap();
        for m in match_categories(&rules, None, &set) {
            let entry = code_scores.entry(m.category_id).or_insert(0.0);
            *entry = entry.max(m.score);
        }
    }

    for rule in &rules.keyword_rules {
        for keyword in &rule.keywords {
            let matches = match_categories(&rules, Some(keyword), &CodeSet::new());
            let hit = matches
                .iter()
                .find(|m| m.category_id == rule.category_id)
                .unwrap();
            if let Some(code_score) = code_scores.get(&rule.category_id) {
                assert!(hit.score >= *code_score, "{keyword} under {}", rule.category_id);
            }
        }
    }
}

proptest! {
    #[test]
    fn keyword_score_never_below_code_score(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let rules = RuleSet::builtin();
        let pool: Vec<&str> = rules
            .code_rules
            .iter()
            .flat_map(|r| r.required_codes.iter().map(String::as_str))
            .collect();
        let set = CodeSet::from_codes(picks.iter().map(|i| *i.get(&pool))).unwrap();

        for by_code in match_categories(&rules, None, &set) {
            let Some(rule) = rules
                .keyword_rules
                .iter()
                .find(|r| r.category_id == by_code.category_id)
            else {
                continue;
            };
            let Some(keyword) = rule.keywords.first() else {
                continue;
            };
            let by_keyword = match_categories(&rules, Some(keyword), &CodeSet::new());
            let hit = by_keyword
                .iter()
                .find(|m| m.category_id == by_code.category_id)
                .unwrap();
            prop_assert!(hit.score >= by_code.score);
        }
    }
}
