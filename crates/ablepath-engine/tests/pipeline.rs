use ablepath_core::models::code::CodeSet;
use ablepath_core::models::device::CandidateDevice;
use ablepath_core::models::rating::Rating;
use ablepath_core::models::recommendation::MatchSource;
use ablepath_engine::pipeline::{RecommendationRequest, recommend};
use ablepath_rules::RuleSet;
use jiff::Timestamp;

fn now() -> Timestamp {
    "2026-10-01T00:00:00Z".parse().unwrap()
}

fn device(id: &str, category_id: &str, price: f64) -> CandidateDevice {
    CandidateDevice {
        id: id.to_string(),
        category_id: category_id.to_string(),
        price: Some(price),
        last_updated: Some("2026-09-20T00:00:00Z".parse().unwrap()),
    }
}

fn request(text: &str, prior: Option<CodeSet>) -> RecommendationRequest<'_> {
    RecommendationRequest {
        text,
        prior,
        candidates: vec![
            device("amplified-phone", "22-24", 300_000.0),
            device("manual-wheelchair", "12-22", 300_000.0),
            device("hearing-aid", "22-06", 300_000.0),
        ],
        importance: None,
        now: now(),
    }
}

#[test]
fn hearing_complaint_ranks_hearing_devices_only() {
    let rules = RuleSet::builtin();
    let rec = recommend(&rules, request("보청기 때문에 전화 통화가 어려워요", None));

    assert_eq!(rec.applied_rule_ids, vec!["hearing_support", "phone_use"]);
    assert_eq!(rec.code_set.normalized_codes(), vec!["b230", "d310", "d360", "e125"]);

    let ids: Vec<&str> = rec.categories.iter().map(|c| c.category_id.as_str()).collect();
    assert_eq!(ids, vec!["22-06", "22-24"]);
    assert!(rec.categories.iter().all(|c| c.source == MatchSource::Keyword));

    let ranked: Vec<&str> = rec.results.iter().map(|r| r.device.id.as_str()).collect();
    assert_eq!(ranked, vec!["hearing-aid", "amplified-phone"]);
    assert_eq!(rec.results[0].match_score, 0.95);
}

#[test]
fn merged_explanations_keep_code_rule_evidence() {
    let rules = RuleSet::builtin();
    let rec = recommend(&rules, request("보청기 때문에 전화 통화가 어려워요", None));

    let phone = &rec.categories[1];
    let codes: Vec<&str> = phone.matched_codes.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["d360", "b230"]);
    assert!(phone.reason.contains("전화"));
}

#[test]
fn prior_codes_without_text_use_code_rules() {
    let rules = RuleSet::builtin();
    let prior = CodeSet::from_codes(["d465"]).unwrap();
    let mut req = request("  ", Some(prior));
    req.importance = Some(Rating::new(5).unwrap());
    let rec = recommend(&rules, req);

    assert!(rec.applied_rule_ids.is_empty());
    assert_eq!(rec.categories.len(), 1);
    assert_eq!(rec.categories[0].source, MatchSource::Code);
    assert_eq!(rec.results.len(), 1);
    assert_eq!(rec.results[0].device.id, "manual-wheelchair");
    assert!((rec.results[0].match_score - 0.77).abs() < 1e-9);
}

#[test]
fn named_category_outranks_cheaper_code_match_at_low_importance() {
    let rules = RuleSet::builtin();
    let prior = CodeSet::from_codes(["d450"]).unwrap();
    let rec = recommend(
        &rules,
        RecommendationRequest {
            text: "목욕이 힘들어요",
            prior: Some(prior),
            candidates: vec![
                CandidateDevice {
                    id: "walking-cane".to_string(),
                    category_id: "12-03".to_string(),
                    price: Some(10_000.0),
                    last_updated: Some("2026-09-30T00:00:00Z".parse().unwrap()),
                },
                CandidateDevice {
                    id: "shower-chair".to_string(),
                    category_id: "09-33".to_string(),
                    price: Some(2_000_000.0),
                    last_updated: None,
                },
            ],
            importance: Some(Rating::new(1).unwrap()),
            now: now(),
        },
    );

    let ranked: Vec<&str> = rec.results.iter().map(|r| r.device.id.as_str()).collect();
    assert_eq!(ranked, vec!["shower-chair", "walking-cane"]);
    assert!((rec.results[0].match_score - 0.81).abs() < 1e-9);
    assert!((rec.results[1].match_score - 0.63).abs() < 1e-9);
}

#[test]
fn nothing_matched_yields_empty_results() {
    let rules = RuleSet::builtin();
    let rec = recommend(&rules, request("오늘 날씨가 좋네요", None));
    assert!(rec.categories.is_empty());
    assert!(rec.results.is_empty());
}
