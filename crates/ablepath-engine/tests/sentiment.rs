use ablepath_core::models::effectiveness::Sentiment;
use ablepath_engine::sentiment::classify;
use ablepath_rules::RuleSet;
use proptest::prelude::*;

#[test]
fn positive_wins_when_both_kinds_appear() {
    let rules = RuleSet::builtin();
    assert_eq!(
        classify(&rules.sentiment, "많이 불편했지만 그래도 편해졌어요"),
        Sentiment::Positive
    );
}

#[test]
fn negative_feedback() {
    let rules = RuleSet::builtin();
    assert_eq!(
        classify(&rules.sentiment, "사용하기 너무 어려워요"),
        Sentiment::Negative
    );
    assert_eq!(
        classify(&rules.sentiment, "Honestly USELESS for stairs"),
        Sentiment::Negative
    );
}

#[test]
fn positive_feedback_is_case_insensitive() {
    let rules = RuleSet::builtin();
    assert_eq!(classify(&rules.sentiment, "Very HELPFUL"), Sentiment::Positive);
}

#[test]
fn neutral_without_keywords() {
    let rules = RuleSet::builtin();
    assert_eq!(classify(&rules.sentiment, "그냥 그래요"), Sentiment::Neutral);
    assert_eq!(classify(&rules.sentiment, ""), Sentiment::Neutral);
}

proptest! {
    #[test]
    fn classification_is_deterministic(text in ".{0,40}") {
        let rules = RuleSet::builtin();
        prop_assert_eq!(classify(&rules.sentiment, &text), classify(&rules.sentiment, &text));
    }
}
