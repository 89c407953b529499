use std::collections::BTreeMap;

use ablepath_core::models::code::CodeCategory::{Activity, BodyFunction, Environment};
use ablepath_core::models::code::CodeCategory;

use crate::consistency::ConsistencyRule;

/// Evaluated in this order. Later rules may remove codes that earlier rules
/// added (the wheelchair rule drops walking codes, the "intact" rules drop
/// the codes their sense's support rule injected).
pub fn builtin() -> Vec<ConsistencyRule> {
    vec![
        rule(
            "hearing_support",
            &["보청기", "난청", "청력", "잘 안 들", "hearing aid", "hard of hearing"],
            &[
                (BodyFunction, &["b230"]),
                (Activity, &["d310"]),
                (Environment, &["e125"]),
            ],
            &[],
        ),
        rule(
            "phone_use",
            &["전화", "통화", "phone", "telephone"],
            &[(Activity, &["d360"]), (Environment, &["e125"])],
            &[],
        ),
        rule(
            "vision_support",
            &["시력", "저시력", "돋보기", "잘 안 보", "low vision", "magnifier", "blind"],
            &[
                (BodyFunction, &["b210"]),
                (Activity, &["d110"]),
                (Environment, &["e125"]),
            ],
            &[],
        ),
        rule(
            "reading_support",
            &["글씨", "책을 읽", "신문", "reading", "small print"],
            &[(Activity, &["d166"])],
            &[],
        ),
        rule(
            "walking_aid",
            &["지팡이", "보행기", "목발", "걷기", "걸을 때", "걷는", "cane", "walker", "walking"],
            &[
                (BodyFunction, &["b770"]),
                (Activity, &["d450"]),
                (Environment, &["e120"]),
            ],
            &[],
        ),
        rule(
            "wheelchair_mobility",
            &["휠체어", "wheelchair"],
            &[(Activity, &["d465"]), (Environment, &["e120"])],
            &["d450", "b770"],
        ),
        rule(
            "transfer_support",
            &["이승", "옮겨 앉", "침대에서 일어", "transfer"],
            &[(Activity, &["d420"]), (Environment, &["e115"])],
            &[],
        ),
        rule(
            "toileting_support",
            &["화장실", "변기", "toilet"],
            &[(Activity, &["d530"]), (Environment, &["e115"])],
            &[],
        ),
        rule(
            "bathing_support",
            &["목욕", "샤워", "bath", "shower"],
            &[(Activity, &["d510"]), (Environment, &["e115"])],
            &[],
        ),
        rule(
            "eating_support",
            &["식사", "숟가락", "젓가락", "eating", "spoon"],
            &[(Activity, &["d550"]), (Environment, &["e115"])],
            &[],
        ),
        rule(
            "speech_support",
            &["발음", "말하기", "말을 하", "speech", "speaking"],
            &[
                (BodyFunction, &["b320"]),
                (Activity, &["d330"]),
                (Environment, &["e125"]),
            ],
            &[],
        ),
        rule(
            "hearing_intact",
            &["청력은 괜찮", "잘 들려", "hearing is fine"],
            &[],
            &["b230", "d310", "d115"],
        ),
        rule(
            "vision_intact",
            &["시력은 괜찮", "눈은 괜찮", "잘 보여", "vision is fine"],
            &[],
            &["b210", "d110"],
        ),
    ]
}

fn rule(
    id: &str,
    keywords: &[&str],
    required: &[(CodeCategory, &[&str])],
    forbidden: &[&str],
) -> ConsistencyRule {
    let mut required_codes = BTreeMap::new();
    for (category, codes) in required {
        required_codes.insert(*category, codes.iter().map(|c| c.to_string()).collect());
    }
    ConsistencyRule {
        id: id.to_string(),
        trigger_keywords: keywords.iter().map(|k| k.to_string()).collect(),
        required_codes,
        forbidden_codes: forbidden.iter().map(|c| c.to_string()).collect(),
    }
}
