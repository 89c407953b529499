use crate::mapping::{CodeMappingRule, DeviceCategory, KeywordMappingRule};

/// Category identifiers follow the ISO 9999 class/subclass numbering.
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("09-12", "Toileting aids", "Raised seats, commode chairs and toilet support rails"),
    ("09-33", "Bathing and showering aids", "Shower chairs, bath boards and long-handled sponges"),
    ("12-03", "Walking aids for one arm", "Canes, quad canes and elbow crutches"),
    ("12-06", "Walking aids for both arms", "Walking frames and rollators"),
    ("12-22", "Manual wheelchairs", "Self-propelled and attendant-propelled wheelchairs"),
    ("12-23", "Powered wheelchairs", "Electrically driven wheelchairs"),
    ("12-31", "Transfer aids", "Transfer boards, turntables and standing aids"),
    ("15-09", "Eating and drinking aids", "Adapted cutlery, plates and cups"),
    ("18-12", "Beds and bed equipment", "Adjustable beds and bed rails"),
    ("22-03", "Aids for seeing", "Magnifiers, reading glasses and video magnifiers"),
    ("22-06", "Aids for hearing", "Hearing aids and personal sound amplifiers"),
    ("22-21", "Face-to-face communication aids", "Communication boards and speech generating devices"),
    ("22-24", "Telephoning aids", "Amplified phones and captioned telephones"),
    ("22-30", "Reading aids", "Page turners, book holders and text-to-speech readers"),
    ("24-18", "Gripping aids", "Grip extenders, reachers and built-up handles"),
];

pub fn builtin_categories() -> Vec<DeviceCategory> {
    CATEGORIES
        .iter()
        .map(|(id, label, description)| DeviceCategory {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Conjunctive code rules, evaluated in order.
pub fn builtin_code_rules() -> Vec<CodeMappingRule> {
    vec![
        code_rule(&["b230"], "22-06", "Aids for hearing"),
        code_rule(&["b230", "d360"], "22-24", "Telephoning aids"),
        code_rule(&["d360"], "22-24", "Telephoning aids"),
        code_rule(&["b210"], "22-03", "Aids for seeing"),
        code_rule(&["b210", "d166"], "22-30", "Reading aids"),
        code_rule(&["d166"], "22-30", "Reading aids"),
        code_rule(&["d450", "e120"], "12-06", "Walking aids for both arms"),
        code_rule(&["d450"], "12-03", "Walking aids for one arm"),
        code_rule(&["d465", "b730"], "12-23", "Powered wheelchairs"),
        code_rule(&["d465"], "12-22", "Manual wheelchairs"),
        code_rule(&["d420"], "12-31", "Transfer aids"),
        code_rule(&["d410"], "18-12", "Beds and bed equipment"),
        code_rule(&["d530"], "09-12", "Toileting aids"),
        code_rule(&["d510"], "09-33", "Bathing and showering aids"),
        code_rule(&["d550"], "15-09", "Eating and drinking aids"),
        code_rule(&["d330"], "22-21", "Face-to-face communication aids"),
        code_rule(&["b320"], "22-21", "Face-to-face communication aids"),
        code_rule(&["d440"], "24-18", "Gripping aids"),
    ]
}

const POINTS_TO: &str = "\"{trigger}\" points directly to {label}.";

/// Keyword rules, evaluated in order ahead of the code rules.
pub fn builtin_keyword_rules() -> Vec<KeywordMappingRule> {
    vec![
        keyword_rule(
            "22-06",
            &["보청기", "난청", "hearing aid", "hard of hearing"],
            &[],
            0.95,
        ),
        keyword_rule(
            "22-24",
            &["전화", "통화", "phone call", "telephone"],
            &["d360"],
            0.9,
        ),
        keyword_rule(
            "22-03",
            &["돋보기", "저시력", "잘 안 보", "low vision", "magnifier"],
            &[],
            0.95,
        ),
        keyword_rule("12-22", &["휠체어", "wheelchair"], &[], 0.95),
        keyword_rule("12-06", &["보행기", "워커", "walker", "rollator"], &[], 0.95),
        keyword_rule("12-03", &["지팡이", "목발", "cane", "crutch"], &[], 0.95),
        keyword_rule("12-31", &["이승", "옮겨 앉", "transfer board"], &[], 0.9),
        keyword_rule("09-12", &["변기", "화장실", "toilet"], &[], 0.9),
        keyword_rule("09-33", &["목욕", "샤워", "bath", "shower"], &[], 0.9),
        keyword_rule("15-09", &["숟가락", "젓가락", "spoon", "cutlery"], &[], 0.9),
    ]
}

fn category(id: &str) -> (&'static str, &'static str) {
    CATEGORIES
        .iter()
        .find(|(cid, _, _)| *cid == id)
        .map(|(_, label, description)| (*label, *description))
        .unwrap_or(("", ""))
}

fn code_rule(codes: &[&str], category_id: &str, label: &str) -> CodeMappingRule {
    CodeMappingRule {
        required_codes: codes.iter().map(|c| c.to_string()).collect(),
        category_id: category_id.to_string(),
        label: label.to_string(),
        score: None,
    }
}

fn keyword_rule(
    category_id: &str,
    keywords: &[&str],
    trigger_codes: &[&str],
    score_boost: f64,
) -> KeywordMappingRule {
    let (label, description) = category(category_id);
    KeywordMappingRule {
        category_id: category_id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        trigger_codes: trigger_codes.iter().map(|c| c.to_string()).collect(),
        score_boost,
        reason_template: POINTS_TO.to_string(),
    }
}
