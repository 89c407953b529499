//! Consistency enforcement over an upstream code extraction.

use ablepath_core::models::code::CodeSet;
use ablepath_rules::RuleSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Enforcement {
    pub code_set: Option<CodeSet>,
    pub changed: bool,
    /// Ids of rules that actually added or removed a code, in rule order.
    pub applied_rule_ids: Vec<String>,
}

/// Apply every consistency rule whose trigger keyword occurs in
/// `input_text`, once each and in declaration order. A later rule's
/// forbidden codes win over an earlier rule's required codes.
pub fn enforce(rules: &RuleSet, input_text: &str, code_set: Option<CodeSet>) -> Enforcement {
    let Some(mut code_set) = code_set else {
        return Enforcement {
            code_set: None,
            changed: false,
            applied_rule_ids: Vec::new(),
        };
    };

    let text = input_text.to_lowercase();
    let mut applied_rule_ids = Vec::new();

    for rule in &rules.consistency_rules {
        if !rule.is_triggered_by(&text) {
            continue;
        }

        let mut mutated = false;
        for (category, codes) in &rule.required_codes {
            for code in codes {
                mutated |= code_set.insert_in(*category, code);
            }
        }
        for code in &rule.forbidden_codes {
            mutated |= code_set.remove(code);
        }

        if mutated {
            debug!(rule_id = %rule.id, "consistency rule applied");
            applied_rule_ids.push(rule.id.clone());
        }
    }

    Enforcement {
        changed: !applied_rule_ids.is_empty(),
        code_set: Some(code_set),
        applied_rule_ids,
    }
}
