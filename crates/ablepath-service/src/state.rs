use std::sync::Arc;

use ablepath_rules::RuleSet;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RuleSet>,
}

impl AppState {
    pub fn new(rules: RuleSet) -> Self {
        AppState {
            rules: Arc::new(rules),
        }
    }
}
