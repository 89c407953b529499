use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use ablepath_core::models::code::{CodeCategory, ConditionCode};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CodeFilter {
    category: Option<CodeCategory>,
}

pub async fn list_codes(
    State(state): State<AppState>,
    Query(filter): Query<CodeFilter>,
) -> Json<Vec<ConditionCode>> {
    let registry = &state.rules.registry;
    let codes = match filter.category {
        Some(category) => registry.by_category(category).cloned().collect(),
        None => registry.all().to_vec(),
    };
    Json(codes)
}

pub async fn get_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ConditionCode>, ApiError> {
    state
        .rules
        .registry
        .lookup(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("condition code not found: {code}")))
}
