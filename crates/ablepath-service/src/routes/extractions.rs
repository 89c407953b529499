use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use ablepath_core::extraction::parse_extraction;
use ablepath_core::models::code::CodeSet;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ParseRequest {
    raw: String,
}

#[derive(Serialize)]
pub struct ParseResponse {
    code_set: CodeSet,
    summary: Option<String>,
    rejected: Vec<String>,
}

pub async fn parse(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(request) = payload?;
    let parsed = parse_extraction(&request.raw).into_result()?;

    if !parsed.rejected.is_empty() {
        tracing::warn!(
            rejected = parsed.rejected.len(),
            "extraction contained unrecognised entries"
        );
    }

    Ok(Json(ParseResponse {
        code_set: parsed.code_set,
        summary: parsed.summary,
        rejected: parsed.rejected,
    }))
}
