use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use jiff::Timestamp;
use serde::Deserialize;

use ablepath_core::extraction::parse_extraction;
use ablepath_core::models::code::CodeSet;
use ablepath_core::models::device::CandidateDevice;
use ablepath_core::models::rating::Rating;
use ablepath_core::models::recommendation::Recommendation;
use ablepath_engine::pipeline::{self, RecommendationRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendBody {
    #[serde(default)]
    text: String,
    /// Codes the caller already holds.
    codes: Option<CodeSet>,
    /// Unparsed upstream model output, parsed here when `codes` is absent.
    raw_extraction: Option<String>,
    #[serde(default)]
    candidates: Vec<CandidateDevice>,
    importance: Option<i64>,
}

pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendBody>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Json(body) = payload?;

    let prior = match (body.codes, body.raw_extraction) {
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "provide either codes or raw_extraction, not both".to_string(),
            ));
        }
        (Some(codes), None) => Some(codes),
        (None, Some(raw)) => Some(parse_extraction(&raw).into_result()?.code_set),
        (None, None) => None,
    };
    let importance = body
        .importance
        .map(|value| Rating::required("importance", Some(value)))
        .transpose()?;

    let candidate_count = body.candidates.len();
    let recommendation = pipeline::recommend(
        &state.rules,
        RecommendationRequest {
            text: &body.text,
            prior,
            candidates: body.candidates,
            importance,
            now: Timestamp::now(),
        },
    );

    tracing::debug!(
        candidates = candidate_count,
        results = recommendation.results.len(),
        "recommendation served"
    );

    Ok(Json(recommendation))
}
