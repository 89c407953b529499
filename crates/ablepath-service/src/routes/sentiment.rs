use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use ablepath_core::models::effectiveness::Sentiment;
use ablepath_engine::sentiment;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SentimentRequest {
    text: String,
}

#[derive(Serialize)]
pub struct SentimentResponse {
    sentiment: Sentiment,
}

pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(SentimentResponse {
        sentiment: sentiment::classify(&state.rules.sentiment, &request.text),
    }))
}
