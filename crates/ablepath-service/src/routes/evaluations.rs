use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use ablepath_core::models::effectiveness::{EffectivenessInput, EvaluationRecord};
use ablepath_engine::effectiveness;

use crate::error::ApiError;
use crate::state::AppState;

/// Ratings arrive as plain integers so that missing and out-of-range values
/// can be reported per field.
#[derive(Deserialize)]
pub struct EvaluationBody {
    importance: Option<i64>,
    pre_difficulty: Option<i64>,
    post_difficulty: Option<i64>,
    feedback: Option<String>,
    recommendation_id: Option<String>,
    device_id: Option<String>,
}

pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationBody>, JsonRejection>,
) -> Result<Json<EvaluationRecord>, ApiError> {
    let Json(body) = payload?;
    let input =
        EffectivenessInput::from_raw(body.importance, body.pre_difficulty, body.post_difficulty)?;

    let evaluation = effectiveness::evaluate(&state.rules, &input, body.feedback.as_deref());

    tracing::info!(
        score = evaluation.result.effectiveness_score,
        interpretation = evaluation.result.interpretation.label(),
        points = evaluation.points,
        "evaluation recorded"
    );

    Ok(Json(EvaluationRecord {
        id: Uuid::new_v4(),
        recommendation_id: body.recommendation_id,
        device_id: body.device_id,
        input,
        evaluation,
        feedback: body.feedback,
        created_at: Timestamp::now(),
    }))
}
