use axum::Json;
use axum::extract::State;

use ablepath_rules::mapping::DeviceCategory;

use crate::state::AppState;

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<DeviceCategory>> {
    Json(state.rules.categories.clone())
}
