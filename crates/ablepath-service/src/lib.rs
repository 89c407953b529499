//! ablepath-service
//!
//! HTTP boundary for the recommendation engine. Requests are validated
//! here; everything behind the router works on already-checked values.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Reference data
        .route("/codes", get(routes::codes::list_codes))
        .route("/codes/{code}", get(routes::codes::get_code))
        .route("/categories", get(routes::categories::list_categories))
        // Engine
        .route("/extractions/parse", post(routes::extractions::parse))
        .route("/recommendations", post(routes::recommendations::recommend))
        .route("/evaluations", post(routes::evaluations::evaluate))
        .route("/sentiment", post(routes::sentiment::classify))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state)
}
