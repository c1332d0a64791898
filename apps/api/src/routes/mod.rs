pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::answers::handlers as answers;
use crate::requirements::handlers as requirements;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Requirements API
        .route("/api/v1/requirements/scan", post(requirements::handle_scan))
        .route(
            "/api/v1/requirements/detect",
            post(requirements::handle_detect),
        )
        // Questions & Answers API
        .route("/api/v1/questions/classify", post(answers::handle_classify))
        .route("/api/v1/answers/match", post(answers::handle_match))
        .route("/api/v1/answers/bank/add", post(answers::handle_add_answer))
        .route(
            "/api/v1/answers/bank/usage",
            post(answers::handle_record_usage),
        )
        .route(
            "/api/v1/answers/bank/default",
            post(answers::handle_default_bank),
        )
        .with_state(state)
}
