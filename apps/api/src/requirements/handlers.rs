//! Axum route handlers for the Requirements API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::CandidateRequirementProfile;
use crate::requirements::models::{DetectedRequirement, RequirementGap, RequirementStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub job_text: String,
    #[serde(default)]
    pub profile: CandidateRequirementProfile,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub gaps: Vec<RequirementGap>,
    pub at_risk: usize,
    pub unknown: usize,
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub requirements: Vec<DetectedRequirement>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/requirements/scan
///
/// Returns the screening requirements in the posting that the profile does
/// not clearly satisfy.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    state.config.check_text_len("job_text", &request.job_text)?;

    let gaps = state.scanner.scan(&request.job_text, &request.profile);
    let count = |status| gaps.iter().filter(|g| g.status == status).count();
    let at_risk = count(RequirementStatus::AtRisk);
    let unknown = count(RequirementStatus::Unknown);

    Ok(Json(ScanResponse {
        gaps,
        at_risk,
        unknown,
    }))
}

/// POST /api/v1/requirements/detect
pub async fn handle_detect(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, AppError> {
    state.config.check_text_len("job_text", &request.job_text)?;

    Ok(Json(DetectResponse {
        requirements: state.scanner.detect(&request.job_text),
    }))
}
