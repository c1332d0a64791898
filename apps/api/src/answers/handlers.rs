//! Axum route handlers for the Questions and Answers API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::answers::bank::{add_answer_to_bank, generate_default_answer_bank, record_usage};
use crate::answers::classifier::ClassificationMethod;
use crate::answers::matcher::MatchSource;
use crate::errors::AppError;
use crate::models::answer_bank::{AnswerBank, ProfileSummary, QuestionKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub kind: Option<QuestionKind>,
    pub method: Option<ClassificationMethod>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub question: String,
    #[serde(default)]
    pub bank: AnswerBank,
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub answer: Option<String>,
    pub source: Option<MatchSource>,
    pub kind: Option<QuestionKind>,
}

#[derive(Debug, Deserialize)]
pub struct AddAnswerRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub bank: AnswerBank,
}

#[derive(Debug, Deserialize)]
pub struct RecordUsageRequest {
    pub kind: QuestionKind,
    pub bank: AnswerBank,
}

#[derive(Debug, Deserialize)]
pub struct DefaultBankRequest {
    #[serde(default)]
    pub summary: ProfileSummary,
}

#[derive(Debug, Serialize)]
pub struct BankResponse {
    pub bank: AnswerBank,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/questions/classify
///
/// A `null` kind means the question is uncategorized, not that it failed.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    state.config.check_text_len("question", &request.question)?;

    let classification = state.classifier.classify_detailed(&request.question);
    Ok(Json(ClassifyResponse {
        kind: classification.map(|c| c.kind),
        method: classification.map(|c| c.method),
    }))
}

/// POST /api/v1/answers/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    state.config.check_text_len("question", &request.question)?;

    let company = request
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let found = state
        .matcher
        .find_match(&state.classifier, &request.question, &request.bank, company);

    Ok(Json(match found {
        Some(m) => MatchResponse {
            answer: Some(m.answer),
            source: Some(m.source),
            kind: m.kind,
        },
        None => MatchResponse {
            answer: None,
            source: None,
            kind: None,
        },
    }))
}

/// POST /api/v1/answers/bank/add
///
/// Returns the updated bank; the caller is responsible for persisting it.
pub async fn handle_add_answer(
    State(state): State<AppState>,
    Json(request): Json<AddAnswerRequest>,
) -> Result<Json<BankResponse>, AppError> {
    state.config.check_text_len("question", &request.question)?;
    state.config.check_text_len("answer", &request.answer)?;
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let bank = add_answer_to_bank(
        &state.classifier,
        &request.question,
        &request.answer,
        &request.bank,
    );
    Ok(Json(BankResponse { bank }))
}

/// POST /api/v1/answers/bank/usage
pub async fn handle_record_usage(
    Json(request): Json<RecordUsageRequest>,
) -> Result<Json<BankResponse>, AppError> {
    Ok(Json(BankResponse {
        bank: record_usage(&request.bank, request.kind),
    }))
}

/// POST /api/v1/answers/bank/default
pub async fn handle_default_bank(
    State(state): State<AppState>,
    Json(request): Json<DefaultBankRequest>,
) -> Result<Json<BankResponse>, AppError> {
    let bank = generate_default_answer_bank(state.classifier.catalog(), &request.summary);
    Ok(Json(BankResponse { bank }))
}
