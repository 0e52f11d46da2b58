//! REST endpoints for the onboarding wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::manager::FlowManager;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<FlowManager>,
}

/// GET /api/onboarding/status
///
/// Full flow snapshot: progress, submission state, any flow-level error.
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

/// GET /api/onboarding/progress
async fn get_progress(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.progress().await)
}

/// GET /api/onboarding/draft
///
/// The accumulated draft, for pre-filling fields on revisit.
async fn get_draft(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.draft().await)
}

#[derive(Debug, Deserialize)]
struct FieldUpdate {
    name: String,
    value: Value,
}

/// POST /api/onboarding/field
///
/// Merge one field value into the draft. Validation waits for `next`.
async fn post_field(
    State(state): State<OnboardingRouteState>,
    Json(update): Json<FieldUpdate>,
) -> impl IntoResponse {
    state.manager.update_field(&update.name, update.value).await;
    Json(state.manager.progress().await)
}

/// POST /api/onboarding/next
///
/// Validate the current step and advance. Always 200 — a rejected step is a
/// normal outcome, carried in the body.
async fn post_next(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.advance().await)
}

/// POST /api/onboarding/back
async fn post_back(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.go_back().await)
}

#[derive(Debug, Deserialize)]
struct JumpRequest {
    ordinal: u32,
}

/// POST /api/onboarding/jump
///
/// Jump to a reachable step; a locked or out-of-range step is 409.
async fn post_jump(
    State(state): State<OnboardingRouteState>,
    Json(request): Json<JumpRequest>,
) -> impl IntoResponse {
    match state.manager.jump_to(request.ordinal).await {
        Ok(progress) => Json(progress).into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/progress", get(get_progress))
        .route("/api/onboarding/draft", get(get_draft))
        .route("/api/onboarding/field", post(post_field))
        .route("/api/onboarding/next", post(post_next))
        .route("/api/onboarding/back", post(post_back))
        .route("/api/onboarding/jump", post(post_jump))
        .with_state(state)
}
