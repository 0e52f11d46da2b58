//! Integration tests for the onboarding flow: sequencer, manager, submission
//! collaborator, and the REST surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use horeca_match::error::SubmissionError;
use horeca_match::onboarding::{
    AdvanceOutcome, FlowManager, OnboardingRouteState, applicant_flow, onboarding_routes,
};
use horeca_match::session::{Role, SessionContext};
use horeca_match::submit::Submitter;

/// Stub submitter that records drafts and can fail the first N calls.
struct StubSubmitter {
    drafts: Mutex<Vec<Value>>,
    failures_left: AtomicUsize,
}

impl StubSubmitter {
    fn new() -> Self {
        Self {
            drafts: Mutex::new(Vec::new()),
            failures_left: AtomicUsize::new(0),
        }
    }

    fn failing(times: usize) -> Self {
        Self {
            drafts: Mutex::new(Vec::new()),
            failures_left: AtomicUsize::new(times),
        }
    }

    async fn submitted_count(&self) -> usize {
        self.drafts.lock().await.len()
    }
}

#[async_trait]
impl Submitter for StubSubmitter {
    async fn submit(
        &self,
        _session: &SessionContext,
        _flow: &str,
        draft: &Value,
    ) -> Result<(), SubmissionError> {
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SubmissionError::Network("connection reset".to_string()));
        }
        self.drafts.lock().await.push(draft.clone());
        Ok(())
    }
}

fn manager_with(submitter: Arc<StubSubmitter>) -> FlowManager {
    FlowManager::new(
        SessionContext::new("anna", Role::Applicant),
        applicant_flow().unwrap(),
        submitter,
    )
}

async fn fill_step(manager: &FlowManager, ordinal: u32) {
    let fields: Vec<(&str, Value)> = match ordinal {
        1 => vec![
            ("full_name", json!("Anna Petrova")),
            ("phone", json!("+7 (921) 555-01-02")),
            ("city", json!("Kazan")),
            ("age", json!(27)),
        ],
        2 => vec![
            ("experience_years", json!(4)),
            ("current_position", json!("cook")),
            ("desired_position", json!("sous_chef")),
            ("education", json!("culinary_school")),
            ("rank", json!("middle")),
        ],
        3 => vec![
            ("cuisines", json!(["italian", "georgian"])),
            ("skills", json!(["haccp"])),
        ],
        4 => vec![
            ("venue_formats", json!(["restaurant", "cafe"])),
            ("salary_from", json!(60000)),
            ("salary_to", json!(90000)),
        ],
        5 => vec![
            ("goals", json!(["lead_a_kitchen"])),
            (
                "about",
                json!("I want to grow from line cook to sous chef within two years."),
            ),
            ("self_rating", json!(4)),
        ],
        other => panic!("no fixture for step {other}"),
    };
    for (name, value) in fields {
        manager.update_field(name, value).await;
    }
}

#[tokio::test]
async fn full_flow_submits_exactly_once() {
    let submitter = Arc::new(StubSubmitter::new());
    let manager = manager_with(Arc::clone(&submitter));

    for ordinal in 1..=4 {
        fill_step(&manager, ordinal).await;
        assert_eq!(
            manager.advance().await,
            AdvanceOutcome::Advanced {
                ordinal: ordinal + 1
            }
        );
    }

    // Final step missing `about` — rejected, keyed by the field.
    manager.update_field("goals", json!(["lead_a_kitchen"])).await;
    manager.update_field("self_rating", json!(4)).await;
    match manager.advance().await {
        AdvanceOutcome::Rejected { field_errors } => {
            assert!(field_errors.contains_key("about"));
            assert_eq!(field_errors.len(), 1);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(manager.progress().await.ordinal, 5);

    // A short bio still fails the 50-character floor.
    manager.update_field("about", json!("too short")).await;
    match manager.advance().await {
        AdvanceOutcome::Rejected { field_errors } => {
            assert_eq!(
                field_errors.get("about").map(String::as_str),
                Some("must be at least 50 characters")
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    // Sixty characters clears it and the flow completes.
    manager
        .update_field(
            "about",
            json!("I want to grow from line cook to sous chef within two years."),
        )
        .await;
    assert_eq!(manager.advance().await, AdvanceOutcome::Submitted);
    assert_eq!(submitter.submitted_count().await, 1);

    let status = manager.status().await;
    assert!(status.submitted);
    assert!(status.progress.complete);
    assert!(status.completed_at.is_some());

    // Repeated advances after completion never resubmit.
    assert_eq!(manager.advance().await, AdvanceOutcome::Submitted);
    assert_eq!(submitter.submitted_count().await, 1);

    // The submitter received the full draft.
    let drafts = submitter.drafts.lock().await;
    assert_eq!(drafts[0]["full_name"], json!("Anna Petrova"));
    assert_eq!(drafts[0]["self_rating"], json!(4));
}

#[tokio::test]
async fn submission_failure_returns_to_last_step_and_keeps_draft() {
    let submitter = Arc::new(StubSubmitter::failing(1));
    let manager = manager_with(Arc::clone(&submitter));

    for ordinal in 1..=5 {
        fill_step(&manager, ordinal).await;
        manager.advance().await;
    }

    // The first submit attempt failed; the user is back on step 5 with a
    // flow-level error and the draft untouched.
    let status = manager.status().await;
    assert!(!status.submitted);
    assert_eq!(status.progress.ordinal, 5);
    assert_eq!(
        status.flow_error.as_deref(),
        Some("Network failure: connection reset")
    );
    assert_eq!(
        manager.draft().await["full_name"],
        json!("Anna Petrova")
    );

    // Retrying re-validates only the final step and submits.
    assert_eq!(manager.advance().await, AdvanceOutcome::Submitted);
    assert_eq!(submitter.submitted_count().await, 1);
    assert!(manager.status().await.flow_error.is_none());
}

#[tokio::test]
async fn navigation_contract() {
    let submitter = Arc::new(StubSubmitter::new());
    let manager = manager_with(submitter);

    // Jumping ahead of the first unvalidated step is locked.
    assert!(manager.jump_to(2).await.is_err());

    fill_step(&manager, 1).await;
    manager.advance().await;
    fill_step(&manager, 2).await;
    manager.advance().await;

    // Back twice, floor at 1, values intact.
    manager.go_back().await;
    let progress = manager.go_back().await;
    assert_eq!(progress.ordinal, 1);
    let progress = manager.go_back().await;
    assert_eq!(progress.ordinal, 1);
    assert_eq!(manager.draft().await["rank"], json!("middle"));

    // Both passed steps and the next unvisited one are reachable.
    assert!(manager.jump_to(3).await.is_ok());
    assert!(manager.jump_to(4).await.is_err());
}

// ── REST surface ────────────────────────────────────────────────────────

fn test_router() -> axum::Router {
    let manager = Arc::new(manager_with(Arc::new(StubSubmitter::new())));
    onboarding_routes(OnboardingRouteState { manager })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn rest_status_and_field_update() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/onboarding/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let status = body_json(response).await;
    assert_eq!(status["flow"], json!("applicant"));
    assert_eq!(status["progress"]["ordinal"], json!(1));
    assert_eq!(status["progress"]["total"], json!(5));
    assert_eq!(status["submitted"], json!(false));

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/onboarding/field",
            json!({"name": "full_name", "value": "Anna Petrova"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/onboarding/draft")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let draft = body_json(response).await;
    assert_eq!(draft["full_name"], json!("Anna Petrova"));
}

#[tokio::test]
async fn rest_next_reports_field_errors_with_200() {
    let app = test_router();

    let response = app
        .oneshot(post_json("/api/onboarding/next", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let outcome = body_json(response).await;
    assert_eq!(outcome["outcome"], json!("rejected"));
    assert_eq!(outcome["field_errors"]["phone"], json!("is required"));
}

#[tokio::test]
async fn rest_locked_jump_is_conflict() {
    let app = test_router();

    let response = app
        .oneshot(post_json("/api/onboarding/jump", json!({"ordinal": 4})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("step 4 is locked"));
}
