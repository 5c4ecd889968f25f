//! HTTP routes.
//!
//! Store calls are synchronous, so every handler moves them onto a blocking
//! thread.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tally_core::{CoreError, CounterAction, CounterRepository};

use crate::error::AppError;
use crate::page;
use crate::theme::Theme;
use crate::view::{ActionOutcome, CounterView, perform};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "tally";

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn CounterRepository>,
    theme: Arc<Theme>,
}

impl AppState {
    /// Creates state backed by `repo` with the default theme.
    pub fn new(repo: Arc<dyn CounterRepository>) -> Self {
        Self {
            repo,
            theme: Arc::new(Theme::default()),
        }
    }

    /// Replaces the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Arc::new(theme);
        self
    }
}

/// Body of `GET /api/counter`.
#[derive(Debug, Serialize)]
pub struct ValueResponse {
    /// Current counter value.
    pub value: i64,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always `"healthy"` while the server is up.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/counter", get(current_value))
        .route("/api/counter/{action}", post(apply_action))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let repo = state.repo.clone();
    let view = tokio::task::spawn_blocking(move || CounterView::load(repo)).await??;
    Ok(Html(page::render(&view, &state.theme)))
}

async fn current_value(State(state): State<AppState>) -> Result<Json<ValueResponse>, AppError> {
    let repo = state.repo.clone();
    let value = tokio::task::spawn_blocking(move || repo.get_current_value()).await??;
    Ok(Json(ValueResponse { value }))
}

async fn apply_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<(StatusCode, Json<ActionOutcome>), AppError> {
    let action: CounterAction = action
        .parse()
        .map_err(|e: CoreError| AppError::InvalidRequest(e.to_string()))?;

    let repo = state.repo.clone();
    let outcome = tokio::task::spawn_blocking(move || perform(repo.as_ref(), action)).await?;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    Ok((status, Json(outcome)))
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
