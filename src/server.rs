use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::advisor::{run_analysis, AnalysisResult, LoadLimits};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::ProgressSummary;
use crate::recommend::Suggestion;
use crate::transcript::ExtractedTranscript;

#[derive(Clone)]
struct ApiState {
    config: Config,
    catalog: Arc<Catalog>,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

/// Analysis request: the extractor envelope plus optional per-request
/// credit caps overriding the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
struct AnalyzeRequest {
    #[serde(flatten)]
    transcript: ExtractedTranscript,
    full_load_credits: Option<u32>,
    subsidy_credits: Option<u32>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    suggestions: Vec<Suggestion>,
    subsidy_bundle: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
struct ProgressResponse {
    progress: ProgressSummary,
}

pub async fn run_server(config: Config, catalog: Catalog, bind: SocketAddr) -> Result<()> {
    let state = ApiState {
        config,
        catalog: Arc::new(catalog),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/v1/analyze", post(analyze))
        .route("/v1/suggest", post(suggest))
        .route("/v1/progress", post(progress))
        .route("/v1/catalog", get(show_catalog))
        .route("/v1/config", get(show_config))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse { status: "ok" })
}

async fn show_config(State(state): State<ApiState>) -> Json<ApiResponse<Config>> {
    ok(state.config)
}

async fn show_catalog(State(state): State<ApiState>) -> Json<ApiResponse<Catalog>> {
    ok(state.catalog.as_ref().clone())
}

async fn analyze(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<AnalysisResult> {
    let result = analyze_request(&state, request)?;
    Ok(ok(result))
}

async fn suggest(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<SuggestResponse> {
    let result = analyze_request(&state, request)?;
    Ok(ok(SuggestResponse {
        suggestions: result.suggestions,
        subsidy_bundle: result.subsidy_bundle,
    }))
}

async fn progress(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<ProgressResponse> {
    let result = analyze_request(&state, request)?;
    Ok(ok(ProgressResponse {
        progress: result.progress,
    }))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

fn analyze_request(
    state: &ApiState,
    request: AnalyzeRequest,
) -> std::result::Result<AnalysisResult, ApiError> {
    let limits = resolve_limits(&state.config, &request)?;
    let identity = request.transcript.identity();
    Ok(run_analysis(
        &state.catalog,
        &identity,
        &request.transcript.courses,
        limits,
    ))
}

fn resolve_limits(
    config: &Config,
    request: &AnalyzeRequest,
) -> std::result::Result<LoadLimits, ApiError> {
    let limits = LoadLimits {
        full_load_credits: request
            .full_load_credits
            .unwrap_or(config.load.full_load_credits),
        subsidy_credits: request
            .subsidy_credits
            .unwrap_or(config.load.subsidy_credits),
    };
    if limits.subsidy_credits > limits.full_load_credits {
        return Err(ApiError::bad_request(
            "subsidy_credits cannot exceed full_load_credits",
        ));
    }
    Ok(limits)
}
