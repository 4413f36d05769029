use super::response;
use super::types::{ApiBody, HealthResponse, LegacyCommandRequest, SearchParams, SearchRequest};
use super::validator;
use crate::classify::engine::classify;
use crate::config::GatewayConfig;
use crate::worker::invoker::ProcessInvoker;
use crate::worker::types::WorkerInvocation;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

/// `GET /search?jobTitle=&location=&numJobs=`
pub async fn handle_search(
    Extension(config): Extension<Arc<GatewayConfig>>,
    Extension(invoker): Extension<Arc<ProcessInvoker>>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<ApiBody>) {
    let request = match validator::validate(&params) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!("Rejected search request: {}", err);
            return response::emit(Err(err));
        }
    };

    run_search(&config, &invoker, request).await
}

/// `POST /execute_command`, the legacy endpoint kept for historic clients.
/// The body's suburb is mapped onto a regular search request; from there the
/// pipeline is identical to `/search`.
pub async fn handle_execute_command(
    Extension(config): Extension<Arc<GatewayConfig>>,
    Extension(invoker): Extension<Arc<ProcessInvoker>>,
    Json(body): Json<LegacyCommandRequest>,
) -> (StatusCode, Json<ApiBody>) {
    let request = match validator::validate_legacy(&body, &config) {
        Ok(request) => request,
        Err(err) => {
            tracing::info!("Rejected legacy command request: {}", err);
            return response::emit(Err(err));
        }
    };

    run_search(&config, &invoker, request).await
}

/// `GET /health`
pub async fn handle_health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

/// Runs one validated request through invoke -> classify -> emit.
async fn run_search(
    config: &GatewayConfig,
    invoker: &ProcessInvoker,
    request: SearchRequest,
) -> (StatusCode, Json<ApiBody>) {
    let request_id = Uuid::new_v4();
    tracing::info!(
        "[{}] Search request - title: {}, location: {}, count: {}",
        request_id,
        request.job_title,
        request.location,
        request.num_jobs
    );

    let invocation = WorkerInvocation::from_request(&request, config);
    let outcome = match invoker.invoke(invocation).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("[{}] Worker invocation failed: {}", request_id, err);
            return response::emit(Err(err));
        }
    };

    // The diagnostic stream is logged for operators, never parsed and never
    // returned to the caller as structured data.
    if !outcome.diagnostic_bytes.is_empty() {
        tracing::debug!(
            "[{}] Worker diagnostics:\n{}",
            request_id,
            String::from_utf8_lossy(&outcome.diagnostic_bytes)
        );
    }
    tracing::info!(
        "[{}] Worker finished - exit: {:?}, result bytes: {}, timed out: {}, truncated: {}",
        request_id,
        outcome.exit_code,
        outcome.result_bytes.len(),
        outcome.timed_out,
        outcome.truncated
    );

    let classified = classify(&outcome);
    if let Err(err) = &classified {
        tracing::error!("[{}] Worker outcome classified as failure: {}", request_id, err);
    }

    response::emit(classified)
}
