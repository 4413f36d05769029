use super::types::ApiBody;
use crate::classify::types::ParsedResult;
use crate::error::SearchError;
use axum::http::StatusCode;
use axum::Json;

/// Maps one classified outcome to its HTTP status and JSON body.
///
/// Pure function, no I/O; every terminal path of the pipeline ends here and
/// produces exactly one response. Client-visible messages are the fixed
/// taxonomy strings plus, where available, worker diagnostic text; raw
/// internal error detail is never forwarded verbatim.
pub fn emit(classified: Result<ParsedResult, SearchError>) -> (StatusCode, Json<ApiBody>) {
    match classified {
        Ok(ParsedResult::ClinicList(clinics)) => (StatusCode::OK, Json(ApiBody::Clinics { clinics })),
        Ok(ParsedResult::RawText(data)) => (StatusCode::OK, Json(ApiBody::Raw { data })),
        Ok(ParsedResult::WorkerError(message)) => error_body(StatusCode::INTERNAL_SERVER_ERROR, message, None),
        Err(SearchError::Validation(message)) => error_body(StatusCode::BAD_REQUEST, message, None),
        Err(SearchError::ProcessSpawn(_)) => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to start worker process".to_string(),
            Some("spawn failed".to_string()),
        ),
        Err(SearchError::Timeout) => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "worker timed out".to_string(),
            None,
        ),
        Err(SearchError::BufferOverflow) => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "output exceeded limit".to_string(),
            None,
        ),
        Err(SearchError::ProcessExecution { details }) => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "worker process failed".to_string(),
            Some(details),
        ),
        Err(SearchError::MalformedOutput) => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "invalid worker output".to_string(),
            None,
        ),
    }
}

fn error_body(
    status: StatusCode,
    error: String,
    details: Option<String>,
) -> (StatusCode, Json<ApiBody>) {
    (status, Json(ApiBody::Error { error, details }))
}
