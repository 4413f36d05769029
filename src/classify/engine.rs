use super::types::{ParsedResult, WorkerDocument};
use crate::error::SearchError;
use crate::worker::types::WorkerOutcome;

/// Classifies one worker outcome. First matching rule wins:
///
/// 1. killed on deadline -> `Timeout`
/// 2. output ceiling hit -> `BufferOverflow` (a truncated result stream is
///    never partially parsed)
/// 3. result stream not a contract document -> `ProcessExecution` when the
///    exit code is nonzero or absent, `MalformedOutput` on exit 0
/// 4. document carries `error` -> `WorkerError`, regardless of exit code
/// 5. otherwise success, tagged `ClinicList` or `RawText` by payload shape
pub fn classify(outcome: &WorkerOutcome) -> Result<ParsedResult, SearchError> {
    if outcome.timed_out {
        return Err(SearchError::Timeout);
    }
    if outcome.truncated {
        return Err(SearchError::BufferOverflow);
    }

    let document: WorkerDocument = match serde_json::from_slice(&outcome.result_bytes) {
        Ok(document) => document,
        Err(err) => {
            tracing::debug!("Worker result stream did not parse: {}", err);
            return Err(unparseable_result(outcome));
        }
    };

    if let Some(message) = document.error {
        return Ok(ParsedResult::WorkerError(message));
    }
    if let Some(clinics) = document.clinics {
        return Ok(ParsedResult::ClinicList(clinics));
    }
    if let Some(text) = document.data {
        return Ok(ParsedResult::RawText(text));
    }

    // Valid JSON object, but none of the contract payload fields.
    Err(unparseable_result(outcome))
}

/// Error kind for a result stream that carried no usable document. Exit code
/// 0 means the worker claimed success, so the output itself is at fault;
/// anything else is a worker execution failure and the diagnostic stream is
/// surfaced as detail.
fn unparseable_result(outcome: &WorkerOutcome) -> SearchError {
    if outcome.exit_code == Some(0) {
        SearchError::MalformedOutput
    } else {
        SearchError::ProcessExecution {
            details: diagnostic_text(outcome),
        }
    }
}

/// Human-readable form of the diagnostic stream for error details.
pub fn diagnostic_text(outcome: &WorkerOutcome) -> String {
    let text = String::from_utf8_lossy(&outcome.diagnostic_bytes);
    let text = text.trim();
    if text.is_empty() {
        "no diagnostic output captured".to_string()
    } else {
        text.to_string()
    }
}
