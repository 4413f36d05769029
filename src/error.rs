//! Failure Taxonomy
//!
//! Every way a search request can fail, ordered roughly by where in the
//! pipeline the failure occurs. Validation failures are client-caused and map
//! to HTTP 400; everything else is infrastructure- or worker-caused and maps
//! to HTTP 500. The mapping itself lives in `gateway::response`.

use thiserror::Error;

/// A classified failure of one search invocation.
///
/// Constructed by the validator, the invoker, or the classifier; consumed by
/// the response emitter. Raw internal detail (io error text, stack traces) is
/// deliberately not part of any `Display` output that reaches a client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The incoming parameters were missing, empty, or malformed. The message
    /// names the offending field(s). No worker process is ever spawned.
    #[error("{0}")]
    Validation(String),

    /// The worker executable could not be started at all (missing binary,
    /// permission denied). Fatal for this request, never retried.
    #[error("failed to start worker process")]
    ProcessSpawn(#[source] std::io::Error),

    /// The worker ran past the configured deadline and was killed.
    #[error("worker timed out")]
    Timeout,

    /// One of the worker's output streams exceeded the configured ceiling;
    /// the worker was killed and the captured bytes are incomplete.
    #[error("output exceeded limit")]
    BufferOverflow,

    /// The worker exited nonzero (or was killed) without producing a
    /// parseable result document. `details` carries the diagnostic-stream
    /// text captured from the worker.
    #[error("worker process failed")]
    ProcessExecution { details: String },

    /// The worker claimed success (exit 0) but its result stream did not
    /// contain a valid contract document.
    #[error("invalid worker output")]
    MalformedOutput,
}

impl SearchError {
    /// Whether this failure was caused by the client (4xx) rather than the
    /// gateway or the worker (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::Validation(_))
    }
}
