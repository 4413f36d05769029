use crate::config::GatewayConfig;
use crate::gateway::types::SearchRequest;
use std::path::PathBuf;
use std::time::Duration;

/// Everything needed to run the worker once. Built from a validated request
/// plus static configuration; never mutated afterwards. A retry would be a
/// new `WorkerInvocation`, not a reuse of this one.
#[derive(Debug, Clone)]
pub struct WorkerInvocation {
    pub executable: PathBuf,
    /// Ordered argv entries. Each search parameter is one discrete entry;
    /// they are never joined into a single command string.
    pub args: Vec<String>,
    pub max_output_bytes: usize,
    pub deadline: Duration,
}

impl WorkerInvocation {
    /// Derives the invocation for one search request: any configured prefix
    /// arguments first, then `<jobTitle> <location> <numJobs>` positionally.
    pub fn from_request(request: &SearchRequest, config: &GatewayConfig) -> Self {
        let mut args = config.worker_args_prefix.clone();
        args.push(request.job_title.clone());
        args.push(request.location.clone());
        args.push(request.num_jobs.to_string());

        WorkerInvocation {
            executable: config.worker_executable.clone(),
            args,
            max_output_bytes: config.max_output_bytes,
            deadline: config.deadline,
        }
    }
}

/// What one worker run produced. Constructed exactly once, when the process
/// exits or is killed; immutable after construction.
#[derive(Debug, Clone)]
pub struct WorkerOutcome {
    /// Bytes captured from the result stream (stdout), up to the ceiling.
    pub result_bytes: Vec<u8>,
    /// Bytes captured from the diagnostic stream (stderr), up to the ceiling.
    pub diagnostic_bytes: Vec<u8>,
    /// Exit code reported by the OS; `None` when the process was killed.
    pub exit_code: Option<i32>,
    /// The process outlived its deadline and was killed.
    pub timed_out: bool,
    /// A stream hit the output ceiling; captured bytes are incomplete.
    pub truncated: bool,
}
