use super::capture::{drain_capped, StreamCapture};
use super::pool::WorkerPool;
use super::types::{WorkerInvocation, WorkerOutcome};
use crate::error::SearchError;

use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::Notify;

/// Runs worker processes under the gateway's resource limits.
///
/// One invoker is shared by all requests; the only state it carries is the
/// bounded slot pool. Each invocation is otherwise private to its task.
pub struct ProcessInvoker {
    pool: WorkerPool,
}

impl ProcessInvoker {
    pub fn new(max_concurrency: usize) -> Arc<Self> {
        Arc::new(ProcessInvoker {
            pool: WorkerPool::new(max_concurrency),
        })
    }

    /// Runs the worker once and returns what it produced.
    ///
    /// Timeout and ceiling overflow are recorded on the returned
    /// `WorkerOutcome`, not raised; only a failure to start the process at
    /// all is an `Err`. The child is spawned with `kill_on_drop`, so if the
    /// calling task is cancelled (client disconnect) the process is reaped
    /// rather than orphaned.
    pub async fn invoke(&self, invocation: WorkerInvocation) -> Result<WorkerOutcome, SearchError> {
        let _slot = self.pool.acquire().await;

        let mut child = Command::new(&invocation.executable)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(SearchError::ProcessSpawn)?;

        tracing::debug!(
            "Spawned worker {} with {} argument(s)",
            invocation.executable.display(),
            invocation.args.len()
        );

        // Drain both streams concurrently; either one hitting the ceiling
        // wakes the overflow notify so the child can be killed promptly.
        let overflow = Arc::new(Notify::new());
        let result_drain = tokio::spawn(drain_capped(
            child.stdout.take(),
            invocation.max_output_bytes,
            overflow.clone(),
        ));
        let diagnostic_drain = tokio::spawn(drain_capped(
            child.stderr.take(),
            invocation.max_output_bytes,
            overflow.clone(),
        ));

        let mut timed_out = false;
        let mut killed = false;

        // Scoped so the wait future releases its borrow of the child before
        // any kill below.
        let exit_code = {
            let wait = tokio::time::timeout(invocation.deadline, child.wait());
            tokio::pin!(wait);

            tokio::select! {
                res = &mut wait => match res {
                    Ok(Ok(status)) => status.code(),
                    Ok(Err(err)) => return Err(SearchError::ProcessSpawn(err)),
                    Err(_) => {
                        tracing::warn!(
                            "Worker exceeded {:?} deadline, killing",
                            invocation.deadline
                        );
                        timed_out = true;
                        killed = true;
                        None
                    }
                },
                _ = overflow.notified() => {
                    tracing::warn!(
                        "Worker output exceeded {} byte ceiling, killing",
                        invocation.max_output_bytes
                    );
                    killed = true;
                    None
                }
            }
        };

        if killed {
            // kill() also reaps the child, closing both pipes so the drain
            // tasks terminate.
            if let Err(err) = child.kill().await {
                tracing::error!("Failed to kill worker process: {}", err);
            }
        }

        let result = join_drain(result_drain).await;
        let diagnostic = join_drain(diagnostic_drain).await;

        Ok(WorkerOutcome {
            truncated: result.truncated || diagnostic.truncated,
            result_bytes: result.bytes,
            diagnostic_bytes: diagnostic.bytes,
            exit_code,
            timed_out,
        })
    }
}

async fn join_drain(handle: tokio::task::JoinHandle<StreamCapture>) -> StreamCapture {
    match handle.await {
        Ok(capture) => capture,
        Err(err) => {
            tracing::error!("Stream drain task failed: {}", err);
            StreamCapture::default()
        }
    }
}
