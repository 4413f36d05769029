//! Gateway Configuration
//!
//! Static configuration for one gateway instance: where to listen, which
//! worker executable to run, and the resource limits every invocation is
//! held to. Parsed once at startup from command-line flags; immutable after.

use anyhow::bail;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Ceiling on bytes captured per worker stream (result and diagnostic each).
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1024 * 5000;

/// Wall-clock deadline for one worker invocation.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Number of worker processes allowed to run at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Immutable runtime configuration for the gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Path (or bare name resolved via PATH) of the worker executable.
    pub worker_executable: PathBuf,
    /// Fixed leading argv entries, e.g. a script path when the executable is
    /// an interpreter. Search parameters are appended after these.
    pub worker_args_prefix: Vec<String>,
    /// Per-stream output ceiling in bytes.
    pub max_output_bytes: usize,
    /// Deadline after which a running worker is killed.
    pub deadline: Duration,
    /// Size of the bounded worker slot pool.
    pub max_concurrency: usize,
    /// Job title substituted for requests arriving on the legacy endpoint,
    /// which never carried one.
    pub legacy_job_title: String,
    /// Result count substituted for legacy requests.
    pub legacy_num_jobs: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            bind_addr: "0.0.0.0:3000".parse().unwrap(),
            worker_executable: PathBuf::from("python3"),
            worker_args_prefix: Vec::new(),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            deadline: DEFAULT_DEADLINE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            legacy_job_title: "clinics".to_string(),
            legacy_num_jobs: 10,
        }
    }
}

impl GatewayConfig {
    /// Builds a configuration from raw command-line arguments (excluding the
    /// program name).
    ///
    /// Recognized flags:
    /// `--bind <addr:port>`, `--worker <path>` (required),
    /// `--worker-arg <arg>` (repeatable, in order), `--deadline-secs <n>`,
    /// `--max-output-bytes <n>`, `--max-concurrency <n>`.
    pub fn from_args(args: &[String]) -> anyhow::Result<GatewayConfig> {
        let mut config = GatewayConfig::default();
        let mut worker: Option<PathBuf> = None;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let Some(value) = args.get(i + 1) else {
                bail!("{} requires a value", flag);
            };
            match flag {
                "--bind" => {
                    config.bind_addr = value.parse()?;
                }
                "--worker" => {
                    worker = Some(PathBuf::from(value));
                }
                "--worker-arg" => {
                    config.worker_args_prefix.push(value.clone());
                }
                "--deadline-secs" => {
                    config.deadline = Duration::from_secs(value.parse()?);
                }
                "--max-output-bytes" => {
                    config.max_output_bytes = value.parse()?;
                }
                "--max-concurrency" => {
                    let n: usize = value.parse()?;
                    if n == 0 {
                        bail!("--max-concurrency must be at least 1");
                    }
                    config.max_concurrency = n;
                }
                other => {
                    bail!("unrecognized flag: {}", other);
                }
            }
            i += 2;
        }

        match worker {
            Some(path) => config.worker_executable = path,
            None => bail!("--worker is required"),
        }

        Ok(config)
    }
}
