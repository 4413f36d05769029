//! Worker-Backed Search Gateway Library
//!
//! This library crate defines the core modules of the search gateway. It serves
//! as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The gateway is a request-to-process-to-response pipeline composed of three
//! loosely coupled subsystems plus shared configuration and errors:
//!
//! - **`gateway`**: The HTTP surface. Validates incoming parameters into typed
//!   requests, exposes the search endpoints via Axum handlers, and maps every
//!   classified outcome to a stable HTTP status and JSON body.
//! - **`worker`**: The process invocation layer. Spawns the external worker
//!   with a discrete argument vector (never a shell string), drains its result
//!   and diagnostic streams under an output ceiling, and races it against an
//!   execution deadline inside a bounded slot pool.
//! - **`classify`**: The result interpretation layer. Parses the captured
//!   result stream against the worker contract and classifies each outcome
//!   into exactly one kind (success, malformed, or worker-reported failure).
//! - **`config`**: Static gateway configuration (worker executable, limits,
//!   bind address) parsed from command-line flags.
//! - **`error`**: The failure taxonomy shared by all subsystems.

pub mod classify;
pub mod config;
pub mod error;
pub mod gateway;
pub mod worker;
