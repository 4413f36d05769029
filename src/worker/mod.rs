//! Worker Process Module
//!
//! Owns everything between "validated request" and "captured outcome":
//! building the argument vector, spawning the external worker, draining its
//! two output streams, and enforcing the resource limits.
//!
//! ## Responsibilities
//! - **Invocation**: spawning the worker with discrete argv entries; user
//!   input is never interpolated into a shell command line.
//! - **Demultiplexing**: draining the result stream (stdout) and the
//!   diagnostic stream (stderr) concurrently, each capped at the configured
//!   output ceiling.
//! - **Limits**: killing the worker on deadline expiry or ceiling overflow,
//!   and recording both conditions on the outcome instead of raising.
//! - **Bounding**: a fixed-size slot pool so concurrent requests cannot spawn
//!   worker processes without limit.
//!
//! ## Submodules
//! - **`invoker`**: Spawn, race against the deadline, assemble the outcome.
//! - **`capture`**: Per-stream bounded drain.
//! - **`pool`**: Bounded worker slots with scoped acquisition.
//! - **`types`**: The immutable invocation and outcome values.

pub mod capture;
pub mod invoker;
pub mod pool;
pub mod types;
