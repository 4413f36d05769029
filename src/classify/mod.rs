//! Result Parsing & Classification Module
//!
//! Interprets the captured output of one worker invocation against the worker
//! contract and reduces it to exactly one outcome kind.
//!
//! ## Overview
//! The worker is expected to write one JSON document to its result stream:
//! `{"error": ...}`, `{"data": ...}`, or `{"clinics": [...]}`. The classifier
//! applies a fixed ordering of checks (timeout, truncation, parseability,
//! worker-reported error, payload shape) so that every outcome is classified
//! the same way regardless of which endpoint produced the request.
//!
//! ## Submodules
//! - **`engine`**: The ordered classification rules.
//! - **`types`**: The contract document model and the tagged result type.

pub mod engine;
pub mod types;
