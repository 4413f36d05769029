//! HTTP Gateway Module
//!
//! The inbound surface of the service: Axum handlers, request validation, and
//! the outcome-to-response mapping.
//!
//! ## Overview
//! This module bridges raw HTTP parameters and the worker pipeline. Incoming
//! parameters are validated into an immutable `SearchRequest` before any
//! process is spawned; every classified outcome is mapped to exactly one
//! HTTP status and JSON body. Only the structured-data media type is ever
//! emitted, never HTML.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`validator`**: Parameter presence, positivity, and charset checks.
//! - **`response`**: Pure mapping from classification to status and body.
//! - **`types`**: Request/response DTOs for API communication.

pub mod handlers;
pub mod response;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;
