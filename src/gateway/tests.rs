//! Gateway Module Tests
//!
//! Validates the request validator, the legacy endpoint mapping, the
//! response emitter table, and the full handler pipeline against a stand-in
//! worker process.

#[cfg(test)]
mod tests {
    use crate::classify::types::{Clinic, ParsedResult};
    use crate::config::GatewayConfig;
    use crate::error::SearchError;
    use crate::gateway::handlers::{handle_execute_command, handle_search};
    use crate::gateway::response::emit;
    use crate::gateway::types::{ApiBody, LegacyCommandRequest, SearchParams};
    use crate::gateway::validator::{validate, validate_legacy};
    use crate::worker::invoker::ProcessInvoker;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn params(job_title: Option<&str>, location: Option<&str>, num_jobs: Option<&str>) -> SearchParams {
        SearchParams {
            job_title: job_title.map(String::from),
            location: location.map(String::from),
            num_jobs: num_jobs.map(String::from),
        }
    }

    fn body_json(body: &ApiBody) -> serde_json::Value {
        serde_json::to_value(body).unwrap()
    }

    // ============================================================
    // VALIDATOR - presence and positivity
    // ============================================================

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = validate(&params(Some("nurse"), Some("Melbourne"), Some("10"))).unwrap();

        assert_eq!(request.job_title, "nurse");
        assert_eq!(request.location, "Melbourne");
        assert_eq!(request.num_jobs, 10);
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let request = validate(&params(Some("  nurse  "), Some(" Geelong "), Some(" 3 "))).unwrap();

        assert_eq!(request.job_title, "nurse");
        assert_eq!(request.location, "Geelong");
        assert_eq!(request.num_jobs, 3);
    }

    #[test]
    fn test_validate_names_missing_field() {
        let err = validate(&params(None, Some("Melbourne"), Some("10"))).unwrap_err();

        assert!(err.to_string().contains("jobTitle"));
    }

    #[test]
    fn test_validate_names_all_missing_fields() {
        let err = validate(&params(None, None, None)).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("jobTitle"));
        assert!(message.contains("location"));
        assert!(message.contains("numJobs"));
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let err = validate(&params(Some("   "), Some("Melbourne"), Some("10"))).unwrap_err();

        assert!(err.to_string().contains("jobTitle"));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let err = validate(&params(Some("nurse"), Some("Melbourne"), Some("0"))).unwrap_err();

        assert!(err.to_string().contains("numJobs"));
    }

    #[test]
    fn test_validate_rejects_negative_count() {
        assert!(validate(&params(Some("nurse"), Some("Melbourne"), Some("-5"))).is_err());
    }

    #[test]
    fn test_validate_rejects_non_numeric_count() {
        assert!(validate(&params(Some("nurse"), Some("Melbourne"), Some("ten"))).is_err());
    }

    // ============================================================
    // VALIDATOR - argument allow-list
    // ============================================================

    #[test]
    fn test_validate_rejects_shell_metacharacters() {
        let err = validate(&params(
            Some("nurse; rm -rf /"),
            Some("Melbourne"),
            Some("10"),
        ))
        .unwrap_err();

        assert!(err.to_string().contains("jobTitle"));
    }

    #[test]
    fn test_validate_rejects_command_substitution() {
        assert!(validate(&params(Some("nurse"), Some("$(reboot)"), Some("10"))).is_err());
        assert!(validate(&params(Some("nurse"), Some("`reboot`"), Some("10"))).is_err());
        assert!(validate(&params(Some("a|b"), Some("Melbourne"), Some("10"))).is_err());
    }

    #[test]
    fn test_validate_allows_everyday_punctuation() {
        let request = validate(&params(
            Some("early-childhood teacher"),
            Some("St. Kilda, Vic"),
            Some("10"),
        ))
        .unwrap();

        assert_eq!(request.location, "St. Kilda, Vic");
    }

    #[test]
    fn test_validate_allows_apostrophes() {
        assert!(validate(&params(Some("chef"), Some("O'Connor"), Some("2"))).is_ok());
    }

    // ============================================================
    // VALIDATOR - legacy endpoint mapping
    // ============================================================

    #[test]
    fn test_legacy_maps_suburb_to_location() {
        let config = GatewayConfig::default();
        let request = validate_legacy(
            &LegacyCommandRequest {
                command: String::new(),
                suburb: Some("Parramatta".to_string()),
            },
            &config,
        )
        .unwrap();

        assert_eq!(request.location, "Parramatta");
        assert_eq!(request.job_title, config.legacy_job_title);
        assert_eq!(request.num_jobs, config.legacy_num_jobs);
    }

    #[test]
    fn test_legacy_rejects_nonempty_command() {
        let err = validate_legacy(
            &LegacyCommandRequest {
                command: "ls -la".to_string(),
                suburb: Some("Parramatta".to_string()),
            },
            &GatewayConfig::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("command"));
    }

    #[test]
    fn test_legacy_rejects_missing_suburb() {
        let err = validate_legacy(&LegacyCommandRequest::default(), &GatewayConfig::default())
            .unwrap_err();

        assert!(err.to_string().contains("suburb"));
    }

    #[test]
    fn test_legacy_sentinel_suburb_is_not_special() {
        // The historically magic suburb value validates like any other;
        // response shape is decided by the worker document alone.
        let request = validate_legacy(
            &LegacyCommandRequest {
                command: String::new(),
                suburb: Some("omayzi".to_string()),
            },
            &GatewayConfig::default(),
        )
        .unwrap();

        assert_eq!(request.location, "omayzi");
    }

    // ============================================================
    // RESPONSE EMITTER - one row per classification
    // ============================================================

    #[test]
    fn test_emit_clinic_list() {
        let (status, Json(body)) = emit(Ok(ParsedResult::ClinicList(vec![Clinic {
            name: Some("Acme Clinic".to_string()),
            address: None,
            phone: None,
            rating: Some("4.5".to_string()),
        }])));

        assert_eq!(status, StatusCode::OK);
        let json = body_json(&body);
        assert_eq!(json["clinics"][0]["name"], "Acme Clinic");
        // Absent optional fields are omitted, not defaulted.
        assert!(json["clinics"][0].get("address").is_none());
    }

    #[test]
    fn test_emit_raw_text() {
        let (status, Json(body)) = emit(Ok(ParsedResult::RawText("scraped text".to_string())));

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_json(&body)["data"], "scraped text");
    }

    #[test]
    fn test_emit_worker_reported_error() {
        let (status, Json(body)) = emit(Ok(ParsedResult::WorkerError("rate limited".to_string())));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&body)["error"], "rate limited");
    }

    #[test]
    fn test_emit_validation_is_400() {
        let (status, Json(body)) = emit(Err(SearchError::Validation(
            "missing or empty parameter: jobTitle".to_string(),
        )));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&body)["error"], "missing or empty parameter: jobTitle");
    }

    #[test]
    fn test_emit_spawn_failure_hides_io_detail() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ENOENT /secret/path");
        let (status, Json(body)) = emit(Err(SearchError::ProcessSpawn(io)));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(&body);
        assert_eq!(json["error"], "failed to start worker process");
        assert_eq!(json["details"], "spawn failed");
        // Raw io error text never reaches the client.
        assert!(!json.to_string().contains("secret"));
    }

    #[test]
    fn test_emit_timeout() {
        let (status, Json(body)) = emit(Err(SearchError::Timeout));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&body)["error"], "worker timed out");
    }

    #[test]
    fn test_emit_buffer_overflow() {
        let (status, Json(body)) = emit(Err(SearchError::BufferOverflow));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&body)["error"], "output exceeded limit");
    }

    #[test]
    fn test_emit_execution_failure_carries_diagnostics() {
        let (status, Json(body)) = emit(Err(SearchError::ProcessExecution {
            details: "Traceback: selenium crashed".to_string(),
        }));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(&body);
        assert_eq!(json["error"], "worker process failed");
        assert_eq!(json["details"], "Traceback: selenium crashed");
    }

    #[test]
    fn test_emit_malformed_output() {
        let (status, Json(body)) = emit(Err(SearchError::MalformedOutput));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&body)["error"], "invalid worker output");
    }

    // ============================================================
    // HANDLER PIPELINE - stand-in worker end to end
    // ============================================================

    fn shell_worker_config(script: &str) -> Arc<GatewayConfig> {
        Arc::new(GatewayConfig {
            worker_executable: PathBuf::from("sh"),
            // The search parameters are appended after the script and land in
            // $0..$2, unused by these stand-ins.
            worker_args_prefix: vec!["-c".to_string(), script.to_string()],
            ..GatewayConfig::default()
        })
    }

    #[tokio::test]
    async fn test_handle_search_success_end_to_end() {
        let config = shell_worker_config(
            r#"echo '{"clinics":[{"name":"Acme Clinic","rating":"4.5"}]}'"#,
        );
        let invoker = ProcessInvoker::new(2);

        let (status, Json(body)) = handle_search(
            Extension(config),
            Extension(invoker),
            Query(params(Some("gp"), Some("Richmond"), Some("2"))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_json(&body)["clinics"][0]["name"], "Acme Clinic");
    }

    #[tokio::test]
    async fn test_handle_search_rejects_invalid_without_spawning() {
        // A worker that would fail loudly if it ever ran.
        let config = shell_worker_config("exit 99");
        let invoker = ProcessInvoker::new(2);

        let (status, Json(body)) = handle_search(
            Extension(config),
            Extension(invoker.clone()),
            Query(params(None, Some("Richmond"), Some("2"))),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body_json(&body)["error"].as_str().unwrap().contains("jobTitle"));
    }

    #[tokio::test]
    async fn test_handle_search_surfaces_worker_reported_error() {
        let config = shell_worker_config(r#"echo '{"error":"rate limited"}'"#);
        let invoker = ProcessInvoker::new(2);

        let (status, Json(body)) = handle_search(
            Extension(config),
            Extension(invoker),
            Query(params(Some("gp"), Some("Richmond"), Some("2"))),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(&body)["error"].as_str().unwrap().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_handle_search_execution_failure_carries_stderr() {
        let config = shell_worker_config("echo 'driver crashed' >&2; exit 2");
        let invoker = ProcessInvoker::new(2);

        let (status, Json(body)) = handle_search(
            Extension(config),
            Extension(invoker),
            Query(params(Some("gp"), Some("Richmond"), Some("2"))),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(&body);
        assert_eq!(json["error"], "worker process failed");
        assert!(json["details"].as_str().unwrap().contains("driver crashed"));
    }

    #[tokio::test]
    async fn test_handle_execute_command_raw_text_by_document_shape() {
        // Raw-text mode comes from the worker emitting {"data": ...}; the
        // suburb value plays no part in choosing the interpretation.
        let config = shell_worker_config(r#"echo '{"data":"legacy page text"}'"#);
        let invoker = ProcessInvoker::new(2);

        let (status, Json(body)) = handle_execute_command(
            Extension(config),
            Extension(invoker),
            Json(LegacyCommandRequest {
                command: String::new(),
                suburb: Some("Carlton".to_string()),
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body_json(&body)["data"], "legacy page text");
    }
}
