use super::types::{LegacyCommandRequest, SearchParams, SearchRequest};
use crate::config::GatewayConfig;
use crate::error::SearchError;
use regex::Regex;

/// Returns true when `value` contains only characters safe to pass as a
/// worker argument: letters, digits, spaces, and `. , ' -`. Everything with
/// shell or path meaning falls outside the allow-list, which closes
/// injection exposure before a spawn can even be attempted.
fn allowed_argument(value: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9 .,'\-]+$").unwrap();
    re.is_match(value)
}

/// Checks one string parameter; pushes a message naming the field on failure.
fn check_text_field(field: &str, value: &Option<String>, problems: &mut Vec<String>) -> String {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if trimmed.is_empty() {
        problems.push(format!("missing or empty parameter: {}", field));
    } else if !allowed_argument(trimmed) {
        problems.push(format!("{} contains unsupported characters", field));
    }
    trimmed.to_string()
}

/// Validates the raw `GET /search` parameters into an immutable
/// `SearchRequest`. No side effects; on any failure the returned
/// `ValidationError` names every offending field and no process is spawned.
pub fn validate(params: &SearchParams) -> Result<SearchRequest, SearchError> {
    let mut problems = Vec::new();

    let job_title = check_text_field("jobTitle", &params.job_title, &mut problems);
    let location = check_text_field("location", &params.location, &mut problems);

    let num_jobs = match params.num_jobs.as_deref().map(str::trim) {
        None | Some("") => {
            problems.push("missing or empty parameter: numJobs".to_string());
            0
        }
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                problems.push("numJobs must be a positive integer".to_string());
                0
            }
        },
    };

    if !problems.is_empty() {
        return Err(SearchError::Validation(problems.join("; ")));
    }

    Ok(SearchRequest {
        job_title,
        location,
        num_jobs,
    })
}

/// Validates a legacy `POST /execute_command` body.
///
/// Historic clients always send `command: ""`; anything else is rejected
/// outright rather than interpreted. The suburb becomes the location, and
/// the job title and count come from configured legacy defaults. Note that
/// no suburb value is special: response interpretation is decided by the
/// worker document's shape, never by the input.
pub fn validate_legacy(
    request: &LegacyCommandRequest,
    config: &GatewayConfig,
) -> Result<SearchRequest, SearchError> {
    if !request.command.trim().is_empty() {
        return Err(SearchError::Validation(
            "command must be empty".to_string(),
        ));
    }

    let mut problems = Vec::new();
    let location = check_text_field("suburb", &request.suburb, &mut problems);
    if !problems.is_empty() {
        return Err(SearchError::Validation(problems.join("; ")));
    }

    Ok(SearchRequest {
        job_title: config.legacy_job_title.clone(),
        location,
        num_jobs: config.legacy_num_jobs,
    })
}
