use crate::classify::types::Clinic;
use serde::{Deserialize, Serialize};

/// Raw query parameters of `GET /search`. Fields are optional here so the
/// validator can name exactly which ones are missing.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "numJobs")]
    pub num_jobs: Option<String>,
}

/// Body of the legacy `POST /execute_command` endpoint. Historic clients
/// always send an empty `command`; `suburb` stands in for the location.
#[derive(Debug, Default, Deserialize)]
pub struct LegacyCommandRequest {
    #[serde(default)]
    pub command: String,
    pub suburb: Option<String>,
}

/// A validated, immutable search request. Exactly one per incoming call;
/// the only thing the invoker ever sees.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub job_title: String,
    pub location: String,
    pub num_jobs: u32,
}

/// Every JSON body this service emits.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiBody {
    Clinics {
        clinics: Vec<Clinic>,
    },
    Raw {
        data: String,
    },
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
