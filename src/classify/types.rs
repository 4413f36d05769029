use serde::{Deserialize, Serialize};

/// One clinic entry from the worker's result document.
///
/// Every field is optional; absence is preserved as-is and never coerced to a
/// placeholder here. Presentation defaults belong to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// The worker contract document as written to the result stream.
///
/// Exactly one of the three payload fields is expected; extra fields the
/// worker may add alongside (e.g. partial results next to an error) are
/// tolerated and ignored.
#[derive(Debug, Deserialize)]
pub struct WorkerDocument {
    pub error: Option<String>,
    pub data: Option<String>,
    pub clinics: Option<Vec<Clinic>>,
}

/// A successfully parsed worker result, tagged by payload shape.
///
/// The tag is chosen solely from the document the worker emitted, never from
/// anything in the caller's input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResult {
    /// Structured clinic listing (`{"clinics": [...]}`).
    ClinicList(Vec<Clinic>),
    /// Unstructured text payload (`{"data": ...}`).
    RawText(String),
    /// The worker completed but reported a failure (`{"error": ...}`).
    WorkerError(String),
}
