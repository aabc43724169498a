use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ответ сервиса анализа.
///
/// The service returns an open JSON object; only `analysis_reasoning` is read
/// by the page, every other field is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_reasoning: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResponse {
    /// Reasoning text if present and not blank
    pub fn reasoning(&self) -> Option<&str> {
        self.analysis_reasoning
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Error body returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
