use serde::{Deserialize, Serialize};

/// Message used when the service does not say what went wrong.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Analysis failed";

/// Error body returned by the analysis service on failure statuses or `success: false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn into_message(self) -> String {
        self.error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string())
    }
}
