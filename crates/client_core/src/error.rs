use thiserror::Error;

/// Failures of the upload-and-analyze workflow.
///
/// Every variant is terminal for the action that produced it; the controller turns
/// them into a user-facing notice and returns to the previous stable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported media type '{media_type}'")]
    InvalidType { media_type: String },
    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("no file selected")]
    NoFileSelected,
    #[error("{0}")]
    AnalysisFailed(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("an analysis request is already in flight")]
    AnalysisInFlight,
}

impl UploadError {
    /// Text shown to the user in a blocking notice, if the error is surfaced at all.
    pub fn notice(&self) -> Option<String> {
        match self {
            UploadError::InvalidType { .. } => Some("Please upload a PNG or JPEG image".into()),
            UploadError::TooLarge { .. } => Some("File size must be less than 16MB".into()),
            UploadError::NoFileSelected => {
                Some("Please upload a flowchart image first".into())
            }
            UploadError::AnalysisFailed(message) | UploadError::NetworkError(message) => {
                Some(format!("Failed to analyze flowchart: {message}"))
            }
            UploadError::AnalysisInFlight => None,
        }
    }

    pub(crate) fn network(err: impl std::fmt::Display) -> Self {
        UploadError::NetworkError(err.to_string())
    }
}
