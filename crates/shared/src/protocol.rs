use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{classify_feedback, FeedbackKind, FeedbackMarker};

pub const ANALYZE_PATH: &str = "/analyze";
pub const HEALTH_PATH: &str = "/health";
/// Multipart field carrying the uploaded image bytes.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub shapes_detected: u32,
    #[serde(default)]
    pub arrows_detected: u32,
    #[serde(default)]
    pub graph_valid: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated_algorithm: GeneratedAlgorithm,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: Vec<FeedbackItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub shapes: Vec<ShapeSummary>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedAlgorithm {
    Steps(Vec<String>),
    Text(String),
}

impl Default for GeneratedAlgorithm {
    fn default() -> Self {
        GeneratedAlgorithm::Text(String::new())
    }
}

impl GeneratedAlgorithm {
    pub fn to_text(&self) -> String {
        match self {
            GeneratedAlgorithm::Steps(steps) => steps.join("\n"),
            GeneratedAlgorithm::Text(text) => text.clone(),
        }
    }
}

/// One feedback line as sent by the service.
///
/// Older deployments send bare strings whose first character encodes the kind;
/// structured items carry the kind explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedbackItem {
    Line(String),
    Structured { kind: FeedbackKind, text: String },
}

impl FeedbackItem {
    pub fn marker(&self) -> FeedbackMarker {
        match self {
            FeedbackItem::Line(line) => classify_feedback(line),
            FeedbackItem::Structured { kind, .. } => FeedbackMarker::from(*kind),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FeedbackItem::Line(line) => line,
            FeedbackItem::Structured { text, .. } => text,
        }
    }
}

impl From<&str> for FeedbackItem {
    fn from(line: &str) -> Self {
        FeedbackItem::Line(line.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSummary {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    /// Bounding box as `[x, y, width, height]` in image pixels.
    #[serde(default)]
    pub position: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
