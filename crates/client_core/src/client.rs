//! Analysis client: one-shot multipart upload to the remote analysis service.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{
    domain::SelectedFile,
    error::ServiceErrorBody,
    protocol::{AnalysisResult, HealthResponse, ANALYZE_PATH, HEALTH_PATH, IMAGE_FIELD},
};
use tracing::{debug, info};
use url::Url;

use crate::error::UploadError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submits `file` once. Resolves only with results whose `success` flag is set.
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, UploadError>;
}

pub struct HttpAnalysisClient {
    http: Client,
    server_url: String,
}

impl HttpAnalysisClient {
    pub fn new(server_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: impl AsRef<str>) -> Result<Self> {
        let raw = server_url.as_ref().trim();
        let parsed = Url::parse(raw).with_context(|| format!("invalid server url '{raw}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "server url must use http or https, got '{}'",
                parsed.scheme()
            ));
        }

        Ok(Self {
            http,
            server_url: raw.trim_end_matches('/').to_string(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let health = self
            .http
            .get(format!("{}{HEALTH_PATH}", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, UploadError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.media_type.as_mime())
            .map_err(UploadError::network)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        info!(
            server_url = %self.server_url,
            name = %file.name,
            size = file.size(),
            "sending analysis request"
        );
        let response = self
            .http
            .post(format!("{}{ANALYZE_PATH}", self.server_url))
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::network)?;

        let status = response.status();
        debug!(%status, "analysis response received");

        if !status.is_success() {
            let body = response
                .json::<ServiceErrorBody>()
                .await
                .unwrap_or_default();
            return Err(UploadError::AnalysisFailed(body.into_message()));
        }

        let result: AnalysisResult = response.json().await.map_err(UploadError::network)?;
        if !result.success {
            return Err(UploadError::AnalysisFailed(
                ServiceErrorBody {
                    error: result.error,
                }
                .into_message(),
            ));
        }

        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
