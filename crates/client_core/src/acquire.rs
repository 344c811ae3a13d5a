//! File acquisition: origin normalization, validation and preview encoding.

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use shared::domain::{MediaType, SelectedFile, MAX_UPLOAD_BYTES};

use crate::error::UploadError;

/// A file offered by the user that has not been validated yet.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    /// Declared media type, as reported by the picker or guessed from the extension.
    pub media_type: String,
    pub size: u64,
    bytes: Arc<[u8]>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: bytes.len() as u64,
            bytes: bytes.into(),
        }
    }

    /// Loads a candidate from disk, guessing its media type from the extension.
    ///
    /// Contents are only read when the file fits the upload limit; an oversized
    /// candidate carries its real size and no bytes, and is rejected by [`validate`].
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        let size = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("failed to stat '{}'", path.display()))?
            .len();

        if size > MAX_UPLOAD_BYTES {
            return Ok(Self {
                name,
                media_type,
                size,
                bytes: Arc::from(Vec::new()),
            });
        }

        // The file may have changed since the stat; the bytes read are authoritative.
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        Ok(Self::new(name, media_type, bytes))
    }
}

/// Where a selection came from. Both origins go through the same validation.
#[derive(Debug, Clone)]
pub enum FileSource {
    Dropped(Vec<CandidateFile>),
    Chosen(Vec<CandidateFile>),
}

impl FileSource {
    pub fn origin(&self) -> &'static str {
        match self {
            FileSource::Dropped(_) => "drop",
            FileSource::Chosen(_) => "chooser",
        }
    }

    /// The first file of the set; the rest are ignored.
    pub fn into_first(self) -> Option<CandidateFile> {
        match self {
            FileSource::Dropped(files) | FileSource::Chosen(files) => files.into_iter().next(),
        }
    }
}

/// Checks the media type, then the size. The first failure wins.
pub fn validate(candidate: CandidateFile) -> Result<SelectedFile, UploadError> {
    let Some(media_type) = MediaType::from_mime(&candidate.media_type) else {
        return Err(UploadError::InvalidType {
            media_type: candidate.media_type,
        });
    };

    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: candidate.size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(SelectedFile {
        name: candidate.name,
        media_type,
        bytes: candidate.bytes,
    })
}

pub fn encode_data_url(file: &SelectedFile) -> String {
    format!(
        "data:{};base64,{}",
        file.media_type.as_mime(),
        STANDARD.encode(&file.bytes)
    )
}

/// A pending preview decode, tagged with the selection generation it belongs to.
#[derive(Debug, Clone)]
pub struct PreviewRequest {
    pub generation: u64,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPreview {
    pub generation: u64,
    pub data_url: String,
}

impl PreviewRequest {
    pub fn decode_now(&self) -> DecodedPreview {
        DecodedPreview {
            generation: self.generation,
            data_url: encode_data_url(&self.file),
        }
    }

    /// Encodes the preview on the blocking pool so the event loop stays responsive.
    pub async fn decode(self) -> Result<DecodedPreview> {
        tokio::task::spawn_blocking(move || self.decode_now())
            .await
            .context("preview decode task failed")
    }
}

#[cfg(test)]
#[path = "tests/acquire_tests.rs"]
mod tests;
