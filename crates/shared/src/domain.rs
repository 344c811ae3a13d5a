use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Largest image accepted for upload, in bytes (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Png,
    Jpeg,
    /// Non-standard alias some browsers and pickers still report.
    Jpg,
}

impl MediaType {
    pub const ACCEPTED: [MediaType; 3] = [MediaType::Png, MediaType::Jpeg, MediaType::Jpg];

    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ACCEPTED
            .into_iter()
            .find(|candidate| candidate.as_mime() == mime)
    }

    pub fn as_mime(self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Jpg => "image/jpg",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

/// An image that passed client-side validation and is held for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: MediaType,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Correct,
    Missing,
    Partial,
}

/// Leading symbol of a plain feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMarker {
    Check,
    Cross,
    Bang,
    Unmarked,
}

impl FeedbackMarker {
    pub fn kind(self) -> FeedbackKind {
        match self {
            FeedbackMarker::Check => FeedbackKind::Correct,
            FeedbackMarker::Cross | FeedbackMarker::Unmarked => FeedbackKind::Missing,
            FeedbackMarker::Bang => FeedbackKind::Partial,
        }
    }

    pub fn icon(self) -> char {
        match self {
            FeedbackMarker::Check => '✓',
            FeedbackMarker::Cross => '✗',
            FeedbackMarker::Bang | FeedbackMarker::Unmarked => '!',
        }
    }
}

impl From<FeedbackKind> for FeedbackMarker {
    fn from(kind: FeedbackKind) -> Self {
        match kind {
            FeedbackKind::Correct => FeedbackMarker::Check,
            FeedbackKind::Missing => FeedbackMarker::Cross,
            FeedbackKind::Partial => FeedbackMarker::Bang,
        }
    }
}

/// Classifies a plain feedback line by its leading symbol.
///
/// This is the only place the prefix convention is interpreted; lines without a
/// known marker come back as [`FeedbackMarker::Unmarked`].
pub fn classify_feedback(line: &str) -> FeedbackMarker {
    match line.chars().next() {
        Some('✓') => FeedbackMarker::Check,
        Some('✗') => FeedbackMarker::Cross,
        Some('!') => FeedbackMarker::Bang,
        _ => FeedbackMarker::Unmarked,
    }
}
