//! Client-side controller for the flowchart upload-and-analyze workflow.
//!
//! The pieces, leaf first: [`acquire`] validates a picked or dropped image,
//! [`controller::UploadController`] owns the selection and visibility state,
//! [`client::HttpAnalysisClient`] talks to the analysis service and
//! [`render::ResultsRenderer`] turns a result into what the page shows.

pub mod acquire;
pub mod client;
pub mod controller;
pub mod error;
pub mod render;
pub mod view;

pub use acquire::{CandidateFile, DecodedPreview, FileSource, PreviewRequest};
pub use client::{AnalysisService, HttpAnalysisClient, DEFAULT_SERVER_URL};
pub use controller::{AnalysisTicket, PickerView, Section, UiState, UploadController};
pub use error::UploadError;
pub use render::{FeedbackEntry, FeedbackListView, ResultsRenderer, ResultsView, ScoreRing};
pub use view::Presenter;

#[cfg(test)]
pub(crate) mod test_support;
