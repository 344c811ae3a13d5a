use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::{domain::SelectedFile, protocol::AnalysisResult};

use crate::{
    acquire::CandidateFile,
    client::AnalysisService,
    error::UploadError,
    render::{ResultsView, ScoreGradient, ScoreRing},
    view::Presenter,
};

/// Loading and notice side effects, in the order the presenter saw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Loading(bool),
    Notice(String),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
    pub notices: Vec<String>,
    pub loading_changes: Vec<bool>,
    pub previews: Vec<Option<String>>,
    pub gradients_installed: usize,
    pub presented: Vec<ResultsView>,
    pub rings: Vec<ScoreRing>,
    pub scrolls: usize,
}

impl Presenter for RecordingPresenter {
    fn notify(&mut self, notice: &str) {
        self.notices.push(notice.to_string());
        self.events.push(PresenterEvent::Notice(notice.to_string()));
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading_changes.push(visible);
        self.events.push(PresenterEvent::Loading(visible));
    }

    fn show_preview(&mut self, data_url: Option<&str>) {
        self.previews.push(data_url.map(str::to_string));
    }

    fn install_score_gradient(&mut self, _gradient: &ScoreGradient) {
        self.gradients_installed += 1;
    }

    fn present_results(&mut self, view: &ResultsView) {
        self.presented.push(view.clone());
    }

    fn animate_score_ring(&mut self, ring: &ScoreRing) {
        self.rings.push(*ring);
    }

    fn scroll_to_results(&mut self) {
        self.scrolls += 1;
    }
}

pub fn png(name: &str) -> CandidateFile {
    CandidateFile::new(name, "image/png", b"\x89PNG\r\n\x1a\nfake".to_vec())
}

pub fn successful_result() -> AnalysisResult {
    serde_json::from_value(serde_json::json!({
        "success": true,
        "score": 87,
        "shapes_detected": 5,
        "arrows_detected": 4,
        "graph_valid": true,
        "generated_algorithm": ["Step 1", "Step 2"],
        "feedback": ["✓ Start node present", "✗ Missing end node", "! Some arrows unlabeled"]
    }))
    .expect("canned result")
}

/// In-process service answering every call with a fixed outcome.
pub struct CannedService {
    outcome: Result<AnalysisResult, UploadError>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl CannedService {
    pub fn ok(result: AnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: Arc::default(),
        }
    }

    pub fn failing(err: UploadError) -> Self {
        Self {
            outcome: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl AnalysisService for CannedService {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, UploadError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(file.name.clone());
        self.outcome.clone()
    }
}
