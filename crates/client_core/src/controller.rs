//! Upload state controller: owns the selection slot and the page visibility state.

use shared::{domain::SelectedFile, protocol::AnalysisResult};
use tracing::{debug, info, warn};

use crate::{
    acquire::{validate, DecodedPreview, FileSource, PreviewRequest},
    client::AnalysisService,
    error::UploadError,
    render::{ResultsRenderer, ResultsView},
    view::Presenter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Upload,
    Results,
}

/// What the upload area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerView {
    #[default]
    DropTarget,
    Preview,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub section: Section,
    pub picker: PickerView,
    pub preview: Option<String>,
    /// Name retained by the file chooser control, if any.
    pub chooser_selection: Option<String>,
    pub loading: bool,
    pub results: Option<ResultsView>,
}

/// Proof that an analysis was started; hand it back to [`UploadController::finish_analysis`].
#[derive(Debug)]
pub struct AnalysisTicket {
    file: SelectedFile,
    generation: u64,
}

impl AnalysisTicket {
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

pub struct UploadController<P: Presenter> {
    presenter: P,
    renderer: ResultsRenderer,
    selected: Option<SelectedFile>,
    ui: UiState,
    generation: u64,
    in_flight: bool,
}

impl<P: Presenter> UploadController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            renderer: ResultsRenderer::new(),
            selected: None,
            ui: UiState::default(),
            generation: 0,
            in_flight: false,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Validates the first file of `source` and makes it the current selection.
    ///
    /// A new valid file replaces any existing selection. On rejection the existing
    /// selection is left as it was. Returns `Ok(None)` for an empty source.
    pub fn acquire(&mut self, source: FileSource) -> Result<Option<PreviewRequest>, UploadError> {
        let origin = source.origin();
        let Some(candidate) = source.into_first() else {
            debug!(origin, "file source was empty");
            return Ok(None);
        };

        info!(
            origin,
            name = %candidate.name,
            media_type = %candidate.media_type,
            size = candidate.size,
            "file selected"
        );

        let file = match validate(candidate) {
            Ok(file) => file,
            Err(err) => {
                warn!(origin, error = %err, "rejected selected file");
                self.surface(&err);
                return Err(err);
            }
        };

        self.generation += 1;
        self.ui.chooser_selection = Some(file.name.clone());
        self.selected = Some(file.clone());
        Ok(Some(PreviewRequest {
            generation: self.generation,
            file,
        }))
    }

    /// Applies a finished preview decode if it still belongs to the current selection.
    ///
    /// The file may be out on an analysis ticket when the decode lands; the preview
    /// still applies, since `reset` and a new selection both advance the generation.
    pub fn apply_preview(&mut self, decoded: DecodedPreview) -> bool {
        if decoded.generation != self.generation {
            debug!(
                preview_generation = decoded.generation,
                current_generation = self.generation,
                "discarding stale preview"
            );
            return false;
        }

        self.presenter.show_preview(Some(&decoded.data_url));
        self.ui.preview = Some(decoded.data_url);
        self.ui.picker = PickerView::Preview;
        true
    }

    /// Drops the selection and restores the drop target. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.ui.chooser_selection = None;
        self.ui.preview = None;
        self.ui.picker = PickerView::DropTarget;
        self.presenter.show_preview(None);
    }

    /// Returns from a finished analysis to a fresh upload.
    pub fn reset_all(&mut self) {
        self.reset();
        self.ui.section = Section::Upload;
        self.ui.results = None;
    }

    /// Starts an analysis of the current selection.
    ///
    /// Rejects re-entrant triggers while a request is outstanding. The selected file
    /// moves into the returned ticket.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, UploadError> {
        if self.in_flight {
            warn!("ignoring analyze trigger while a request is in flight");
            return Err(UploadError::AnalysisInFlight);
        }

        let Some(file) = self.selected.take() else {
            let err = UploadError::NoFileSelected;
            self.surface(&err);
            return Err(err);
        };

        self.in_flight = true;
        self.set_loading(true);
        Ok(AnalysisTicket {
            file,
            generation: self.generation,
        })
    }

    /// Completes an analysis started with [`Self::begin_analysis`].
    ///
    /// Loading is cleared before anything else happens. On failure the file goes back
    /// into the selection slot unless the user reset or picked another file meanwhile.
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, UploadError>,
    ) -> Result<&ResultsView, UploadError> {
        self.set_loading(false);
        self.in_flight = false;

        match outcome {
            Ok(result) => {
                info!(
                    name = %ticket.file.name,
                    score = result.score,
                    shapes = result.shapes_detected,
                    arrows = result.arrows_detected,
                    "analysis succeeded"
                );
                let view = self.renderer.render(&result, &mut self.presenter);
                // The submitted file is consumed; leave no preview behind it.
                self.reset();
                self.ui.section = Section::Results;
                Ok(self.ui.results.insert(view))
            }
            Err(err) => {
                warn!(name = %ticket.file.name, error = %err, "analysis failed");
                if ticket.generation == self.generation && self.selected.is_none() {
                    self.selected = Some(ticket.file);
                }
                self.surface(&err);
                Err(err)
            }
        }
    }

    pub async fn analyze<S>(&mut self, service: &S) -> Result<&ResultsView, UploadError>
    where
        S: AnalysisService + ?Sized,
    {
        let ticket = self.begin_analysis()?;
        let outcome = service.analyze(ticket.file()).await;
        self.finish_analysis(ticket, outcome)
    }

    fn set_loading(&mut self, visible: bool) {
        self.ui.loading = visible;
        self.presenter.set_loading(visible);
    }

    fn surface(&mut self, err: &UploadError) {
        if let Some(notice) = err.notice() {
            self.presenter.notify(&notice);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
