//! Presentation seam between the controller and whatever draws the page.

use crate::render::{ResultsView, ScoreGradient, ScoreRing};

/// Receives the side effects the controller cannot express as plain state.
///
/// Only [`Presenter::notify`] is required; a headless presenter can ignore the rest.
pub trait Presenter {
    /// Shows a blocking notice to the user.
    fn notify(&mut self, notice: &str);

    fn set_loading(&mut self, _visible: bool) {}

    fn show_preview(&mut self, _data_url: Option<&str>) {}

    /// Installs the shared ring gradient. Called once per renderer.
    fn install_score_gradient(&mut self, _gradient: &ScoreGradient) {}

    fn present_results(&mut self, _view: &ResultsView) {}

    /// Applies the ring fill once `ring.delay` has elapsed, so it animates in.
    fn animate_score_ring(&mut self, _ring: &ScoreRing) {}

    fn scroll_to_results(&mut self) {}
}
