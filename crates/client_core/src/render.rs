//! Maps a successful analysis onto the results summary.

use std::{f64::consts::PI, time::Duration};

use serde::Serialize;
use shared::{domain::FeedbackKind, protocol::AnalysisResult};
use tracing::debug;

use crate::view::Presenter;

pub const SCORE_RING_RADIUS: f64 = 70.0;
/// Delay before the ring fill is applied, so it animates instead of jumping.
pub const SCORE_RING_DELAY: Duration = Duration::from_millis(100);
pub const NO_FEEDBACK_PLACEHOLDER: &str = "No detailed feedback available.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreRing {
    pub radius: f64,
    pub circumference: f64,
    /// Stroke dash offset: the full circumference is an empty ring, zero a full one.
    pub offset: f64,
    #[serde(skip)]
    pub delay: Duration,
}

impl ScoreRing {
    pub fn for_score(score: f64) -> Self {
        let circumference = 2.0 * PI * SCORE_RING_RADIUS;
        let fraction = score.clamp(0.0, 100.0) / 100.0;
        Self {
            radius: SCORE_RING_RADIUS,
            circumference,
            offset: circumference - fraction * circumference,
            delay: SCORE_RING_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStop {
    pub offset: &'static str,
    pub color: &'static str,
}

/// Gradient definition shared by every rendered score ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGradient {
    pub id: &'static str,
    pub from: (&'static str, &'static str),
    pub to: (&'static str, &'static str),
    pub stops: [GradientStop; 2],
}

impl Default for ScoreGradient {
    fn default() -> Self {
        Self {
            id: "scoreGradient",
            from: ("0%", "0%"),
            to: ("100%", "100%"),
            stops: [
                GradientStop {
                    offset: "0%",
                    color: "#667eea",
                },
                GradientStop {
                    offset: "100%",
                    color: "#764ba2",
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    /// 1-based position in the feedback list.
    pub index: usize,
    pub kind: FeedbackKind,
    pub icon: char,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FeedbackListView {
    Entries(Vec<FeedbackEntry>),
    Placeholder(&'static str),
}

impl FeedbackListView {
    pub fn entries(&self) -> &[FeedbackEntry] {
        match self {
            FeedbackListView::Entries(entries) => entries,
            FeedbackListView::Placeholder(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub score_text: String,
    pub ring: ScoreRing,
    pub shapes_text: String,
    pub arrows_text: String,
    pub validity_text: &'static str,
    pub algorithm_text: String,
    pub feedback: FeedbackListView,
}

#[derive(Debug, Default)]
pub struct ResultsRenderer {
    gradient: Option<ScoreGradient>,
}

impl ResultsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gradient(&self) -> Option<&ScoreGradient> {
        self.gradient.as_ref()
    }

    /// Renders a successful result. Each call replaces whatever was rendered before.
    pub fn render(&mut self, result: &AnalysisResult, presenter: &mut impl Presenter) -> ResultsView {
        if self.gradient.is_none() {
            let gradient = self.gradient.insert(ScoreGradient::default());
            presenter.install_score_gradient(gradient);
        }

        let view = ResultsView {
            score_text: format!("{}", result.score.round() as i64),
            ring: ScoreRing::for_score(result.score),
            shapes_text: result.shapes_detected.to_string(),
            arrows_text: result.arrows_detected.to_string(),
            validity_text: if result.graph_valid { "✓ Yes" } else { "✗ No" },
            algorithm_text: result.generated_algorithm.to_text(),
            feedback: feedback_list(result),
        };
        debug!(
            score = %view.score_text,
            feedback_entries = view.feedback.entries().len(),
            "rendered analysis result"
        );

        presenter.present_results(&view);
        presenter.animate_score_ring(&view.ring);
        presenter.scroll_to_results();
        view
    }
}

fn feedback_list(result: &AnalysisResult) -> FeedbackListView {
    if result.feedback.is_empty() {
        return FeedbackListView::Placeholder(NO_FEEDBACK_PLACEHOLDER);
    }

    let entries = result
        .feedback
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let marker = item.marker();
            FeedbackEntry {
                index: position + 1,
                kind: marker.kind(),
                icon: marker.icon(),
                text: item.text().to_string(),
            }
        })
        .collect();
    FeedbackListView::Entries(entries)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
