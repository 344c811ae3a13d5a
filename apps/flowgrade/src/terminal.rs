//! Terminal rendering of the analysis workflow.

use std::io::{self, Write};

use client_core::{FeedbackListView, Presenter, ResultsView, ScoreRing};
use shared::domain::FeedbackKind;

const RULE_WIDTH: usize = 50;

/// Writes notices to stderr and results to the wrapped writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
    /// Prints results as JSON instead of the human summary.
    json: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(json: bool) -> Self {
        Self::new(io::stdout(), json)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_summary(&mut self, view: &ResultsView) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let thin = "-".repeat(RULE_WIDTH);
        let out = &mut self.out;

        writeln!(out, "{rule}")?;
        writeln!(out, "SCORE: {}/100", view.score_text)?;
        writeln!(out, "Shapes Detected: {}", view.shapes_text)?;
        writeln!(out, "Arrows Detected: {}", view.arrows_text)?;
        writeln!(out, "Graph Valid: {}", view.validity_text)?;

        writeln!(out, "\nGenerated Algorithm:")?;
        writeln!(out, "{thin}")?;
        for step in view.algorithm_text.lines() {
            writeln!(out, "  • {step}")?;
        }

        writeln!(out, "\nFeedback:")?;
        writeln!(out, "{thin}")?;
        match &view.feedback {
            FeedbackListView::Entries(entries) => {
                for entry in entries {
                    writeln!(
                        out,
                        "  {}. [{}] {}",
                        entry.index,
                        kind_label(entry.kind),
                        entry.text
                    )?;
                }
            }
            FeedbackListView::Placeholder(text) => writeln!(out, "  {text}")?,
        }
        writeln!(out, "{rule}")?;
        out.flush()
    }
}

fn kind_label(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Correct => "correct",
        FeedbackKind::Missing => "missing",
        FeedbackKind::Partial => "partial",
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn notify(&mut self, notice: &str) {
        eprintln!("{notice}");
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            eprintln!("Analyzing flowchart...");
        }
    }

    fn show_preview(&mut self, data_url: Option<&str>) {
        if let Some(data_url) = data_url {
            tracing::debug!(data_url_len = data_url.len(), "preview ready");
        }
    }

    fn present_results(&mut self, view: &ResultsView) {
        let written = if self.json {
            serde_json::to_writer_pretty(&mut self.out, view)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(self.out))
        } else {
            self.write_summary(view)
        };

        if let Err(err) = written {
            tracing::error!("failed to write results: {err}");
        }
    }

    fn animate_score_ring(&mut self, ring: &ScoreRing) {
        tracing::trace!(offset = ring.offset, delay_ms = ring.delay.as_millis() as u64, "score ring");
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
