use super::*;
use crate::test_support::{successful_result, RecordingPresenter};
use shared::protocol::{FeedbackItem, GeneratedAlgorithm};

#[test]
fn renders_canned_successful_response() {
    let mut renderer = ResultsRenderer::new();
    let mut presenter = RecordingPresenter::default();

    let view = renderer.render(&successful_result(), &mut presenter);

    assert_eq!(view.score_text, "87");
    assert_eq!(view.shapes_text, "5");
    assert_eq!(view.arrows_text, "4");
    assert_eq!(view.validity_text, "✓ Yes");
    assert_eq!(view.algorithm_text, "Step 1\nStep 2");

    let kinds: Vec<_> = view.feedback.entries().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FeedbackKind::Correct,
            FeedbackKind::Missing,
            FeedbackKind::Partial
        ]
    );
    let indexes: Vec<_> = view.feedback.entries().iter().map(|e| e.index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);
    assert_eq!(view.feedback.entries()[1].text, "✗ Missing end node");
}

#[test]
fn invalid_graph_shows_no() {
    let mut result = successful_result();
    result.graph_valid = false;

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    assert_eq!(view.validity_text, "✗ No");
}

#[test]
fn empty_feedback_renders_placeholder_only() {
    let mut result = successful_result();
    result.feedback.clear();

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    assert_eq!(
        view.feedback,
        FeedbackListView::Placeholder(NO_FEEDBACK_PLACEHOLDER)
    );
    assert!(view.feedback.entries().is_empty());
}

#[test]
fn unmarked_feedback_defaults_to_missing() {
    let mut result = successful_result();
    result.feedback = vec![FeedbackItem::from("Graph has 2 nodes")];

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    let entry = &view.feedback.entries()[0];
    assert_eq!(entry.kind, FeedbackKind::Missing);
    assert_eq!(entry.icon, '!');
}

#[test]
fn single_string_algorithm_is_used_as_is() {
    let mut result = successful_result();
    result.generated_algorithm = GeneratedAlgorithm::Text("Start\n  Stop".into());

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    assert_eq!(view.algorithm_text, "Start\n  Stop");
}

#[test]
fn score_text_is_rounded_and_ring_tracks_exact_score() {
    let mut result = successful_result();
    result.score = 72.5;

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    assert_eq!(view.score_text, "73");

    let circumference = 2.0 * PI * SCORE_RING_RADIUS;
    assert!((view.ring.circumference - circumference).abs() < 1e-9);
    assert!((view.ring.offset - circumference * 0.275).abs() < 1e-9);
    assert_eq!(view.ring.delay, SCORE_RING_DELAY);
}

#[test]
fn ring_offset_spans_empty_to_full() {
    let empty = ScoreRing::for_score(0.0);
    assert!((empty.offset - empty.circumference).abs() < 1e-9);

    let full = ScoreRing::for_score(100.0);
    assert!(full.offset.abs() < 1e-9);

    let overflow = ScoreRing::for_score(140.0);
    assert!(overflow.offset.abs() < 1e-9);
}

#[test]
fn gradient_is_created_once_across_renders() {
    let mut renderer = ResultsRenderer::new();
    let mut presenter = RecordingPresenter::default();
    assert!(renderer.gradient().is_none());

    renderer.render(&successful_result(), &mut presenter);
    renderer.render(&successful_result(), &mut presenter);

    assert_eq!(presenter.gradients_installed, 1);
    let gradient = renderer.gradient().expect("gradient");
    assert_eq!(gradient.id, "scoreGradient");
    assert_eq!(gradient.stops[0].color, "#667eea");
    assert_eq!(gradient.stops[1].color, "#764ba2");
}

#[test]
fn presents_then_animates_ring_then_scrolls() {
    let mut presenter = RecordingPresenter::default();
    let view = ResultsRenderer::new().render(&successful_result(), &mut presenter);

    assert_eq!(presenter.presented, vec![view.clone()]);
    assert_eq!(presenter.rings, vec![view.ring]);
    assert_eq!(presenter.scrolls, 1);
}

#[test]
fn null_feedback_and_algorithm_render_placeholder_and_empty_text() {
    let result: AnalysisResult = serde_json::from_value(serde_json::json!({
        "success": true,
        "score": 55,
        "shapes_detected": 2,
        "arrows_detected": 1,
        "graph_valid": true,
        "generated_algorithm": null,
        "feedback": null
    }))
    .expect("null fields decode");

    let view = ResultsRenderer::new().render(&result, &mut RecordingPresenter::default());
    assert_eq!(view.algorithm_text, "");
    assert_eq!(
        view.feedback,
        FeedbackListView::Placeholder(NO_FEEDBACK_PLACEHOLDER)
    );
}
