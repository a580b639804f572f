use super::*;
use crate::{compose::target::TargetState, stage::text::WordState};

#[test]
fn splits_on_whitespace_in_order() {
    let mut seg = WhitespaceSegmenter::new();
    let targets = seg.segment("  AV SPECIALIST\tAND\nVIDEOGRAPHER ");
    assert_eq!(targets.len(), 4);
    let names: Vec<String> = seg.words().into_iter().map(|(w, _)| w).collect();
    assert_eq!(names, ["AV", "SPECIALIST", "AND", "VIDEOGRAPHER"]);
}

#[test]
fn empty_source_yields_no_targets() {
    let mut seg = WhitespaceSegmenter::new();
    assert!(seg.segment("").is_empty());
    assert!(seg.segment("   ").is_empty());
    assert!(seg.words().is_empty());
}

#[test]
fn targets_are_shared_with_clones() {
    let mut seg = WhitespaceSegmenter::new();
    let handle = seg.clone();
    let mut targets = seg.segment("ONE TWO");
    let state = TargetState::Word(WordState { opacity: 0.5 });
    targets[1].apply_state(&state);
    let words = handle.words();
    assert_eq!(words[1].1.last(), Some(state));
    assert_eq!(words[0].1.last(), None);
}
