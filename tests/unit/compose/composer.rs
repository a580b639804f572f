use super::*;
use crate::host::recording::RecordingTarget;

struct Rig {
    elements: Vec<RecordingTarget>,
    cover: RecordingTarget,
    container: RecordingTarget,
    words: Vec<RecordingTarget>,
    composer: FrameComposer,
}

fn rig(word_count: usize) -> Rig {
    let cfg = ChoreoConfig::default();
    let choreo = Choreography::new(
        &cfg,
        ViewportSize::new(1600.0, 900.0).unwrap(),
        DeviceClass::Standard,
        word_count,
    )
    .unwrap();

    let elements: Vec<_> = (0..cfg.element_count)
        .map(|_| RecordingTarget::new())
        .collect();
    let cover = RecordingTarget::new();
    let container = RecordingTarget::new();
    let words: Vec<_> = (0..word_count).map(|_| RecordingTarget::new()).collect();

    let composer = FrameComposer::new(
        choreo,
        RenderTargets {
            elements: elements.iter().map(RecordingTarget::boxed).collect(),
            cover: cover.boxed(),
            container: container.boxed(),
        },
        words.iter().map(RecordingTarget::boxed).collect(),
    )
    .unwrap();

    Rig {
        elements,
        cover,
        container,
        words,
        composer,
    }
}

fn all_states(r: &Rig) -> Vec<Option<TargetState>> {
    let mut out: Vec<_> = r.elements.iter().map(RecordingTarget::last).collect();
    out.push(r.cover.last());
    out.push(r.container.last());
    out.extend(r.words.iter().map(RecordingTarget::last));
    out
}

#[test]
fn initial_state_matches_setup_contract() {
    let mut r = rig(4);
    r.composer.apply_initial();

    for (t, p) in r
        .elements
        .iter()
        .zip(r.composer.choreography().table().elements())
    {
        assert_eq!(t.last(), Some(TargetState::Element(p.start)));
    }
    assert_eq!(
        r.cover.last(),
        Some(TargetState::Cover(CoverState {
            z: -1000.0,
            scale: 0.0
        }))
    );
    assert_eq!(r.container.last(), None);
    for w in &r.words {
        assert_eq!(w.last(), Some(TargetState::Word(WordState { opacity: 1.0 })));
    }
}

#[test]
fn compose_applies_every_stage_from_one_snapshot() {
    let mut r = rig(3);
    let p = 0.8;
    r.composer.compose(p);
    let snap = r.composer.choreography().snapshot(p);

    for (t, s) in r.elements.iter().zip(&snap.elements) {
        assert_eq!(t.last(), Some(TargetState::Element(*s)));
    }
    assert_eq!(r.cover.last(), Some(TargetState::Cover(snap.cover)));
    assert_eq!(r.container.last(), Some(TargetState::Container(snap.container)));
    for (t, s) in r.words.iter().zip(&snap.words) {
        assert_eq!(t.last(), Some(TargetState::Word(*s)));
    }
}

#[test]
fn compose_is_idempotent_for_repeated_progress() {
    let mut r = rig(5);
    r.composer.compose(0.62);
    let first = all_states(&r);
    r.composer.compose(0.62);
    assert_eq!(all_states(&r), first);
    assert_eq!(r.cover.applied(), 2);
}

#[test]
fn regressing_progress_re_renders_earlier_frame() {
    let mut r = rig(2);
    r.composer.compose(0.3);
    let at_03 = all_states(&r);
    r.composer.compose(0.9);
    r.composer.compose(0.3);
    assert_eq!(all_states(&r), at_03);
}

#[test]
fn non_finite_progress_touches_nothing() {
    let mut r = rig(2);
    r.composer.compose(f64::NAN);
    r.composer.compose(f64::INFINITY);
    assert_eq!(r.cover.applied(), 0);
    assert!(all_states(&r).iter().all(Option::is_none));
}

#[test]
fn zero_words_is_not_an_error() {
    let mut r = rig(0);
    r.composer.compose(0.7);
    assert!(r.words.is_empty());
    assert!(r.container.last().is_some());
}

#[test]
fn target_count_mismatch_is_rejected() {
    let cfg = ChoreoConfig::default();
    let viewport = ViewportSize::new(800.0, 600.0).unwrap();
    let choreo = Choreography::new(&cfg, viewport, DeviceClass::Compact, 1).unwrap();
    let err = FrameComposer::new(
        choreo.clone(),
        RenderTargets {
            elements: vec![RecordingTarget::new().boxed()],
            cover: RecordingTarget::new().boxed(),
            container: RecordingTarget::new().boxed(),
        },
        vec![RecordingTarget::new().boxed()],
    )
    .unwrap_err();
    assert!(err.to_string().contains("element render targets"));

    let err = FrameComposer::new(
        choreo,
        RenderTargets {
            elements: (0..20).map(|_| RecordingTarget::new().boxed()).collect(),
            cover: RecordingTarget::new().boxed(),
            container: RecordingTarget::new().boxed(),
        },
        vec![],
    )
    .unwrap_err();
    assert!(err.to_string().contains("word render targets"));
}

#[test]
fn closures_are_render_targets() {
    let seen = std::rc::Rc::new(std::cell::Cell::new(0u32));
    let seen2 = seen.clone();
    let cfg = ChoreoConfig {
        element_count: 1,
        ..ChoreoConfig::default()
    };
    let choreo = Choreography::new(
        &cfg,
        ViewportSize::new(800.0, 600.0).unwrap(),
        DeviceClass::Standard,
        0,
    )
    .unwrap();
    let mut composer = FrameComposer::new(
        choreo,
        RenderTargets {
            elements: vec![Box::new(move |_: &TargetState| seen2.set(seen2.get() + 1))],
            cover: Box::new(|_: &TargetState| {}),
            container: Box::new(|_: &TargetState| {}),
        },
        vec![],
    )
    .unwrap();
    composer.compose(0.1);
    composer.compose(0.2);
    assert_eq!(seen.get(), 2);
}

#[test]
fn cleared_live_flag_stops_composing() {
    let mut r = rig(4);
    let live = r.composer.live_flag();
    r.composer.compose(0.3);
    let before = all_states(&r);

    live.set(false);
    r.composer.compose(0.95);
    assert_eq!(all_states(&r), before);
    assert_eq!(r.cover.applied(), 1);
}
