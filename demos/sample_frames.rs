use std::rc::Rc;

use spotlyte::{
    ChoreoConfig, Engine, EngineParts, FixedViewport, RecordingTarget, RenderTargets, ScrollPin,
    TargetState, ViewportSize, WhitespaceSegmenter,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ChoreoConfig::default();
    let size = ViewportSize::new(1440.0, 900.0)?;
    let pin = Rc::new(ScrollPin::new(size.height, size, &cfg.pin)?);

    let elements: Vec<RecordingTarget> = (0..cfg.element_count)
        .map(|_| RecordingTarget::new())
        .collect();
    let cover = RecordingTarget::new();
    let container = RecordingTarget::new();
    let segmenter = WhitespaceSegmenter::new();

    let mut engine = Engine::new(
        cfg.clone(),
        EngineParts {
            progress: pin.clone(),
            viewport: Box::new(FixedViewport::new(size, cfg.compact_breakpoint)),
            segmenter: Box::new(segmenter.clone()),
            targets: RenderTargets {
                elements: elements.iter().map(RecordingTarget::boxed).collect(),
                cover: cover.boxed(),
                container: container.boxed(),
            },
        },
    )?;
    engine.setup()?;

    let end = size.height + pin.length() * 1.1;
    for i in 0..=10 {
        let offset = end * f64::from(i) / 10.0;
        pin.scroll_to(offset);

        let cover_scale = match cover.last() {
            Some(TargetState::Cover(c)) => c.scale,
            _ => f64::NAN,
        };
        let radius = match container.last() {
            Some(TargetState::Container(c)) => c.bottom_radius,
            _ => 0.0,
        };
        let visible_words = segmenter
            .words()
            .iter()
            .filter(|(_, t)| matches!(t.last(), Some(TargetState::Word(w)) if w.opacity > 0.0))
            .count();
        println!(
            "offset {offset:>8.1}  progress {:.3}  cover.scale {cover_scale:.3}  radius {radius:>5.1}  words {visible_words}",
            pin.progress_at(offset)
        );
    }

    engine.dispose();
    Ok(())
}
