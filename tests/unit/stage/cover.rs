use super::*;

fn stage() -> CoverStage {
    CoverStage::from(&CoverConfig::default())
}

#[test]
fn reveal_starts_at_threshold() {
    let s = stage().compute(0.7);
    assert_eq!(s, CoverState {
        z: -1000.0,
        scale: 0.0
    });
    assert_eq!(stage().compute(0.2), stage().zero_state());
    assert_eq!(stage().compute(-5.0), stage().zero_state());
}

#[test]
fn reveal_completes_at_095() {
    let s = stage().compute(0.95);
    assert!(s.z.abs() < 1e-9);
    assert!((s.scale - 1.0).abs() < 1e-12);
}

#[test]
fn scale_saturates_while_depth_continues() {
    let s = stage().compute(1.2);
    assert_eq!(s.scale, 1.0);
    assert!((s.z - 1000.0).abs() < 1e-9);
}

#[test]
fn scale_reaches_one_halfway_through_the_window() {
    let s = stage().compute(0.825);
    assert!((s.scale - 1.0).abs() < 1e-12);
    assert!((s.z + 500.0).abs() < 1e-9);
}
