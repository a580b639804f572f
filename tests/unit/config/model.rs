use super::*;

#[test]
fn default_config_is_valid_reference_choreography() {
    let cfg = ChoreoConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.element_count, 20);
    assert_eq!(cfg.swarm.directions.len(), 20);
    assert_eq!(cfg.swarm.directions[0], Vec2::new(1.3, 0.7));
    assert_eq!(cfg.swarm.directions[19], Vec2::new(1.25, -0.2));
    assert_eq!(cfg.cover.start, 0.7);
    assert_eq!(cfg.container.radius_start, 0.8);
    assert_eq!(cfg.text.start, 0.55);
}

#[test]
fn empty_json_object_yields_defaults() {
    let cfg = ChoreoConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ChoreoConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = ChoreoConfig::from_json_str(
        r#"{ "element_count": 3, "text": { "word_stagger": 0.1 }, "headline": "HELLO" }"#,
    )
    .unwrap();
    assert_eq!(cfg.element_count, 3);
    assert_eq!(cfg.text.word_stagger, 0.1);
    assert_eq!(cfg.text.start, 0.55);
    assert_eq!(cfg.headline, "HELLO");
    cfg.validate().unwrap();
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ChoreoConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ChoreoError::Serde(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = ChoreoConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}

#[test]
fn element_count_is_bounded_by_directions() {
    let mut cfg = ChoreoConfig::default();
    cfg.element_count = 21;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("exceeds"));

    cfg.element_count = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn non_positive_spans_are_rejected() {
    let mut cfg = ChoreoConfig::default();
    cfg.text.span = 0.0;
    assert!(cfg.validate().unwrap_err().to_string().contains("text.span"));

    let mut cfg = ChoreoConfig::default();
    cfg.container.scale_span = -0.15;
    assert!(cfg.validate().is_err());

    let mut cfg = ChoreoConfig::default();
    cfg.cover.rate = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn non_finite_direction_is_rejected() {
    let mut cfg = ChoreoConfig::default();
    cfg.swarm.directions[4] = Vec2::new(f64::INFINITY, 0.0);
    assert!(
        cfg.validate()
            .unwrap_err()
            .to_string()
            .contains("swarm.directions[4]")
    );
}

#[test]
fn config_json_roundtrips_through_file() {
    let dir = std::path::PathBuf::from("target").join("config_model");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cfg.json");
    let cfg = ChoreoConfig::default();
    std::fs::write(&path, serde_json::to_vec_pretty(&cfg).unwrap()).unwrap();
    assert_eq!(ChoreoConfig::from_path(&path).unwrap(), cfg);
}
