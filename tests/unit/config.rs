use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = GrimConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas().unwrap(), Canvas::new(950, 950).unwrap());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg: GrimConfig = serde_json::from_str(r#"{"width": 1200, "token_size": 140}"#).unwrap();
    assert_eq!(cfg.width, 1200);
    assert_eq!(cfg.token_size, 140);
    assert_eq!(cfg.height, 950);
    assert_eq!(cfg.reminder_size, 64);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<GrimConfig>(r#"{"widht": 10}"#).is_err());
}

#[test]
fn validate_rejects_degenerate_sizes() {
    let cfg = GrimConfig {
        token_size: 0,
        ..GrimConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = GrimConfig {
        height: 150,
        ..GrimConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("no room"));

    let cfg = GrimConfig {
        token_padding: 200,
        ..GrimConfig::default()
    };
    assert!(cfg.validate().is_err());
}
