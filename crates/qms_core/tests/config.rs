use qms_core::{init_from_config, ConfigError, LoggingConfig, QmsConfig};
use std::path::PathBuf;

#[test]
fn loads_config_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let path = dir.path().join("qms.json");
    let raw = serde_json::json!({
        "logging": { "level": "warn", "dir": log_dir },
        "workflow": {
            "acting_user": "Quality Lead",
            "strict_transitions": true,
            "review_window_days": 14
        }
    });
    std::fs::write(&path, raw.to_string()).unwrap();

    let config = QmsConfig::load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.dir, Some(log_dir));
    assert_eq!(config.workflow.acting_user, "Quality Lead");
    assert!(config.workflow.strict_transitions);
    assert_eq!(config.workflow.review_window_days, 14);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = QmsConfig::load_from_path(&path).unwrap_err();
    match &err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn relative_log_dir_and_zero_window_are_rejected() {
    let err = QmsConfig::from_json_str(r#"{"logging":{"dir":"logs"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "logging.dir", .. }));

    let err =
        QmsConfig::from_json_str(r#"{"workflow":{"review_window_days":0}}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            key: "workflow.review_window_days",
            ..
        }
    ));
}

#[test]
fn config_without_log_dir_leaves_logging_off() {
    let config = LoggingConfig {
        level: "info".to_string(),
        dir: None,
    };
    assert!(!init_from_config(&config).unwrap());
    assert!(qms_core::logging_status().is_none());
}

#[test]
fn defaults_round_trip_through_json() {
    let config = QmsConfig::default();
    let raw = serde_json::to_string(&config).unwrap();
    let parsed = QmsConfig::from_json_str(&raw).unwrap();
    assert_eq!(parsed, config);
    assert_eq!(parsed.logging.dir, None::<PathBuf>);
}
