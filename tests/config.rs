//! 설정 파일 로드/저장 테스트.
use unit_converter::config::{load, load_or_default, Config, ConfigError};
use unit_converter::conversion::IdentityPolicy;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn plain_load_does_not_create_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn plain_load_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "precision = 2\n").unwrap();
    assert_eq!(load(&path).unwrap().precision, 2);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".into(),
        history_limit: 5,
        precision: 2,
        identity_policy: IdentityPolicy::Validate,
        default_category: "Temperature".into(),
        default_from: "Celsius".into(),
        default_to: "Fahrenheit".into(),
    };
    cfg.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("identity_policy = \"validate\""), "{text}");
    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "history_limit = 3\nidentity_policy = \"short-circuit\"\n").unwrap();
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.history_limit, 3);
    assert_eq!(cfg.identity_policy, IdentityPolicy::ShortCircuit);
    assert_eq!(cfg.precision, 4);
    assert_eq!(cfg.default_category, "Length");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "history_limit = \"many\"").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
}
