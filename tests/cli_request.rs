//! CLI 입력(별칭, 범주 추정) 정규화 및 세션 초기화 테스트.
use unit_converter::app::{open_session, resolve_request, AppError};
use unit_converter::config::Config;
use unit_converter::conversion::{ConversionEngine, IdentityPolicy, NO_CONVERSION_NEEDED};
use unit_converter::ConversionTable;

#[test]
fn symbols_resolve_to_table_names() {
    let req = resolve_request(None, "m", "cm", IdentityPolicy::ShortCircuit).unwrap();
    assert_eq!(req.category, "Length");
    assert_eq!(req.from, "Meter");
    assert_eq!(req.to, "Centimeter");

    let req = resolve_request(None, "C", "f", IdentityPolicy::ShortCircuit).unwrap();
    assert_eq!(req.category, "Temperature");
    assert_eq!((req.from.as_str(), req.to.as_str()), ("Celsius", "Fahrenheit"));

    let req = resolve_request(Some("mass"), "kg", "lb", IdentityPolicy::ShortCircuit).unwrap();
    assert_eq!(req.category, "Weight");
    assert_eq!(req.to, "Pound");
}

#[test]
fn unrelated_units_cannot_be_inferred() {
    let err = resolve_request(None, "m", "kg", IdentityPolicy::ShortCircuit).unwrap_err();
    assert!(matches!(err, AppError::CannotInferCategory { .. }));
}

#[test]
fn new_categories_are_inferred_from_symbols() {
    let cases = [
        ("km/h", "mph", "Speed"),
        ("min", "h", "Time"),
        ("kpa", "psi", "Pressure"),
        ("kwh", "cal", "Energy"),
        ("mhz", "ghz", "Frequency"),
        ("deg", "rad", "Plane Angle"),
        ("kb", "mb", "Digital Storage"),
        ("kbps", "mbps", "Data Transfer Rate"),
    ];
    for (from, to, category) in cases {
        let req = resolve_request(None, from, to, IdentityPolicy::ShortCircuit).unwrap();
        assert_eq!(req.category, category, "{from} -> {to}");
    }
    let req = resolve_request(None, "m", "mi", IdentityPolicy::ShortCircuit).unwrap();
    assert_eq!((req.category.as_str(), req.to.as_str()), ("Length", "Mile"));
}

#[test]
fn identical_unknown_units_without_category_follow_policy() {
    let req = resolve_request(None, "Parsec", "Parsec", IdentityPolicy::ShortCircuit).unwrap();
    assert_eq!(req.from, "Parsec");
    let r = ConversionEngine::default()
        .convert(2.0, &req.from, &req.to, &req.category)
        .unwrap();
    assert_eq!(r.value, 2.0);
    assert_eq!(r.formula, NO_CONVERSION_NEEDED);

    let err = resolve_request(None, "Parsec", "Parsec", IdentityPolicy::Validate).unwrap_err();
    assert!(matches!(err, AppError::CannotInferCategory { .. }));
}

#[test]
fn unknown_names_pass_through_unchanged() {
    let req = resolve_request(Some("Fuel Economy"), "mpg", "kpl", IdentityPolicy::Validate).unwrap();
    assert_eq!(req.category, "Fuel Economy");
    assert_eq!(req.from, "mpg");

    let req = resolve_request(Some("Length"), "m", "furlong", IdentityPolicy::Validate).unwrap();
    assert_eq!(req.from, "Meter");
    assert_eq!(req.to, "furlong");
}

#[test]
fn session_uses_configured_defaults() {
    let table = ConversionTable::standard();
    let cfg = Config {
        default_category: "Weight".into(),
        default_from: "Pound".into(),
        default_to: "Gram".into(),
        ..Config::default()
    };
    let s = open_session(table, &cfg).unwrap();
    assert_eq!((s.category(), s.from_unit(), s.to_unit()), ("Weight", "Pound", "Gram"));
}

#[test]
fn bad_defaults_fall_back_to_first_category() {
    let table = ConversionTable::standard();
    let cfg = Config {
        default_category: "Fuel Economy".into(),
        default_from: "Miles per gallon".into(),
        default_to: "Foot".into(),
        ..Config::default()
    };
    let s = open_session(table, &cfg).unwrap();
    assert_eq!(s.category(), "Length");
    assert_eq!(s.from_unit(), "Meter");
    assert_eq!(s.to_unit(), "Foot");
}
