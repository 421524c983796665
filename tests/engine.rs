//! 선형 범주 변환 및 오류 경로 테스트.
use unit_converter::conversion::{
    convert, history_line, ConversionEngine, ConversionError, IdentityPolicy,
    NO_CONVERSION_NEEDED,
};
use unit_converter::ConversionTable;

#[test]
fn meter_to_centimeter() {
    let r = convert(1.0, "Meter", "Centimeter", "Length").expect("length conversion");
    assert_eq!(r.value, 100.0);
    assert_eq!(r.formula, "1.0 × 100.0000");
}

#[test]
fn factor_below_one_is_rendered_with_four_decimals() {
    let r = convert(2500.0, "Meter", "Kilometer", "Length").unwrap();
    assert!((r.value - 2.5).abs() < 1e-12);
    assert_eq!(r.formula, "2500.0 × 0.0010");
}

#[test]
fn weight_uses_relative_factor() {
    let r = convert(1.0, "Pound", "Ounce", "Weight").unwrap();
    let expected = 35.274 / 2.20462;
    assert!((r.value - expected).abs() < 1e-12, "got {}", r.value);
}

#[test]
fn extended_categories_use_their_factors() {
    let r = convert(36.0, "Kilometer per hour", "Meter per second", "Speed").unwrap();
    assert!((r.value - 10.0).abs() < 1e-12);
    let r = convert(2.0, "Hour", "Second", "Time").unwrap();
    assert!((r.value - 7200.0).abs() < 0.01, "got {}", r.value);
    let r = convert(1.0, "Bar", "Kilopascal", "Pressure").unwrap();
    assert!((r.value - 100.0).abs() < 1e-9);
    let r = convert(1.0, "Gigabyte", "Megabyte", "Digital Storage").unwrap();
    assert!((r.value - 1000.0).abs() < 1e-9);
    let r = convert(180.0, "Degree", "Radian", "Plane Angle").unwrap();
    assert!((r.value - std::f64::consts::PI).abs() < 1e-4);
    assert_eq!(r.formula, "180.0 × 0.0175");
}

#[test]
fn identity_holds_for_every_unit() {
    let table = ConversionTable::standard();
    for category in table.categories() {
        for unit in table.units(category).unwrap() {
            for x in [-12.5, 0.0, 1.0, 1e9] {
                let r = convert(x, unit, unit, category).unwrap();
                assert_eq!(r.value, x);
                assert_eq!(r.formula, NO_CONVERSION_NEEDED);
            }
        }
    }
}

#[test]
fn linear_round_trip_returns_input() {
    let table = ConversionTable::standard();
    for category in table.categories() {
        if table.is_affine(category).unwrap() {
            continue;
        }
        let units = table.units(category).unwrap();
        for a in &units {
            for b in &units {
                let x = 123.456;
                let there = convert(x, a, b, category).unwrap().value;
                let back = convert(there, b, a, category).unwrap().value;
                assert!(
                    ((back - x) / x).abs() < 1e-9,
                    "{category}: {a} -> {b} -> {a} gave {back}"
                );
            }
        }
    }
}

#[test]
fn factors_are_multiplicative_inverses() {
    let table = ConversionTable::standard();
    for category in ["Length", "Weight", "Area", "Volume"] {
        let units = table.units(category).unwrap();
        for a in &units {
            for b in &units {
                let fa = table.factor(category, a).unwrap();
                let fb = table.factor(category, b).unwrap();
                assert!(fa > 0.0 && fb > 0.0);
                assert!((fb / fa * (fa / fb) - 1.0).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn unit_from_other_category_is_rejected() {
    let err = convert(1.0, "Meter", "Kilogram", "Length").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            category: "Length".into(),
            unit: "Kilogram".into()
        }
    );
}

#[test]
fn unknown_category_is_rejected() {
    let err = convert(1.0, "Meter", "Centimeter", "Fuel Economy").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("Fuel Economy".into()));
    assert_eq!(err.to_string(), "unknown category: Fuel Economy");
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = convert(v, "Meter", "Meter", "Length").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidValue(_)));
    }
}

#[test]
fn short_circuit_accepts_unknown_identical_units() {
    let engine = ConversionEngine::default();
    assert_eq!(engine.identity_policy(), IdentityPolicy::ShortCircuit);
    let r = engine.convert(3.0, "Parsec", "Parsec", "Nowhere").unwrap();
    assert_eq!(r.value, 3.0);
    assert_eq!(r.formula, NO_CONVERSION_NEEDED);
}

#[test]
fn validate_policy_checks_identical_units() {
    let engine = ConversionEngine::default().with_identity_policy(IdentityPolicy::Validate);
    assert_eq!(
        engine.convert(3.0, "Parsec", "Parsec", "Length").unwrap_err(),
        ConversionError::UnknownUnit {
            category: "Length".into(),
            unit: "Parsec".into()
        }
    );
    assert_eq!(
        engine.convert(3.0, "Meter", "Meter", "Nowhere").unwrap_err(),
        ConversionError::UnknownCategory("Nowhere".into())
    );
    let r = engine.convert(3.0, "Meter", "Meter", "Length").unwrap();
    assert_eq!(r.formula, NO_CONVERSION_NEEDED);
}

#[test]
fn history_line_uses_requested_precision() {
    let r = convert(1.0, "Meter", "Centimeter", "Length").unwrap();
    assert_eq!(
        history_line(1.0, "Meter", &r, "Centimeter", 4),
        "1.0 Meter = 100.0000 Centimeter"
    );
    assert_eq!(
        history_line(1.0, "Meter", &r, "Centimeter", 2),
        "1.0 Meter = 100.00 Centimeter"
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = ConversionEngine::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                engine
                    .convert(i as f64, "Meter", "Centimeter", "Length")
                    .unwrap()
                    .value
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), i as f64 * 100.0);
    }
}
