//! 온도(아핀 범주) 변환 회귀 테스트.
use unit_converter::conversion::{convert, ConversionError};
use unit_converter::table::UnitSet;
use unit_converter::ConversionTable;

fn temp(value: f64, from: &str, to: &str) -> f64 {
    convert(value, from, to, "Temperature")
        .expect("temperature conversion")
        .value
}

#[test]
fn celsius_fixed_points() {
    assert_eq!(temp(0.0, "Celsius", "Fahrenheit"), 32.0);
    assert_eq!(temp(100.0, "Celsius", "Fahrenheit"), 212.0);
    assert_eq!(temp(0.0, "Celsius", "Kelvin"), 273.15);
    assert_eq!(temp(32.0, "Fahrenheit", "Celsius"), 0.0);
    assert_eq!(temp(-40.0, "Celsius", "Fahrenheit"), -40.0);
}

#[test]
fn fahrenheit_to_kelvin_goes_through_celsius_exactly() {
    assert_eq!(temp(32.0, "Fahrenheit", "Kelvin"), 273.15);
    assert!((temp(212.0, "Fahrenheit", "Kelvin") - 373.15).abs() < 1e-9);
    let k_to_f = temp(273.15, "Kelvin", "Fahrenheit");
    assert!((k_to_f - 32.0).abs() < 1e-9);
}

#[test]
fn rankine_is_reachable_from_every_unit() {
    assert!((temp(0.0, "Kelvin", "Rankine")).abs() < 1e-12);
    assert!((temp(0.0, "Celsius", "Rankine") - 491.67).abs() < 1e-9);
    assert!((temp(32.0, "Fahrenheit", "Rankine") - 491.67).abs() < 1e-9);
    assert!((temp(491.67, "Rankine", "Fahrenheit") - 32.0).abs() < 1e-9);
    assert!((temp(491.67, "Rankine", "Celsius")).abs() < 1e-9);
}

#[test]
fn every_pair_round_trips() {
    let table = ConversionTable::standard();
    let units = table.units("Temperature").unwrap();
    for a in &units {
        for b in &units {
            for x in [-40.0, 0.0, 36.6, 1000.0] {
                let back = temp(temp(x, a, b), b, a);
                assert!((back - x).abs() < 1e-9, "{a} -> {b} -> {a}: {x} became {back}");
            }
        }
    }
}

#[test]
fn rule_matrix_is_complete() {
    let table = ConversionTable::standard();
    match table.category("Temperature").unwrap().unit_set() {
        UnitSet::Affine(matrix) => assert!(matrix.is_complete()),
        UnitSet::Linear(_) => panic!("temperature must be affine"),
    }
}

#[test]
fn affine_rule_coefficients() {
    let table = ConversionTable::standard();
    let (a, b) = table
        .affine_rule("Temperature", "Celsius", "Fahrenheit")
        .unwrap()
        .coefficients();
    assert!((a - 1.8).abs() < 1e-12);
    assert!((b - 32.0).abs() < 1e-12);

    let (a, b) = table
        .affine_rule("Temperature", "Fahrenheit", "Kelvin")
        .unwrap()
        .coefficients();
    assert!((a - 5.0 / 9.0).abs() < 1e-12);
    assert!((b - (273.15 - 160.0 / 9.0)).abs() < 1e-9);
}

#[test]
fn formulas_describe_the_rule() {
    let r = convert(100.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
    assert_eq!(r.formula, "(100.0 × 9/5) + 32 = 212.0000");
    let r = convert(32.0, "Fahrenheit", "Celsius", "Temperature").unwrap();
    assert_eq!(r.formula, "(32.0 - 32) × 5/9 = 0.0000");
    let r = convert(0.0, "Celsius", "Kelvin", "Temperature").unwrap();
    assert_eq!(r.formula, "0.0 + 273.15 = 273.1500");
    let r = convert(32.0, "Fahrenheit", "Kelvin", "Temperature").unwrap();
    assert_eq!(r.formula, "((32.0 - 32) × 5/9) + 273.15 = 273.1500");
}

#[test]
fn unscaled_derived_rules_have_no_parentheses() {
    let r = convert(32.0, "Fahrenheit", "Rankine", "Temperature").unwrap();
    assert_eq!(r.formula, "32.0 + 459.67 = 491.6700");
    let r = convert(491.67, "Rankine", "Fahrenheit", "Temperature").unwrap();
    assert_eq!(r.formula, "491.67 - 491.67 + 32 = 32.0000");
}

#[test]
fn temperature_has_no_factors() {
    let table = ConversionTable::standard();
    assert_eq!(
        table.factor("Temperature", "Celsius").unwrap_err(),
        ConversionError::NotLinearCategory("Temperature".into())
    );
    assert_eq!(
        table.affine_rule("Length", "Meter", "Foot").unwrap_err(),
        ConversionError::NotAffineCategory("Length".into())
    );
}

#[test]
fn unknown_temperature_unit() {
    assert_eq!(
        convert(1.0, "Celsius", "Delisle", "Temperature").unwrap_err(),
        ConversionError::UnknownUnit {
            category: "Temperature".into(),
            unit: "Delisle".into()
        }
    );
}
