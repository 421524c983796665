//! 테이블 빌더 검증 및 합성 규칙 누락 테스트.
use unit_converter::affine::AffineRule;
use unit_converter::conversion::{ConversionEngine, ConversionError};
use unit_converter::table::{ConversionTable, TableError};

#[test]
fn standard_table_is_valid_and_ordered() {
    let table = ConversionTable::standard();
    table.check().expect("standard table");
    assert_eq!(
        table.categories(),
        [
            "Length",
            "Weight",
            "Temperature",
            "Area",
            "Volume",
            "Speed",
            "Time",
            "Pressure",
            "Energy",
            "Frequency",
            "Plane Angle",
            "Digital Storage",
            "Data Transfer Rate",
        ]
    );
    assert_eq!(
        table.units("Temperature").unwrap(),
        ["Celsius", "Fahrenheit", "Kelvin", "Rankine"]
    );
    assert_eq!(table.units("Length").unwrap()[..5], ["Meter", "Centimeter", "Kilometer", "Inch", "Foot"]);
    assert_eq!(table.factor("Length", "Meter").unwrap(), 1.0);
}

#[test]
fn builder_rejects_bad_factors() {
    let err = ConversionTable::builder()
        .linear("Length", &[("Meter", 1.0), ("Broken", 0.0)])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::InvalidFactor {
            category: "Length".into(),
            unit: "Broken".into(),
            factor: 0.0
        }
    );
    assert!(ConversionTable::builder()
        .linear("Length", &[("Meter", -2.0)])
        .is_err());
}

#[test]
fn builder_rejects_duplicates_and_empties() {
    let err = ConversionTable::builder()
        .linear("Length", &[("Meter", 1.0), ("Meter", 2.0)])
        .unwrap_err();
    assert!(matches!(err, TableError::DuplicateUnit { .. }));

    let err = ConversionTable::builder()
        .linear("Length", &[("Meter", 1.0)])
        .and_then(|b| b.linear("Length", &[("Foot", 3.28084)]))
        .unwrap_err();
    assert_eq!(err, TableError::DuplicateCategory("Length".into()));

    let empty: [(&str, f64); 0] = [];
    let err = ConversionTable::builder().linear("Nothing", &empty).unwrap_err();
    assert_eq!(err, TableError::EmptyCategory("Nothing".into()));

    assert_eq!(
        ConversionTable::builder().build().unwrap_err(),
        TableError::NoCategories
    );
}

#[test]
fn rule_with_unknown_unit_is_rejected() {
    let rule = AffineRule::new(0.0, 1, 1, 1.0).unwrap();
    let err = ConversionTable::builder()
        .affine("Scale", &["A", "B"], &[("A", "Z", rule)])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::UnknownRuleUnit {
            category: "Scale".into(),
            unit: "Z".into()
        }
    );
}

#[test]
fn composed_ratio_overflow_is_rejected() {
    let big = AffineRule::new(0.0, 65537, 1, 0.0).unwrap();
    let err = ConversionTable::builder()
        .affine("Scale", &["A", "B", "C"], &[("A", "B", big), ("B", "C", big)])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::RatioOverflow {
            category: "Scale".into(),
            from: "A".into(),
            to: "C".into()
        }
    );
}

#[test]
fn disconnected_affine_pair_reports_missing_rule() {
    let rule = AffineRule::new(0.0, 2, 1, 1.0).unwrap();
    let table = ConversionTable::builder()
        .affine("Scale", &["A", "B", "C"], &[("A", "B", rule)])
        .and_then(|b| b.build())
        .expect("custom table");

    let engine = ConversionEngine::new(&table);
    assert_eq!(engine.convert(3.0, "A", "B", "Scale").unwrap().value, 7.0);
    assert_eq!(
        engine.convert(3.0, "A", "C", "Scale").unwrap_err(),
        ConversionError::MissingConversionRule {
            category: "Scale".into(),
            from: "A".into(),
            to: "C".into()
        }
    );
    assert!(table.affine_rule("Scale", "B", "A").is_err());
}

#[test]
fn custom_linear_table_converts() {
    let table = ConversionTable::builder()
        .linear("Data", &[("Byte", 1.0), ("Bit", 8.0), ("Kilobyte", 0.001)])
        .and_then(|b| b.build())
        .unwrap();
    let engine = ConversionEngine::new(&table);
    let r = engine.convert(2.0, "Byte", "Bit", "Data").unwrap();
    assert_eq!(r.value, 16.0);
    assert_eq!(r.formula, "2.0 × 8.0000");
}
