use serde::{Deserialize, Serialize};

/// 무게(질량) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
    Milligram,
    Tonne,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
        WeightUnit::Milligram,
        WeightUnit::Tonne,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram",
            WeightUnit::Gram => "Gram",
            WeightUnit::Pound => "Pound",
            WeightUnit::Ounce => "Ounce",
            WeightUnit::Milligram => "Milligram",
            WeightUnit::Tonne => "Tonne",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 1000.0,
            WeightUnit::Pound => 2.20462,
            WeightUnit::Ounce => 35.274,
            WeightUnit::Milligram => 1_000_000.0,
            WeightUnit::Tonne => 0.001,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Some(WeightUnit::Kilogram),
            "g" | "gram" | "grams" => Some(WeightUnit::Gram),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pound),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Ounce),
            "mg" | "milligram" | "milligrams" => Some(WeightUnit::Milligram),
            "t" | "tonne" | "tonnes" => Some(WeightUnit::Tonne),
            _ => None,
        }
    }
}
