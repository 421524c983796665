use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareKilometer,
    SquareFoot,
    Acre,
    Hectare,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareFoot,
        AreaUnit::Acre,
        AreaUnit::Hectare,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "Square Meter",
            AreaUnit::SquareCentimeter => "Square Centimeter",
            AreaUnit::SquareKilometer => "Square Kilometer",
            AreaUnit::SquareFoot => "Square Foot",
            AreaUnit::Acre => "Acre",
            AreaUnit::Hectare => "Hectare",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareCentimeter => 10_000.0,
            AreaUnit::SquareKilometer => 0.000001,
            AreaUnit::SquareFoot => 10.7639,
            AreaUnit::Acre => 0.000247105,
            AreaUnit::Hectare => 0.0001,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m2" | "m^2" | "sqm" | "square meter" => Some(AreaUnit::SquareMeter),
            "cm2" | "cm^2" | "square centimeter" => Some(AreaUnit::SquareCentimeter),
            "km2" | "km^2" | "square kilometer" => Some(AreaUnit::SquareKilometer),
            "ft2" | "ft^2" | "sqft" | "square foot" => Some(AreaUnit::SquareFoot),
            "ac" | "acre" | "acres" => Some(AreaUnit::Acre),
            "ha" | "hectare" | "hectares" => Some(AreaUnit::Hectare),
            _ => None,
        }
    }
}
