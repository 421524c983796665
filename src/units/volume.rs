use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    Gallon,
    Cup,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 5] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicMeter,
        VolumeUnit::Gallon,
        VolumeUnit::Cup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "Liter",
            VolumeUnit::Milliliter => "Milliliter",
            VolumeUnit::CubicMeter => "Cubic Meter",
            VolumeUnit::Gallon => "Gallon",
            VolumeUnit::Cup => "Cup",
        }
    }

    /// US 갤런/컵 기준.
    pub fn factor(self) -> f64 {
        match self {
            VolumeUnit::Liter => 1.0,
            VolumeUnit::Milliliter => 1000.0,
            VolumeUnit::CubicMeter => 0.001,
            VolumeUnit::Gallon => 0.264172,
            VolumeUnit::Cup => 4.22675,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "liter" | "litre" | "liters" => Some(VolumeUnit::Liter),
            "ml" | "milliliter" | "millilitre" => Some(VolumeUnit::Milliliter),
            "m3" | "m^3" | "cubic meter" => Some(VolumeUnit::CubicMeter),
            "gal" | "gallon" | "gallons" => Some(VolumeUnit::Gallon),
            "cup" | "cups" => Some(VolumeUnit::Cup),
            _ => None,
        }
    }
}
