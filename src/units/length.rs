use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이며 factor는 1미터당 해당 단위의 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Kilometer,
    Inch,
    Foot,
    Millimeter,
    Yard,
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Millimeter,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meter",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Kilometer => "Kilometer",
            LengthUnit::Inch => "Inch",
            LengthUnit::Foot => "Foot",
            LengthUnit::Millimeter => "Millimeter",
            LengthUnit::Yard => "Yard",
            LengthUnit::Mile => "Mile",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 100.0,
            LengthUnit::Kilometer => 0.001,
            LengthUnit::Inch => 39.3701,
            LengthUnit::Foot => 3.28084,
            LengthUnit::Millimeter => 1000.0,
            LengthUnit::Yard => 1.09361,
            LengthUnit::Mile => 0.000621371,
        }
    }

    /// 기호/별칭을 해석한다. 대소문자는 구분하지 않는다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "metre" | "meters" => Some(LengthUnit::Meter),
            "cm" | "centimeter" | "centimetre" => Some(LengthUnit::Centimeter),
            "km" | "kilometer" | "kilometre" => Some(LengthUnit::Kilometer),
            "in" | "inch" | "inches" | "\"" => Some(LengthUnit::Inch),
            "ft" | "foot" | "feet" | "'" => Some(LengthUnit::Foot),
            "mm" | "millimeter" | "millimetre" => Some(LengthUnit::Millimeter),
            "yd" | "yard" | "yards" => Some(LengthUnit::Yard),
            "mi" | "mile" | "miles" => Some(LengthUnit::Mile),
            _ => None,
        }
    }
}
