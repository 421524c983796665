use serde::{Deserialize, Serialize};

/// 평면각 단위. 내부 기준은 도(degree)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
    Gradian,
}

impl AngleUnit {
    pub const ALL: [AngleUnit; 3] = [
        AngleUnit::Degree,
        AngleUnit::Radian,
        AngleUnit::Gradian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AngleUnit::Degree => "Degree",
            AngleUnit::Radian => "Radian",
            AngleUnit::Gradian => "Gradian",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            AngleUnit::Degree => 1.0,
            AngleUnit::Radian => 0.0174533,
            AngleUnit::Gradian => 1.11111,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "°" | "degree" | "degrees" => Some(AngleUnit::Degree),
            "rad" | "radian" | "radians" => Some(AngleUnit::Radian),
            "grad" | "gon" | "gradian" | "gradians" => Some(AngleUnit::Gradian),
            _ => None,
        }
    }
}
