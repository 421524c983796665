use serde::{Deserialize, Serialize};

/// 주파수 단위. 내부 기준은 헤르츠이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Hertz,
        FrequencyUnit::Kilohertz,
        FrequencyUnit::Megahertz,
        FrequencyUnit::Gigahertz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hertz",
            FrequencyUnit::Kilohertz => "Kilohertz",
            FrequencyUnit::Megahertz => "Megahertz",
            FrequencyUnit::Gigahertz => "Gigahertz",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            FrequencyUnit::Hertz => 1.0,
            FrequencyUnit::Kilohertz => 0.001,
            FrequencyUnit::Megahertz => 1e-6,
            FrequencyUnit::Gigahertz => 1e-9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hz" | "hertz" => Some(FrequencyUnit::Hertz),
            "khz" | "kilohertz" => Some(FrequencyUnit::Kilohertz),
            "mhz" | "megahertz" => Some(FrequencyUnit::Megahertz),
            "ghz" | "gigahertz" => Some(FrequencyUnit::Gigahertz),
            _ => None,
        }
    }
}
