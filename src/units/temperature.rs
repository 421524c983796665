use serde::{Deserialize, Serialize};

use crate::affine::AffineRule;

/// 온도 단위를 정의한다. 공통 배율이 없으므로 단위 쌍별 아핀 규칙으로 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Rankine => "Rankine",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "r" | "rankine" | "°r" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }
}

// (x × 9/5) + 32
const C_TO_F: AffineRule = AffineRule::reduced(0.0, 9, 5, 32.0);
// (x - 32) × 5/9
const F_TO_C: AffineRule = AffineRule::reduced(-32.0, 5, 9, 0.0);
const C_TO_K: AffineRule = AffineRule::reduced(0.0, 1, 1, 273.15);
const K_TO_C: AffineRule = AffineRule::reduced(0.0, 1, 1, -273.15);
const K_TO_R: AffineRule = AffineRule::reduced(0.0, 9, 5, 0.0);
const R_TO_K: AffineRule = AffineRule::reduced(0.0, 5, 9, 0.0);

/// 직접 정의된 온도 변환 규칙. 나머지 쌍은 테이블 생성 시 합성된다.
pub fn direct_rules() -> Vec<(TemperatureUnit, TemperatureUnit, AffineRule)> {
    use TemperatureUnit::*;
    vec![
        (Celsius, Fahrenheit, C_TO_F),
        (Fahrenheit, Celsius, F_TO_C),
        (Celsius, Kelvin, C_TO_K),
        (Kelvin, Celsius, K_TO_C),
        (Kelvin, Rankine, K_TO_R),
        (Rankine, Kelvin, R_TO_K),
    ]
}
