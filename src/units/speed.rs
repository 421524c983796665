use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 4] = [
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
        SpeedUnit::Knot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "Meter per second",
            SpeedUnit::KilometerPerHour => "Kilometer per hour",
            SpeedUnit::MilePerHour => "Mile per hour",
            SpeedUnit::Knot => "Knot",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 3.6,
            SpeedUnit::MilePerHour => 2.23694,
            SpeedUnit::Knot => 1.94384,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "mps" | "meter per second" | "meters per second" => {
                Some(SpeedUnit::MeterPerSecond)
            }
            "km/h" | "kmh" | "kph" | "kilometer per hour" | "kilometers per hour" => {
                Some(SpeedUnit::KilometerPerHour)
            }
            "mph" | "mile per hour" | "miles per hour" => Some(SpeedUnit::MilePerHour),
            "kn" | "kt" | "knot" | "knots" => Some(SpeedUnit::Knot),
            _ => None,
        }
    }
}
