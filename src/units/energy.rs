use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    KilowattHour,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 4] = [
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Calorie,
        EnergyUnit::KilowattHour,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "Joule",
            EnergyUnit::Kilojoule => "Kilojoule",
            EnergyUnit::Calorie => "Calorie",
            EnergyUnit::KilowattHour => "Kilowatt-hour",
        }
    }

    /// 열화학 칼로리 기준.
    pub fn factor(self) -> f64 {
        match self {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::Kilojoule => 0.001,
            EnergyUnit::Calorie => 0.239006,
            EnergyUnit::KilowattHour => 2.77778e-7,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "j" | "joule" | "joules" => Some(EnergyUnit::Joule),
            "kj" | "kilojoule" | "kilojoules" => Some(EnergyUnit::Kilojoule),
            "cal" | "calorie" | "calories" => Some(EnergyUnit::Calorie),
            "kwh" | "kilowatt-hour" | "kilowatt hour" => Some(EnergyUnit::KilowattHour),
            _ => None,
        }
    }
}
