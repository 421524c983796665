use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 파스칼이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    Kilopascal,
    Bar,
    Psi,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 4] = [
        PressureUnit::Pascal,
        PressureUnit::Kilopascal,
        PressureUnit::Bar,
        PressureUnit::Psi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pascal",
            PressureUnit::Kilopascal => "Kilopascal",
            PressureUnit::Bar => "Bar",
            PressureUnit::Psi => "PSI",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::Kilopascal => 0.001,
            PressureUnit::Bar => 1e-5,
            PressureUnit::Psi => 0.000145038,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pa" | "pascal" | "pascals" => Some(PressureUnit::Pascal),
            "kpa" | "kilopascal" | "kilopascals" => Some(PressureUnit::Kilopascal),
            "bar" | "bars" => Some(PressureUnit::Bar),
            "psi" => Some(PressureUnit::Psi),
            _ => None,
        }
    }
}
