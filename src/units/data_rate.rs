use serde::{Deserialize, Serialize};

/// 데이터 전송률 단위. 내부 기준은 bit/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataRateUnit {
    BitPerSecond,
    KilobitPerSecond,
    MegabitPerSecond,
    GigabitPerSecond,
}

impl DataRateUnit {
    pub const ALL: [DataRateUnit; 4] = [
        DataRateUnit::BitPerSecond,
        DataRateUnit::KilobitPerSecond,
        DataRateUnit::MegabitPerSecond,
        DataRateUnit::GigabitPerSecond,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DataRateUnit::BitPerSecond => "Bit per second",
            DataRateUnit::KilobitPerSecond => "Kilobit per second",
            DataRateUnit::MegabitPerSecond => "Megabit per second",
            DataRateUnit::GigabitPerSecond => "Gigabit per second",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            DataRateUnit::BitPerSecond => 1.0,
            DataRateUnit::KilobitPerSecond => 0.001,
            DataRateUnit::MegabitPerSecond => 1e-6,
            DataRateUnit::GigabitPerSecond => 1e-9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bps" | "bit/s" | "bit per second" | "bits per second" => {
                Some(DataRateUnit::BitPerSecond)
            }
            "kbps" | "kbit/s" | "kilobit per second" => Some(DataRateUnit::KilobitPerSecond),
            "mbps" | "mbit/s" | "megabit per second" => Some(DataRateUnit::MegabitPerSecond),
            "gbps" | "gbit/s" | "gigabit per second" => Some(DataRateUnit::GigabitPerSecond),
            _ => None,
        }
    }
}
