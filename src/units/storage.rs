use serde::{Deserialize, Serialize};

/// 디지털 저장 용량 단위. 내부 기준은 바이트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
}

impl StorageUnit {
    pub const ALL: [StorageUnit; 4] = [
        StorageUnit::Byte,
        StorageUnit::Kilobyte,
        StorageUnit::Megabyte,
        StorageUnit::Gigabyte,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StorageUnit::Byte => "Byte",
            StorageUnit::Kilobyte => "Kilobyte",
            StorageUnit::Megabyte => "Megabyte",
            StorageUnit::Gigabyte => "Gigabyte",
        }
    }

    /// SI 접두어(1000배) 기준.
    pub fn factor(self) -> f64 {
        match self {
            StorageUnit::Byte => 1.0,
            StorageUnit::Kilobyte => 0.001,
            StorageUnit::Megabyte => 1e-6,
            StorageUnit::Gigabyte => 1e-9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" | "byte" | "bytes" => Some(StorageUnit::Byte),
            "kb" | "kilobyte" | "kilobytes" => Some(StorageUnit::Kilobyte),
            "mb" | "megabyte" | "megabytes" => Some(StorageUnit::Megabyte),
            "gb" | "gigabyte" | "gigabytes" => Some(StorageUnit::Gigabyte),
            _ => None,
        }
    }
}
