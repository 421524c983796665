use serde::{Deserialize, Serialize};

use crate::units::*;

/// 표준 테이블이 다루는 측정 범주.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
    Time,
    Pressure,
    Energy,
    Frequency,
    PlaneAngle,
    DigitalStorage,
    DataTransferRate,
}

impl CategoryKind {
    /// 표준 테이블에 등록되는 순서.
    pub const ALL: [CategoryKind; 13] = [
        CategoryKind::Length,
        CategoryKind::Weight,
        CategoryKind::Temperature,
        CategoryKind::Area,
        CategoryKind::Volume,
        CategoryKind::Speed,
        CategoryKind::Time,
        CategoryKind::Pressure,
        CategoryKind::Energy,
        CategoryKind::Frequency,
        CategoryKind::PlaneAngle,
        CategoryKind::DigitalStorage,
        CategoryKind::DataTransferRate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::Length => "Length",
            CategoryKind::Weight => "Weight",
            CategoryKind::Temperature => "Temperature",
            CategoryKind::Area => "Area",
            CategoryKind::Volume => "Volume",
            CategoryKind::Speed => "Speed",
            CategoryKind::Time => "Time",
            CategoryKind::Pressure => "Pressure",
            CategoryKind::Energy => "Energy",
            CategoryKind::Frequency => "Frequency",
            CategoryKind::PlaneAngle => "Plane Angle",
            CategoryKind::DigitalStorage => "Digital Storage",
            CategoryKind::DataTransferRate => "Data Transfer Rate",
        }
    }

    /// 범주명을 해석한다. "mass"는 Weight로 취급한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Some(CategoryKind::Length),
            "weight" | "mass" => Some(CategoryKind::Weight),
            "temperature" | "temp" => Some(CategoryKind::Temperature),
            "area" => Some(CategoryKind::Area),
            "volume" => Some(CategoryKind::Volume),
            "speed" | "velocity" => Some(CategoryKind::Speed),
            "time" | "duration" => Some(CategoryKind::Time),
            "pressure" => Some(CategoryKind::Pressure),
            "energy" => Some(CategoryKind::Energy),
            "frequency" => Some(CategoryKind::Frequency),
            "plane angle" | "angle" => Some(CategoryKind::PlaneAngle),
            "digital storage" | "storage" | "data" => Some(CategoryKind::DigitalStorage),
            "data transfer rate" | "data rate" | "bandwidth" => {
                Some(CategoryKind::DataTransferRate)
            }
            _ => None,
        }
    }

    /// 기호나 별칭으로 입력된 단위를 표준 단위명으로 바꾼다.
    pub fn canonical_unit(self, s: &str) -> Option<&'static str> {
        match self {
            CategoryKind::Length => LengthUnit::parse(s).map(LengthUnit::name),
            CategoryKind::Weight => WeightUnit::parse(s).map(WeightUnit::name),
            CategoryKind::Temperature => TemperatureUnit::parse(s).map(TemperatureUnit::name),
            CategoryKind::Area => AreaUnit::parse(s).map(AreaUnit::name),
            CategoryKind::Volume => VolumeUnit::parse(s).map(VolumeUnit::name),
            CategoryKind::Speed => SpeedUnit::parse(s).map(SpeedUnit::name),
            CategoryKind::Time => TimeUnit::parse(s).map(TimeUnit::name),
            CategoryKind::Pressure => PressureUnit::parse(s).map(PressureUnit::name),
            CategoryKind::Energy => EnergyUnit::parse(s).map(EnergyUnit::name),
            CategoryKind::Frequency => FrequencyUnit::parse(s).map(FrequencyUnit::name),
            CategoryKind::PlaneAngle => AngleUnit::parse(s).map(AngleUnit::name),
            CategoryKind::DigitalStorage => StorageUnit::parse(s).map(StorageUnit::name),
            CategoryKind::DataTransferRate => DataRateUnit::parse(s).map(DataRateUnit::name),
        }
    }

    /// 두 단위를 모두 포함하는 첫 번째 범주를 찾는다.
    pub fn infer(from: &str, to: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.canonical_unit(from).is_some() && k.canonical_unit(to).is_some())
    }
}
