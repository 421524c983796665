//! 범주별 단위 정의 모음.

pub mod angle;
pub mod area;
pub mod data_rate;
pub mod energy;
pub mod frequency;
pub mod length;
pub mod pressure;
pub mod speed;
pub mod storage;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use angle::AngleUnit;
pub use area::AreaUnit;
pub use data_rate::DataRateUnit;
pub use energy::EnergyUnit;
pub use frequency::FrequencyUnit;
pub use length::LengthUnit;
pub use pressure::PressureUnit;
pub use speed::SpeedUnit;
pub use storage::StorageUnit;
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;
