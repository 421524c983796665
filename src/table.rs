//! 범주 → 단위/배율 테이블.
//!
//! 선형 범주는 단위별 배율 `f(unit)`을 가지며 `기준값 = value / f(source)`,
//! `결과 = 기준값 × f(target)`으로 해석한다. 배율 1인 기준 단위는 암묵적이다.
//! 아핀 범주(온도)는 단위 쌍별 규칙 행렬을 가진다. 테이블은 생성 후 변경되지 않으므로
//! 여러 스레드에서 동기화 없이 읽을 수 있다.

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::info;

use crate::affine::{AffineMatrix, AffineRule};
use crate::category::CategoryKind;
use crate::conversion::ConversionError;
use crate::units::*;

/// 테이블 작성 시 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
    #[error("category {0} has no units")]
    EmptyCategory(String),
    #[error("duplicate unit {unit} in category {category}")]
    DuplicateUnit { category: String, unit: String },
    #[error("unit {unit} in category {category} has invalid factor {factor}")]
    InvalidFactor {
        category: String,
        unit: String,
        factor: f64,
    },
    #[error("rule in category {category} refers to unknown unit {unit}")]
    UnknownRuleUnit { category: String, unit: String },
    #[error("composed rule {from} -> {to} in category {category} has a ratio beyond u32")]
    RatioOverflow {
        category: String,
        from: String,
        to: String,
    },
    #[error("conversion table has no categories")]
    NoCategories,
}

/// 범주의 단위 집합.
#[derive(Debug, Clone)]
pub enum UnitSet {
    /// 단위명과 배율(> 0)
    Linear(Vec<(String, f64)>),
    /// 단위 쌍별 아핀 규칙
    Affine(AffineMatrix),
}

/// 이름이 붙은 단위 집합.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    units: UnitSet,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_set(&self) -> &UnitSet {
        &self.units
    }

    pub fn is_affine(&self) -> bool {
        matches!(self.units, UnitSet::Affine(_))
    }

    pub fn unit_names(&self) -> Vec<&str> {
        match &self.units {
            UnitSet::Linear(units) => units.iter().map(|(n, _)| n.as_str()).collect(),
            UnitSet::Affine(matrix) => matrix.units().iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        match &self.units {
            UnitSet::Linear(units) => units.iter().any(|(n, _)| n == unit),
            UnitSet::Affine(matrix) => matrix.index_of(unit).is_some(),
        }
    }

    fn check(&self) -> Result<(), TableError> {
        let names = self.unit_names();
        if names.is_empty() {
            return Err(TableError::EmptyCategory(self.name.clone()));
        }
        for (i, unit) in names.iter().enumerate() {
            if names[..i].contains(unit) {
                return Err(TableError::DuplicateUnit {
                    category: self.name.clone(),
                    unit: unit.to_string(),
                });
            }
        }
        if let UnitSet::Affine(matrix) = &self.units {
            if let Some((s, t)) = matrix.overflow() {
                return Err(TableError::RatioOverflow {
                    category: self.name.clone(),
                    from: names[s].to_string(),
                    to: names[t].to_string(),
                });
            }
        }
        if let UnitSet::Linear(units) = &self.units {
            if let Some((unit, factor)) = units
                .iter()
                .find(|(_, f)| !f.is_finite() || *f <= 0.0)
            {
                return Err(TableError::InvalidFactor {
                    category: self.name.clone(),
                    unit: unit.clone(),
                    factor: *factor,
                });
            }
        }
        Ok(())
    }
}

/// 변환 테이블.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    categories: Vec<Category>,
}

static STANDARD: Lazy<ConversionTable> = Lazy::new(|| {
    let table = standard_table();
    info!(categories = table.categories.len(), "standard conversion table ready");
    table
});

impl ConversionTable {
    /// 프로세스 전역 표준 테이블(Length, Weight, Temperature, Area, Volume).
    pub fn standard() -> &'static ConversionTable {
        &STANDARD
    }

    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// 등록 순서대로 범주명을 반환한다.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, name: &str) -> Result<&Category, ConversionError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
    }

    pub fn units(&self, category: &str) -> Result<Vec<&str>, ConversionError> {
        Ok(self.category(category)?.unit_names())
    }

    pub fn is_affine(&self, category: &str) -> Result<bool, ConversionError> {
        Ok(self.category(category)?.is_affine())
    }

    /// 범주에 단위가 없으면 `UnknownUnit`.
    pub fn require_unit(&self, category: &str, unit: &str) -> Result<(), ConversionError> {
        if self.category(category)?.contains(unit) {
            Ok(())
        } else {
            Err(unknown_unit(category, unit))
        }
    }

    /// 선형 범주에서 단위의 배율을 조회한다.
    pub fn factor(&self, category: &str, unit: &str) -> Result<f64, ConversionError> {
        match &self.category(category)?.units {
            UnitSet::Affine(_) => Err(ConversionError::NotLinearCategory(category.to_string())),
            UnitSet::Linear(units) => units
                .iter()
                .find(|(n, _)| n == unit)
                .map(|(_, f)| *f)
                .ok_or_else(|| unknown_unit(category, unit)),
        }
    }

    /// 아핀 범주에서 `source → target` 규칙을 조회한다. 같은 단위는 항등 규칙이다.
    pub fn affine_rule(
        &self,
        category: &str,
        source: &str,
        target: &str,
    ) -> Result<AffineRule, ConversionError> {
        let matrix = match &self.category(category)?.units {
            UnitSet::Affine(matrix) => matrix,
            UnitSet::Linear(_) => {
                return Err(ConversionError::NotAffineCategory(category.to_string()))
            }
        };
        let s = matrix
            .index_of(source)
            .ok_or_else(|| unknown_unit(category, source))?;
        let t = matrix
            .index_of(target)
            .ok_or_else(|| unknown_unit(category, target))?;
        matrix
            .rule(s, t)
            .ok_or_else(|| ConversionError::MissingConversionRule {
                category: category.to_string(),
                from: source.to_string(),
                to: target.to_string(),
            })
    }

    /// 모든 범주의 배율/중복 여부를 검증한다.
    pub fn check(&self) -> Result<(), TableError> {
        if self.categories.is_empty() {
            return Err(TableError::NoCategories);
        }
        for (i, c) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|p| p.name == c.name) {
                return Err(TableError::DuplicateCategory(c.name.clone()));
            }
            c.check()?;
        }
        Ok(())
    }
}

fn unknown_unit(category: &str, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.to_string(),
        unit: unit.to_string(),
    }
}

/// 사용자 정의 테이블을 만든다. 범주는 추가한 순서대로 유지된다.
#[derive(Debug, Default)]
pub struct TableBuilder {
    categories: Vec<Category>,
}

impl TableBuilder {
    pub fn linear<S: AsRef<str>>(
        mut self,
        name: &str,
        units: &[(S, f64)],
    ) -> Result<Self, TableError> {
        let category = Category {
            name: name.to_string(),
            units: UnitSet::Linear(
                units
                    .iter()
                    .map(|(n, f)| (n.as_ref().to_string(), *f))
                    .collect(),
            ),
        };
        self.push(category)?;
        Ok(self)
    }

    /// 아핀 범주를 추가한다. `rules`에 없는 쌍은 중간 단위를 거쳐 합성한다.
    pub fn affine<S: AsRef<str>>(
        mut self,
        name: &str,
        units: &[S],
        rules: &[(S, S, AffineRule)],
    ) -> Result<Self, TableError> {
        let names: Vec<String> = units.iter().map(|u| u.as_ref().to_string()).collect();
        let index = |unit: &str| {
            names
                .iter()
                .position(|n| n == unit)
                .ok_or_else(|| TableError::UnknownRuleUnit {
                    category: name.to_string(),
                    unit: unit.to_string(),
                })
        };
        let mut direct = Vec::with_capacity(rules.len());
        for (s, t, rule) in rules {
            direct.push((index(s.as_ref())?, index(t.as_ref())?, *rule));
        }
        let category = Category {
            name: name.to_string(),
            units: UnitSet::Affine(AffineMatrix::from_direct(names, &direct)),
        };
        self.push(category)?;
        Ok(self)
    }

    fn push(&mut self, category: Category) -> Result<(), TableError> {
        if self.categories.iter().any(|c| c.name == category.name) {
            return Err(TableError::DuplicateCategory(category.name));
        }
        category.check()?;
        self.categories.push(category);
        Ok(())
    }

    pub fn build(self) -> Result<ConversionTable, TableError> {
        if self.categories.is_empty() {
            return Err(TableError::NoCategories);
        }
        Ok(ConversionTable {
            categories: self.categories,
        })
    }
}

fn linear_units<U: Copy>(all: &[U], name: fn(U) -> &'static str, factor: fn(U) -> f64) -> UnitSet {
    UnitSet::Linear(
        all.iter()
            .map(|&u| (name(u).to_string(), factor(u)))
            .collect(),
    )
}

fn standard_table() -> ConversionTable {
    let categories = CategoryKind::ALL
        .into_iter()
        .map(|kind| {
            let units = match kind {
                CategoryKind::Length => {
                    linear_units(&LengthUnit::ALL, LengthUnit::name, LengthUnit::factor)
                }
                CategoryKind::Weight => {
                    linear_units(&WeightUnit::ALL, WeightUnit::name, WeightUnit::factor)
                }
                CategoryKind::Area => {
                    linear_units(&AreaUnit::ALL, AreaUnit::name, AreaUnit::factor)
                }
                CategoryKind::Volume => {
                    linear_units(&VolumeUnit::ALL, VolumeUnit::name, VolumeUnit::factor)
                }
                CategoryKind::Speed => {
                    linear_units(&SpeedUnit::ALL, SpeedUnit::name, SpeedUnit::factor)
                }
                CategoryKind::Time => {
                    linear_units(&TimeUnit::ALL, TimeUnit::name, TimeUnit::factor)
                }
                CategoryKind::Pressure => {
                    linear_units(&PressureUnit::ALL, PressureUnit::name, PressureUnit::factor)
                }
                CategoryKind::Energy => {
                    linear_units(&EnergyUnit::ALL, EnergyUnit::name, EnergyUnit::factor)
                }
                CategoryKind::Frequency => {
                    linear_units(&FrequencyUnit::ALL, FrequencyUnit::name, FrequencyUnit::factor)
                }
                CategoryKind::PlaneAngle => {
                    linear_units(&AngleUnit::ALL, AngleUnit::name, AngleUnit::factor)
                }
                CategoryKind::DigitalStorage => {
                    linear_units(&StorageUnit::ALL, StorageUnit::name, StorageUnit::factor)
                }
                CategoryKind::DataTransferRate => {
                    linear_units(&DataRateUnit::ALL, DataRateUnit::name, DataRateUnit::factor)
                }
                CategoryKind::Temperature => {
                    let all = TemperatureUnit::ALL;
                    let position = |u: TemperatureUnit| all.iter().position(|&x| x == u);
                    let direct: Vec<_> = temperature::direct_rules()
                        .into_iter()
                        .filter_map(|(s, t, rule)| Some((position(s)?, position(t)?, rule)))
                        .collect();
                    let names = all.iter().map(|u| u.name().to_string()).collect();
                    UnitSet::Affine(AffineMatrix::from_direct(names, &direct))
                }
            };
            Category {
                name: kind.name().to_string(),
                units,
            }
        })
        .collect();
    ConversionTable { categories }
}
