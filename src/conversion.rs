use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::table::ConversionTable;

/// 동일 단위 변환 결과에 쓰이는 계산식 문자열.
pub const NO_CONVERSION_NEEDED: &str = "No conversion needed";

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 테이블에 없는 범주
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// 범주에 속하지 않는 단위
    #[error("unknown unit {unit} for category {category}")]
    UnknownUnit { category: String, unit: String },
    /// 배율 조회를 아핀 범주에 요청함
    #[error("category {0} has no multiplicative factors")]
    NotLinearCategory(String),
    /// 아핀 규칙 조회를 선형 범주에 요청함
    #[error("category {0} has no affine rules")]
    NotAffineCategory(String),
    /// 직접 규칙도 합성 규칙도 없는 쌍. 테이블 작성 오류를 뜻한다.
    #[error("no conversion rule from {from} to {to} in category {category}")]
    MissingConversionRule {
        category: String,
        from: String,
        to: String,
    },
    /// NaN 또는 무한대 입력
    #[error("value must be a finite number, got {0}")]
    InvalidValue(f64),
}

/// 입력/변환 단위가 같을 때의 처리 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityPolicy {
    /// 범주/단위 검증 없이 즉시 입력값을 돌려준다.
    #[default]
    ShortCircuit,
    /// 범주와 단위를 먼저 검증한 뒤 입력값을 돌려준다.
    Validate,
}

/// 한 번의 변환 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// 전체 정밀도의 변환값
    pub value: f64,
    /// 계산 과정을 설명하는 문자열
    pub formula: String,
}

/// 변환 엔진. 읽기 전용 테이블만 참조하므로 상태가 없다.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    table: &'a ConversionTable,
    identity: IdentityPolicy,
}

impl Default for ConversionEngine<'static> {
    fn default() -> Self {
        Self::new(ConversionTable::standard())
    }
}

impl<'a> ConversionEngine<'a> {
    pub fn new(table: &'a ConversionTable) -> Self {
        Self {
            table,
            identity: IdentityPolicy::default(),
        }
    }

    pub fn with_identity_policy(mut self, policy: IdentityPolicy) -> Self {
        self.identity = policy;
        self
    }

    pub fn table(&self) -> &'a ConversionTable {
        self.table
    }

    pub fn identity_policy(&self) -> IdentityPolicy {
        self.identity
    }

    /// `category` 안에서 `value`를 `from_unit`에서 `to_unit`으로 변환한다.
    pub fn convert(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let result = self.convert_inner(value, from_unit, to_unit, category);
        match &result {
            Ok(r) => debug!(
                category,
                from = from_unit,
                to = to_unit,
                value,
                result = r.value,
                "converted"
            ),
            Err(e) => warn!(category, from = from_unit, to = to_unit, error = %e, "conversion failed"),
        }
        result
    }

    fn convert_inner(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: &str,
    ) -> Result<ConversionResult, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value));
        }

        if from_unit == to_unit {
            if self.identity == IdentityPolicy::Validate {
                self.table.require_unit(category, from_unit)?;
            }
            return Ok(ConversionResult {
                value,
                formula: NO_CONVERSION_NEEDED.to_string(),
            });
        }

        if self.table.is_affine(category)? {
            let rule = self.table.affine_rule(category, from_unit, to_unit)?;
            let converted = rule.apply(value);
            return Ok(ConversionResult {
                value: converted,
                formula: rule.describe(value, converted),
            });
        }

        let factor =
            self.table.factor(category, to_unit)? / self.table.factor(category, from_unit)?;
        Ok(ConversionResult {
            value: value * factor,
            formula: format!("{value:?} × {factor:.4}"),
        })
    }
}

/// 표준 테이블과 기본 정책으로 변환한다.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<ConversionResult, ConversionError> {
    ConversionEngine::default().convert(value, from_unit, to_unit, category)
}

/// 히스토리에 쌓이는 한 줄 표시 문자열. 예: `1.0 Meter = 100.0000 Centimeter`
pub fn history_line(
    value: f64,
    from_unit: &str,
    result: &ConversionResult,
    to_unit: &str,
    precision: usize,
) -> String {
    format!(
        "{value:?} {from_unit} = {:.*} {to_unit}",
        precision, result.value
    )
}
