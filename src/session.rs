//! 대화형 세션 상태. 선택된 범주/단위와 변환 히스토리를 명시적으로 보관한다.
//!
//! 히스토리는 세션 수명 동안만 유지되며 저장하지 않는다.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::conversion::{history_line, ConversionEngine, ConversionError, ConversionResult};
use crate::table::ConversionTable;

/// 기본 표시 소수 자릿수.
pub const DEFAULT_PRECISION: usize = 4;
/// 기본 히스토리 보관 개수.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Session {
    category: String,
    from_unit: String,
    to_unit: String,
    history: VecDeque<String>,
    history_limit: usize,
    precision: usize,
}

impl Session {
    /// 범주의 첫 두 단위를 선택한 상태로 세션을 연다.
    pub fn new(table: &ConversionTable, category: &str) -> Result<Self, ConversionError> {
        let units = table.units(category)?;
        let first = units.first().copied().unwrap_or_default().to_string();
        let second = units.get(1).copied().unwrap_or(first.as_str()).to_string();
        Ok(Self {
            category: category.to_string(),
            from_unit: first,
            to_unit: second,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            precision: DEFAULT_PRECISION,
        })
    }

    /// 보관 개수. 0이면 제한하지 않는다.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// 범주를 바꾼다. 현재 단위가 새 범주에 없으면 첫 번째 단위로 되돌린다.
    pub fn select_category(
        &mut self,
        table: &ConversionTable,
        category: &str,
    ) -> Result<(), ConversionError> {
        let units = table.units(category)?;
        let fallback = units.first().copied().unwrap_or_default();
        if !units.contains(&self.from_unit.as_str()) {
            self.from_unit = fallback.to_string();
        }
        if !units.contains(&self.to_unit.as_str()) {
            self.to_unit = fallback.to_string();
        }
        self.category = category.to_string();
        debug!(category, from = %self.from_unit, to = %self.to_unit, "category selected");
        Ok(())
    }

    pub fn set_from(&mut self, table: &ConversionTable, unit: &str) -> Result<(), ConversionError> {
        table.require_unit(&self.category, unit)?;
        self.from_unit = unit.to_string();
        Ok(())
    }

    pub fn set_to(&mut self, table: &ConversionTable, unit: &str) -> Result<(), ConversionError> {
        table.require_unit(&self.category, unit)?;
        self.to_unit = unit.to_string();
        Ok(())
    }

    /// 입력 단위와 변환 단위를 맞바꾼다.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// 현재 선택으로 변환하고 성공 시 히스토리에 한 줄을 추가한다.
    pub fn convert(
        &mut self,
        engine: &ConversionEngine<'_>,
        value: f64,
    ) -> Result<ConversionResult, ConversionError> {
        let result = engine.convert(value, &self.from_unit, &self.to_unit, &self.category)?;
        let line = history_line(value, &self.from_unit, &result, &self.to_unit, self.precision);
        self.history.push_back(line);
        self.trim_history();
        Ok(result)
    }

    /// 오래된 것부터.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// 최근 것부터.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.history.iter().rev().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_history(&mut self) {
        info!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn trim_history(&mut self) {
        if self.history_limit == 0 {
            return;
        }
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
