//! 아핀 변환 규칙(`y = (x + shift) × num/den + offset`)과 단위 쌍별 규칙 행렬.
//!
//! 배율은 정수 비율로 보관하므로 합성 시 9/5 × 5/9 같은 값이 정확히 1로 약분된다.
//! 합성 규칙은 테이블 생성 시점에 한 번만 계산되며, 변환 시에는 중간 단위를 거쳐
//! 부동소수점 연산을 반복하지 않는다.

use tracing::{debug, warn};

/// 하나의 아핀 변환 규칙.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineRule {
    shift: f64,
    num: u32,
    den: u32,
    offset: f64,
}

impl AffineRule {
    /// 항등 변환.
    pub const IDENTITY: AffineRule = AffineRule {
        shift: 0.0,
        num: 1,
        den: 1,
        offset: 0.0,
    };

    /// 이미 약분된 상수 비율로 규칙을 만든다. 상수 문맥에서 잘못된 비율은 컴파일 오류가 된다.
    pub const fn reduced(shift: f64, num: u32, den: u32, offset: f64) -> Self {
        assert!(num != 0 && den != 0, "ratio terms must be non-zero");
        assert!(gcd(num, den) == 1, "ratio must be in lowest terms");
        Self {
            shift,
            num,
            den,
            offset,
        }
    }

    /// `y = (x + shift) × num/den + offset` 규칙을 만든다. 비율은 약분된다.
    ///
    /// `num`, `den`이 0이면 `None`.
    pub fn new(shift: f64, num: u32, den: u32, offset: f64) -> Option<Self> {
        if num == 0 || den == 0 {
            return None;
        }
        let g = gcd(num, den);
        Some(Self {
            shift,
            num: num / g,
            den: den / g,
            offset,
        })
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// 약분된 배율 `(num, den)`.
    pub fn ratio(&self) -> (u32, u32) {
        (self.num, self.den)
    }

    /// `target = a × source + b` 형태의 계수 `(a, b)`.
    pub fn coefficients(&self) -> (f64, f64) {
        let a = self.num as f64 / self.den as f64;
        (a, self.shift * a + self.offset)
    }

    pub fn apply(&self, x: f64) -> f64 {
        (x + self.shift) * self.num as f64 / self.den as f64 + self.offset
    }

    /// `self`를 먼저 적용하고 `next`를 적용하는 규칙을 닫힌 형태로 구한다.
    ///
    /// 약분한 비율이 `u32`를 넘으면 `None`.
    pub fn then(&self, next: &AffineRule) -> Option<AffineRule> {
        let carry = self.offset + next.shift;
        let shift = if carry == 0.0 {
            self.shift
        } else {
            self.shift + carry * self.den as f64 / self.num as f64
        };
        let num = self.num as u64 * next.num as u64;
        let den = self.den as u64 * next.den as u64;
        let g = gcd_u64(num, den);
        Some(AffineRule {
            shift,
            num: u32::try_from(num / g).ok()?,
            den: u32::try_from(den / g).ok()?,
            offset: next.offset,
        })
    }

    /// 사람이 읽을 수 있는 계산식. 예: `(100.0 × 9/5) + 32 = 212.0000`
    pub fn describe(&self, value: f64, result: f64) -> String {
        let mut expr = format!("{value:?}");
        let scaled = self.num != self.den;
        if self.shift != 0.0 {
            expr = format!("{expr} {}", signed_term(self.shift));
            if scaled {
                expr = format!("({expr})");
            }
        }
        if scaled {
            expr = format!("{expr} × {}/{}", self.num, self.den);
        }
        if self.offset != 0.0 {
            if scaled {
                expr = format!("({expr})");
            }
            expr = format!("{expr} {}", signed_term(self.offset));
        }
        format!("{expr} = {result:.4}")
    }
}

fn signed_term(v: f64) -> String {
    let sign = if v < 0.0 { '-' } else { '+' };
    format!("{sign} {}", trim_number(v.abs()))
}

/// 상수 표시용. 소수 6자리에서 반올림한 뒤 뒤쪽 0을 제거한다.
pub(crate) fn trim_number(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

const fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn gcd_u64(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd_u64(b, a % b)
    }
}

/// 단위 쌍 `(source, target)`별 규칙을 담는 n×n 행렬.
#[derive(Debug, Clone)]
pub struct AffineMatrix {
    units: Vec<String>,
    rules: Vec<Option<AffineRule>>,
    overflow: Option<(usize, usize)>,
}

impl AffineMatrix {
    /// 직접 규칙으로부터 행렬을 만들고, 빠진 쌍은 중간 단위를 거친 합성으로 채운다.
    ///
    /// 더 이상 채울 쌍이 없을 때까지 반복하며 단위/중간 단위는 선언 순서대로 탐색한다.
    /// 연결되지 않은 쌍은 `None`으로 남는다. 모든 경로에서 합성 비율이 `u32`를 넘는 쌍도
    /// 비워 두고 `overflow()`로 보고한다.
    pub fn from_direct(units: Vec<String>, direct: &[(usize, usize, AffineRule)]) -> Self {
        let n = units.len();
        let mut rules = vec![None; n * n];
        for i in 0..n {
            rules[i * n + i] = Some(AffineRule::IDENTITY);
        }
        for &(s, t, rule) in direct {
            if s < n && t < n && s != t {
                rules[s * n + t] = Some(rule);
            }
        }

        loop {
            let mut changed = false;
            for s in 0..n {
                for t in 0..n {
                    if rules[s * n + t].is_some() {
                        continue;
                    }
                    let derived = (0..n).filter(|&p| p != s && p != t).find_map(|p| {
                        match (rules[s * n + p], rules[p * n + t]) {
                            (Some(first), Some(second)) => Some((p, first.then(&second)?)),
                            _ => None,
                        }
                    });
                    if let Some((p, rule)) = derived {
                        debug!(
                            from = %units[s],
                            via = %units[p],
                            to = %units[t],
                            "derived affine rule"
                        );
                        rules[s * n + t] = Some(rule);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        // 남은 빈 쌍 중 경로는 있지만 비율이 넘친 첫 쌍
        let overflow = (0..n)
            .flat_map(|s| (0..n).map(move |t| (s, t)))
            .filter(|&(s, t)| rules[s * n + t].is_none())
            .find(|&(s, t)| {
                (0..n).any(|p| match (rules[s * n + p], rules[p * n + t]) {
                    (Some(first), Some(second)) => first.then(&second).is_none(),
                    _ => false,
                })
            });
        if let Some((s, t)) = overflow {
            warn!(from = %units[s], to = %units[t], "composed ratio overflows");
        }

        Self {
            units,
            rules,
            overflow,
        }
    }

    /// 합성 비율이 넘쳐 비워 둔 첫 번째 쌍 `(source, target)`.
    pub fn overflow(&self) -> Option<(usize, usize)> {
        self.overflow
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn index_of(&self, unit: &str) -> Option<usize> {
        self.units.iter().position(|u| u == unit)
    }

    pub fn rule(&self, source: usize, target: usize) -> Option<AffineRule> {
        let n = self.units.len();
        if source >= n || target >= n {
            return None;
        }
        self.rules[source * n + target]
    }

    /// 모든 순서쌍에 규칙이 있는지 여부.
    pub fn is_complete(&self) -> bool {
        self.rules.iter().all(Option::is_some)
    }
}
