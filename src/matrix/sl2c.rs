//! SL(2,ℂ) 행렬과 뫼비우스 작용 구현

use super::error::{InvalidArgument, Sl2cError};
use crate::complex::ExtendedComplex;
use crate::config::constants::Constants;
use crate::ops::prod;
use crate::utils::numeric::{close, first_non_finite};
use ndarray::Array1;
use num::complex::Complex64;
use num::{One, Zero};
use std::fmt;
use std::ops::Mul;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// 2×2 복소 행렬 `[[a, b], [c, d]]`
///
/// 리만 구면 위에서 뫼비우스 변환 `z ↦ (az + b) / (cz + d)`로 작용합니다.
/// 행렬식 `ad - bc = 1`은 생성 시 강제되지 않으며, 호출자가
/// [`determinant`](Self::determinant)나 [`is_unimodular`](Self::is_unimodular)로 확인합니다.
///
/// 모든 연산은 새 값을 반환하며 기존 값을 바꾸지 않습니다.
/// 특이 행렬의 역행렬은 에러 대신 NaN 성분을 가진 행렬이 되므로,
/// 퇴화가 가능한 계산 뒤에는 [`has_nan`](Self::has_nan)을 검사해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SL2C {
    a: Complex64,
    b: Complex64,
    c: Complex64,
    d: Complex64,
}

impl SL2C {
    /// 항등원 `[[1, 0], [0, 1]]`
    pub const UNIT: SL2C = SL2C::new(ONE, ZERO, ZERO, ONE);

    /// 네 성분으로 행렬 생성 (행렬식은 검사하지 않음)
    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        SL2C { a, b, c, d }
    }

    /// 확장 복소평면 값으로 행렬 생성
    ///
    /// ∞이거나 NaN인 성분은 `InvalidArgument`로 거부합니다.
    pub fn try_from_extended(
        a: ExtendedComplex,
        b: ExtendedComplex,
        c: ExtendedComplex,
        d: ExtendedComplex,
    ) -> Result<Self, Sl2cError> {
        let mut entries = [ZERO; 4];
        for ((slot, value), entry) in entries
            .iter_mut()
            .zip([a, b, c, d])
            .zip(Constants::ENTRY_NAMES)
        {
            *slot = Self::finite_entry(value, entry).map_err(|err| {
                log::debug!("rejected matrix entry: {}", err);
                err
            })?;
        }
        let [a, b, c, d] = entries;
        Ok(SL2C::new(a, b, c, d))
    }

    fn finite_entry(value: ExtendedComplex, entry: &'static str) -> Result<Complex64, InvalidArgument> {
        match value {
            ExtendedComplex::Infinity => Err(InvalidArgument::InfiniteEntry { entry }),
            ExtendedComplex::Finite(z) if z.is_nan() => Err(InvalidArgument::NanEntry { entry }),
            ExtendedComplex::Finite(z) if !z.is_finite() => {
                Err(InvalidArgument::InfiniteEntry { entry })
            }
            ExtendedComplex::Finite(z) => Ok(z),
        }
    }

    /// `linear_array`의 역: `[a.re, a.im, b.re, b.im, c.re, c.im, d.re, d.im]`에서 생성
    pub fn from_linear_array(values: &[f64]) -> Result<Self, Sl2cError> {
        if values.len() != Constants::LINEAR_ARRAY_LEN {
            log::debug!(
                "rejected linear array of length {} (expected {})",
                values.len(),
                Constants::LINEAR_ARRAY_LEN
            );
            return Err(InvalidArgument::WrongLength {
                actual: values.len(),
                expected: Constants::LINEAR_ARRAY_LEN,
            }
            .into());
        }
        if let Some((index, value)) = first_non_finite(values) {
            log::debug!("rejected linear array: scalar {} is {}", index, value);
            return Err(InvalidArgument::NonFinite { index, value }.into());
        }

        let entry = |i: usize| Complex64::new(values[2 * i], values[2 * i + 1]);
        Ok(SL2C::new(entry(0), entry(1), entry(2), entry(3)))
    }

    pub fn a(&self) -> Complex64 {
        self.a
    }

    pub fn b(&self) -> Complex64 {
        self.b
    }

    pub fn c(&self) -> Complex64 {
        self.c
    }

    pub fn d(&self) -> Complex64 {
        self.d
    }

    /// 행렬 곱 `self · other` (비가환)
    pub fn mult(&self, other: &SL2C) -> SL2C {
        SL2C::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    /// `m`에 의한 켤레: `m⁻¹ · self · m`
    ///
    /// `m`이 특이 행렬이면 결과에 NaN이 섞입니다.
    pub fn conjugate(&self, m: &SL2C) -> SL2C {
        prod(&prod(&m.inverse(), self), m)
    }

    /// 확장 복소평면 위의 점에 대한 뫼비우스 작용
    ///
    /// - `∞`의 상은 `c`만으로 결정됩니다: `c ≠ 0`이면 `a / c`, 아니면 `∞`.
    /// - 유한한 점에서 분모 `cz + d`가 정확히 0이면 (극점) `∞`.
    /// - 그 외에는 `(az + b) / (cz + d)`.
    pub fn apply(&self, point: ExtendedComplex) -> ExtendedComplex {
        let z = match point {
            ExtendedComplex::Infinity => {
                log::trace!("applying {} to the point at infinity", self);
                return if self.c.is_zero() {
                    ExtendedComplex::Infinity
                } else {
                    ExtendedComplex::Finite(self.a / self.c)
                };
            }
            ExtendedComplex::Finite(z) => z,
        };

        let numerator = self.a * z + self.b;
        let denominator = self.c * z + self.d;
        if denominator.is_zero() {
            log::trace!("{} is the pole of {}", z, self);
            ExtendedComplex::Infinity
        } else {
            ExtendedComplex::Finite(numerator / denominator)
        }
    }

    /// 극점: ∞로 보내지는 점 `-d / c` (`c = 0`이면 ∞ 자신)
    pub fn pole(&self) -> ExtendedComplex {
        if self.c.is_zero() {
            ExtendedComplex::Infinity
        } else {
            ExtendedComplex::Finite(-self.d / self.c)
        }
    }

    /// 행렬식 `ad - bc`
    pub fn determinant(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// 모든 성분에 스칼라 `k`를 곱함
    pub fn scale(&self, k: Complex64) -> SL2C {
        SL2C::new(self.a * k, self.b * k, self.c * k, self.d * k)
    }

    /// 역행렬 `[[d, -b], [-c, a]] / det`
    ///
    /// 행렬식이 0이면 에러 없이 NaN 성분을 가진 행렬을 반환합니다.
    pub fn inverse(&self) -> SL2C {
        let det = self.determinant();
        if det.is_zero() {
            log::debug!("inverting singular matrix {}", self);
        }
        SL2C::new(self.d, -self.b, -self.c, self.a).scale(Complex64::one() / det)
    }

    /// 대각합 `a + d`
    pub fn trace(&self) -> Complex64 {
        self.a + self.d
    }

    pub fn has_nan(&self) -> bool {
        self.entries().iter().any(|z| z.is_nan())
    }

    /// 행 우선 순서로 펼친 스칼라 배열 `[a.re, a.im, b.re, b.im, c.re, c.im, d.re, d.im]`
    pub fn linear_array(&self) -> Array1<f64> {
        self.entries()
            .iter()
            .flat_map(|&z| ExtendedComplex::Finite(z).linear_array())
            .collect()
    }

    /// `|det - 1| ≤ eps` 인지 검사 (정규화는 하지 않음)
    pub fn is_unimodular(&self, eps: f64) -> bool {
        close(self.determinant(), Complex64::one(), eps)
    }

    /// 성분별 허용오차 비교
    pub fn approx_eq(&self, other: &SL2C, eps: f64) -> bool {
        self.entries()
            .iter()
            .zip(other.entries())
            .all(|(&u, v)| close(u, v, eps))
    }

    fn entries(&self) -> [Complex64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Default for SL2C {
    fn default() -> Self {
        SL2C::UNIT
    }
}

impl Mul for SL2C {
    type Output = SL2C;

    fn mul(self, rhs: SL2C) -> SL2C {
        self.mult(&rhs)
    }
}

impl Mul<&SL2C> for &SL2C {
    type Output = SL2C;

    fn mul(self, rhs: &SL2C) -> SL2C {
        self.mult(rhs)
    }
}

impl Mul<Complex64> for SL2C {
    type Output = SL2C;

    fn mul(self, k: Complex64) -> SL2C {
        self.scale(k)
    }
}

impl fmt::Display for SL2C {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}
