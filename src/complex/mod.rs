//! 확장 복소평면 ℂ ∪ {∞} (리만 구면) 구현
//!
//! 무한원점은 IEEE 부동소수점 무한대가 아니라 별도의 값 `Infinity`로 표현됩니다.
//! 오버플로로 생긴 무한대와 리만 구면의 한 점 ∞를 구분하기 위함입니다.
//! 정의되지 않는 연산(∞ - ∞, 0 · ∞, 0 / 0 등)의 결과는 `Finite(NaN + NaN·i)`입니다.

use num::complex::Complex64;
use num::Zero;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

const NAN: Complex64 = Complex64::new(f64::NAN, f64::NAN);

/// 리만 구면 위의 한 점
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtendedComplex {
    /// 유한한 복소수
    Finite(Complex64),
    /// 무한원점 ∞
    Infinity,
}

use ExtendedComplex::{Finite, Infinity};

impl ExtendedComplex {
    pub const ZERO: Self = Finite(Complex64::new(0.0, 0.0));
    pub const ONE: Self = Finite(Complex64::new(1.0, 0.0));
    pub const MINUS_ONE: Self = Finite(Complex64::new(-1.0, 0.0));
    pub const INFINITY: Self = Infinity;

    /// 실수부, 허수부로 유한한 점 생성
    pub const fn new(re: f64, im: f64) -> Self {
        Finite(Complex64::new(re, im))
    }

    /// 유한한 값이면 그 복소수를 반환
    pub fn finite(self) -> Option<Complex64> {
        match self {
            Finite(z) => Some(z),
            Infinity => None,
        }
    }

    pub fn is_infinity(self) -> bool {
        matches!(self, Infinity)
    }

    /// 정확히 0인지 검사 (허용오차 없음)
    pub fn is_zero(self) -> bool {
        matches!(self, Finite(z) if z.is_zero())
    }

    pub fn has_nan(self) -> bool {
        matches!(self, Finite(z) if z.is_nan())
    }

    /// [실수부, 허수부]로 펼치기. ∞는 [+inf, +inf]로 인코딩됩니다.
    pub fn linear_array(self) -> [f64; 2] {
        match self {
            Finite(z) => [z.re, z.im],
            Infinity => [f64::INFINITY, f64::INFINITY],
        }
    }
}

impl Default for ExtendedComplex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Complex64> for ExtendedComplex {
    fn from(z: Complex64) -> Self {
        Finite(z)
    }
}

impl Neg for ExtendedComplex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Finite(z) => Finite(-z),
            Infinity => Infinity,
        }
    }
}

impl Add for ExtendedComplex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Finite(u), Finite(v)) => Finite(u + v),
            (Infinity, Infinity) => Finite(NAN),
            (Infinity, Finite(z)) | (Finite(z), Infinity) => {
                if z.is_nan() {
                    Finite(NAN)
                } else {
                    Infinity
                }
            }
        }
    }
}

impl Sub for ExtendedComplex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for ExtendedComplex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Finite(u), Finite(v)) => Finite(u * v),
            (Infinity, Infinity) => Infinity,
            (Infinity, Finite(z)) | (Finite(z), Infinity) => {
                // 0 · ∞ 은 정의되지 않음
                if z.is_zero() || z.is_nan() {
                    Finite(NAN)
                } else {
                    Infinity
                }
            }
        }
    }
}

impl Div for ExtendedComplex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Finite(u), Finite(v)) if v.is_zero() => {
                if u.is_zero() || u.is_nan() {
                    Finite(NAN)
                } else {
                    Infinity
                }
            }
            (Finite(u), Finite(v)) => Finite(u / v),
            (Finite(u), Infinity) => {
                if u.is_nan() {
                    Finite(NAN)
                } else {
                    Self::ZERO
                }
            }
            (Infinity, Finite(v)) => {
                if v.is_nan() {
                    Finite(NAN)
                } else {
                    Infinity
                }
            }
            (Infinity, Infinity) => Finite(NAN),
        }
    }
}

impl fmt::Display for ExtendedComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finite(z) => write!(f, "{}", z),
            Infinity => f.write_str("∞"),
        }
    }
}
