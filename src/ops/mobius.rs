//! 뫼비우스 변환 관련 연산

use crate::complex::ExtendedComplex;
use crate::matrix::SL2C;

/// 행렬 곱 `m1 · m2` (`m1.mult(m2)`와 동일)
pub fn prod(m1: &SL2C, m2: &SL2C) -> SL2C {
    m1.mult(m2)
}

/// 뫼비우스 작용: z ↦ (az + b) / (cz + d)
pub fn mobius_apply(m: &SL2C, z: ExtendedComplex) -> ExtendedComplex {
    m.apply(z)
}

/// 켤레: p⁻¹ · m · p
pub fn conjugate_by(m: &SL2C, p: &SL2C) -> SL2C {
    m.conjugate(p)
}
