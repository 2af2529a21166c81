//! SL2C: 리만 구면 위 뫼비우스 변환을 위한 SL(2,ℂ) 행렬 라이브러리
//!
//! 이 라이브러리는 2×2 복소 행렬의 군 연산(곱, 역원, 켤레)과
//! 확장 복소평면 ℂ ∪ {∞} 위의 뫼비우스 작용을 제공합니다.
//! 무한원점은 부동소수점 무한대가 아닌 별도의 값으로 다룹니다.

pub mod complex;
pub mod config;
pub mod matrix;
pub mod ops;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use complex::ExtendedComplex;
pub use config::constants::Constants;
pub use matrix::{InvalidArgument, Sl2cError, SL2C};
pub use num::complex::Complex64;
pub use ops::{conjugate_by, mobius_apply, prod};

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        conjugate_by, mobius_apply, prod, Complex64, Constants, ExtendedComplex, InvalidArgument,
        Sl2cError, SL2C,
    };
}
