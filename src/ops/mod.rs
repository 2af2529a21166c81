//! 자유 함수 형태의 SL(2,ℂ) 연산자 모듈

mod mobius;

pub use mobius::{conjugate_by, mobius_apply, prod};
