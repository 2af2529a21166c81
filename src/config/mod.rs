//! 설정 모듈

pub mod constants;
