use thiserror::Error;

/// API 경계에서 거부된 인자의 상세 사유
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidArgument {
    #[error("Wrong number of scalars (actual: {actual}, expected: {expected})")]
    WrongLength {
        actual: usize,
        expected: usize,
    },
    #[error("Scalar at index {index} is not finite ({value})")]
    NonFinite {
        index: usize,
        value: f64,
    },
    #[error("Entry {entry} is not a complex value")]
    NotComplex {
        entry: &'static str,
    },
    #[error("Entry {entry} is infinite; the point at infinity is not a matrix entry")]
    InfiniteEntry {
        entry: &'static str,
    },
    #[error("Entry {entry} is NaN")]
    NanEntry {
        entry: &'static str,
    },
}

/// SL(2,ℂ) 행렬 생성/변환 시 발생하는 에러
///
/// 특이 행렬의 역행렬 같은 수치적 퇴화는 에러가 아닙니다.
/// 결과 성분에 NaN으로 나타나며 [`SL2C::has_nan`](crate::SL2C::has_nan)으로 검사합니다.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Sl2cError {
    #[error("Invalid argument")]
    InvalidArgument(#[from] InvalidArgument),
}
