//! 행렬 연산에 쓰이는 상수값 정의

/// SL(2,ℂ) 연산의 비교 허용오차 및 평탄화 관련 상수들
pub struct Constants;

impl Constants {
    /// 기본 비교 허용오차 (행렬식 검사, 근사 비교)
    pub const EPS: f64 = 1e-9;

    /// 성분 하나(복소수)가 펼쳐지는 스칼라 개수
    pub const SCALARS_PER_ENTRY: usize = 2;

    /// `linear_array` 길이: 성분 4개 × (실수부, 허수부)
    pub const LINEAR_ARRAY_LEN: usize = 4 * Self::SCALARS_PER_ENTRY;

    /// 행 우선 순서의 성분 이름
    pub const ENTRY_NAMES: [&'static str; 4] = ["a", "b", "c", "d"];
}
