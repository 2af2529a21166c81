//! 수치 계산 유틸리티 함수들

use num::complex::Complex64;

/// 두 복소수가 허용오차 안에 있는지 검사: |u - v| ≤ eps
pub fn close(u: Complex64, v: Complex64, eps: f64) -> bool {
    (u - v).norm() <= eps
}

/// 처음으로 유한하지 않은(NaN, ±inf) 스칼라의 위치와 값
pub fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, x)| !x.is_finite())
}
