//! 군 법칙 적합성 테스트
//!
//! 임의의 행렬에 대해 항등원, 역원, 행렬식의 곱셈성, 켤레 정의,
//! 스칼라 배의 작용 불변성, 극점 사상이 성립하는지 검사합니다.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sl2c::prelude::*;

fn complex_strategy() -> impl Strategy<Value = Complex64> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_map(|(re, im)| Complex64::new(re, im))
}

fn matrix_strategy() -> impl Strategy<Value = SL2C> {
    (
        complex_strategy(),
        complex_strategy(),
        complex_strategy(),
        complex_strategy(),
    )
        .prop_map(|(a, b, c, d)| SL2C::new(a, b, c, d))
}

// 행렬식이 0에서 충분히 떨어진 행렬
fn invertible_strategy() -> impl Strategy<Value = SL2C> {
    matrix_strategy().prop_filter("near-singular", |m| m.determinant().norm() > 0.1)
}

// 정확한 산술이 보장되도록 c는 2의 거듭제곱 실수, d는 정수 성분
fn exact_pole_strategy() -> impl Strategy<Value = SL2C> {
    (
        complex_strategy(),
        complex_strategy(),
        prop::sample::select(vec![1.0, 2.0, 4.0, 0.5, -1.0, -8.0]),
        (-50i32..50, -50i32..50),
    )
        .prop_map(|(a, b, c, (re, im))| {
            SL2C::new(a, b, Complex64::new(c, 0.0), Complex64::new(re as f64, im as f64))
        })
}

proptest! {
    #[test]
    fn test_identity(m in matrix_strategy()) {
        prop_assert_eq!(m.mult(&SL2C::UNIT), m);
        prop_assert_eq!(SL2C::UNIT.mult(&m), m);
    }

    #[test]
    fn test_inverse(m in invertible_strategy()) {
        prop_assert!(!m.inverse().has_nan());
        prop_assert!(m.mult(&m.inverse()).approx_eq(&SL2C::UNIT, 1e-9));
        prop_assert!(m.inverse().mult(&m).approx_eq(&SL2C::UNIT, 1e-9));
    }

    #[test]
    fn test_determinant_multiplicative(m in matrix_strategy(), n in matrix_strategy()) {
        let expected = m.determinant() * n.determinant();
        let actual = m.mult(&n).determinant();
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-8 * (1.0 + expected.norm()));
    }

    #[test]
    fn test_associativity(m in matrix_strategy(), n in matrix_strategy(), p in matrix_strategy()) {
        let mn_p = prod(&prod(&m, &n), &p);
        let m_np = prod(&m, &prod(&n, &p));
        prop_assert!(mn_p.approx_eq(&m_np, 1e-9 * (1.0 + mn_p.linear_array().iter().fold(0.0, |acc, x| acc + x.abs()))));
    }

    #[test]
    fn test_conjugate_definition(m in matrix_strategy(), p in invertible_strategy()) {
        prop_assert_eq!(m.conjugate(&p), p.inverse().mult(&m).mult(&p));
        prop_assert_eq!(conjugate_by(&m, &p), m.conjugate(&p));
    }

    #[test]
    fn test_image_of_infinity(m in matrix_strategy()) {
        let image = m.apply(ExtendedComplex::INFINITY);
        prop_assert_eq!(image, ExtendedComplex::Finite(m.a() / m.c()));

        let fixed = SL2C::new(m.a(), m.b(), Complex64::new(0.0, 0.0), m.d());
        prop_assert!(fixed.apply(ExtendedComplex::INFINITY).is_infinity());
    }

    #[test]
    fn test_pole_maps_to_infinity(m in exact_pole_strategy()) {
        let pole = ExtendedComplex::Finite(-m.d() / m.c());
        prop_assert_eq!(m.pole(), pole);
        prop_assert!(m.apply(pole).is_infinity());
        prop_assert!(mobius_apply(&m, m.pole()).is_infinity());
    }

    #[test]
    fn test_scale_preserves_action(
        m in matrix_strategy(),
        k in complex_strategy().prop_filter("small scalar", |k| k.norm() > 0.1),
        z in complex_strategy(),
    ) {
        prop_assume!((m.c() * z + m.d()).norm() > 0.1);

        let w = m.apply(ExtendedComplex::Finite(z)).finite().unwrap();
        let w_scaled = m.scale(k).apply(ExtendedComplex::Finite(z)).finite().unwrap();
        assert_abs_diff_eq!(w, w_scaled, epsilon = 1e-9 * (1.0 + w.norm()));

        let d = m.determinant();
        assert_abs_diff_eq!(m.scale(k).determinant(), d * k * k, epsilon = 1e-9 * (1.0 + (d * k * k).norm()));
    }

    #[test]
    fn test_linear_array_round_trip(m in matrix_strategy()) {
        let flat = m.linear_array();
        prop_assert_eq!(flat.len(), Constants::LINEAR_ARRAY_LEN);
        prop_assert_eq!(SL2C::from_linear_array(flat.as_slice().unwrap()), Ok(m));
    }
}
