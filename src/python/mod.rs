//! 파이썬 바인딩 (pyo3)
//!
//! 파이썬에서는 인자 타입이 정적으로 보장되지 않으므로 생성자에서
//! 성분이 복소수인지 검사하고, 실패하면 `ValueError`를 발생시킵니다.
//! 무한원점은 `None`으로 주고받습니다.

use crate::complex::ExtendedComplex;
use crate::config::constants::Constants;
use crate::matrix::{InvalidArgument, Sl2cError, SL2C};
use num::complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<Sl2cError> for PyErr {
    fn from(err: Sl2cError) -> PyErr {
        match err {
            Sl2cError::InvalidArgument(reason) => {
                PyValueError::new_err(format!("{}: {}", err, reason))
            }
        }
    }
}

fn extract_complex(obj: &PyAny, entry: &'static str) -> Result<Complex64, Sl2cError> {
    obj.extract::<Complex64>()
        .map_err(|_| InvalidArgument::NotComplex { entry }.into())
}

fn extract_entry(obj: &PyAny, entry: &'static str) -> Result<ExtendedComplex, Sl2cError> {
    extract_complex(obj, entry).map(ExtendedComplex::Finite)
}

fn to_py_point(z: ExtendedComplex) -> Option<Complex64> {
    z.finite()
}

fn from_py_point(z: Option<Complex64>) -> ExtendedComplex {
    z.map_or(ExtendedComplex::Infinity, ExtendedComplex::Finite)
}

/// 파이썬용 SL(2,ℂ) 행렬
#[pyclass(name = "SL2C")]
#[derive(Clone)]
pub struct PySL2C {
    inner: SL2C,
}

impl From<SL2C> for PySL2C {
    fn from(inner: SL2C) -> Self {
        PySL2C { inner }
    }
}

#[pymethods]
impl PySL2C {
    #[new]
    fn new(a: &PyAny, b: &PyAny, c: &PyAny, d: &PyAny) -> PyResult<Self> {
        let [name_a, name_b, name_c, name_d] = Constants::ENTRY_NAMES;
        let inner = SL2C::try_from_extended(
            extract_entry(a, name_a)?,
            extract_entry(b, name_b)?,
            extract_entry(c, name_c)?,
            extract_entry(d, name_d)?,
        )?;
        Ok(inner.into())
    }

    #[staticmethod]
    #[pyo3(name = "UNIT")]
    fn unit() -> Self {
        SL2C::UNIT.into()
    }

    #[staticmethod]
    fn from_linear_array(values: PyReadonlyArray1<f64>) -> PyResult<Self> {
        let values: Vec<f64> = values.as_array().iter().copied().collect();
        Ok(SL2C::from_linear_array(&values)?.into())
    }

    #[getter]
    fn a(&self) -> Complex64 {
        self.inner.a()
    }

    #[getter]
    fn b(&self) -> Complex64 {
        self.inner.b()
    }

    #[getter]
    fn c(&self) -> Complex64 {
        self.inner.c()
    }

    #[getter]
    fn d(&self) -> Complex64 {
        self.inner.d()
    }

    fn mult(&self, other: PyRef<'_, PySL2C>) -> Self {
        self.inner.mult(&other.inner).into()
    }

    fn conjugate(&self, m: PyRef<'_, PySL2C>) -> Self {
        self.inner.conjugate(&m.inner).into()
    }

    fn inverse(&self) -> Self {
        self.inner.inverse().into()
    }

    fn scale(&self, k: &PyAny) -> PyResult<Self> {
        Ok(self.inner.scale(extract_complex(k, "k")?).into())
    }

    /// `None`은 무한원점
    fn apply(&self, point: Option<&PyAny>) -> PyResult<Option<Complex64>> {
        let point = match point {
            Some(obj) => Some(extract_complex(obj, "point")?),
            None => None,
        };
        Ok(to_py_point(self.inner.apply(from_py_point(point))))
    }

    fn pole(&self) -> Option<Complex64> {
        to_py_point(self.inner.pole())
    }

    fn determinant(&self) -> Complex64 {
        self.inner.determinant()
    }

    fn trace(&self) -> Complex64 {
        self.inner.trace()
    }

    fn has_nan(&self) -> bool {
        self.inner.has_nan()
    }

    fn linear_array<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_owned_array(py, self.inner.linear_array())
    }

    fn __repr__(&self) -> String {
        format!("SL2C({})", self.inner)
    }
}

#[pymodule]
fn sl2c(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySL2C>()?;
    Ok(())
}
