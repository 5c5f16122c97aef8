use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::ProjectionError;
use crate::ops::complex::Complex;
use crate::ops::jacobi::{self, Modulus};

fn parse_modulus(kind: &str, x: f32) -> PyResult<Modulus> {
    let modulus = match kind {
        "angle" => Modulus::Angle(x),
        "parameter" => Modulus::Parameter(x),
        "modulus" => Modulus::Direct(x),
        other => {
            let err = ProjectionError::UnknownModulusKind(other.to_string());
            return Err(PyValueError::new_err(err.to_string()));
        }
    };
    modulus
        .validate()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
pub fn jacobi_am(u: f32, kind: &str, x: f32) -> PyResult<f32> {
    Ok(jacobi::jacobi_am(u, parse_modulus(kind, x)?))
}

#[pyfunction]
pub fn jacobi_sn(u: f32, kind: &str, x: f32) -> PyResult<f32> {
    Ok(jacobi::jacobi_sn(u, parse_modulus(kind, x)?))
}

#[pyfunction]
pub fn jacobi_cn(u: f32, kind: &str, x: f32) -> PyResult<f32> {
    Ok(jacobi::jacobi_cn(u, parse_modulus(kind, x)?))
}

#[pyfunction]
pub fn jacobi_dn(u: f32, kind: &str, x: f32) -> PyResult<f32> {
    Ok(jacobi::jacobi_dn(u, parse_modulus(kind, x)?))
}

/// cn of x + iy at parameter m; both m and 1 - m must stay in [0, 1].
#[pyfunction]
pub fn complex_cn(x: f32, y: f32, m: f32) -> PyResult<(f32, f32)> {
    for parameter in [m, 1.0 - m] {
        Modulus::Parameter(parameter)
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
    }
    let z = jacobi::complex_cn(Complex::new(x, y), m);
    Ok((z.re, z.im))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(jacobi_am, m)?)?;
    m.add_function(wrap_pyfunction!(jacobi_sn, m)?)?;
    m.add_function(wrap_pyfunction!(jacobi_cn, m)?)?;
    m.add_function(wrap_pyfunction!(jacobi_dn, m)?)?;
    m.add_function(wrap_pyfunction!(complex_cn, m)?)?;
    Ok(())
}
