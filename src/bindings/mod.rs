mod jacobi;
mod projection;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Panorama projection maps computed in Rust.
#[pymodule]
pub fn quincunx(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Grid evaluation and scalar projection probes
    projection::register(m)?;
    // Elliptic function probes
    jacobi::register(m)?;
    Ok(())
}
