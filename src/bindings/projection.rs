use numpy::{IntoPyArray, PyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::grid;
use crate::ops::conformal;
use crate::ops::projection::Projection;
use crate::types::Vec2;

fn parse_projection(name: &str) -> PyResult<Projection> {
    name.parse::<Projection>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Rotated unit direction per pixel, shape (height, width, 3).
#[pyfunction]
pub fn projection_grid<'py>(
    py: Python<'py>,
    projection: &str,
    width: usize,
    height: usize,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
) -> PyResult<&'py PyArray3<f32>> {
    let proj = parse_projection(projection)?;
    Ok(grid::projection_grid(proj, width, height, rot_x, rot_y, rot_z).into_pyarray(py))
}

/// Source equirectangular pixel per output pixel, shape (height, width, 2).
/// Feed the result to an image resampler as its remap table.
#[pyfunction]
pub fn reprojection_map<'py>(
    py: Python<'py>,
    projection: &str,
    width: usize,
    height: usize,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
) -> PyResult<&'py PyArray3<f32>> {
    let proj = parse_projection(projection)?;
    Ok(grid::reprojection_map(proj, width, height, rot_x, rot_y, rot_z).into_pyarray(py))
}

#[pyfunction]
pub fn pixel_to_point(projection: &str, x: f32, y: f32) -> PyResult<(f32, f32, f32)> {
    let v = parse_projection(projection)?.pixel_to_point(Vec2::new(x, y));
    Ok((v.x, v.y, v.z))
}

#[pyfunction]
pub fn stretch_schwarz(x: f32, y: f32) -> (f32, f32) {
    let s = conformal::stretch_schwarz(Vec2::new(x, y));
    (s.x, s.y)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(projection_grid, m)?)?;
    m.add_function(wrap_pyfunction!(reprojection_map, m)?)?;
    m.add_function(wrap_pyfunction!(pixel_to_point, m)?)?;
    m.add_function(wrap_pyfunction!(stretch_schwarz, m)?)?;
    Ok(())
}
