//! Whole-grid evaluation of the scalar projections.
//!
//! Pixels sample at their centers: pixel (i, j) of a width x height grid
//! reads the projection at ((i + 0.5) / width, (j + 0.5) / height). Rows
//! evaluate in parallel; the scalar ops stay single-threaded and pure.

use crate::ops::projection::{point_to_pixel_equirectangular, Projection};
use crate::ops::sphere::rotate_point;
use crate::types::Vec2;
use ndarray::{Array3, Axis};
use rayon::prelude::*;

/// Source equirectangular pixel seen by one output pixel: project, rotate
/// the view, and index back into the source frame.
pub fn map_source_pixel(proj: Projection, pos: Vec2, rot_x: f32, rot_y: f32, rot_z: f32) -> Vec2 {
    let point = proj.pixel_to_point(pos);
    let rotated = rotate_point(point, rot_x, rot_y, rot_z);
    point_to_pixel_equirectangular(rotated)
}

/// Rotated unit direction per pixel center, shape (height, width, 3).
pub fn projection_grid(
    proj: Projection,
    width: usize,
    height: usize,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
) -> Array3<f32> {
    let mut out = Array3::zeros((height, width, 3));
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(j, mut row)| {
            let py = (j as f32 + 0.5) / height as f32;
            for i in 0..width {
                let px = (i as f32 + 0.5) / width as f32;
                let v = rotate_point(proj.pixel_to_point(Vec2::new(px, py)), rot_x, rot_y, rot_z);
                row[[i, 0]] = v.x;
                row[[i, 1]] = v.y;
                row[[i, 2]] = v.z;
            }
        });
    out
}

/// Source pixel per output pixel, shape (height, width, 2): the remap
/// table for resampling an equirectangular source into `proj`.
pub fn reprojection_map(
    proj: Projection,
    width: usize,
    height: usize,
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
) -> Array3<f32> {
    let mut out = Array3::zeros((height, width, 2));
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(j, mut row)| {
            let py = (j as f32 + 0.5) / height as f32;
            for i in 0..width {
                let px = (i as f32 + 0.5) / width as f32;
                let src = map_source_pixel(proj, Vec2::new(px, py), rot_x, rot_y, rot_z);
                row[[i, 0]] = src.x;
                row[[i, 1]] = src.y;
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_output_shapes() {
        assert_eq!(
            projection_grid(Projection::Guyou, 8, 4, 0.0, 0.0, 0.0).dim(),
            (4, 8, 3)
        );
        assert_eq!(
            reprojection_map(Projection::Peirce, 6, 3, 0.0, 0.0, 0.0).dim(),
            (3, 6, 2)
        );
    }

    #[test]
    fn test_grid_matches_scalar_calls() {
        let grid = projection_grid(Projection::Stereographic, 8, 4, 0.2, -0.4, 1.0);
        let pos = Vec2::new(2.5 / 8.0, 1.5 / 4.0);
        let v = rotate_point(Projection::Stereographic.pixel_to_point(pos), 0.2, -0.4, 1.0);
        assert_relative_eq!(grid[[1, 2, 0]], v.x, epsilon = EPSILON);
        assert_relative_eq!(grid[[1, 2, 1]], v.y, epsilon = EPSILON);
        assert_relative_eq!(grid[[1, 2, 2]], v.z, epsilon = EPSILON);
    }

    #[test]
    fn test_equirectangular_remap_without_rotation_is_identity() {
        let (width, height) = (16, 8);
        let map = reprojection_map(Projection::Equirectangular, width, height, 0.0, 0.0, 0.0);
        for j in 0..height {
            for i in 0..width {
                let px = (i as f32 + 0.5) / width as f32;
                let py = (j as f32 + 0.5) / height as f32;
                assert_abs_diff_eq!(map[[j, i, 0]], px, epsilon = EPSILON);
                assert_abs_diff_eq!(map[[j, i, 1]], py, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_half_turn_around_z_shifts_the_azimuth() {
        let src = map_source_pixel(Projection::Equirectangular, Vec2::new(0.25, 0.4), 0.0, 0.0, PI);
        assert_abs_diff_eq!(src, Vec2::new(0.75, 0.4), epsilon = EPSILON);
    }
}
