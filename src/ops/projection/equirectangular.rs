use crate::ops::sphere::{cartesian_to_spherical, spherical_to_cartesian};
use crate::types::{Spherical, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// Pixel to (phi, theta): x spans the full azimuth, y the inclination.
pub fn pixel_to_coord(pos: Vec2) -> Vec2 {
    Vec2::new(TAU * pos.x, PI * pos.y)
}

/// Inverse of [`pixel_to_coord`]; wraps the azimuth into [0, 1) so both
/// atan2 half-ranges land in the frame.
pub fn coord_to_pixel(coord: Vec2) -> Vec2 {
    Vec2::new((coord.x / TAU).rem_euclid(1.0), coord.y / PI)
}

pub fn pixel_to_point_equirectangular(pos: Vec2) -> Vec3 {
    let angles = pixel_to_coord(pos);
    spherical_to_cartesian(Spherical::new(1.0, angles.y, angles.x))
}

pub fn point_to_pixel_equirectangular(point: Vec3) -> Vec2 {
    let sph = cartesian_to_spherical(point);
    coord_to_pixel(Vec2::new(sph.phi, sph.theta))
}
