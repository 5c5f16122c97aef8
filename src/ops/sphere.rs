//! Spherical/Cartesian conversions and rotation helpers.
//!
//! Conventions: theta is the inclination from +z in [0, pi], phi the
//! azimuth from +x in (-pi, pi], both in radians.

use crate::types::{Spherical, Vec3};

pub fn cartesian_to_spherical(pos: Vec3) -> Spherical {
    let Vec3 { x, y, z } = pos;
    let r = (x * x + y * y + z * z).sqrt();
    let theta = (x * x + y * y).sqrt().atan2(z);
    let phi = y.atan2(x);
    Spherical::new(r, theta, phi)
}

pub fn spherical_to_cartesian(sph: Spherical) -> Vec3 {
    let (sin_theta, cos_theta) = sph.theta.sin_cos();
    let (sin_phi, cos_phi) = sph.phi.sin_cos();
    Vec3::new(
        sph.r * cos_phi * sin_theta,
        sph.r * sin_phi * sin_theta,
        sph.r * cos_theta,
    )
}

pub fn rotate_around_x(pos: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(pos.x, c * pos.y - s * pos.z, s * pos.y + c * pos.z)
}

pub fn rotate_around_y(pos: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * pos.x + s * pos.z, pos.y, -s * pos.x + c * pos.z)
}

pub fn rotate_around_z(pos: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * pos.x - s * pos.y, s * pos.x + c * pos.y, pos.z)
}

/// Axis rotations applied in x, y, z order.
pub fn rotate_point(point: Vec3, rot_x: f32, rot_y: f32, rot_z: f32) -> Vec3 {
    let rotated = rotate_around_x(point, rot_x);
    let rotated = rotate_around_y(rotated, rot_y);
    rotate_around_z(rotated, rot_z)
}

/// Transports a tangent-space normal at `p` into world space.
///
/// The tangent frame is built from cross products with +z, so `p` must not
/// be parallel to the z axis.
pub fn tangent_to_world_space(p: Vec3, normal: Vec3) -> Vec3 {
    let p_t = Vec3::new(0.0, 0.0, 1.0).cross(p).normalized();
    let p_z = p.cross(p_t).normalized();
    p * normal.x + p_t * normal.y + p_z * normal.z
}
