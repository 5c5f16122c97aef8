//! Square-to-disk warps: the conformal Schwarz map and two cheaper
//! non-conformal alternatives.

use crate::ops::complex::Complex;
use crate::ops::jacobi::complex_cn;
use crate::types::Vec2;
use std::f32::consts::FRAC_1_SQRT_2;

// Complete elliptic integral K(1/2), the quarter period of cn at
// parameter m = 1/2.
const SCHWARZ_K: f32 = 1.854_074_677_3;

/// Conformal map of the square [-1, 1]^2 onto the unit disk.
///
/// Inverse of the Schwarz-Christoffel disk-to-square map, evaluated as a
/// complex cn at parameter 1/2 and rotated back by (1 - i)/sqrt(2). Fixes
/// the origin; the square boundary lands on the unit circle.
pub fn stretch_schwarz(pos: Vec2) -> Vec2 {
    let z = Complex::from(pos);
    let u = Complex::new(0.5 * SCHWARZ_K, 0.5 * SCHWARZ_K) * z - Complex::new(SCHWARZ_K, 0.0);
    let cn = complex_cn(u, 0.5);
    Vec2::from(Complex::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2) * cn)
}

/// Radial square-to-disk warp: keeps the dominant axis, contracts the
/// other. Not conformal; NaN at the exact origin.
pub fn stretch_to_square(pos: Vec2) -> Vec2 {
    let Vec2 { x: u, y: v } = pos;
    let len = (u * u + v * v).sqrt();
    if u * u > v * v {
        Vec2::new(u.signum() * u * u / len, u.signum() * u * v / len)
    } else {
        Vec2::new(v.signum() * u * v / len, v.signum() * v * v / len)
    }
}

/// Squircular square-to-disk warp, a cheaper non-conformal alternative to
/// the Schwarz map.
pub fn stretch_squircle(pos: Vec2) -> Vec2 {
    let Vec2 { x: u, y: v } = pos;
    let r2 = u * u + v * v;
    let f = (r2 - u * u * v * v).sqrt() / r2.sqrt();
    Vec2::new(u * f, v * f)
}

/// 2D rotation about the origin.
pub fn rotate_pos(pos: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * pos.x - s * pos.y, s * pos.x + c * pos.y)
}
