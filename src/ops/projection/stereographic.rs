use crate::types::{Vec2, Vec3};

// Plane units per output pixel in the size-aware entry point.
const PIXEL_SCALE: f32 = 0.001;

fn plane_to_sphere(p: Vec2) -> Vec3 {
    let r2 = p.x * p.x + p.y * p.y;
    Vec3::new(2.0 * p.y, -2.0 * p.x, 1.0 - r2) * (1.0 / (1.0 + r2))
}

/// Stereographic view of the sphere from a 2:1 pixel frame.
pub fn pixel_to_point_stereographic(pos: Vec2) -> Vec3 {
    plane_to_sphere(Vec2::new((pos.x - 0.5) * 4.0, (pos.y - 0.5) * 2.0))
}

/// Same view with the plane scaled by the output size in pixels, so
/// non-square outputs keep their aspect ratio.
pub fn pixel_to_point_stereographic_sized(pos: Vec2, width: u32, height: u32) -> Vec3 {
    plane_to_sphere(Vec2::new(
        (pos.x - 0.5) * PIXEL_SCALE * width as f32,
        (pos.y - 0.5) * PIXEL_SCALE * height as f32,
    ))
}
