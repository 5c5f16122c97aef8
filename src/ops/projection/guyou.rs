use crate::ops::conformal::stretch_schwarz;
use crate::types::{Vec2, Vec3};

/// Guyou hemisphere-in-a-square projection.
///
/// The 2:1 frame splits at pixel x = 0.5 into two unit squares, one per
/// hemisphere. Each square goes through the Schwarz square-to-disk map and
/// an inverse stereographic step; the two halves mirror their axes so the
/// shared edge meets on the sphere.
pub fn pixel_to_point_guyou(pos: Vec2) -> Vec3 {
    let x = (pos.x - 0.5) * 4.0;
    let y = (pos.y - 0.5) * 2.0;
    if x > 0.0 {
        let s = stretch_schwarz(Vec2::new(x - 1.0, y));
        let r2 = s.x * s.x + s.y * s.y;
        Vec3::new(2.0 * s.x, r2 - 1.0, -2.0 * s.y) * (1.0 / (1.0 + r2))
    } else {
        let s = stretch_schwarz(Vec2::new(x + 1.0, y));
        let r2 = s.x * s.x + s.y * s.y;
        Vec3::new(-2.0 * s.x, 1.0 - r2, -2.0 * s.y) * (1.0 / (1.0 + r2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-4;
    // Probes this close in pixel space should map this close on the sphere.
    const SEAM_STEP: f32 = 1e-3;
    const SEAM_TOLERANCE: f32 = 0.02;

    #[test]
    fn test_half_centers_map_to_y_poles() {
        let left = pixel_to_point_guyou(Vec2::new(0.25, 0.5));
        assert_abs_diff_eq!(left, Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
        let right = pixel_to_point_guyou(Vec2::new(0.75, 0.5));
        assert_abs_diff_eq!(right, Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_hemispheres_meet_at_the_center_seam() {
        for y in [0.2, 0.35, 0.5, 0.65, 0.8] {
            let a = pixel_to_point_guyou(Vec2::new(0.5 - SEAM_STEP, y));
            let b = pixel_to_point_guyou(Vec2::new(0.5 + SEAM_STEP, y));
            let gap = (a - b).length();
            assert!(gap < SEAM_TOLERANCE, "seam gap {} at y = {}", gap, y);
        }
    }

    #[test]
    fn test_hemispheres_meet_at_the_wrap_seam() {
        for y in [0.3, 0.5, 0.7] {
            let a = pixel_to_point_guyou(Vec2::new(SEAM_STEP, y));
            let b = pixel_to_point_guyou(Vec2::new(1.0 - SEAM_STEP, y));
            let gap = (a - b).length();
            assert!(gap < SEAM_TOLERANCE, "wrap gap {} at y = {}", gap, y);
        }
    }

    #[test]
    fn test_directions_are_unit_length() {
        for i in 0..11 {
            for j in 0..11 {
                let p = Vec2::new(0.05 + 0.09 * i as f32, 0.05 + 0.09 * j as f32);
                let v = pixel_to_point_guyou(p);
                assert_abs_diff_eq!(v.length(), 1.0, epsilon = EPSILON);
            }
        }
    }
}
