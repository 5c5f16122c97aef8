use crate::ops::conformal::{rotate_pos, stretch_schwarz};
use crate::types::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_4, PI, SQRT_2};

// Quarter-turn sector of `pos`, numbered so the four corner triangles of
// the frame get stable indices on both sides of the atan2 branch cut:
// 0 = +x/-y, 1 = -x/-y, 2 = -x/+y, 3 = +x/+y.
fn quadrant(pos: Vec2) -> i32 {
    let a = pos.x.atan2(pos.y) * 2.0 / PI + 2.0;
    (a as i32 + 5) % 4
}

/// Peirce quincuncial projection.
///
/// The frame scales to [-sqrt(2), sqrt(2)]^2. The central diamond
/// |x| + |y| < sqrt(2) holds the northern hemisphere; the four corner
/// triangles fold the southern hemisphere in, each translated onto the
/// diamond, flipped on odd quadrants, and sent through the same rotated
/// Schwarz map.
pub fn pixel_to_point_peirce(pos: Vec2) -> Vec3 {
    let p = (pos - Vec2::new(0.5, 0.5)) * (2.0 * SQRT_2);
    if p.x.abs() + p.y.abs() < SQRT_2 {
        let s = rotate_pos(stretch_schwarz(rotate_pos(p, FRAC_PI_4)), -FRAC_PI_4);
        let r2 = s.x * s.x + s.y * s.y;
        Vec3::new(-2.0 * s.y, -2.0 * s.x, 1.0 - r2) * (1.0 / (1.0 + r2))
    } else {
        let q = quadrant(p);
        let xf = if q % 3 > 0 { 1.0 } else { -1.0 };
        let yf = if q < 2 { 1.0 } else { -1.0 };
        let mut folded = rotate_pos(p + Vec2::new(xf * SQRT_2, yf * SQRT_2), FRAC_PI_4);
        if q % 2 == 1 {
            folded = rotate_pos(folded, PI);
        }
        let s = rotate_pos(stretch_schwarz(folded), -FRAC_PI_4);
        let r2 = s.x * s.x + s.y * s.y;
        Vec3::new(-2.0 * s.x, -2.0 * s.y, r2 - 1.0) * (1.0 / (1.0 + r2))
    }
}
