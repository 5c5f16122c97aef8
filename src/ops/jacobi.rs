//! Jacobi elliptic functions over f32 via the arithmetic-geometric mean.
//!
//! The amplitude follows the AGM descent of Abramowitz & Stegun 16.4: seed
//! (a, g, c) from the modulus, subdivide until a and g agree to f32
//! precision, then back-substitute the amplitude. Quadratic convergence
//! reaches f32 precision within five subdivisions for any modulus k < 1.
//! k = 0 and k = 1 reduce to closed forms and are handled up front.

use crate::error::ProjectionError;
use crate::ops::complex::Complex;

const AGM_ITERATIONS: usize = 5;

/// How the scalar argument of an elliptic function call encodes the
/// modulus k.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modulus {
    /// Modular angle alpha: k = sin|alpha|.
    Angle(f32),
    /// Parameter m: k = sqrt|m|.
    Parameter(f32),
    /// The modulus itself: k = |x|.
    Direct(f32),
}

impl Modulus {
    /// The modulus k this specifier encodes.
    pub fn k(self) -> f32 {
        match self {
            Modulus::Angle(a) => a.abs().sin(),
            Modulus::Parameter(m) => m.abs().sqrt(),
            Modulus::Direct(k) => k.abs(),
        }
    }

    fn scalar(self) -> f32 {
        match self {
            Modulus::Angle(x) | Modulus::Parameter(x) | Modulus::Direct(x) => x,
        }
    }

    /// Rejects moduli the AGM descent does not converge for.
    ///
    /// The elliptic functions themselves accept any specifier and leave
    /// k > 1 unspecified; validate first where the scalar is untrusted.
    pub fn validate(self) -> Result<Self, ProjectionError> {
        let k = self.k();
        if !(k <= 1.0) {
            return Err(ProjectionError::ModulusOutOfRange { k });
        }
        Ok(self)
    }
}

/// Jacobi amplitude am(u, k).
pub fn jacobi_am(u: f32, modulus: Modulus) -> f32 {
    if modulus.scalar() == 0.0 {
        return u;
    }
    let k = modulus.k();
    if k == 1.0 {
        // Gudermannian limit.
        return 2.0 * u.exp().atan() - std::f32::consts::FRAC_PI_2;
    }

    let mut a = [0.0f32; AGM_ITERATIONS + 1];
    let mut g = [0.0f32; AGM_ITERATIONS + 1];
    let mut c = [0.0f32; AGM_ITERATIONS + 1];
    a[0] = 1.0;
    g[0] = (1.0 - k * k).sqrt();
    c[0] = k;

    let mut scale = 1.0f32;
    let mut n = 0;
    while n < AGM_ITERATIONS {
        if (a[n] - g[n]).abs() < a[n] * f32::EPSILON {
            break;
        }
        scale += scale;
        a[n + 1] = 0.5 * (a[n] + g[n]);
        g[n + 1] = (a[n] * g[n]).sqrt();
        c[n + 1] = 0.5 * (a[n] - g[n]);
        n += 1;
    }

    let mut phi = scale * a[n] * u;
    while n > 0 {
        phi = 0.5 * (phi + (c[n] * phi.sin() / a[n]).asin());
        n -= 1;
    }
    phi
}

/// Jacobi sine amplitude sn(u, k).
pub fn jacobi_sn(u: f32, modulus: Modulus) -> f32 {
    jacobi_am(u, modulus).sin()
}

/// Jacobi cosine amplitude cn(u, k).
pub fn jacobi_cn(u: f32, modulus: Modulus) -> f32 {
    jacobi_am(u, modulus).cos()
}

/// Jacobi delta amplitude dn(u, k) = sqrt(1 - k^2 sn^2).
///
/// The parameter form keeps the raw scalar under the root (1 - m sn^2),
/// which is the same value for m in [0, 1].
pub fn jacobi_dn(u: f32, modulus: Modulus) -> f32 {
    let sn = jacobi_sn(u, modulus);
    match modulus {
        Modulus::Parameter(m) => (1.0 - m * sn * sn).sqrt(),
        Modulus::Angle(a) => {
            let ksn = a.sin() * sn;
            (1.0 - ksn * ksn).sqrt()
        }
        Modulus::Direct(k) => {
            let ksn = k * sn;
            (1.0 - ksn * ksn).sqrt()
        }
    }
}

/// cn over a complex argument at parameter m.
///
/// Addition theorem split into real evaluations: values along the real
/// axis are taken at m, values along the imaginary axis at the
/// complementary parameter 1 - m.
pub fn complex_cn(u: Complex, m: f32) -> Complex {
    let m_x = Modulus::Parameter(m);
    let m_y = Modulus::Parameter(1.0 - m);

    let cn_x = jacobi_cn(u.re, m_x);
    let sn_x = jacobi_sn(u.re, m_x);
    let dn_x = jacobi_dn(u.re, m_x);
    let cn_y = jacobi_cn(u.im, m_y);
    let sn_y = jacobi_sn(u.im, m_y);
    let dn_y = jacobi_dn(u.im, m_y);

    let den = cn_y * cn_y + m * sn_x * sn_x * sn_y * sn_y;
    Complex::new(cn_x * cn_y, -sn_x * dn_x * sn_y * dn_y) / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;
    // Complete elliptic integral K(m = 1/2), the real quarter period.
    const K_HALF: f32 = 1.854_074_7;

    #[test]
    fn test_zero_scalar_returns_u_exactly() {
        for u in [-3.0f32, -0.5, 0.0, 0.25, 2.0] {
            assert_eq!(jacobi_am(u, Modulus::Angle(0.0)), u);
            assert_eq!(jacobi_am(u, Modulus::Parameter(0.0)), u);
            assert_eq!(jacobi_am(u, Modulus::Direct(0.0)), u);
        }
    }

    #[test]
    fn test_sn_cn_pythagorean_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let u = rng.gen_range(-3.0f32..3.0);
            let k = rng.gen_range(0.0f32..0.99);
            let m = Modulus::Direct(k);
            let sn = jacobi_sn(u, m);
            let cn = jacobi_cn(u, m);
            assert_relative_eq!(sn * sn + cn * cn, 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_dn_identity() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..64 {
            let u = rng.gen_range(-3.0f32..3.0);
            let k = rng.gen_range(0.0f32..0.99);
            let m = Modulus::Direct(k);
            let sn = jacobi_sn(u, m);
            let dn = jacobi_dn(u, m);
            assert_relative_eq!(dn * dn + k * k * sn * sn, 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_unit_modulus_is_gudermannian() {
        for u in [-2.0f32, 0.0, 2.0] {
            let gd = 2.0 * u.exp().atan() - FRAC_PI_2;
            assert_relative_eq!(jacobi_am(u, Modulus::Direct(1.0)), gd, epsilon = EPSILON);
            assert_relative_eq!(jacobi_am(u, Modulus::Parameter(1.0)), gd, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_amplitude_is_odd() {
        for u in [0.4f32, 1.3, 2.6] {
            let m = Modulus::Direct(0.8);
            assert_relative_eq!(jacobi_am(-u, m), -jacobi_am(u, m), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_quarter_period_at_half_parameter() {
        let m = Modulus::Parameter(0.5);
        assert_abs_diff_eq!(jacobi_am(K_HALF, m), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(jacobi_cn(K_HALF, m), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(jacobi_sn(K_HALF, m), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(jacobi_sn(-K_HALF, m), -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_angle_specifier_matches_direct_sine() {
        for u in [-1.5f32, 0.7, 2.2] {
            let via_angle = jacobi_am(u, Modulus::Angle(0.6));
            let via_direct = jacobi_am(u, Modulus::Direct(0.6f32.sin()));
            assert_relative_eq!(via_angle, via_direct, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_complex_cn_on_real_axis_matches_real_cn() {
        for u in [-2.0f32, -0.9, 0.3, 1.7] {
            let z = complex_cn(Complex::new(u, 0.0), 0.3);
            let cn = jacobi_cn(u, Modulus::Parameter(0.3));
            assert_relative_eq!(z, Complex::new(cn, 0.0), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_complex_cn_at_origin() {
        assert_relative_eq!(
            complex_cn(Complex::new(0.0, 0.0), 0.5),
            Complex::new(1.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_complex_cn_at_negative_quarter_period() {
        let z = complex_cn(Complex::new(-K_HALF, 0.0), 0.5);
        assert_abs_diff_eq!(z.re, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(z.im, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_validate_rejects_oversized_modulus() {
        assert!(Modulus::Direct(0.5).validate().is_ok());
        assert!(Modulus::Angle(2.0).validate().is_ok());
        assert!(matches!(
            Modulus::Direct(1.5).validate(),
            Err(ProjectionError::ModulusOutOfRange { .. })
        ));
        assert!(matches!(
            Modulus::Parameter(2.0).validate(),
            Err(ProjectionError::ModulusOutOfRange { .. })
        ));
        assert!(Modulus::Direct(f32::NAN).validate().is_err());
    }
}
