//! Minimal complex arithmetic for the elliptic and conformal routines.
//!
//! Division by zero is not guarded: it yields inf/NaN per IEEE rules, the
//! same way the scalar ops behave.

use crate::types::Vec2;
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f32,
    pub im: f32,
}

impl Complex {
    pub fn new(re: f32, im: f32) -> Self {
        Complex { re, im }
    }

    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    pub fn norm_sq(self) -> f32 {
        self.re * self.re + self.im * self.im
    }
}

impl From<Vec2> for Complex {
    fn from(v: Vec2) -> Complex {
        Complex::new(v.x, v.y)
    }
}

impl From<Complex> for Vec2 {
    fn from(z: Complex) -> Vec2 {
        Vec2::new(z.re, z.im)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f32> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f32) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f32> for Complex {
    type Output = Complex;
    fn div(self, rhs: f32) -> Complex {
        Complex::new(self.re / rhs, self.im / rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        let d = rhs.norm_sq();
        let n = self * rhs.conj();
        Complex::new(n.re / d, n.im / d)
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.re, &other.re, epsilon)
            && f32::abs_diff_eq(&self.im, &other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.re, &other.re, epsilon, max_relative)
            && f32::relative_eq(&self.im, &other.im, epsilon, max_relative)
    }
}
