//! Pixel-to-sphere projections.
//!
//! Every projection takes a normalized pixel coordinate in [0, 1]^2 and
//! returns a unit-sphere direction. Inputs outside the unit square
//! extrapolate with the same formulas. Equirectangular also maps back
//! from the sphere to pixels.

mod equirectangular;
mod guyou;
mod peirce;
mod stereographic;

pub use equirectangular::{
    coord_to_pixel, pixel_to_coord, pixel_to_point_equirectangular,
    point_to_pixel_equirectangular,
};
pub use guyou::pixel_to_point_guyou;
pub use peirce::pixel_to_point_peirce;
pub use stereographic::{pixel_to_point_stereographic, pixel_to_point_stereographic_sized};

use crate::error::ProjectionError;
use crate::types::{Vec2, Vec3};
use std::str::FromStr;

/// Supported projection layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    Equirectangular,
    Stereographic,
    Guyou,
    Peirce,
}

impl Projection {
    pub fn label(self) -> &'static str {
        match self {
            Projection::Equirectangular => "equirectangular",
            Projection::Stereographic => "stereographic",
            Projection::Guyou => "guyou",
            Projection::Peirce => "peirce",
        }
    }

    /// Unit-sphere direction seen by the given pixel.
    pub fn pixel_to_point(self, pos: Vec2) -> Vec3 {
        match self {
            Projection::Equirectangular => pixel_to_point_equirectangular(pos),
            Projection::Stereographic => pixel_to_point_stereographic(pos),
            Projection::Guyou => pixel_to_point_guyou(pos),
            Projection::Peirce => pixel_to_point_peirce(pos),
        }
    }
}

impl FromStr for Projection {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equirectangular" => Ok(Projection::Equirectangular),
            "stereographic" => Ok(Projection::Stereographic),
            "guyou" => Ok(Projection::Guyou),
            "peirce" | "quincuncial" => Ok(Projection::Peirce),
            other => Err(ProjectionError::UnknownProjection(other.to_string())),
        }
    }
}
