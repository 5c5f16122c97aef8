//! Conformal panorama reprojection between pixel frames and the unit
//! sphere.
//!
//! The scalar core lives in [`ops`]: complex arithmetic, Jacobi elliptic
//! functions computed by the arithmetic-geometric mean, the Schwarz
//! square-to-disk map and the projection family (equirectangular,
//! stereographic, Guyou, Peirce quincuncial). [`grid`] evaluates that core
//! over whole output grids in parallel, producing remap tables an image
//! resampler can consume. The `python` feature exports the same surface as
//! a Python extension module.

pub mod error;
pub mod grid;
pub mod ops;
pub mod types;

#[cfg(feature = "python")]
mod bindings;

pub use error::ProjectionError;
pub use grid::{map_source_pixel, projection_grid, reprojection_map};
pub use ops::complex::Complex;
pub use ops::conformal::{rotate_pos, stretch_schwarz, stretch_squircle, stretch_to_square};
pub use ops::jacobi::{complex_cn, jacobi_am, jacobi_cn, jacobi_dn, jacobi_sn, Modulus};
pub use ops::projection::{
    coord_to_pixel, pixel_to_coord, pixel_to_point_equirectangular, pixel_to_point_guyou,
    pixel_to_point_peirce, pixel_to_point_stereographic, pixel_to_point_stereographic_sized,
    point_to_pixel_equirectangular, Projection,
};
pub use ops::sphere::{
    cartesian_to_spherical, rotate_around_x, rotate_around_y, rotate_around_z, rotate_point,
    spherical_to_cartesian, tangent_to_world_space,
};
pub use types::{Spherical, Vec2, Vec3};
