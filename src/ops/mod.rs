pub mod complex;
pub mod conformal;
pub mod jacobi;
pub mod projection;
pub mod sphere;

pub use self::complex::Complex;
pub use self::conformal::{rotate_pos, stretch_schwarz, stretch_squircle, stretch_to_square};
pub use self::jacobi::{complex_cn, jacobi_am, jacobi_cn, jacobi_dn, jacobi_sn, Modulus};
pub use self::projection::{
    coord_to_pixel, pixel_to_coord, pixel_to_point_equirectangular, pixel_to_point_guyou,
    pixel_to_point_peirce, pixel_to_point_stereographic, pixel_to_point_stereographic_sized,
    point_to_pixel_equirectangular, Projection,
};
pub use self::sphere::{
    cartesian_to_spherical, rotate_around_x, rotate_around_y, rotate_around_z, rotate_point,
    spherical_to_cartesian, tangent_to_world_space,
};
