//! Square matrices and affine transforms with a fixed last row.

mod matrix_2d;
mod matrix_3d;
mod transform_2d;
mod transform_3d;

pub use matrix_2d::Matrix2D;
pub use matrix_3d::Matrix3D;
pub use transform_2d::Transform2D;
pub use transform_3d::Transform3D;
