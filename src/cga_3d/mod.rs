//! Conformal geometric algebra of space.
//!
//! Basis `e1, e2, e3, e4, e5` where `e4` is the point at the origin and `e5`
//! the point at infinity, with `e4 · e5 = -1`. Round points are grade 1,
//! dipoles grade 2, circles grade 3 and spheres grade 4. Wedging a round with
//! `e5` gives its carrier, so planes and lines appear as flat spheres and flat
//! circles.
//!
//! Reverse and antireverse agree in this algebra: grades 2 and 3 flip sign.

mod circle;
mod dipole;
mod round_point;
mod sphere;

pub use circle::Circle3D;
pub use dipole::Dipole3D;
pub use round_point::RoundPoint3D;
pub use sphere::Sphere3D;

use crate::ga_4d::Vector4D;

/// Round point at `flat_center`, given the squared center and radius norms
/// that share its weight.
#[inline]
fn weighted_center(flat_center: Vector4D, center_norm: f32, radius_norm: f32) -> RoundPoint3D {
    RoundPoint3D::new(
        flat_center.x,
        flat_center.y,
        flat_center.z,
        flat_center.w,
        (center_norm - radius_norm) * 0.5,
    )
}
