//! Rigid and conformal geometric algebra for 2D and 3D space.
//!
//! Every product between two supported entity types is written out in closed
//! form; there is no generic multivector. Entities are plain `#[repr(C)]`
//! structs of `f32` and can be cast to and from `&[f32]` with `bytemuck`.
//!
//! Operators:
//! - `a.wedge(b)` joins, `a.antiwedge(b)` meets
//! - `a * b` composes motors and flectors (`b` applies first)
//! - `op >> x` or [`transform`] applies a motor or flector
//!
//! Models of geometry:
//! - [x] Vector algebra (`ga_2d`, `ga_3d`, `ga_4d`)
//! - [x] Rigid 2D: flat points, lines, motors, flectors
//! - [x] Rigid 3D: points, lines, planes, motors, flectors
//! - [x] Conformal 2D: round points, dipoles, circles
//! - [x] Conformal 3D: round points, dipoles, circles, spheres
//! - [ ] Conformal motors
//!
//! Unary operations:
//! - [x] Left and right complement
//! - [x] Dual
//! - [x] Reverse and antireverse
//! - [x] Bulk, weight and round norms
//! - [x] Unitize
//!
//! Round operations:
//! - [x] Center and flat center
//! - [x] Carrier
//! - [x] Partner and container

#[macro_use]
mod macros;

pub mod scalar;

pub mod ga_2d;
pub mod ga_3d;
pub mod ga_4d;
pub mod matrix;
pub mod pga_2d;
pub mod pga_3d;

#[cfg(feature = "conformal")]
pub mod cga_2d;
#[cfg(feature = "conformal")]
pub mod cga_3d;

#[cfg(feature = "rand")]
mod random;

pub use geo_traits::*;

pub use ga_2d::{Bivector2D, Origin2D, Point2D, Vector2D};
pub use ga_3d::{Bivector3D, Origin3D, Point3D, Vector3D};
pub use ga_4d::{Trivector4D, Vector4D};
pub use matrix::{Matrix2D, Matrix3D, Transform2D, Transform3D};
pub use pga_2d::{FlatPoint2D, Flector2D, Line2D, Motor2D};
pub use pga_3d::{Flector3D, Line3D, Motor3D, Plane3D};

#[cfg(feature = "conformal")]
pub use cga_2d::{Circle2D, Dipole2D, RoundPoint2D};
#[cfg(feature = "conformal")]
pub use cga_3d::{Circle3D, Dipole3D, RoundPoint3D, Sphere3D};

/// Applies `op` to `entity`. Same as `op >> entity`.
#[inline]
pub fn transform<T, Op: Antisandwich<T>>(entity: T, op: Op) -> Op::Output {
    op.antisandwich(entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_matches_operator() {
        let m = Motor3D::make_rotation(0.7, Vector3D::Z_UNIT)
            * Motor3D::make_translation(Vector3D::new(1., 2., 3.));
        let p = Point3D::new(-1., 0.5, 2.);
        assert_eq!(m >> p, transform(p, m));

        let f = Flector2D::make_reflection(Line2D::X_AXIS);
        let q = Point2D::new(3., 4.);
        assert_eq!(f >> q, transform(q, f));
    }

    #[test]
    fn entities_cast_to_floats() {
        let lines = [
            Line3D::new(1., 2., 3., 4., 5., 6.),
            Line3D::new(7., 8., 9., 10., 11., 12.),
        ];
        let floats: &[f32] = bytemuck::cast_slice(&lines);
        assert_eq!(12, floats.len());
        assert_eq!(7., floats[6]);

        let planes: &[Plane3D] = bytemuck::cast_slice(&floats[..8]);
        assert_eq!(Plane3D::new(1., 2., 3., 4.), planes[0]);
    }
}
