//! Rigid geometric algebra of space.
//!
//! Basis `e1, e2, e3, e4` with `e4² = 0`. Points are grade 1 (`Vector4D`) with
//! weight `e4`, lines are grade 2 with weight `e41, e42, e43`, planes are grade 3
//! with weight `e423, e431, e412`.
//!
//! Motors and flectors act through the antisandwich `Q ⟇ x ⟇ antirev(Q)`,
//! written `Q >> x`. Composition `a * b` applies `b` first.

mod flector;
mod line;
mod motor;
mod plane;

pub use flector::Flector3D;
pub use line::Line3D;
pub use motor::Motor3D;
pub use plane::Plane3D;

use crate::ga_3d::{Bivector3D, Point3D};
use crate::ga_4d::Vector4D;
use crate::matrix::Matrix3D;
use crate::{
    Antiproject, BulkNorm, Dual, LeftComplement, Project, RightComplement, Unitize, WeightNorm,
    Wedge,
};

impl Wedge<Vector4D> for Vector4D {
    type Output = Line3D;
    #[inline]
    fn wedge(self, q: Vector4D) -> Line3D {
        let p = self;
        Line3D {
            v: q.xyz() * p.w - p.xyz() * q.w,
            m: Bivector3D::from_vector(p.xyz().cross(q.xyz())),
        }
    }
}

/// Line from `self` towards `q`.
impl Wedge<Point3D> for Point3D {
    type Output = Line3D;
    #[inline]
    fn wedge(self, q: Point3D) -> Line3D {
        Line3D {
            v: q - self,
            m: Bivector3D::from_vector(self.to_vector().cross(q.to_vector())),
        }
    }
}

impl RightComplement for Vector4D {
    type Output = Plane3D;
    #[inline]
    fn right_comp(self) -> Plane3D {
        Plane3D::new(self.x, self.y, self.z, self.w)
    }
}

impl LeftComplement for Vector4D {
    type Output = Plane3D;
    #[inline]
    fn left_comp(self) -> Plane3D {
        Plane3D::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Plane through the origin perpendicular to the point's direction.
impl Dual for Vector4D {
    type Output = Plane3D;
    #[inline]
    fn dual(self) -> Plane3D {
        Plane3D::new(self.x, self.y, self.z, 0.)
    }
}

impl BulkNorm for Vector4D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.xyz().squared_mag()
    }
}

impl WeightNorm for Vector4D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.w * self.w
    }
}

/// Divides by `|w|`, so the sign of the weight is kept.
impl Unitize for Vector4D {
    type Output = Vector4D;
    #[inline]
    fn unitize(self) -> Vector4D {
        self * self.w.abs().recip()
    }
}

impl Project<Plane3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn project(self, g: Plane3D) -> Point3D {
        let n = g.normal();
        self - n * (n.dot(self.to_vector()) + g.w)
    }
}

impl Project<Plane3D> for Vector4D {
    type Output = Vector4D;
    #[inline]
    fn project(self, g: Plane3D) -> Vector4D {
        let n = g.normal();
        let d = n.dot(self.xyz()) + g.w * self.w;
        Vector4D::from_xyz_w(self.xyz() - n * d, self.w)
    }
}

impl Project<Line3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn project(self, l: Line3D) -> Point3D {
        let foot = l.v.cross(l.m.as_vector());
        Point3D::new(foot.x, foot.y, foot.z) + l.v * l.v.dot(self.to_vector())
    }
}

impl Project<Line3D> for Vector4D {
    type Output = Vector4D;
    #[inline]
    fn project(self, l: Line3D) -> Vector4D {
        let foot = l.v.cross(l.m.as_vector());
        Vector4D::from_xyz_w(foot * self.w + l.v * l.v.dot(self.xyz()), self.w)
    }
}

impl Antiproject<Point3D> for Plane3D {
    type Output = Plane3D;
    #[inline]
    fn antiproject(self, p: Point3D) -> Plane3D {
        Plane3D::from_normal_point(self.normal(), p)
    }
}

impl Antiproject<Point3D> for Line3D {
    type Output = Line3D;
    #[inline]
    fn antiproject(self, p: Point3D) -> Line3D {
        Line3D::from_point_direction(p, self.v)
    }
}

/// Rotation matrix of the quaternion `x e41 + y e42 + z e43 + w 𝟙`, scaled by
/// its squared norm.
fn rotation_matrix(q: Vector4D) -> Matrix3D {
    let Vector4D { x, y, z, w } = q;
    let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);
    Matrix3D::new(
        ww + xx - yy - zz,
        2. * (xy - wz),
        2. * (xz + wy),
        2. * (xy + wz),
        ww - xx + yy - zz,
        2. * (yz - wx),
        2. * (xz - wy),
        2. * (yz + wx),
        ww - xx - yy + zz,
    )
}

/// Unit quaternion of a rotation matrix, taken from the trace when it is
/// positive and from the largest diagonal entry otherwise.
fn rotation_quaternion(m: &Matrix3D) -> Vector4D {
    let (m00, m11, m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
    let trace = m00 + m11 + m22;

    if trace > 0. {
        let s = 0.5 / (trace + 1.).sqrt();
        Vector4D::new(
            (m[(2, 1)] - m[(1, 2)]) * s,
            (m[(0, 2)] - m[(2, 0)]) * s,
            (m[(1, 0)] - m[(0, 1)]) * s,
            0.25 / s,
        )
    } else if m00 > m11 && m00 > m22 {
        let s = 2. * (1. + m00 - m11 - m22).sqrt();
        let inv = s.recip();
        Vector4D::new(
            0.25 * s,
            (m[(0, 1)] + m[(1, 0)]) * inv,
            (m[(0, 2)] + m[(2, 0)]) * inv,
            (m[(2, 1)] - m[(1, 2)]) * inv,
        )
    } else if m11 > m22 {
        let s = 2. * (1. + m11 - m00 - m22).sqrt();
        let inv = s.recip();
        Vector4D::new(
            (m[(0, 1)] + m[(1, 0)]) * inv,
            0.25 * s,
            (m[(1, 2)] + m[(2, 1)]) * inv,
            (m[(0, 2)] - m[(2, 0)]) * inv,
        )
    } else {
        let s = 2. * (1. + m22 - m00 - m11).sqrt();
        let inv = s.recip();
        Vector4D::new(
            (m[(0, 2)] + m[(2, 0)]) * inv,
            (m[(1, 2)] + m[(2, 1)]) * inv,
            0.25 * s,
            (m[(1, 0)] - m[(0, 1)]) * inv,
        )
    }
}
