use super::Plane3D;
use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::matrix::Transform3D;
use crate::{
    Antiwedge, BulkNorm, Dual, LeftComplement, Project, RightComplement, Unitize, WeightNorm,
    Wedge,
};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// Line in Plücker form. `v` (`e41, e42, e43`) is the direction and weight,
/// `m` (`e23, e31, e12`) is the moment `p × v` of any point `p` on the line.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Line3D {
    pub v: Vector3D,
    pub m: Bivector3D,
}

impl_linear_ops!(Line3D { v, m });

impl Line3D {
    pub const X_AXIS: Self = Self::from_vectors(Vector3D::X_UNIT, Bivector3D::ZERO);
    pub const Y_AXIS: Self = Self::from_vectors(Vector3D::Y_UNIT, Bivector3D::ZERO);
    pub const Z_AXIS: Self = Self::from_vectors(Vector3D::Z_UNIT, Bivector3D::ZERO);

    #[inline]
    pub const fn new(vx: f32, vy: f32, vz: f32, mx: f32, my: f32, mz: f32) -> Self {
        Self::from_vectors(Vector3D::new(vx, vy, vz), Bivector3D::new(mx, my, mz))
    }

    #[inline]
    pub const fn from_vectors(v: Vector3D, m: Bivector3D) -> Self {
        Self { v, m }
    }

    #[inline]
    pub fn from_point_direction(p: Point3D, direction: Vector3D) -> Self {
        Self::from_vectors(direction, Bivector3D::from_vector(p.to_vector().cross(direction)))
    }

    #[inline]
    pub fn direction(self) -> Vector3D {
        self.v
    }

    /// Moves the line by `t`. Only the bulk changes.
    #[inline]
    pub fn translate(self, t: Vector3D) -> Self {
        Self::from_vectors(self.v, self.m + Bivector3D::from_vector(t.cross(self.v)))
    }

    /// Point on the line closest to the origin. The line must be unitized.
    #[inline]
    pub fn support(self) -> Point3D {
        let s = self.v.cross(self.m.as_vector());
        Point3D::new(s.x, s.y, s.z)
    }

    /// Distance to `p`. The line must be unitized.
    #[inline]
    pub fn distance_to_point(self, p: Point3D) -> f32 {
        (p.to_vector().cross(self.v) - self.m.as_vector()).magnitude()
    }
}

/// Plane containing the line and `p`.
impl Wedge<Point3D> for Line3D {
    type Output = Plane3D;
    #[inline]
    fn wedge(self, p: Point3D) -> Plane3D {
        let m = self.m.as_vector();
        let p = p.to_vector();
        Plane3D::from_normal_w(self.v.cross(p) + m, -m.dot(p))
    }
}

impl Wedge<Line3D> for Point3D {
    type Output = Plane3D;
    #[inline]
    fn wedge(self, l: Line3D) -> Plane3D {
        l.wedge(self)
    }
}

impl Wedge<Vector4D> for Line3D {
    type Output = Plane3D;
    #[inline]
    fn wedge(self, p: Vector4D) -> Plane3D {
        let m = self.m.as_vector();
        let xyz = p.xyz();
        Plane3D::from_normal_w(self.v.cross(xyz) + m * p.w, -m.dot(xyz))
    }
}

impl Wedge<Line3D> for Vector4D {
    type Output = Plane3D;
    #[inline]
    fn wedge(self, l: Line3D) -> Plane3D {
        l.wedge(self)
    }
}

/// Plane containing the line and parallel to `d`.
impl Wedge<Vector3D> for Line3D {
    type Output = Plane3D;
    #[inline]
    fn wedge(self, d: Vector3D) -> Plane3D {
        self.wedge(Vector4D::from(d))
    }
}

/// Antiscalar of `a ∧ b`, zero when the lines intersect.
impl Wedge<Line3D> for Line3D {
    type Output = f32;
    #[inline]
    fn wedge(self, l: Line3D) -> f32 {
        -(self.v.dot(l.m.as_vector()) + self.m.as_vector().dot(l.v))
    }
}

impl Antiwedge<Line3D> for Line3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, l: Line3D) -> f32 {
        self.wedge(l)
    }
}

/// Point where the line crosses the plane. Parallel lines give a direction.
impl Antiwedge<Plane3D> for Line3D {
    type Output = Vector4D;
    #[inline]
    fn antiwedge(self, g: Plane3D) -> Vector4D {
        let n = g.normal();
        Vector4D::from_xyz_w(self.m.as_vector().cross(n) + self.v * g.w, -self.v.dot(n))
    }
}

impl Antiwedge<Line3D> for Plane3D {
    type Output = Vector4D;
    #[inline]
    fn antiwedge(self, l: Line3D) -> Vector4D {
        l.antiwedge(self)
    }
}

impl RightComplement for Line3D {
    type Output = Line3D;
    #[inline]
    fn right_comp(self) -> Line3D {
        Line3D::from_vectors(-self.m.as_vector(), -Bivector3D::from_vector(self.v))
    }
}

impl LeftComplement for Line3D {
    type Output = Line3D;
    #[inline]
    fn left_comp(self) -> Line3D {
        self.right_comp()
    }
}

/// Line at infinity in the planes perpendicular to the moment.
impl Dual for Line3D {
    type Output = Line3D;
    #[inline]
    fn dual(self) -> Line3D {
        Line3D::from_vectors(-self.m.as_vector(), Bivector3D::ZERO)
    }
}

impl BulkNorm for Line3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.m.squared_mag()
    }
}

impl WeightNorm for Line3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.v.squared_mag()
    }
}

impl Unitize for Line3D {
    type Output = Line3D;
    #[inline]
    fn unitize(self) -> Line3D {
        self * self.v.inverse_mag()
    }
}

impl Project<Plane3D> for Line3D {
    type Output = Line3D;
    #[inline]
    fn project(self, g: Plane3D) -> Line3D {
        let n = g.normal();
        let v = self.v - n * self.v.dot(n);
        let m = n * self.m.as_vector().dot(n) + self.v.cross(n) * g.w;
        Line3D::from_vectors(v, Bivector3D::from_vector(m))
    }
}

/// Moves the line by an affine transform. The moment uses the adjugate of the
/// linear part so that non-rigid transforms keep lines through their points.
impl Mul<Line3D> for Transform3D {
    type Output = Line3D;
    fn mul(self, l: Line3D) -> Line3D {
        let a = self.column(0);
        let b = self.column(1);
        let c = self.column(2);
        let v = self * l.v;
        let m = b.cross(c) * l.m.x + c.cross(a) * l.m.y + a.cross(b) * l.m.z
            + self.translation().cross(v);
        Line3D::from_vectors(v, Bivector3D::from_vector(m))
    }
}
