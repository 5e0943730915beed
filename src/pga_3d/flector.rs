use super::{rotation_matrix, rotation_quaternion, Line3D, Motor3D, Plane3D};
use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::matrix::{Matrix3D, Transform3D};
use crate::scalar::inverse_sqrt;
use crate::{Antigeo, Antireverse, Antisandwich, BulkNorm, Reverse, Unitize, WeightNorm};
use bytemuck::{Pod, Zeroable};

/// Improper rigid motion of space: a point part `p` (`e1, e2, e3, e4`) and a
/// plane part `g` (`e423, e431, e412, e321`).
///
/// A reflection through a unitized plane is the plane itself with `p = 0`.
/// An inversion through a point is the unitized point with `g = 0`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Flector3D {
    pub p: Vector4D,
    pub g: Plane3D,
}

impl_linear_ops!(Flector3D { p, g });
impl_operator_ops!(Flector3D * [Motor3D, Flector3D] >> [Vector3D, Point3D, Vector4D, Line3D, Plane3D]);

impl Flector3D {
    #[inline]
    pub const fn new(p: Vector4D, g: Plane3D) -> Self {
        Self { p, g }
    }

    /// Reflection through a unitized plane.
    #[inline]
    pub fn make_reflection(plane: Plane3D) -> Self {
        Self::new(Vector4D::ZERO, plane)
    }

    /// Point reflection through `center`.
    #[inline]
    pub fn make_inversion(center: Point3D) -> Self {
        Self::new(Vector4D::from(center), Plane3D::default())
    }

    /// Rotation about a unitized `axis` followed by reflection through a
    /// unitized `plane`.
    pub fn make_rotoreflection(angle: f32, plane: Plane3D, axis: Line3D) -> Self {
        Self::make_reflection(plane) * Motor3D::make_rotation_about_line(angle, axis)
    }

    #[inline]
    fn quaternion(&self) -> Vector4D {
        Vector4D::from_xyz_w(self.g.normal(), self.p.w)
    }

    #[inline]
    fn linear_part(&self) -> Matrix3D {
        rotation_matrix(self.quaternion()) * -1.
    }

    /// `sw s - hw h` and `h × s`, the two halves of the translation.
    #[inline]
    fn translation_parts(&self) -> (Vector3D, Vector3D) {
        let (s, h) = (self.p.xyz(), self.g.normal());
        (s * self.p.w - h * self.g.w, h.cross(s))
    }

    #[inline]
    fn translation(&self) -> Vector3D {
        let (a, b) = self.translation_parts();
        (a + b) * 2.
    }

    /// Matrix of the motion, with determinant `-1`. The flector must be unitized.
    pub fn transform_matrix(&self) -> Transform3D {
        Transform3D::from_matrix_translation(&self.linear_part(), self.translation())
    }

    /// Matrix of the reverse motion. The flector must be unitized.
    pub fn inverse_transform_matrix(&self) -> Transform3D {
        let (a, b) = self.translation_parts();
        Transform3D::from_matrix_translation(&self.linear_part().transpose(), (a - b) * 2.)
    }

    pub fn transform_matrices(&self) -> (Transform3D, Transform3D) {
        let (a, b) = self.translation_parts();
        let m = self.linear_part();
        (
            Transform3D::from_matrix_translation(&m, (a + b) * 2.),
            Transform3D::from_matrix_translation(&m.transpose(), (a - b) * 2.),
        )
    }

    /// Extracts the flector of a rigid transform with determinant `-1`. The
    /// result matches the original flector up to sign.
    pub fn set_transform_matrix(&mut self, m: &Transform3D) -> &mut Self {
        let q = rotation_quaternion(&(m.matrix() * -1.));
        let h = q.xyz();
        let t = m.translation();
        self.p = Vector4D::from_xyz_w((t * q.w + t.cross(h)) * 0.5, q.w);
        self.g = Plane3D::from_normal_w(h, h.dot(t) * -0.5);
        self
    }
}

impl From<&Transform3D> for Flector3D {
    fn from(m: &Transform3D) -> Self {
        let mut flector = Flector3D::default();
        flector.set_transform_matrix(m);
        flector
    }
}

impl Reverse for Flector3D {
    type Output = Flector3D;
    #[inline]
    fn rev(self) -> Flector3D {
        Flector3D::new(self.p, -self.g)
    }
}

impl Antireverse for Flector3D {
    #[inline]
    fn antirev(self) -> Self {
        Flector3D::new(-self.p, self.g)
    }
}

impl BulkNorm for Flector3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.p.xyz().squared_mag() + self.g.w * self.g.w
    }
}

impl WeightNorm for Flector3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.quaternion().squared_mag()
    }
}

impl Unitize for Flector3D {
    type Output = Flector3D;
    #[inline]
    fn unitize(self) -> Flector3D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

impl Antigeo<Flector3D> for Flector3D {
    type Output = Motor3D;
    fn antigeo(self, b: Flector3D) -> Motor3D {
        let (ap, ag, bp, bg) = (self.p, self.g, b.p, b.g);
        Motor3D::new(
            Vector4D::new(
                -ap.w * bg.x - ag.x * bp.w - ag.y * bg.z + ag.z * bg.y,
                -ap.w * bg.y - ag.y * bp.w - ag.z * bg.x + ag.x * bg.z,
                -ap.w * bg.z - ag.z * bp.w - ag.x * bg.y + ag.y * bg.x,
                ag.x * bg.x + ag.y * bg.y + ag.z * bg.z - ap.w * bp.w,
            ),
            Vector4D::new(
                ap.w * bp.x - ap.x * bp.w + ap.z * bg.y - ap.y * bg.z
                    + ag.y * bp.z - ag.z * bp.y + ag.x * bg.w - ag.w * bg.x,
                ap.w * bp.y - ap.y * bp.w + ap.x * bg.z - ap.z * bg.x
                    + ag.z * bp.x - ag.x * bp.z + ag.y * bg.w - ag.w * bg.y,
                ap.w * bp.z - ap.z * bp.w + ap.y * bg.x - ap.x * bg.y
                    + ag.x * bp.y - ag.y * bp.x + ag.z * bg.w - ag.w * bg.z,
                ap.x * bg.x + ap.y * bg.y + ap.z * bg.z + ap.w * bg.w
                    - ag.x * bp.x - ag.y * bp.y - ag.z * bp.z - ag.w * bp.w,
            ),
        )
    }
}

impl Antigeo<Motor3D> for Flector3D {
    type Output = Flector3D;
    fn antigeo(self, q: Motor3D) -> Flector3D {
        let (p, g, v, m) = (self.p, self.g, q.v, q.m);
        Flector3D::new(
            Vector4D::new(
                p.x * v.w + p.y * v.z - p.z * v.y - p.w * m.x
                    - g.x * m.w - g.y * m.z + g.z * m.y + g.w * v.x,
                p.y * v.w + p.z * v.x - p.x * v.z - p.w * m.y
                    - g.y * m.w - g.z * m.x + g.x * m.z + g.w * v.y,
                p.z * v.w + p.x * v.y - p.y * v.x - p.w * m.z
                    - g.z * m.w - g.x * m.y + g.y * m.x + g.w * v.z,
                p.w * v.w - g.x * v.x - g.y * v.y - g.z * v.z,
            ),
            Plane3D::new(
                p.w * v.x + g.x * v.w + g.y * v.z - g.z * v.y,
                p.w * v.y + g.y * v.w + g.z * v.x - g.x * v.z,
                p.w * v.z + g.z * v.w + g.x * v.y - g.y * v.x,
                g.w * v.w - p.w * m.w - p.x * v.x - p.y * v.y - p.z * v.z
                    + g.x * m.x + g.y * m.y + g.z * m.z,
            ),
        )
    }
}

impl Antisandwich<Vector3D> for Flector3D {
    type Output = Vector3D;
    #[inline]
    fn antisandwich(self, d: Vector3D) -> Vector3D {
        self.linear_part() * d
    }
}

/// The flector must be unitized.
impl Antisandwich<Point3D> for Flector3D {
    type Output = Point3D;
    #[inline]
    fn antisandwich(self, p: Point3D) -> Point3D {
        let q = self.linear_part() * p.to_vector() + self.translation();
        Point3D::new(q.x, q.y, q.z)
    }
}

impl Antisandwich<Vector4D> for Flector3D {
    type Output = Vector4D;
    #[inline]
    fn antisandwich(self, p: Vector4D) -> Vector4D {
        let q = self.linear_part() * p.xyz() + self.translation() * p.w;
        Vector4D::from_xyz_w(q, p.w * self.squared_weight_norm())
    }
}

/// Lines keep the orientation of their points, matching `Transform3D * Line3D`.
impl Antisandwich<Line3D> for Flector3D {
    type Output = Line3D;
    fn antisandwich(self, l: Line3D) -> Line3D {
        let r = rotation_matrix(self.quaternion());
        let (s, h) = (self.p.xyz(), self.g.normal());
        let (sw, hw) = (self.p.w, self.g.w);
        let lv = l.v;
        let shift = h.cross(lv) * hw
            + lv * (hw * sw)
            + h * lv.dot(s)
            + s * h.dot(lv)
            - lv * h.dot(s)
            + s.cross(lv) * sw;
        Line3D::from_vectors(
            -(r * lv),
            Bivector3D::from_vector(r * l.m.as_vector() - shift * 2.),
        )
    }
}

/// Normals move like vectors, matching `plane * inverse_transform_matrix()`.
impl Antisandwich<Plane3D> for Flector3D {
    type Output = Plane3D;
    fn antisandwich(self, g: Plane3D) -> Plane3D {
        let (s, h) = (self.p.xyz(), self.g.normal());
        let n = g.normal();
        let w = g.w * self.squared_weight_norm() - 2. * self.g.w * n.dot(h)
            - 2. * n.dot(h.cross(s))
            + 2. * self.p.w * n.dot(s);
        Plane3D::from_normal_w(self.linear_part() * n, w)
    }
}
