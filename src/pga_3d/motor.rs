use super::{rotation_matrix, rotation_quaternion, Flector3D, Line3D, Plane3D};
use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::matrix::Transform3D;
use crate::scalar::{fast_inverse_sqrt, half_angle, inverse_sqrt};
use crate::{Antigeo, Antireverse, Antisandwich, BulkNorm, Reverse, Unitize, WeightNorm};
use bytemuck::{Pod, Zeroable};

/// Proper rigid motion of space.
///
/// `v` holds `e41, e42, e43, 𝟙` and is the weight, a quaternion for the
/// rotation. `m` holds `e23, e31, e12, 1` and carries the translation.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Motor3D {
    pub v: Vector4D,
    pub m: Vector4D,
}

impl_linear_ops!(Motor3D { v, m });
impl_operator_ops!(Motor3D * [Motor3D, Flector3D] >> [Vector3D, Point3D, Vector4D, Line3D, Plane3D]);

impl Motor3D {
    pub const IDENTITY: Self = Self::new(Vector4D::W_UNIT, Vector4D::ZERO);

    #[inline]
    pub const fn new(v: Vector4D, m: Vector4D) -> Self {
        Self { v, m }
    }

    /// Right-handed rotation about the unit `axis` through the origin.
    pub fn make_rotation(angle: f32, axis: Vector3D) -> Self {
        let (c, s) = half_angle(angle);
        Self::new(Vector4D::from_xyz_w(axis * s, c), Vector4D::ZERO)
    }

    /// Right-handed rotation about a unitized line.
    pub fn make_rotation_about_line(angle: f32, line: Line3D) -> Self {
        let (c, s) = half_angle(angle);
        Self::new(
            Vector4D::from_xyz_w(line.v * s, c),
            Vector4D::from_xyz_w(line.m.as_vector() * s, 0.),
        )
    }

    pub fn make_translation(offset: Vector3D) -> Self {
        Self::new(Vector4D::W_UNIT, Vector4D::from_xyz_w(offset * 0.5, 0.))
    }

    /// Rotation about a unitized line combined with a slide of `displacement`
    /// along it.
    pub fn make_screw(angle: f32, line: Line3D, displacement: f32) -> Self {
        Self::make_translation(line.v * displacement) * Self::make_rotation_about_line(angle, line)
    }

    /// Image of the x axis direction. The motor must be unitized.
    pub fn direction_x(&self) -> Vector3D {
        let Vector4D { x, y, z, w } = self.v;
        Vector3D::new(w * w + x * x - y * y - z * z, 2. * (x * y + w * z), 2. * (x * z - w * y))
    }

    /// Image of the y axis direction. The motor must be unitized.
    pub fn direction_y(&self) -> Vector3D {
        let Vector4D { x, y, z, w } = self.v;
        Vector3D::new(2. * (x * y - w * z), w * w - x * x + y * y - z * z, 2. * (y * z + w * x))
    }

    /// Image of the z axis direction. The motor must be unitized.
    pub fn direction_z(&self) -> Vector3D {
        let Vector4D { x, y, z, w } = self.v;
        Vector3D::new(2. * (x * z + w * y), 2. * (y * z - w * x), w * w - x * x - y * y + z * z)
    }

    /// Image of the origin. The motor must be unitized.
    pub fn position(&self) -> Point3D {
        let t = self.translation();
        Point3D::new(t.x, t.y, t.z)
    }

    /// `vw m - mw v` and `v × m`, the two halves of the translation.
    #[inline]
    fn translation_parts(&self) -> (Vector3D, Vector3D) {
        let (v, m) = (self.v.xyz(), self.m.xyz());
        (m * self.v.w - v * self.m.w, v.cross(m))
    }

    #[inline]
    fn translation(&self) -> Vector3D {
        let (a, b) = self.translation_parts();
        (a + b) * 2.
    }

    /// Matrix of the motion. The motor must be unitized.
    pub fn transform_matrix(&self) -> Transform3D {
        Transform3D::from_matrix_translation(&rotation_matrix(self.v), self.translation())
    }

    /// Matrix of the reverse motion. The motor must be unitized.
    pub fn inverse_transform_matrix(&self) -> Transform3D {
        let (a, b) = self.translation_parts();
        let r = rotation_matrix(self.v).transpose();
        Transform3D::from_matrix_translation(&r, (b - a) * 2.)
    }

    /// Both matrices, sharing the rotation and the translation products.
    pub fn transform_matrices(&self) -> (Transform3D, Transform3D) {
        let (a, b) = self.translation_parts();
        let r = rotation_matrix(self.v);
        (
            Transform3D::from_matrix_translation(&r, (a + b) * 2.),
            Transform3D::from_matrix_translation(&r.transpose(), (b - a) * 2.),
        )
    }

    /// Extracts the motor of a rigid transform with determinant `+1`. The
    /// result matches the original motor up to sign.
    pub fn set_transform_matrix(&mut self, m: &Transform3D) -> &mut Self {
        let q = rotation_quaternion(&m.matrix());
        let v = q.xyz();
        let t = m.translation();
        self.v = q;
        self.m = Vector4D::from_xyz_w((t * q.w + t.cross(v)) * 0.5, t.dot(v) * -0.5);
        self
    }
}

impl Motor3D {
    /// `unitize` with the approximate inverse square root.
    #[inline]
    pub fn fast_unitize(self) -> Self {
        self * fast_inverse_sqrt(self.squared_weight_norm())
    }
}

impl From<&Transform3D> for Motor3D {
    fn from(m: &Transform3D) -> Self {
        let mut motor = Motor3D::IDENTITY;
        motor.set_transform_matrix(m);
        motor
    }
}

impl Reverse for Motor3D {
    type Output = Motor3D;
    #[inline]
    fn rev(self) -> Motor3D {
        self.antirev()
    }
}

impl Antireverse for Motor3D {
    #[inline]
    fn antirev(self) -> Self {
        let Self { v, m } = self;
        Motor3D::new(
            Vector4D::new(-v.x, -v.y, -v.z, v.w),
            Vector4D::new(-m.x, -m.y, -m.z, m.w),
        )
    }
}

impl BulkNorm for Motor3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.m.squared_mag()
    }
}

impl WeightNorm for Motor3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.v.squared_mag()
    }
}

impl Unitize for Motor3D {
    type Output = Motor3D;
    #[inline]
    fn unitize(self) -> Motor3D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

/// `self ⟇ b`: apply `b`, then `self`.
impl Antigeo<Motor3D> for Motor3D {
    type Output = Motor3D;
    fn antigeo(self, b: Motor3D) -> Motor3D {
        let (av, am, bv, bm) = (self.v, self.m, b.v, b.m);
        Motor3D::new(
            Vector4D::new(
                av.x * bv.w + av.y * bv.z - av.z * bv.y + av.w * bv.x,
                av.y * bv.w + av.z * bv.x - av.x * bv.z + av.w * bv.y,
                av.z * bv.w + av.x * bv.y - av.y * bv.x + av.w * bv.z,
                av.w * bv.w - av.x * bv.x - av.y * bv.y - av.z * bv.z,
            ),
            Vector4D::new(
                av.x * bm.w + av.y * bm.z - av.z * bm.y + av.w * bm.x
                    + am.x * bv.w + am.y * bv.z - am.z * bv.y + am.w * bv.x,
                av.y * bm.w + av.z * bm.x - av.x * bm.z + av.w * bm.y
                    + am.y * bv.w + am.z * bv.x - am.x * bv.z + am.w * bv.y,
                av.z * bm.w + av.x * bm.y - av.y * bm.x + av.w * bm.z
                    + am.z * bv.w + am.x * bv.y - am.y * bv.x + am.w * bv.z,
                av.w * bm.w - av.x * bm.x - av.y * bm.y - av.z * bm.z
                    + am.w * bv.w - am.x * bv.x - am.y * bv.y - am.z * bv.z,
            ),
        )
    }
}

impl Antigeo<Flector3D> for Motor3D {
    type Output = Flector3D;
    fn antigeo(self, f: Flector3D) -> Flector3D {
        let (v, m, p, g) = (self.v, self.m, f.p, f.g);
        Flector3D::new(
            Vector4D::new(
                p.x * v.w - p.y * v.z + p.z * v.y + p.w * m.x
                    + g.x * m.w - g.y * m.z + g.z * m.y + g.w * v.x,
                p.y * v.w - p.z * v.x + p.x * v.z + p.w * m.y
                    + g.y * m.w - g.z * m.x + g.x * m.z + g.w * v.y,
                p.z * v.w - p.x * v.y + p.y * v.x + p.w * m.z
                    + g.z * m.w - g.x * m.y + g.y * m.x + g.w * v.z,
                p.w * v.w - g.x * v.x - g.y * v.y - g.z * v.z,
            ),
            Plane3D::new(
                p.w * v.x + g.x * v.w - g.y * v.z + g.z * v.y,
                p.w * v.y + g.y * v.w - g.z * v.x + g.x * v.z,
                p.w * v.z + g.z * v.w - g.x * v.y + g.y * v.x,
                g.w * v.w + p.w * m.w - p.x * v.x - p.y * v.y - p.z * v.z
                    - g.x * m.x - g.y * m.y - g.z * m.z,
            ),
        )
    }
}

impl Antisandwich<Vector3D> for Motor3D {
    type Output = Vector3D;
    #[inline]
    fn antisandwich(self, d: Vector3D) -> Vector3D {
        rotation_matrix(self.v) * d
    }
}

/// The motor must be unitized.
impl Antisandwich<Point3D> for Motor3D {
    type Output = Point3D;
    #[inline]
    fn antisandwich(self, p: Point3D) -> Point3D {
        let q = rotation_matrix(self.v) * p.to_vector() + self.translation();
        Point3D::new(q.x, q.y, q.z)
    }
}

impl Antisandwich<Vector4D> for Motor3D {
    type Output = Vector4D;
    #[inline]
    fn antisandwich(self, p: Vector4D) -> Vector4D {
        let q = rotation_matrix(self.v) * p.xyz() + self.translation() * p.w;
        Vector4D::from_xyz_w(q, p.w * self.squared_weight_norm())
    }
}

impl Antisandwich<Line3D> for Motor3D {
    type Output = Line3D;
    fn antisandwich(self, l: Line3D) -> Line3D {
        let r = rotation_matrix(self.v);
        let (v, m) = (self.v.xyz(), self.m.xyz());
        let (vw, mw) = (self.v.w, self.m.w);
        let lv = l.v;
        let shift = lv * (mw * vw - m.dot(v))
            + v.cross(lv) * mw
            + m * v.dot(lv)
            + v * m.dot(lv)
            + m.cross(lv) * vw;
        Line3D::from_vectors(r * lv, Bivector3D::from_vector(r * l.m.as_vector() + shift * 2.))
    }
}

impl Antisandwich<Plane3D> for Motor3D {
    type Output = Plane3D;
    fn antisandwich(self, g: Plane3D) -> Plane3D {
        let (v, m) = (self.v.xyz(), self.m.xyz());
        let n = g.normal();
        let w = g.w * self.squared_weight_norm()
            + 2. * (self.m.w * n.dot(v) - self.v.w * n.dot(m) + n.dot(v.cross(m)));
        Plane3D::from_normal_w(rotation_matrix(self.v) * n, w)
    }
}
