//! Four-component vectors, mostly used as homogeneous 3D points.

use crate::ga_3d::{Point3D, Vector3D};
use bytemuck::{Pod, Zeroable};

/// `x e1 + y e2 + z e3 + w e4`. As a flat point, `w` is the weight.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vector4D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(Vector4D { x, y, z, w });

/// The grade-3 element of 4D space is the rigid 3D plane.
pub type Trivector4D = crate::pga_3d::Plane3D;

impl Vector4D {
    pub const ZERO: Self = Self::new(0., 0., 0., 0.);
    pub const X_UNIT: Self = Self::new(1., 0., 0., 0.);
    pub const Y_UNIT: Self = Self::new(0., 1., 0., 0.);
    pub const Z_UNIT: Self = Self::new(0., 0., 1., 0.);
    pub const W_UNIT: Self = Self::new(0., 0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_xyz_w(v: Vector3D, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn squared_mag(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.squared_mag().sqrt()
    }

    #[inline]
    pub fn inverse_mag(self) -> f32 {
        crate::scalar::inverse_sqrt(self.squared_mag())
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self * self.inverse_mag()
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor(), self.w.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil(), self.w.ceil())
    }

    #[inline]
    pub const fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Euclidean point obtained by dividing by `w`. A zero weight gives
    /// infinite or NaN coordinates.
    #[inline]
    pub fn to_point(self) -> Point3D {
        let inv = self.w.recip();
        Point3D::new(self.x * inv, self.y * inv, self.z * inv)
    }
}

impl From<Point3D> for Vector4D {
    #[inline]
    fn from(p: Point3D) -> Self {
        Self::new(p.x, p.y, p.z, 1.)
    }
}

impl From<Vector3D> for Vector4D {
    #[inline]
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z, 0.)
    }
}
