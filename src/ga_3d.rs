//! Euclidean 3D vectors, bivectors and points.

use crate::ga_2d::{Point2D, Vector2D};
use crate::{Antiwedge, Dual, LeftComplement, RightComplement, Wedge};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Direction in space, `x e1 + y e2 + z e3`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_linear_ops!(Vector3D { x, y, z });

impl Vector3D {
    pub const ZERO: Self = Self::new(0., 0., 0.);
    pub const X_UNIT: Self = Self::new(1., 0., 0.);
    pub const Y_UNIT: Self = Self::new(0., 1., 0.);
    pub const Z_UNIT: Self = Self::new(0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
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

    /// Unit vector in the same direction. The zero vector gives NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self * self.inverse_mag()
    }

    /// `magnitude` with the approximate square root.
    #[inline]
    pub fn fast_magnitude(self) -> f32 {
        crate::scalar::fast_sqrt(self.squared_mag())
    }

    /// `normalize` with the approximate inverse square root.
    #[inline]
    pub fn fast_normalize(self) -> Self {
        self * crate::scalar::fast_inverse_sqrt(self.squared_mag())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    #[inline]
    pub const fn xy(self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Component of `self` parallel to the unit vector `a`.
    #[inline]
    pub fn project_onto_unit(self, a: Self) -> Self {
        a * self.dot(a)
    }

    /// Component of `self` perpendicular to the unit vector `a`.
    #[inline]
    pub fn reject_from_unit(self, a: Self) -> Self {
        self - a * self.dot(a)
    }
}

impl From<Vector2D> for Vector3D {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y, 0.)
    }
}

/// Oriented area, `x e23 + y e31 + z e12`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Bivector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_linear_ops!(Bivector3D { x, y, z });

impl Bivector3D {
    pub const ZERO: Self = Self::new(0., 0., 0.);
    pub const YZ_UNIT: Self = Self::new(1., 0., 0.);
    pub const ZX_UNIT: Self = Self::new(0., 1., 0.);
    pub const XY_UNIT: Self = Self::new(0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
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

    /// Reinterprets the components as a vector without changing them.
    #[inline]
    pub(crate) const fn as_vector(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) const fn from_vector(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Wedge<Vector3D> for Vector3D {
    type Output = Bivector3D;
    #[inline]
    fn wedge(self, rhs: Vector3D) -> Bivector3D {
        let c = self.cross(rhs);
        Bivector3D::new(c.x, c.y, c.z)
    }
}

/// Antiscalar coefficient of `B ∧ v`.
impl Wedge<Vector3D> for Bivector3D {
    type Output = f32;
    #[inline]
    fn wedge(self, rhs: Vector3D) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Wedge<Bivector3D> for Vector3D {
    type Output = f32;
    #[inline]
    fn wedge(self, rhs: Bivector3D) -> f32 {
        rhs.wedge(self)
    }
}

/// Intersection direction of two planes through the origin.
impl Antiwedge<Bivector3D> for Bivector3D {
    type Output = Vector3D;
    #[inline]
    fn antiwedge(self, rhs: Bivector3D) -> Vector3D {
        self.as_vector().cross(rhs.as_vector())
    }
}

impl Antiwedge<Vector3D> for Bivector3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, rhs: Vector3D) -> f32 {
        self.wedge(rhs)
    }
}

impl RightComplement for Vector3D {
    type Output = Bivector3D;
    #[inline]
    fn right_comp(self) -> Bivector3D {
        Bivector3D::new(self.x, self.y, self.z)
    }
}

impl LeftComplement for Vector3D {
    type Output = Bivector3D;
    #[inline]
    fn left_comp(self) -> Bivector3D {
        Bivector3D::new(self.x, self.y, self.z)
    }
}

impl RightComplement for Bivector3D {
    type Output = Vector3D;
    #[inline]
    fn right_comp(self) -> Vector3D {
        self.as_vector()
    }
}

impl LeftComplement for Bivector3D {
    type Output = Vector3D;
    #[inline]
    fn left_comp(self) -> Vector3D {
        self.as_vector()
    }
}

/// Euclidean metric, so the dual is the complement.
impl Dual for Vector3D {
    type Output = Bivector3D;
    #[inline]
    fn dual(self) -> Bivector3D {
        self.right_comp()
    }
}

impl Dual for Bivector3D {
    type Output = Vector3D;
    #[inline]
    fn dual(self) -> Vector3D {
        self.right_comp()
    }
}

/// Position in space. Promotes to homogeneous form with a unit weight.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn xy(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    #[inline]
    pub fn squared_distance(self, rhs: Self) -> f32 {
        (self - rhs).squared_mag()
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        (self - rhs).magnitude()
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }
}

impl From<Point2D> for Point3D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::new(p.x, p.y, 0.)
    }
}

impl Sub for Point3D {
    type Output = Vector3D;
    #[inline]
    fn sub(self, rhs: Point3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn add(self, rhs: Vector3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;
    #[inline]
    fn sub(self, rhs: Vector3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign<Vector3D> for Point3D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3D) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector3D> for Point3D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3D) {
        *self = *self - rhs;
    }
}

/// The origin of space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Origin3D;

impl From<Origin3D> for Point3D {
    #[inline]
    fn from(_: Origin3D) -> Point3D {
        Point3D::new(0., 0., 0.)
    }
}

impl Add<Vector3D> for Origin3D {
    type Output = Point3D;
    #[inline]
    fn add(self, rhs: Vector3D) -> Point3D {
        Point3D::new(rhs.x, rhs.y, rhs.z)
    }
}

impl Sub<Vector3D> for Origin3D {
    type Output = Point3D;
    #[inline]
    fn sub(self, rhs: Vector3D) -> Point3D {
        Point3D::new(-rhs.x, -rhs.y, -rhs.z)
    }
}

impl Sub<Origin3D> for Point3D {
    type Output = Vector3D;
    #[inline]
    fn sub(self, _: Origin3D) -> Vector3D {
        self.to_vector()
    }
}

impl Sub<Point3D> for Origin3D {
    type Output = Vector3D;
    #[inline]
    fn sub(self, rhs: Point3D) -> Vector3D {
        -rhs.to_vector()
    }
}
