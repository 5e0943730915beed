//! Euclidean 2D vectors, points and the pseudoscalar.

use crate::{LeftComplement, RightComplement, Wedge};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Direction in the plane, `x e1 + y e2`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl_linear_ops!(Vector2D { x, y });

impl Vector2D {
    pub const ZERO: Self = Self::new(0., 0.);
    pub const X_UNIT: Self = Self::new(1., 0.);
    pub const Y_UNIT: Self = Self::new(0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
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

    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }
}

impl Wedge<Vector2D> for Vector2D {
    type Output = Bivector2D;
    #[inline]
    fn wedge(self, rhs: Vector2D) -> Bivector2D {
        Bivector2D::new(self.x * rhs.y - self.y * rhs.x)
    }
}

/// `e1 -> e2`, `e2 -> -e1`: a quarter turn counter-clockwise.
impl RightComplement for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn right_comp(self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }
}

/// `e1 -> -e2`, `e2 -> e1`: a quarter turn clockwise.
impl LeftComplement for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn left_comp(self) -> Vector2D {
        Vector2D::new(self.y, -self.x)
    }
}

/// Oriented area, `xy e12`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Bivector2D {
    pub xy: f32,
}

impl_linear_ops!(Bivector2D { xy });

impl Bivector2D {
    pub const ZERO: Self = Self::new(0.);
    pub const UNIT: Self = Self::new(1.);

    #[inline]
    pub const fn new(xy: f32) -> Self {
        Self { xy }
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.xy.abs()
    }
}

impl RightComplement for Bivector2D {
    type Output = f32;
    #[inline]
    fn right_comp(self) -> f32 {
        self.xy
    }
}

impl LeftComplement for Bivector2D {
    type Output = f32;
    #[inline]
    fn left_comp(self) -> f32 {
        self.xy
    }
}

/// Position in the plane. Promotes to homogeneous form with a unit weight.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset from the origin.
    #[inline]
    pub const fn to_vector(self) -> Vector2D {
        Vector2D::new(self.x, self.y)
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
        Self::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }
}

impl Sub for Point2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Point2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector2D> for Point2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign<Vector2D> for Point2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vector2D> for Point2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// The origin of the plane.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Origin2D;

impl From<Origin2D> for Point2D {
    #[inline]
    fn from(_: Origin2D) -> Point2D {
        Point2D::new(0., 0.)
    }
}

impl Add<Vector2D> for Origin2D {
    type Output = Point2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Point2D {
        Point2D::new(rhs.x, rhs.y)
    }
}

impl Sub<Vector2D> for Origin2D {
    type Output = Point2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Point2D {
        Point2D::new(-rhs.x, -rhs.y)
    }
}

impl Sub<Origin2D> for Point2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, _: Origin2D) -> Vector2D {
        self.to_vector()
    }
}

impl Sub<Point2D> for Origin2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Point2D) -> Vector2D {
        -rhs.to_vector()
    }
}
