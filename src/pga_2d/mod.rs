//! Rigid geometric algebra of the plane.
//!
//! Basis `e1, e2, e3` with `e3² = 0`. Flat points are grade 1 with weight `e3`,
//! lines are grade 2 (`e23, e31, e12`) with weight `e23, e31`.

mod flector;
mod motor;

pub use flector::Flector2D;
pub use motor::Motor2D;

use crate::ga_2d::{Point2D, Vector2D};
use crate::matrix::Transform2D;
use crate::scalar::inverse_sqrt;
use crate::{
    Antiproject, Antiwedge, BulkNorm, Dual, LeftComplement, Project, RightComplement, Unitize,
    WeightNorm, Wedge,
};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// Homogeneous point `x e1 + y e2 + z e3`. Directions have `z = 0`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FlatPoint2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_linear_ops!(FlatPoint2D { x, y, z });

impl FlatPoint2D {
    pub const ORIGIN: Self = Self::new(0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn xy(self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Euclidean point obtained by dividing by the weight.
    #[inline]
    pub fn to_point(self) -> Point2D {
        let inv = self.z.recip();
        Point2D::new(self.x * inv, self.y * inv)
    }
}

impl From<Point2D> for FlatPoint2D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::new(p.x, p.y, 1.)
    }
}

impl From<Vector2D> for FlatPoint2D {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y, 0.)
    }
}

/// Line `x X + y Y + z = 0` stored as `x e23 + y e31 + z e12`.
///
/// `(x, y)` is the normal and carries the weight, `z` is the bulk.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Line2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_linear_ops!(Line2D { x, y, z });

impl Line2D {
    pub const X_AXIS: Self = Self::new(0., 1., 0.);
    pub const Y_AXIS: Self = Self::new(-1., 0., 0.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Line through `p` with normal `n`.
    #[inline]
    pub fn from_point_normal(p: Point2D, n: Vector2D) -> Self {
        Self::new(n.x, n.y, -n.dot(p.to_vector()))
    }

    #[inline]
    pub const fn normal(self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    /// Direction of travel, the normal turned a quarter clockwise.
    #[inline]
    pub fn direction(self) -> Vector2D {
        self.normal().left_comp()
    }

    /// Moves the line by `t`. Only the bulk changes.
    #[inline]
    pub fn translate(self, t: Vector2D) -> Self {
        Self::new(self.x, self.y, self.z - self.normal().dot(t))
    }

    /// Signed distance to `p`, positive on the side the normal points to.
    /// The line must be unitized.
    #[inline]
    pub fn distance_to_point(self, p: Point2D) -> f32 {
        self.antiwedge(p)
    }
}

impl Wedge<FlatPoint2D> for FlatPoint2D {
    type Output = Line2D;
    #[inline]
    fn wedge(self, q: FlatPoint2D) -> Line2D {
        Line2D::new(
            self.y * q.z - self.z * q.y,
            self.z * q.x - self.x * q.z,
            self.x * q.y - self.y * q.x,
        )
    }
}

/// Line from `self` towards `q`, with its normal on the left.
impl Wedge<Point2D> for Point2D {
    type Output = Line2D;
    #[inline]
    fn wedge(self, q: Point2D) -> Line2D {
        Line2D::new(self.y - q.y, q.x - self.x, self.x * q.y - self.y * q.x)
    }
}

/// Intersection point. Parallel lines meet in a direction (`z = 0`).
impl Antiwedge<Line2D> for Line2D {
    type Output = FlatPoint2D;
    #[inline]
    fn antiwedge(self, k: Line2D) -> FlatPoint2D {
        FlatPoint2D::new(
            self.y * k.z - self.z * k.y,
            self.z * k.x - self.x * k.z,
            self.x * k.y - self.y * k.x,
        )
    }
}

impl Antiwedge<FlatPoint2D> for Line2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, p: FlatPoint2D) -> f32 {
        self.x * p.x + self.y * p.y + self.z * p.z
    }
}

impl Antiwedge<Line2D> for FlatPoint2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, l: Line2D) -> f32 {
        l.antiwedge(self)
    }
}

impl Antiwedge<Point2D> for Line2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, p: Point2D) -> f32 {
        self.x * p.x + self.y * p.y + self.z
    }
}

impl Antiwedge<Line2D> for Point2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, l: Line2D) -> f32 {
        l.antiwedge(self)
    }
}

impl RightComplement for FlatPoint2D {
    type Output = Line2D;
    #[inline]
    fn right_comp(self) -> Line2D {
        Line2D::new(self.x, self.y, self.z)
    }
}

impl LeftComplement for FlatPoint2D {
    type Output = Line2D;
    #[inline]
    fn left_comp(self) -> Line2D {
        self.right_comp()
    }
}

impl RightComplement for Line2D {
    type Output = FlatPoint2D;
    #[inline]
    fn right_comp(self) -> FlatPoint2D {
        FlatPoint2D::new(self.x, self.y, self.z)
    }
}

impl LeftComplement for Line2D {
    type Output = FlatPoint2D;
    #[inline]
    fn left_comp(self) -> FlatPoint2D {
        self.right_comp()
    }
}

/// Line through the origin perpendicular to the point's direction.
impl Dual for FlatPoint2D {
    type Output = Line2D;
    #[inline]
    fn dual(self) -> Line2D {
        Line2D::new(self.x, self.y, 0.)
    }
}

impl Dual for Line2D {
    type Output = FlatPoint2D;
    #[inline]
    fn dual(self) -> FlatPoint2D {
        FlatPoint2D::new(0., 0., self.z)
    }
}

impl BulkNorm for FlatPoint2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl WeightNorm for FlatPoint2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.z * self.z
    }
}

impl Unitize for FlatPoint2D {
    type Output = FlatPoint2D;
    #[inline]
    fn unitize(self) -> FlatPoint2D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

impl BulkNorm for Line2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.z * self.z
    }
}

impl WeightNorm for Line2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Unitize for Line2D {
    type Output = Line2D;
    #[inline]
    fn unitize(self) -> Line2D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

impl Project<Line2D> for Point2D {
    type Output = Point2D;
    #[inline]
    fn project(self, l: Line2D) -> Point2D {
        self - l.normal() * l.antiwedge(self)
    }
}

impl Project<Line2D> for FlatPoint2D {
    type Output = FlatPoint2D;
    #[inline]
    fn project(self, l: Line2D) -> FlatPoint2D {
        let d = l.antiwedge(self);
        FlatPoint2D::new(self.x - l.x * d, self.y - l.y * d, self.z)
    }
}

/// Line parallel to `self` through `p`.
impl Antiproject<Point2D> for Line2D {
    type Output = Line2D;
    #[inline]
    fn antiproject(self, p: Point2D) -> Line2D {
        Line2D::from_point_normal(p, self.normal())
    }
}

impl Mul<FlatPoint2D> for Transform2D {
    type Output = FlatPoint2D;
    #[inline]
    fn mul(self, p: FlatPoint2D) -> FlatPoint2D {
        let v = self * p.xy() + self.translation() * p.z;
        FlatPoint2D::new(v.x, v.y, p.z)
    }
}

/// Row-vector product `l M`. Transforming a line by `M` uses `l * M.inverse()`.
impl Mul<Transform2D> for Line2D {
    type Output = Line2D;
    #[inline]
    fn mul(self, m: Transform2D) -> Line2D {
        let n = self.normal();
        Line2D::new(
            n.dot(m.column(0)),
            n.dot(m.column(1)),
            n.dot(m.translation()) + self.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_of_points_is_line_through_both() {
        let p = Point2D::new(1., 2.);
        let q = Point2D::new(4., -2.);
        let l = p.wedge(q);
        assert_eq!(0., l.antiwedge(p));
        assert_eq!(0., l.antiwedge(q));
        assert_eq!(l, FlatPoint2D::from(p).wedge(FlatPoint2D::from(q)));
    }

    #[test]
    fn x_axis_from_origin() {
        let l = Point2D::new(0., 0.).wedge(Point2D::new(1., 0.));
        assert_eq!(Line2D::X_AXIS, l);
        assert_eq!(Vector2D::X_UNIT, l.direction());
    }

    #[test]
    fn meet_of_axes_is_origin() {
        let p = Line2D::X_AXIS.antiwedge(Line2D::Y_AXIS);
        assert_eq!(0., p.x);
        assert_eq!(0., p.y);
        assert!(p.z != 0.);
    }

    #[test]
    fn parallel_lines_meet_at_infinity() {
        let a = Line2D::new(0., 1., 0.);
        let b = Line2D::new(0., 1., -3.);
        assert_eq!(0., a.antiwedge(b).z);
    }

    #[test]
    fn de_morgan() {
        let p = FlatPoint2D::new(1., 2., 1.);
        let q = FlatPoint2D::new(-3., 0.5, 2.);
        let lhs = p.wedge(q).right_comp();
        let rhs = p.right_comp().antiwedge(q.right_comp());
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn dual_keeps_bulk_only() {
        let p = FlatPoint2D::new(1., 2., 3.);
        assert_eq!(Line2D::new(1., 2., 0.), p.dual());
        assert_eq!(FlatPoint2D::new(0., 0., 6.), Line2D::new(4., 5., 6.).dual());
        assert_eq!(p, p.right_comp().left_comp());
    }

    #[test]
    fn projection_lands_on_line() {
        let l = Line2D::new(3., 4., -5.).unitize();
        let p = Point2D::new(7., -1.);
        let q = p.project(l);
        assert!(l.antiwedge(q).abs() < 1e-5);
        let f = FlatPoint2D::new(14., -2., 2.).project(l);
        assert!((f.to_point() - q).magnitude() < 1e-5);
    }

    #[test]
    fn antiprojection_passes_through_point() {
        let l = Line2D::new(3., 4., -5.).unitize();
        let p = Point2D::new(7., -1.);
        let k = l.antiproject(p);
        assert!(k.antiwedge(p).abs() < 1e-5);
        assert_eq!(l.normal(), k.normal());
    }

    #[test]
    fn translate_moves_bulk_only() {
        let l = Line2D::X_AXIS.translate(Vector2D::new(5., 2.));
        assert_eq!(Line2D::new(0., 1., -2.), l);
        assert_eq!(0., l.antiwedge(Point2D::new(-1., 2.)));
    }

    #[test]
    fn distance_to_point_is_signed() {
        let l = Line2D::from_point_normal(Point2D::new(0., 1.), Vector2D::Y_UNIT);
        assert_eq!(2., l.distance_to_point(Point2D::new(5., 3.)));
        assert_eq!(-1., l.distance_to_point(Point2D::new(5., 0.)));
    }

    #[test]
    fn line_transform_uses_inverse_matrix() {
        let m = Transform2D::make_rotation_about(0.6, Point2D::new(1., 1.));
        let p = Point2D::new(2., 0.5);
        let q = Point2D::new(-1., 3.);
        let l = p.wedge(q);
        let moved = l * m.inverse();
        assert!(moved.antiwedge(m * p).abs() < 1e-5);
        assert!(moved.antiwedge(m * q).abs() < 1e-5);
    }

    #[test]
    fn unitize_is_idempotent() {
        let l = Line2D::new(1., 2., 3.).unitize();
        let d = l.unitize() - l;
        assert!(d.x.abs() < 1e-6 && d.y.abs() < 1e-6 && d.z.abs() < 1e-6);
        assert!((l.weight_norm() - 1.).abs() < 1e-6);
    }
}
