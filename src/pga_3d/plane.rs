use super::Line3D;
use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::matrix::Transform3D;
use crate::scalar::inverse_sqrt;
use crate::{Antiwedge, BulkNorm, Dual, LeftComplement, RightComplement, Unitize, WeightNorm};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// Plane `x X + y Y + z Z + w = 0`, stored as `x e423 + y e431 + z e412 + w e321`.
///
/// The normal `(x, y, z)` is the weight.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Plane3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(Plane3D { x, y, z, w });

impl Plane3D {
    pub const YZ_PLANE: Self = Self::new(1., 0., 0., 0.);
    pub const ZX_PLANE: Self = Self::new(0., 1., 0., 0.);
    pub const XY_PLANE: Self = Self::new(0., 0., 1., 0.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_normal_w(n: Vector3D, w: f32) -> Self {
        Self::new(n.x, n.y, n.z, w)
    }

    /// Plane with normal `n` through `p`.
    #[inline]
    pub fn from_normal_point(n: Vector3D, p: Point3D) -> Self {
        Self::from_normal_w(n, -n.dot(p.to_vector()))
    }

    /// Plane `n · X = offset`.
    #[inline]
    pub fn from_normal_offset(n: Vector3D, offset: f32) -> Self {
        Self::from_normal_w(n, -offset)
    }

    #[inline]
    pub const fn normal(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Moves the plane by `t`. Only the bulk changes.
    #[inline]
    pub fn translate(self, t: Vector3D) -> Self {
        Self::from_normal_w(self.normal(), self.w - self.normal().dot(t))
    }

    /// Signed distance to `p`, positive on the side the normal points to.
    /// The plane must be unitized.
    #[inline]
    pub fn distance_to_point(self, p: Point3D) -> f32 {
        p.antiwedge(self)
    }
}

impl Antiwedge<Plane3D> for Plane3D {
    type Output = Line3D;
    #[inline]
    fn antiwedge(self, h: Plane3D) -> Line3D {
        let g = self;
        Line3D::from_vectors(
            h.normal().cross(g.normal()),
            Bivector3D::from_vector(g.normal() * h.w - h.normal() * g.w),
        )
    }
}

impl Antiwedge<Plane3D> for Vector4D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, g: Plane3D) -> f32 {
        self.x * g.x + self.y * g.y + self.z * g.z + self.w * g.w
    }
}

impl Antiwedge<Vector4D> for Plane3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, p: Vector4D) -> f32 {
        -p.antiwedge(self)
    }
}

impl Antiwedge<Plane3D> for Point3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, g: Plane3D) -> f32 {
        self.x * g.x + self.y * g.y + self.z * g.z + g.w
    }
}

impl Antiwedge<Point3D> for Plane3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, p: Point3D) -> f32 {
        -p.antiwedge(self)
    }
}

impl RightComplement for Plane3D {
    type Output = Vector4D;
    #[inline]
    fn right_comp(self) -> Vector4D {
        Vector4D::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl LeftComplement for Plane3D {
    type Output = Vector4D;
    #[inline]
    fn left_comp(self) -> Vector4D {
        Vector4D::new(self.x, self.y, self.z, self.w)
    }
}

impl Dual for Plane3D {
    type Output = Vector4D;
    #[inline]
    fn dual(self) -> Vector4D {
        Vector4D::new(0., 0., 0., -self.w)
    }
}

impl BulkNorm for Plane3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.w * self.w
    }
}

impl WeightNorm for Plane3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.normal().squared_mag()
    }
}

impl Unitize for Plane3D {
    type Output = Plane3D;
    #[inline]
    fn unitize(self) -> Plane3D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

/// Row-vector product `g M`. Transforming a plane by `M` uses `g * M.inverse()`.
impl Mul<Transform3D> for Plane3D {
    type Output = Plane3D;
    #[inline]
    fn mul(self, m: Transform3D) -> Plane3D {
        let n = self.normal();
        Plane3D::new(
            n.dot(m.column(0)),
            n.dot(m.column(1)),
            n.dot(m.column(2)),
            n.dot(m.translation()) + self.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Project, Wedge};

    #[test]
    fn unitize_is_idempotent() {
        let g = Plane3D::new(2., -3., 6., 14.).unitize();
        let e = g - Plane3D::new(2. / 7., -3. / 7., 6. / 7., 2.);
        assert!(e.weight_norm() < 1e-6 && e.bulk_norm() < 1e-6);
        let d = g.unitize() - g;
        assert!(d.weight_norm() < 1e-6 && d.bulk_norm() < 1e-6);
    }

    #[test]
    fn meet_of_planes_is_y_axis() {
        let l = Plane3D::YZ_PLANE.antiwedge(Plane3D::XY_PLANE);
        assert_eq!(Vector3D::Y_UNIT, l.v);
        assert_eq!(Bivector3D::ZERO, l.m);
    }

    #[test]
    fn parallel_planes_meet_at_infinity() {
        let a = Plane3D::from_normal_offset(Vector3D::Z_UNIT, 1.);
        let b = Plane3D::from_normal_offset(Vector3D::Z_UNIT, 3.);
        let l = a.antiwedge(b);
        assert_eq!(0., l.weight_norm());
        assert!(l.bulk_norm() > 0.);
    }

    #[test]
    fn three_planes_meet_in_point() {
        let a = Plane3D::from_normal_offset(Vector3D::X_UNIT, 1.);
        let b = Plane3D::from_normal_offset(Vector3D::Y_UNIT, 2.);
        let c = Plane3D::from_normal_offset(Vector3D::Z_UNIT, 3.);
        let p = a.antiwedge(b).antiwedge(c);
        assert_eq!(Point3D::new(1., 2., 3.), p.to_point());
    }

    #[test]
    fn signed_distance() {
        let g = Plane3D::from_normal_point(Vector3D::new(0., 0.6, 0.8), Point3D::new(0., 0., 5.));
        assert!((g.distance_to_point(Point3D::new(0., 0., 10.)) - 4.).abs() < 1e-5);
        assert!((g.distance_to_point(Point3D::new(1., 0., 0.)) + 4.).abs() < 1e-5);
        assert_eq!(
            Point3D::new(3., 3., 3.).antiwedge(g),
            -g.antiwedge(Point3D::new(3., 3., 3.))
        );
        let h = Vector4D::new(6., 6., 6., 2.);
        assert!((h.antiwedge(g) - 2. * Point3D::new(3., 3., 3.).antiwedge(g)).abs() < 1e-5);
        assert_eq!(h.antiwedge(g), -g.antiwedge(h));
    }

    #[test]
    fn translate_moves_bulk_only() {
        let g = Plane3D::XY_PLANE.translate(Vector3D::new(4., -1., 2.));
        assert_eq!(Plane3D::new(0., 0., 1., -2.), g);
        assert_eq!(0., Point3D::new(7., 7., 2.).antiwedge(g));
    }

    #[test]
    fn complements_and_dual() {
        let g = Plane3D::new(1., 2., 3., 4.);
        assert_eq!(Vector4D::new(-1., -2., -3., -4.), g.right_comp());
        assert_eq!(g, g.right_comp().left_comp());
        assert_eq!(g, g.left_comp().right_comp());
        assert_eq!(Vector4D::new(0., 0., 0., -4.), g.dual());
    }

    #[test]
    fn transform_uses_inverse_matrix() {
        let m = Transform3D::make_rotation(1.1, Vector3D::new(0., 0.6, 0.8))
            * Transform3D::make_translation(Vector3D::new(3., -2., 1.));
        let p = Point3D::new(1., 0., 2.);
        let q = Point3D::new(-1., 4., 0.);
        let r = Point3D::new(2., 2., -3.);
        let g = p.wedge(q).wedge(r);
        let moved = g * m.inverse();
        for x in [p, q, r] {
            assert!((m * x).antiwedge(moved).abs() < 1e-4);
        }
    }

    #[test]
    fn unitize_and_projection() {
        let g = Plane3D::new(0., 3., 4., 10.).unitize();
        assert!((g.weight_norm() - 1.).abs() < 1e-6);
        assert!((g.bulk_norm() - 2.).abs() < 1e-6);
        let p = Point3D::new(1., 1., 1.).project(g);
        assert!(g.distance_to_point(p).abs() < 1e-5);
    }
}
