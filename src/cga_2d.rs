//! Conformal geometric algebra of the plane.
//!
//! Basis `e1, e2, e3, e4` where `e3` is the point at the origin and `e4` the
//! point at infinity, with `e3 · e4 = -1`. Round points are grade 1, dipoles
//! grade 2 and circles grade 3. Lines are flat circles.

use crate::ga_2d::Point2D;
use crate::ga_3d::Vector3D;
use crate::pga_2d::{FlatPoint2D, Line2D};
use crate::scalar::inverse_sqrt;
use crate::{
    Antireverse, Antiwedge, BulkNorm, Carrier, Center, Container, Dual, FlatCenter,
    LeftComplement, Partner, Reverse, RightComplement, RoundNorm, Unitize, Wedge, WeightNorm,
};
use bytemuck::{Pod, Zeroable};

/// `x e1 + y e2 + z e3 + w e4`. A Euclidean point `p` is `(p, 1, |p|²/2)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RoundPoint2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Point pair. `g` holds `e23, e31, e12` and is the carrier line, `p` holds
/// `e14, e24, e34`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Dipole2D {
    pub g: Vector3D,
    pub p: Vector3D,
}

/// `x e234 + y e314 + z e124 + w e321`. `w` is the flat weight; a circle with
/// `w = 0` is the line `(x, y, z)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Circle2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(RoundPoint2D { x, y, z, w });
impl_linear_ops!(Dipole2D { g, p });
impl_linear_ops!(Circle2D { x, y, z, w });

impl RoundPoint2D {
    pub const ORIGIN: Self = Self::new(0., 0., 1., 0.);
    pub const INFINITY: Self = Self::new(0., 0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn from_point(p: Point2D) -> Self {
        let v = p.to_vector();
        Self::new(v.x, v.y, 1., 0.5 * v.squared_mag())
    }

    /// Dual circle about `center` with the given radius.
    #[inline]
    pub fn from_center_radius(center: Point2D, radius: f32) -> Self {
        let v = center.to_vector();
        Self::new(v.x, v.y, 1., 0.5 * (v.squared_mag() - radius * radius))
    }

    #[inline]
    const fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
}

impl From<Point2D> for RoundPoint2D {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self::from_point(p)
    }
}

impl Dipole2D {
    #[inline]
    pub const fn new(g: Vector3D, p: Vector3D) -> Self {
        Self { g, p }
    }
}

impl Circle2D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn from_center_radius(center: Point2D, radius: f32) -> Self {
        RoundPoint2D::from_center_radius(center, radius).dual()
    }

    #[inline]
    const fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
}

impl From<Line2D> for Circle2D {
    #[inline]
    fn from(l: Line2D) -> Self {
        Self::new(l.x, l.y, l.z, 0.)
    }
}

impl Wedge<RoundPoint2D> for RoundPoint2D {
    type Output = Dipole2D;
    #[inline]
    fn wedge(self, b: RoundPoint2D) -> Dipole2D {
        Dipole2D::new(self.xyz().cross(b.xyz()), self.xyz() * b.w - b.xyz() * self.w)
    }
}

impl Wedge<RoundPoint2D> for Dipole2D {
    type Output = Circle2D;
    fn wedge(self, a: RoundPoint2D) -> Circle2D {
        let (g, p) = (self.g, self.p);
        Circle2D::new(
            a.w * g.x + a.y * p.z - a.z * p.y,
            a.w * g.y - a.x * p.z + a.z * p.x,
            a.w * g.z + a.x * p.y - a.y * p.x,
            -a.xyz().dot(g),
        )
    }
}

impl Wedge<Dipole2D> for RoundPoint2D {
    type Output = Circle2D;
    #[inline]
    fn wedge(self, d: Dipole2D) -> Circle2D {
        d.wedge(self)
    }
}

impl Antiwedge<Circle2D> for Circle2D {
    type Output = Dipole2D;
    #[inline]
    fn antiwedge(self, k: Circle2D) -> Dipole2D {
        Dipole2D::new(self.xyz() * k.w - k.xyz() * self.w, self.xyz().cross(k.xyz()))
    }
}

/// Where the circle crosses the line.
impl Antiwedge<Line2D> for Circle2D {
    type Output = Dipole2D;
    #[inline]
    fn antiwedge(self, l: Line2D) -> Dipole2D {
        self.antiwedge(Circle2D::from(l))
    }
}

impl Antiwedge<Circle2D> for Line2D {
    type Output = Dipole2D;
    #[inline]
    fn antiwedge(self, c: Circle2D) -> Dipole2D {
        -c.antiwedge(self)
    }
}

impl Antiwedge<Dipole2D> for Circle2D {
    type Output = RoundPoint2D;
    fn antiwedge(self, d: Dipole2D) -> RoundPoint2D {
        let (g, p) = (d.g, d.p);
        RoundPoint2D::new(
            -self.w * p.x - self.y * g.z + self.z * g.y,
            -self.w * p.y + self.x * g.z - self.z * g.x,
            -self.w * p.z - self.x * g.y + self.y * g.x,
            self.xyz().dot(p),
        )
    }
}

impl Antiwedge<Circle2D> for Dipole2D {
    type Output = RoundPoint2D;
    #[inline]
    fn antiwedge(self, c: Circle2D) -> RoundPoint2D {
        c.antiwedge(self)
    }
}

/// Zero when the point lies on the circle.
impl Antiwedge<Circle2D> for RoundPoint2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, c: Circle2D) -> f32 {
        self.x * c.x + self.y * c.y + self.z * c.z + self.w * c.w
    }
}

impl Antiwedge<RoundPoint2D> for Circle2D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, a: RoundPoint2D) -> f32 {
        -a.antiwedge(self)
    }
}

impl RightComplement for RoundPoint2D {
    type Output = Circle2D;
    #[inline]
    fn right_comp(self) -> Circle2D {
        Circle2D::new(self.x, self.y, self.z, self.w)
    }
}

impl LeftComplement for RoundPoint2D {
    type Output = Circle2D;
    #[inline]
    fn left_comp(self) -> Circle2D {
        -self.right_comp()
    }
}

impl RightComplement for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn right_comp(self) -> Dipole2D {
        Dipole2D::new(self.p, self.g)
    }
}

impl LeftComplement for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn left_comp(self) -> Dipole2D {
        self.right_comp()
    }
}

impl RightComplement for Circle2D {
    type Output = RoundPoint2D;
    #[inline]
    fn right_comp(self) -> RoundPoint2D {
        RoundPoint2D::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl LeftComplement for Circle2D {
    type Output = RoundPoint2D;
    #[inline]
    fn left_comp(self) -> RoundPoint2D {
        RoundPoint2D::new(self.x, self.y, self.z, self.w)
    }
}

/// The circle this dual circle stands for.
impl Dual for RoundPoint2D {
    type Output = Circle2D;
    #[inline]
    fn dual(self) -> Circle2D {
        Circle2D::new(self.x, self.y, -self.w, -self.z)
    }
}

impl Dual for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn dual(self) -> Dipole2D {
        let (g, p) = (self.g, self.p);
        Dipole2D::new(Vector3D::new(g.y, -g.x, -p.z), Vector3D::new(-p.y, p.x, g.z))
    }
}

impl Dual for Circle2D {
    type Output = RoundPoint2D;
    #[inline]
    fn dual(self) -> RoundPoint2D {
        RoundPoint2D::new(self.x, self.y, -self.w, -self.z)
    }
}

impl Reverse for RoundPoint2D {
    type Output = RoundPoint2D;
    #[inline]
    fn rev(self) -> RoundPoint2D {
        self
    }
}

impl Antireverse for RoundPoint2D {
    #[inline]
    fn antirev(self) -> Self {
        -self
    }
}

impl Reverse for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn rev(self) -> Dipole2D {
        -self
    }
}

impl Antireverse for Dipole2D {
    #[inline]
    fn antirev(self) -> Self {
        -self
    }
}

impl Reverse for Circle2D {
    type Output = Circle2D;
    #[inline]
    fn rev(self) -> Circle2D {
        -self
    }
}

impl Antireverse for Circle2D {
    #[inline]
    fn antirev(self) -> Self {
        self
    }
}

impl RoundNorm for RoundPoint2D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.x * self.x + self.y * self.y - 2. * self.z * self.w
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.z * self.z
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl RoundNorm for Dipole2D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        let (g, p) = (self.g, self.p);
        p.z * p.z - g.z * g.z + 2. * (g.x * p.y - g.y * p.x)
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.g.z * self.g.z + self.p.z * self.p.z
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.g.x * self.g.x + self.g.y * self.g.y
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        self.g.z * self.g.z
    }
}

impl RoundNorm for Circle2D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.x * self.x + self.y * self.y - 2. * self.w * self.z
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.w * self.w
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        0.
    }
}

impl BulkNorm for RoundPoint2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.x * self.x + self.y * self.y + self.w * self.w
    }
}

impl WeightNorm for RoundPoint2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.z * self.z
    }
}

impl BulkNorm for Dipole2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.g.z * self.g.z + self.p.x * self.p.x + self.p.y * self.p.y
    }
}

impl WeightNorm for Dipole2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.g.x * self.g.x + self.g.y * self.g.y + self.p.z * self.p.z
    }
}

impl BulkNorm for Circle2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.z * self.z
    }
}

impl WeightNorm for Circle2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.x * self.x + self.y * self.y + self.w * self.w
    }
}

impl Unitize for RoundPoint2D {
    type Output = RoundPoint2D;
    #[inline]
    fn unitize(self) -> RoundPoint2D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

impl Unitize for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn unitize(self) -> Dipole2D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

impl Unitize for Circle2D {
    type Output = Circle2D;
    #[inline]
    fn unitize(self) -> Circle2D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

impl FlatCenter for RoundPoint2D {
    type Output = FlatPoint2D;
    #[inline]
    fn flat_center(self) -> FlatPoint2D {
        FlatPoint2D::new(self.x, self.y, self.z)
    }
}

impl FlatCenter for Dipole2D {
    type Output = FlatPoint2D;
    #[inline]
    fn flat_center(self) -> FlatPoint2D {
        let (g, p) = (self.g, self.p);
        FlatPoint2D::new(
            p.z * g.y - g.z * g.x,
            -g.z * g.y - p.z * g.x,
            g.x * g.x + g.y * g.y,
        )
    }
}

impl FlatCenter for Circle2D {
    type Output = FlatPoint2D;
    #[inline]
    fn flat_center(self) -> FlatPoint2D {
        FlatPoint2D::new(self.x, self.y, -self.w)
    }
}

/// A round point is its own center.
impl Center for RoundPoint2D {
    type Output = RoundPoint2D;
    #[inline]
    fn center(self) -> RoundPoint2D {
        self
    }
}

impl Center for Dipole2D {
    type Output = RoundPoint2D;
    #[inline]
    fn center(self) -> RoundPoint2D {
        let c = self.flat_center();
        let u = 0.5 * (self.squared_center_norm() - self.squared_radius_norm());
        RoundPoint2D::new(c.x, c.y, c.z, u)
    }
}

impl Center for Circle2D {
    type Output = RoundPoint2D;
    #[inline]
    fn center(self) -> RoundPoint2D {
        self.dual()
    }
}

impl Carrier for Dipole2D {
    type Output = Line2D;
    #[inline]
    fn carrier(self) -> Line2D {
        Line2D::new(self.g.x, self.g.y, self.g.z)
    }
}

impl Partner for RoundPoint2D {
    type Output = RoundPoint2D;
    #[inline]
    fn partner(self) -> RoundPoint2D {
        RoundPoint2D::new(
            self.x * self.z,
            self.y * self.z,
            self.z * self.z,
            self.x * self.x + self.y * self.y - self.w * self.z,
        )
    }
}

impl Partner for Dipole2D {
    type Output = Dipole2D;
    #[inline]
    fn partner(self) -> Dipole2D {
        let w = self.squared_flat_weight_norm();
        let r = self.squared_radius_norm();
        let (g, p) = (self.g, self.p);
        Dipole2D::new(
            g * w,
            Vector3D::new(p.x * w + r * g.y, p.y * w - r * g.x, p.z * w),
        )
    }
}

impl Partner for Circle2D {
    type Output = Circle2D;
    #[inline]
    fn partner(self) -> Circle2D {
        Circle2D::new(
            self.x * self.w,
            self.y * self.w,
            self.x * self.x + self.y * self.y - self.w * self.z,
            self.w * self.w,
        )
    }
}

impl Container for RoundPoint2D {
    type Output = Circle2D;
    #[inline]
    fn container(self) -> Circle2D {
        self.dual()
    }
}

/// Circle with the pair as a diameter.
impl Container for Dipole2D {
    type Output = Circle2D;
    #[inline]
    fn container(self) -> Circle2D {
        self.center().dual()
    }
}

/// The circle itself, like the container of its center.
impl Container for Circle2D {
    type Output = Circle2D;
    #[inline]
    fn container(self) -> Circle2D {
        self.center().dual()
    }
}
