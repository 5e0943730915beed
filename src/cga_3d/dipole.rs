use super::{weighted_center, Circle3D, RoundPoint3D, Sphere3D};
use crate::ga_3d::{Bivector3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::pga_3d::{Line3D, Plane3D};
use crate::scalar::inverse_sqrt;
use crate::{
    Antireverse, Antiwedge, BulkNorm, Carrier, Center, Container, Dual, FlatCenter,
    LeftComplement, Partner, Reverse, RightComplement, RoundNorm, Unitize, Wedge, WeightNorm,
};
use bytemuck::{Pod, Zeroable};

/// Point pair. `v` holds `e41, e42, e43`, `m` holds `e23, e31, e12` and `p`
/// holds `e15, e25, e35, e45`.
///
/// `v` and `m` are the Plücker coordinates of the carrier line.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Dipole3D {
    pub v: Vector3D,
    pub m: Bivector3D,
    pub p: Vector4D,
}

impl_linear_ops!(Dipole3D { v, m, p });

impl Dipole3D {
    #[inline]
    pub const fn new(v: Vector3D, m: Bivector3D, p: Vector4D) -> Self {
        Self { v, m, p }
    }
}

impl Wedge<RoundPoint3D> for RoundPoint3D {
    type Output = Dipole3D;
    #[inline]
    fn wedge(self, b: RoundPoint3D) -> Dipole3D {
        let (a, ax, bx) = (self, self.xyz(), b.xyz());
        Dipole3D::new(
            bx * a.w - ax * b.w,
            Bivector3D::from_vector(ax.cross(bx)),
            Vector4D::from_xyz_w(ax * b.u - bx * a.u, a.w * b.u - a.u * b.w),
        )
    }
}

impl Antiwedge<Circle3D> for Sphere3D {
    type Output = Dipole3D;
    fn antiwedge(self, c: Circle3D) -> Dipole3D {
        let s = self.xyz();
        let g = c.g.normal();
        let m = c.m.as_vector();
        Dipole3D::new(
            c.v * self.u + s.cross(g),
            Bivector3D::from_vector(m * self.u - s * c.g.w + g * self.w),
            Vector4D::from_xyz_w(m.cross(s) + c.v * self.w, -c.v.dot(s)),
        )
    }
}

impl Antiwedge<Sphere3D> for Circle3D {
    type Output = Dipole3D;
    #[inline]
    fn antiwedge(self, s: Sphere3D) -> Dipole3D {
        s.antiwedge(self)
    }
}

/// Where the circle crosses the plane.
impl Antiwedge<Plane3D> for Circle3D {
    type Output = Dipole3D;
    #[inline]
    fn antiwedge(self, g: Plane3D) -> Dipole3D {
        Sphere3D::from(g).antiwedge(self)
    }
}

/// Where the line crosses the sphere.
impl Antiwedge<Line3D> for Sphere3D {
    type Output = Dipole3D;
    #[inline]
    fn antiwedge(self, l: Line3D) -> Dipole3D {
        self.antiwedge(Circle3D::from(l))
    }
}

impl RightComplement for Dipole3D {
    type Output = Circle3D;
    #[inline]
    fn right_comp(self) -> Circle3D {
        Circle3D::new(
            Plane3D::new(-self.p.x, -self.p.y, -self.p.z, -self.p.w),
            -self.m.as_vector(),
            -Bivector3D::from_vector(self.v),
        )
    }
}

impl LeftComplement for Dipole3D {
    type Output = Circle3D;
    #[inline]
    fn left_comp(self) -> Circle3D {
        self.right_comp()
    }
}

impl Dual for Dipole3D {
    type Output = Circle3D;
    #[inline]
    fn dual(self) -> Circle3D {
        Circle3D::new(
            Plane3D::from_normal_w(-self.v, self.p.w),
            -self.m.as_vector(),
            -Bivector3D::from_vector(self.p.xyz()),
        )
    }
}

impl Reverse for Dipole3D {
    type Output = Dipole3D;
    #[inline]
    fn rev(self) -> Dipole3D {
        -self
    }
}

impl Antireverse for Dipole3D {
    #[inline]
    fn antirev(self) -> Self {
        -self
    }
}

impl RoundNorm for Dipole3D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.p.w * self.p.w - self.m.squared_mag() - 2. * self.p.xyz().dot(self.v)
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.m.squared_mag() + self.p.w * self.p.w
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.v.squared_mag()
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        self.m.squared_mag()
    }
}

impl BulkNorm for Dipole3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.m.squared_mag() + self.p.xyz().squared_mag()
    }
}

impl WeightNorm for Dipole3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.v.squared_mag() + self.p.w * self.p.w
    }
}

impl Unitize for Dipole3D {
    type Output = Dipole3D;
    #[inline]
    fn unitize(self) -> Dipole3D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

/// Midpoint of the pair, weighted by the squared flat weight.
impl FlatCenter for Dipole3D {
    type Output = Vector4D;
    #[inline]
    fn flat_center(self) -> Vector4D {
        Vector4D::from_xyz_w(
            self.v.cross(self.m.as_vector()) + self.v * self.p.w,
            self.v.squared_mag(),
        )
    }
}

impl Center for Dipole3D {
    type Output = RoundPoint3D;
    #[inline]
    fn center(self) -> RoundPoint3D {
        weighted_center(self.flat_center(), self.squared_center_norm(), self.squared_radius_norm())
    }
}

impl Carrier for Dipole3D {
    type Output = Line3D;
    #[inline]
    fn carrier(self) -> Line3D {
        Line3D::from_vectors(self.v, self.m)
    }
}

impl Partner for Dipole3D {
    type Output = Dipole3D;
    #[inline]
    fn partner(self) -> Dipole3D {
        let w = self.v.squared_mag();
        let r = self.squared_radius_norm();
        Dipole3D::new(
            self.v * w,
            self.m * w,
            Vector4D::from_xyz_w(self.p.xyz() * w + self.v * r, self.p.w * w),
        )
    }
}

/// Sphere with the pair as a diameter.
impl Container for Dipole3D {
    type Output = Sphere3D;
    #[inline]
    fn container(self) -> Sphere3D {
        self.center().dual()
    }
}
