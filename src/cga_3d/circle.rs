use super::{weighted_center, Dipole3D, RoundPoint3D, Sphere3D};
use crate::ga_3d::{Bivector3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::pga_3d::{Line3D, Plane3D};
use crate::scalar::inverse_sqrt;
use crate::{
    Antireverse, Antiwedge, BulkNorm, Carrier, Center, Container, Dual, FlatCenter,
    LeftComplement, Partner, Reverse, RightComplement, RoundNorm, Unitize, Wedge, WeightNorm,
};
use bytemuck::{Pod, Zeroable};

/// Circle. `g` holds `e423, e431, e412, e321` and is the carrier plane, `v`
/// holds `e415, e425, e435` and `m` holds `e235, e315, e125`.
///
/// A circle with zero `g` is a flat circle: the line `(v, m)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Circle3D {
    pub g: Plane3D,
    pub v: Vector3D,
    pub m: Bivector3D,
}

impl_linear_ops!(Circle3D { g, v, m });

impl Circle3D {
    #[inline]
    pub const fn new(g: Plane3D, v: Vector3D, m: Bivector3D) -> Self {
        Self { g, v, m }
    }
}

impl From<Line3D> for Circle3D {
    #[inline]
    fn from(l: Line3D) -> Self {
        Self::new(Plane3D::default(), l.v, l.m)
    }
}

impl Wedge<RoundPoint3D> for Dipole3D {
    type Output = Circle3D;
    fn wedge(self, a: RoundPoint3D) -> Circle3D {
        let x = a.xyz();
        let m = self.m.as_vector();
        let p = self.p.xyz();
        Circle3D::new(
            Plane3D::from_normal_w(m * a.w + self.v.cross(x), -x.dot(m)),
            self.v * a.u + p * a.w - x * self.p.w,
            Bivector3D::from_vector(m * a.u + x.cross(p)),
        )
    }
}

impl Wedge<Dipole3D> for RoundPoint3D {
    type Output = Circle3D;
    #[inline]
    fn wedge(self, d: Dipole3D) -> Circle3D {
        d.wedge(self)
    }
}

impl Antiwedge<Sphere3D> for Sphere3D {
    type Output = Circle3D;
    fn antiwedge(self, t: Sphere3D) -> Circle3D {
        let (s, tx) = (self.xyz(), t.xyz());
        Circle3D::new(
            Plane3D::from_normal_w(tx * self.u - s * t.u, self.u * t.w - self.w * t.u),
            tx.cross(s),
            Bivector3D::from_vector(s * t.w - tx * self.w),
        )
    }
}

impl Antiwedge<Plane3D> for Sphere3D {
    type Output = Circle3D;
    #[inline]
    fn antiwedge(self, g: Plane3D) -> Circle3D {
        self.antiwedge(Sphere3D::from(g))
    }
}

impl Antiwedge<Sphere3D> for Plane3D {
    type Output = Circle3D;
    #[inline]
    fn antiwedge(self, s: Sphere3D) -> Circle3D {
        Sphere3D::from(self).antiwedge(s)
    }
}

impl RightComplement for Circle3D {
    type Output = Dipole3D;
    #[inline]
    fn right_comp(self) -> Dipole3D {
        Dipole3D::new(
            -self.m.as_vector(),
            -Bivector3D::from_vector(self.v),
            Vector4D::new(-self.g.x, -self.g.y, -self.g.z, -self.g.w),
        )
    }
}

impl LeftComplement for Circle3D {
    type Output = Dipole3D;
    #[inline]
    fn left_comp(self) -> Dipole3D {
        self.right_comp()
    }
}

impl Dual for Circle3D {
    type Output = Dipole3D;
    #[inline]
    fn dual(self) -> Dipole3D {
        Dipole3D::new(
            self.g.normal(),
            Bivector3D::from_vector(self.v),
            Vector4D::from_xyz_w(self.m.as_vector(), -self.g.w),
        )
    }
}

impl Reverse for Circle3D {
    type Output = Circle3D;
    #[inline]
    fn rev(self) -> Circle3D {
        -self
    }
}

impl Antireverse for Circle3D {
    #[inline]
    fn antirev(self) -> Self {
        -self
    }
}

impl RoundNorm for Circle3D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.v.squared_mag() + 2. * self.m.as_vector().dot(self.g.normal()) - self.g.w * self.g.w
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.v.squared_mag() + self.g.w * self.g.w
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.g.normal().squared_mag()
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        self.g.w * self.g.w
    }
}

impl BulkNorm for Circle3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.g.w * self.g.w + self.m.squared_mag()
    }
}

impl WeightNorm for Circle3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.g.normal().squared_mag() + self.v.squared_mag()
    }
}

impl Unitize for Circle3D {
    type Output = Circle3D;
    #[inline]
    fn unitize(self) -> Circle3D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

impl FlatCenter for Circle3D {
    type Output = Vector4D;
    #[inline]
    fn flat_center(self) -> Vector4D {
        let n = self.g.normal();
        Vector4D::from_xyz_w(n.cross(self.v) - n * self.g.w, n.squared_mag())
    }
}

impl Center for Circle3D {
    type Output = RoundPoint3D;
    #[inline]
    fn center(self) -> RoundPoint3D {
        weighted_center(self.flat_center(), self.squared_center_norm(), self.squared_radius_norm())
    }
}

impl Carrier for Circle3D {
    type Output = Plane3D;
    #[inline]
    fn carrier(self) -> Plane3D {
        self.g
    }
}

impl Partner for Circle3D {
    type Output = Circle3D;
    #[inline]
    fn partner(self) -> Circle3D {
        let n = self.g.normal();
        let w = n.squared_mag();
        let r = self.squared_radius_norm();
        Circle3D::new(
            self.g * w,
            self.v * w,
            self.m * w - Bivector3D::from_vector(n * r),
        )
    }
}

/// Sphere sharing the circle's center and radius.
impl Container for Circle3D {
    type Output = Sphere3D;
    #[inline]
    fn container(self) -> Sphere3D {
        self.center().dual()
    }
}
