use super::{Circle3D, Dipole3D, RoundPoint3D};
use crate::ga_3d::{Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::pga_3d::Plane3D;
use crate::{
    Antireverse, BulkNorm, Center, Container, Dual, FlatCenter, LeftComplement, Partner, Reverse,
    RightComplement, RoundNorm, Unitize, Wedge, WeightNorm,
};
use bytemuck::{Pod, Zeroable};

/// `x e4235 + y e4315 + z e4125 + w e3215 + u e1234`.
///
/// `u` is the flat weight. A sphere with `u = 0` is the plane `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Sphere3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub u: f32,
}

impl_linear_ops!(Sphere3D { x, y, z, w, u });

impl Sphere3D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32, u: f32) -> Self {
        Self { x, y, z, w, u }
    }

    #[inline]
    pub fn from_center_radius(center: Point3D, radius: f32) -> Self {
        RoundPoint3D::from_center_radius(center, radius).dual()
    }

    #[inline]
    pub const fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
}

impl From<Plane3D> for Sphere3D {
    #[inline]
    fn from(g: Plane3D) -> Self {
        Self::new(g.x, g.y, g.z, g.w, 0.)
    }
}

impl Wedge<RoundPoint3D> for Circle3D {
    type Output = Sphere3D;
    fn wedge(self, a: RoundPoint3D) -> Sphere3D {
        let x = a.xyz();
        let n = self.g.normal();
        let m = self.m.as_vector();
        let s = n * a.u - m * a.w + x.cross(self.v);
        Sphere3D::new(
            s.x,
            s.y,
            s.z,
            a.u * self.g.w + x.dot(m),
            -a.w * self.g.w - x.dot(n),
        )
    }
}

impl Wedge<Circle3D> for RoundPoint3D {
    type Output = Sphere3D;
    #[inline]
    fn wedge(self, c: Circle3D) -> Sphere3D {
        -c.wedge(self)
    }
}

impl Wedge<Dipole3D> for Dipole3D {
    type Output = Sphere3D;
    fn wedge(self, e: Dipole3D) -> Sphere3D {
        let (dm, em) = (self.m.as_vector(), e.m.as_vector());
        let (dp, ep) = (self.p.xyz(), e.p.xyz());
        let s = dm * e.p.w + em * self.p.w + self.v.cross(ep) + e.v.cross(dp);
        Sphere3D::new(
            s.x,
            s.y,
            s.z,
            -(dm.dot(ep) + em.dot(dp)),
            -(dm.dot(e.v) + em.dot(self.v)),
        )
    }
}

impl RightComplement for Sphere3D {
    type Output = RoundPoint3D;
    #[inline]
    fn right_comp(self) -> RoundPoint3D {
        RoundPoint3D::new(self.x, self.y, self.z, self.w, self.u)
    }
}

impl LeftComplement for Sphere3D {
    type Output = RoundPoint3D;
    #[inline]
    fn left_comp(self) -> RoundPoint3D {
        self.right_comp()
    }
}

/// Dual sphere. Its flat center agrees with the sphere's.
impl Dual for Sphere3D {
    type Output = RoundPoint3D;
    #[inline]
    fn dual(self) -> RoundPoint3D {
        RoundPoint3D::new(-self.x, -self.y, -self.z, self.u, self.w)
    }
}

impl Reverse for Sphere3D {
    type Output = Sphere3D;
    #[inline]
    fn rev(self) -> Sphere3D {
        self
    }
}

impl Antireverse for Sphere3D {
    #[inline]
    fn antirev(self) -> Self {
        self
    }
}

impl RoundNorm for Sphere3D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.xyz().squared_mag() - 2. * self.u * self.w
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.xyz().squared_mag()
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.u * self.u
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        0.
    }
}

impl BulkNorm for Sphere3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.w * self.w
    }
}

impl WeightNorm for Sphere3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.xyz().squared_mag() + self.u * self.u
    }
}

impl Unitize for Sphere3D {
    type Output = Sphere3D;
    #[inline]
    fn unitize(self) -> Sphere3D {
        self / self.u.abs()
    }
}

impl FlatCenter for Sphere3D {
    type Output = Vector4D;
    #[inline]
    fn flat_center(self) -> Vector4D {
        Vector4D::from_xyz_w(-self.xyz(), self.u)
    }
}

impl Center for Sphere3D {
    type Output = RoundPoint3D;
    #[inline]
    fn center(self) -> RoundPoint3D {
        self.dual()
    }
}

impl Partner for Sphere3D {
    type Output = Sphere3D;
    #[inline]
    fn partner(self) -> Sphere3D {
        let s = self.xyz();
        Sphere3D::new(
            s.x * self.u,
            s.y * self.u,
            s.z * self.u,
            s.squared_mag() - self.u * self.w,
            self.u * self.u,
        )
    }
}

/// The sphere itself with opposite orientation, like the container of its
/// center.
impl Container for Sphere3D {
    type Output = Sphere3D;
    #[inline]
    fn container(self) -> Sphere3D {
        self.center().dual()
    }
}
