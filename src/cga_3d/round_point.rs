use super::{Circle3D, Dipole3D, Sphere3D};
use crate::ga_3d::{Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::scalar::inverse_sqrt;
use crate::{
    Antireverse, Antiwedge, BulkNorm, Center, Container, Dual, FlatCenter, LeftComplement, Partner,
    Reverse, RightComplement, RoundNorm, Unitize, WeightNorm,
};
use bytemuck::{Pod, Zeroable};

/// `x e1 + y e2 + z e3 + w e4 + u e5`.
///
/// A Euclidean point `p` is the null vector `(p, 1, |p|²/2)`. Lowering `u` by
/// `r²/2` gives a dual sphere of radius `r`, and raising it gives an imaginary
/// one.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RoundPoint3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub u: f32,
}

impl_linear_ops!(RoundPoint3D { x, y, z, w, u });

impl RoundPoint3D {
    pub const ORIGIN: Self = Self::new(0., 0., 0., 1., 0.);
    pub const INFINITY: Self = Self::new(0., 0., 0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32, u: f32) -> Self {
        Self { x, y, z, w, u }
    }

    #[inline]
    pub fn from_point(p: Point3D) -> Self {
        let v = p.to_vector();
        Self::new(v.x, v.y, v.z, 1., 0.5 * v.squared_mag())
    }

    /// Dual sphere about `center` with the given radius.
    #[inline]
    pub fn from_center_radius(center: Point3D, radius: f32) -> Self {
        let v = center.to_vector();
        Self::new(v.x, v.y, v.z, 1., 0.5 * (v.squared_mag() - radius * radius))
    }

    #[inline]
    pub const fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) fn dot(self, s: Sphere3D) -> f32 {
        self.x * s.x + self.y * s.y + self.z * s.z + self.w * s.w + self.u * s.u
    }
}

impl From<Point3D> for RoundPoint3D {
    #[inline]
    fn from(p: Point3D) -> Self {
        Self::from_point(p)
    }
}

/// Zero when the point lies on the sphere.
impl Antiwedge<Sphere3D> for RoundPoint3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, s: Sphere3D) -> f32 {
        self.dot(s)
    }
}

impl Antiwedge<RoundPoint3D> for Sphere3D {
    type Output = f32;
    #[inline]
    fn antiwedge(self, a: RoundPoint3D) -> f32 {
        a.dot(self)
    }
}

impl Antiwedge<Dipole3D> for Sphere3D {
    type Output = RoundPoint3D;
    fn antiwedge(self, d: Dipole3D) -> RoundPoint3D {
        let s = self.xyz();
        let p = d.p.xyz();
        let xyz = s.cross(d.m.as_vector()) + p * self.u - d.v * self.w;
        RoundPoint3D::new(
            xyz.x,
            xyz.y,
            xyz.z,
            d.p.w * self.u + s.dot(d.v),
            -d.p.w * self.w - p.dot(s),
        )
    }
}

impl Antiwedge<Sphere3D> for Dipole3D {
    type Output = RoundPoint3D;
    #[inline]
    fn antiwedge(self, s: Sphere3D) -> RoundPoint3D {
        -s.antiwedge(self)
    }
}

impl Antiwedge<Circle3D> for Circle3D {
    type Output = RoundPoint3D;
    fn antiwedge(self, k: Circle3D) -> RoundPoint3D {
        let (cg, kg) = (self.g.normal(), k.g.normal());
        let (cm, km) = (self.m.as_vector(), k.m.as_vector());
        let xyz = cm.cross(kg) + km.cross(cg) + self.v * k.g.w + k.v * self.g.w;
        RoundPoint3D::new(
            xyz.x,
            xyz.y,
            xyz.z,
            -(self.v.dot(kg) + k.v.dot(cg)),
            -(cm.dot(k.v) + self.v.dot(km)),
        )
    }
}

impl RightComplement for RoundPoint3D {
    type Output = Sphere3D;
    #[inline]
    fn right_comp(self) -> Sphere3D {
        Sphere3D::new(self.x, self.y, self.z, self.w, self.u)
    }
}

impl LeftComplement for RoundPoint3D {
    type Output = Sphere3D;
    #[inline]
    fn left_comp(self) -> Sphere3D {
        self.right_comp()
    }
}

/// The sphere this dual sphere stands for.
impl Dual for RoundPoint3D {
    type Output = Sphere3D;
    #[inline]
    fn dual(self) -> Sphere3D {
        Sphere3D::new(self.x, self.y, self.z, -self.u, -self.w)
    }
}

impl Reverse for RoundPoint3D {
    type Output = RoundPoint3D;
    #[inline]
    fn rev(self) -> RoundPoint3D {
        self
    }
}

impl Antireverse for RoundPoint3D {
    #[inline]
    fn antirev(self) -> Self {
        self
    }
}

impl RoundNorm for RoundPoint3D {
    type Output = f32;

    #[inline]
    fn squared_radius_norm(self) -> f32 {
        self.xyz().squared_mag() - 2. * self.w * self.u
    }

    #[inline]
    fn squared_center_norm(self) -> f32 {
        self.xyz().squared_mag()
    }

    #[inline]
    fn squared_flat_weight_norm(self) -> f32 {
        self.w * self.w
    }

    #[inline]
    fn squared_flat_bulk_norm(self) -> f32 {
        self.xyz().squared_mag()
    }
}

impl BulkNorm for RoundPoint3D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.xyz().squared_mag() + self.u * self.u
    }
}

impl WeightNorm for RoundPoint3D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.w * self.w
    }
}

impl Unitize for RoundPoint3D {
    type Output = RoundPoint3D;
    #[inline]
    fn unitize(self) -> RoundPoint3D {
        self * inverse_sqrt(self.squared_flat_weight_norm())
    }
}

impl FlatCenter for RoundPoint3D {
    type Output = Vector4D;
    #[inline]
    fn flat_center(self) -> Vector4D {
        Vector4D::new(self.x, self.y, self.z, self.w)
    }
}

impl Partner for RoundPoint3D {
    type Output = RoundPoint3D;
    #[inline]
    fn partner(self) -> RoundPoint3D {
        let xyz = self.xyz();
        RoundPoint3D::new(
            xyz.x * self.w,
            xyz.y * self.w,
            xyz.z * self.w,
            self.w * self.w,
            xyz.squared_mag() - self.u * self.w,
        )
    }
}

/// A round point is its own center.
impl Center for RoundPoint3D {
    type Output = RoundPoint3D;
    #[inline]
    fn center(self) -> RoundPoint3D {
        self
    }
}

impl Container for RoundPoint3D {
    type Output = Sphere3D;
    #[inline]
    fn container(self) -> Sphere3D {
        self.dual()
    }
}
