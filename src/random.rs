//! Sampling through [`rand::distributions::Standard`]. Every component is
//! uniform in `[-1, 1)`; nested components are sampled the same way.

use crate::ga_2d::{Bivector2D, Point2D, Vector2D};
use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use crate::pga_2d::{FlatPoint2D, Flector2D, Line2D, Motor2D};
use crate::pga_3d::{Flector3D, Line3D, Motor3D, Plane3D};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

macro_rules! impl_uniform {
    ($type_:ident { $($field:ident),+ }) => {
        impl Distribution<$type_> for Standard {
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $type_ {
                $type_ { $($field: rng.gen_range(-1.0..1.0)),+ }
            }
        }
    };
    ($type_:ident { $($field:ident),+ } nested) => {
        impl Distribution<$type_> for Standard {
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $type_ {
                $type_ { $($field: rng.gen()),+ }
            }
        }
    };
}

impl_uniform!(Vector2D { x, y });
impl_uniform!(Bivector2D { xy });
impl_uniform!(Point2D { x, y });
impl_uniform!(Vector3D { x, y, z });
impl_uniform!(Bivector3D { x, y, z });
impl_uniform!(Point3D { x, y, z });
impl_uniform!(Vector4D { x, y, z, w });

impl_uniform!(FlatPoint2D { x, y, z });
impl_uniform!(Line2D { x, y, z });
impl_uniform!(Motor2D { x, y, z, w });
impl_uniform!(Flector2D { x, y, z, w });

impl_uniform!(Plane3D { x, y, z, w });
impl_uniform!(Line3D { v, m } nested);
impl_uniform!(Motor3D { v, m } nested);
impl_uniform!(Flector3D { p, g } nested);

#[cfg(feature = "conformal")]
mod conformal {
    use super::*;
    use crate::cga_2d::{Circle2D, Dipole2D, RoundPoint2D};
    use crate::cga_3d::{Circle3D, Dipole3D, RoundPoint3D, Sphere3D};

    impl_uniform!(RoundPoint2D { x, y, z, w });
    impl_uniform!(Dipole2D { g, p } nested);
    impl_uniform!(Circle2D { x, y, z, w });

    impl_uniform!(RoundPoint3D { x, y, z, w, u });
    impl_uniform!(Dipole3D { v, m, p } nested);
    impl_uniform!(Circle3D { g, v, m } nested);
    impl_uniform!(Sphere3D { x, y, z, w, u });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn components_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let m: Motor3D = rng.gen();
            for c in [m.v.x, m.v.y, m.v.z, m.v.w, m.m.x, m.m.y, m.m.z, m.m.w] {
                assert!((-1.0..1.0).contains(&c));
            }
            let l: Line2D = rng.gen();
            for c in [l.x, l.y, l.z] {
                assert!((-1.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn samples_vary() {
        let mut rng = StdRng::seed_from_u64(11);
        let a: Plane3D = rng.gen();
        let b: Plane3D = rng.gen();
        assert_ne!(a, b);
    }
}
