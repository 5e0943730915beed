#![cfg(feature = "rand")]

use proptest::prelude::*;
use rand::{thread_rng, Rng};
use rigid_conformal::*;

fn max_diff(a: Matrix3D, b: Matrix3D) -> f32 {
    let mut d = 0f32;
    for i in 0..3 {
        for j in 0..3 {
            d = d.max((a[(i, j)] - b[(i, j)]).abs());
        }
    }
    d
}

#[test]
fn random_matrix_inverse() {
    let mut rng = thread_rng();
    let mut checked = 0;
    while checked < 100 {
        let m = Matrix3D::from_columns(rng.gen(), rng.gen(), rng.gen());
        if m.determinant().abs() < 0.1 {
            continue;
        }
        checked += 1;
        let inv = m.inverse();
        assert!(max_diff(Matrix3D::IDENTITY, inv * m) < 1e-3);
        assert!(max_diff(Matrix3D::IDENTITY, m * inv) < 1e-3);
        assert!(max_diff(m.adjugate() * (1. / m.determinant()), inv) < 1e-3);
    }
}

#[test]
fn random_transform_inverse() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let axis = loop {
            let v: Vector3D = rng.gen();
            if v.magnitude() > 0.1 {
                break v.normalize();
            }
        };
        let m = Transform3D::make_translation(rng.gen::<Vector3D>() * 5.)
            * Transform3D::make_rotation(rng.gen_range(-3.0..3.0), axis);
        let p = Origin3D + rng.gen::<Vector3D>() * 5.;
        let q = m.inverse() * (m * p);
        assert!((p - q).magnitude() < 1e-3);
        assert!((m.determinant() - 1.).abs() < 1e-3);
    }
}

#[test]
fn gimbal_lock_folds_into_z() {
    use std::f32::consts::FRAC_PI_2;
    for y in [FRAC_PI_2, -FRAC_PI_2] {
        let m = Matrix3D::make_euler_rotation(0.4, y, 0.3);
        let (ex, ey, ez) = m.euler_angles();
        assert_eq!(0., ex);
        assert!((ey - y).abs() < 1e-3);
        assert!(max_diff(m, Matrix3D::make_euler_rotation(ex, ey, ez)) < 1e-3);
    }
}

proptest! {
    #[test]
    fn euler_angles_round_trip(x in -3.0f32..3.0, y in -1.5f32..1.5, z in -3.0f32..3.0) {
        let m = Matrix3D::make_euler_rotation(x, y, z);
        let (ex, ey, ez) = m.euler_angles();
        prop_assert!(max_diff(m, Matrix3D::make_euler_rotation(ex, ey, ez)) < 1e-3);
        prop_assert!((ey - y).abs() < 1e-2);
    }

    #[test]
    fn rotations_are_orthonormal(angle in -3.0f32..3.0, ax in -1.0f32..1.0, ay in -1.0f32..1.0) {
        let axis = Vector3D::new(ax, ay, 1.).normalize();
        let m = Matrix3D::make_rotation(angle, axis);
        prop_assert!(max_diff(Matrix3D::IDENTITY, m.transpose() * m) < 1e-4);
        prop_assert!((m.determinant() - 1.).abs() < 1e-4);
        prop_assert!(((m * axis) - axis).magnitude() < 1e-4);
    }

    #[test]
    fn cross_is_the_complement_of_the_wedge(
        (a, b, c) in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
        (d, e, f) in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
    ) {
        let u = Vector3D::new(a, b, c);
        let v = Vector3D::new(d, e, f);
        let w = u.wedge(v);
        prop_assert_eq!(u.cross(v), Vector3D::new(w.x, w.y, w.z));
        prop_assert!((u.wedge(v).wedge(u)).abs() < 1e-2);
    }
}
