#![cfg(feature = "rand")]

use proptest::prelude::*;
use rand::{thread_rng, Rng};
use rigid_conformal::*;

fn close(a: Point2D, b: Point2D) -> bool {
    (a - b).magnitude() < 1e-3
}

fn random_point<R: Rng>(rng: &mut R) -> Point2D {
    Origin2D + rng.gen::<Vector2D>() * 4.
}

fn random_motor<R: Rng>(rng: &mut R) -> Motor2D {
    Motor2D::make_rotation_about(rng.gen_range(-3.0..3.0), random_point(rng))
        * Motor2D::make_translation(rng.gen::<Vector2D>() * 3.)
}

fn random_flector<R: Rng>(rng: &mut R) -> Flector2D {
    let line = loop {
        let l = rng.gen::<Line2D>();
        if l.weight_norm() > 0.1 {
            break l.unitize();
        }
    };
    Flector2D::make_glide_reflection(line, rng.gen_range(-2.0..2.0)) * random_motor(rng)
}

#[test]
fn random_operators_agree_with_matrices() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let p = random_point(&mut rng);

        let m = random_motor(&mut rng);
        let (forward, inverse) = m.transform_matrices();
        assert!(close(forward * p, m >> p));
        assert!(close(p, inverse * (m >> p)));

        let f = random_flector(&mut rng);
        let (forward, inverse) = f.transform_matrices();
        assert!(close(forward * p, f >> p));
        assert!(close(p, inverse * (f >> p)));
        assert!((forward.determinant() + 1.).abs() < 1e-3);
    }
}

#[test]
fn composition_applies_right_operand_first() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let a = random_motor(&mut rng);
        let b = random_motor(&mut rng);
        let f = random_flector(&mut rng);
        let g = random_flector(&mut rng);
        let p = random_point(&mut rng);
        assert!(close(a >> (b >> p), (a * b) >> p));
        assert!(close(f >> (a >> p), (f * a) >> p));
        assert!(close(a >> (f >> p), (a * f) >> p));
        assert!(close(f >> (g >> p), (f * g) >> p));
    }
}

#[test]
fn composition_is_associative() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let [a, b, c] = [(); 3].map(|_| random_motor(&mut rng));
        let d = (a * b) * c - a * (b * c);
        assert!(d.weight_norm() < 1e-4);
        assert!(d.bulk_norm() < 1e-3);

        let f = random_flector(&mut rng);
        let e = (f * a) * f - f * (a * f);
        assert!(e.weight_norm() < 1e-4);
        assert!(e.bulk_norm() < 1e-3);
    }
}

#[test]
fn moved_lines_keep_incidence() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let p = random_point(&mut rng);
        let q = random_point(&mut rng);
        let line = p.wedge(q);
        let m = random_motor(&mut rng);
        let f = random_flector(&mut rng);
        for x in [p, q] {
            assert!((m >> line).antiwedge(m >> x).abs() < 1e-2);
            assert!((f >> line).antiwedge(f >> x).abs() < 1e-2);
        }
    }
}

#[test]
fn matrices_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..100 {
        let p = random_point(&mut rng);
        let m = random_motor(&mut rng);
        assert!(close(m >> p, Motor2D::from(&m.transform_matrix()) >> p));
        let f = random_flector(&mut rng);
        assert!(close(f >> p, Flector2D::from(&f.transform_matrix()) >> p));
    }
}

proptest! {
    #[test]
    fn rotation_is_counter_clockwise(angle in 0.1f32..3.0, r in 0.5f32..5.0) {
        let q = Motor2D::make_rotation(angle) >> Point2D::new(r, 0.);
        prop_assert!((q.x - r * angle.cos()).abs() < 1e-3);
        prop_assert!((q.y - r * angle.sin()).abs() < 1e-3);
    }

    #[test]
    fn rotation_about_keeps_center(angle in -3.0f32..3.0, x in -5.0f32..5.0, y in -5.0f32..5.0) {
        let c = Point2D::new(x, y);
        prop_assert!(close(c, Motor2D::make_rotation_about(angle, c) >> c));
    }

    #[test]
    fn reflection_is_an_involution(x in -5.0f32..5.0, y in -5.0f32..5.0, offset in -3.0f32..3.0) {
        let f = Flector2D::make_reflection(Line2D::new(0.6, 0.8, offset));
        let p = Point2D::new(x, y);
        prop_assert!(close(p, f >> (f >> p)));
        prop_assert!((Line2D::new(0.6, 0.8, offset).distance_to_point(p)
            + Line2D::new(0.6, 0.8, offset).distance_to_point(f >> p)).abs() < 1e-3);
    }
}
