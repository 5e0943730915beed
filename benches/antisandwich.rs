use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rigid_conformal::*;

criterion_main!(antisandwich);
criterion_group!(antisandwich, motor_points, flector_points, motor_lines, motor_planes, matrix_points);

const N: usize = 64;

fn motor() -> Motor3D {
    Motor3D::make_rotation(std::f32::consts::FRAC_PI_4, Vector3D::Z_UNIT)
        * Motor3D::make_translation(Vector3D::new(1., 2., 3.))
}

fn flector() -> Flector3D {
    Flector3D::make_reflection(Plane3D::new(0., 0.6, 0.8, -1.)) * motor()
}

fn motor_points(crit: &mut Criterion) {
    let motor = motor();
    let mut points = vec![Point3D::new(1., 2., 3.); N];

    crit.bench_function("motor_points", |b| {
        b.iter(|| {
            for point in &mut points {
                *point = motor >> *point;
            }
        })
    });
}

fn flector_points(crit: &mut Criterion) {
    let flector = flector();
    let mut points = vec![Point3D::new(1., 2., 3.); N];

    crit.bench_function("flector_points", |b| {
        b.iter(|| {
            for point in &mut points {
                *point = flector >> *point;
            }
        })
    });
}

fn motor_lines(crit: &mut Criterion) {
    let motor = motor();
    let mut lines = vec![Point3D::new(1., 2., 3.).wedge(Point3D::new(-1., 0., 2.)); N];

    crit.bench_function("motor_lines", |b| {
        b.iter(|| {
            for line in &mut lines {
                *line = motor >> *line;
            }
        })
    });
}

fn motor_planes(crit: &mut Criterion) {
    let motor = motor();
    let mut planes = vec![Plane3D::new(0., 0.6, 0.8, -1.); N];

    crit.bench_function("motor_planes", |b| {
        b.iter(|| {
            for plane in &mut planes {
                *plane = motor >> *plane;
            }
        })
    });
}

fn matrix_points(crit: &mut Criterion) {
    let matrix = motor().transform_matrix();
    let mut points = vec![Point3D::new(1., 2., 3.); N];

    crit.bench_function("matrix_points", |b| {
        b.iter(|| {
            for point in &mut points {
                *point = black_box(matrix) * *point;
            }
        })
    });
}
