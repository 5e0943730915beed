use super::{Flector2D, FlatPoint2D, Line2D};
use crate::ga_2d::{Point2D, Vector2D};
use crate::matrix::Transform2D;
use crate::scalar::{fast_inverse_sqrt, half_angle, inverse_sqrt, saturate};
use crate::{Antigeo, Antireverse, Antisandwich, BulkNorm, Reverse, Unitize, WeightNorm};
use bytemuck::{Pod, Zeroable};

/// Proper rigid motion of the plane, `x e1 + y e2 + z e3 + w 𝟙`.
///
/// A rotation by `θ` about `c` is `-sin(θ/2) (c.x e1 + c.y e2 + e3) + cos(θ/2) 𝟙`
/// and a translation by `t` is `(t.y e1 - t.x e2) / 2 + 𝟙`. The weight is
/// `z e3 + w 𝟙`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Motor2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(Motor2D { x, y, z, w });
impl_operator_ops!(Motor2D * [Motor2D, Flector2D] >> [Vector2D, Point2D, FlatPoint2D, Line2D]);

impl Motor2D {
    pub const IDENTITY: Self = Self::new(0., 0., 0., 1.);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Counter-clockwise rotation about the origin.
    pub fn make_rotation(angle: f32) -> Self {
        let (c, s) = half_angle(angle);
        Self::new(0., 0., -s, c)
    }

    /// Counter-clockwise rotation about `center`.
    pub fn make_rotation_about(angle: f32, center: Point2D) -> Self {
        let (c, s) = half_angle(angle);
        Self::new(-s * center.x, -s * center.y, -s, c)
    }

    pub fn make_translation(offset: Vector2D) -> Self {
        Self::new(offset.y * 0.5, offset.x * -0.5, 0., 1.)
    }

    /// Matrix of the motion. The motor must be unitized.
    pub fn transform_matrix(&self) -> Transform2D {
        let Self { x, y, z, w } = *self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        Transform2D::new(c, s, 2. * (x * z - w * y), -s, c, 2. * (w * x + y * z))
    }

    /// Matrix of the reverse motion. The motor must be unitized.
    pub fn inverse_transform_matrix(&self) -> Transform2D {
        let Self { x, y, z, w } = *self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        Transform2D::new(c, -s, 2. * (x * z + w * y), s, c, 2. * (y * z - w * x))
    }

    /// Both matrices, sharing the common products.
    pub fn transform_matrices(&self) -> (Transform2D, Transform2D) {
        let Self { x, y, z, w } = *self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        let xz = 2. * x * z;
        let wy = 2. * w * y;
        let wx = 2. * w * x;
        let yz = 2. * y * z;
        (
            Transform2D::new(c, s, xz - wy, -s, c, wx + yz),
            Transform2D::new(c, -s, xz + wy, s, c, yz - wx),
        )
    }

    /// Extracts the motor of a rigid transform with determinant `+1`.
    ///
    /// When `m00 < 1` the larger of the half-angle cosine and sine is read
    /// from the diagonal and the other from the off-diagonal difference.
    /// Otherwise the cosine is one. The pair is then rescaled to unit length.
    pub fn set_transform_matrix(&mut self, m: &Transform2D) -> &mut Self {
        let tx = m[(0, 2)];
        let ty = m[(1, 2)];
        let m00 = m[(0, 0)];
        let s = (m[(0, 1)] - m[(1, 0)]) * 0.25;

        let (z, w) = if m00 < 1. {
            if m00 < 0. {
                let z = saturate((1. - m00) * 0.5).sqrt();
                (z, s / z)
            } else {
                let w = saturate((1. + m00) * 0.5).sqrt();
                (s / w, w)
            }
        } else {
            (s, 1.)
        };
        let r = inverse_sqrt(z * z + w * w);
        let (z, w) = (z * r, w * r);

        self.x = (z * tx + w * ty) * 0.5;
        self.y = (z * ty - w * tx) * 0.5;
        self.z = z;
        self.w = w;
        self
    }
}

impl Motor2D {
    /// `unitize` with the approximate inverse square root.
    #[inline]
    pub fn fast_unitize(self) -> Self {
        self * fast_inverse_sqrt(self.squared_weight_norm())
    }
}

impl From<&Transform2D> for Motor2D {
    fn from(m: &Transform2D) -> Self {
        let mut motor = Motor2D::IDENTITY;
        motor.set_transform_matrix(m);
        motor
    }
}

impl Reverse for Motor2D {
    type Output = Motor2D;
    #[inline]
    fn rev(self) -> Motor2D {
        Motor2D::new(self.x, self.y, self.z, -self.w)
    }
}

impl Antireverse for Motor2D {
    #[inline]
    fn antirev(self) -> Self {
        Motor2D::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl BulkNorm for Motor2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl WeightNorm for Motor2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.z * self.z + self.w * self.w
    }
}

impl Unitize for Motor2D {
    type Output = Motor2D;
    #[inline]
    fn unitize(self) -> Motor2D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

/// `self ⟇ b`: apply `b`, then `self`.
impl Antigeo<Motor2D> for Motor2D {
    type Output = Motor2D;
    #[inline]
    fn antigeo(self, b: Motor2D) -> Motor2D {
        let a = self;
        Motor2D::new(
            a.x * b.w - a.y * b.z + a.z * b.y + a.w * b.x,
            a.x * b.z + a.y * b.w - a.z * b.x + a.w * b.y,
            a.z * b.w + a.w * b.z,
            a.w * b.w - a.z * b.z,
        )
    }
}

impl Antigeo<Flector2D> for Motor2D {
    type Output = Flector2D;
    #[inline]
    fn antigeo(self, f: Flector2D) -> Flector2D {
        let a = self;
        Flector2D::new(
            a.z * f.y + a.w * f.x,
            a.w * f.y - a.z * f.x,
            a.y * f.x - a.x * f.y - a.z * f.w + a.w * f.z,
            a.x * f.x + a.y * f.y + a.z * f.z + a.w * f.w,
        )
    }
}

impl Antisandwich<Vector2D> for Motor2D {
    type Output = Vector2D;
    #[inline]
    fn antisandwich(self, v: Vector2D) -> Vector2D {
        let Self { z, w, .. } = self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        Vector2D::new(v.x * c + v.y * s, v.y * c - v.x * s)
    }
}

/// The motor must be unitized.
impl Antisandwich<Point2D> for Motor2D {
    type Output = Point2D;
    #[inline]
    fn antisandwich(self, p: Point2D) -> Point2D {
        let Self { x, y, z, w } = self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        Point2D::new(
            p.x * c + p.y * s + 2. * (x * z - w * y),
            p.y * c - p.x * s + 2. * (w * x + y * z),
        )
    }
}

impl Antisandwich<FlatPoint2D> for Motor2D {
    type Output = FlatPoint2D;
    #[inline]
    fn antisandwich(self, p: FlatPoint2D) -> FlatPoint2D {
        let Self { x, y, z, w } = self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        FlatPoint2D::new(
            p.x * c + p.y * s + 2. * p.z * (x * z - w * y),
            p.y * c - p.x * s + 2. * p.z * (w * x + y * z),
            p.z * (w * w + z * z),
        )
    }
}

impl Antisandwich<Line2D> for Motor2D {
    type Output = Line2D;
    #[inline]
    fn antisandwich(self, l: Line2D) -> Line2D {
        let Self { x, y, z, w } = self;
        let c = w * w - z * z;
        let s = 2. * w * z;
        Line2D::new(
            l.x * c + l.y * s,
            l.y * c - l.x * s,
            2. * (l.x * (w * y + x * z) + l.y * (y * z - w * x)) + l.z * (w * w + z * z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Wedge;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Point2D, b: Point2D) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let m = Motor2D::make_rotation(FRAC_PI_2);
        assert!(close(Point2D::new(0., 1.), m >> Point2D::new(1., 0.)));
    }

    #[test]
    fn rotation_about_fixes_center() {
        let c = Point2D::new(3., -2.);
        let m = Motor2D::make_rotation_about(1.3, c);
        assert!(close(c, m >> c));
        let p = m >> Point2D::new(4., -2.);
        assert!((p.distance(c) - 1.).abs() < 1e-5);
    }

    #[test]
    fn translation() {
        let m = Motor2D::make_translation(Vector2D::new(2., -3.));
        assert_eq!(Point2D::new(3., -2.), m >> Point2D::new(1., 1.));
        assert_eq!(Vector2D::new(1., 1.), m >> Vector2D::new(1., 1.));
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let r = Motor2D::make_rotation(FRAC_PI_2);
        let t = Motor2D::make_translation(Vector2D::new(1., 0.));
        let p = Point2D::new(1., 0.);
        assert!(close(Point2D::new(1., 1.), (t * r) >> p));
        assert!(close(Point2D::new(0., 2.), (r * t) >> p));
    }

    #[test]
    fn line_transform_matches_point_transform() {
        let m = Motor2D::make_rotation_about(0.7, Point2D::new(1., 2.))
            * Motor2D::make_translation(Vector2D::new(-3., 0.5));
        let p = Point2D::new(0.5, -1.);
        let q = Point2D::new(2., 4.);
        let moved = m >> p.wedge(q);
        let expected = (m >> p).wedge(m >> q);
        assert!((moved - expected).squared_weight_norm() < 1e-8);
        assert!((moved - expected).squared_bulk_norm() < 1e-8);
    }

    #[test]
    fn matrix_agrees_with_sandwich() {
        let m = Motor2D::make_rotation_about(2.1, Point2D::new(-1., 2.));
        let (forward, inverse) = m.transform_matrices();
        assert_eq!(forward, m.transform_matrix());
        assert_eq!(inverse, m.inverse_transform_matrix());

        let p = Point2D::new(0.25, 5.);
        assert!(close(forward * p, m >> p));
        assert!(close(inverse * (m >> p), p));
        let f = FlatPoint2D::from(p);
        assert!(close((m >> f).to_point(), m >> p));
    }

    #[test]
    fn matrix_round_trip() {
        for angle in [0.3f32, -2.5, 3.0] {
            let m = Motor2D::make_rotation_about(angle, Point2D::new(0.5, -4.));
            let back = Motor2D::from(&m.transform_matrix());
            let d = (back - m).weight_norm().min((back + m).weight_norm())
                + (back - m).bulk_norm().min((back + m).bulk_norm());
            assert!(d < 1e-4, "{m:?} {back:?}");
        }
    }

    #[test]
    fn small_rotation_round_trip() {
        for angle in [1e-3f32, -1e-3, 2e-3, 1e-5] {
            let m = Motor2D::make_rotation(angle) * Motor2D::make_translation(Vector2D::new(3., 1.));
            let back = Motor2D::from(&m.transform_matrix());
            assert!((back.weight_norm() - 1.).abs() < 1e-6, "{back:?}");
            let p = Point2D::new(2., 2.);
            assert!(((m >> p) - (back >> p)).magnitude() < 1e-4);
        }
    }

    #[test]
    fn fast_unitize_is_close_to_unitize() {
        let m = Motor2D::new(1., -2., 0.6, 1.7);
        let d = m.fast_unitize() - m.unitize();
        assert!(d.weight_norm() < 1e-5);
        assert!(d.bulk_norm() < 1e-5);
    }

    #[test]
    fn identity_matrix_takes_translation_branch() {
        let t = Motor2D::make_translation(Vector2D::new(4., 1.));
        assert_eq!(t, Motor2D::from(&t.transform_matrix()));
    }

    #[test]
    fn reverse_and_antireverse_are_involutions() {
        let m = Motor2D::new(1., 2., 3., 4.);
        assert_eq!(m, m.rev().rev());
        assert_eq!(m, m.antirev().antirev());
    }

    #[test]
    fn motor_times_antireverse_is_weight() {
        let m = Motor2D::make_rotation_about(0.9, Point2D::new(2., 3.));
        let i = m * m.antirev();
        assert!((i - Motor2D::IDENTITY).weight_norm() < 1e-6);
        assert!(i.bulk_norm() < 1e-5);
    }
}
