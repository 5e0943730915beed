use super::{FlatPoint2D, Line2D, Motor2D};
use crate::ga_2d::{Point2D, Vector2D};
use crate::matrix::Transform2D;
use crate::scalar::{inverse_sqrt, saturate};
use crate::{Antigeo, Antireverse, Antisandwich, BulkNorm, Reverse, Unitize, WeightNorm};
use bytemuck::{Pod, Zeroable};

/// Improper rigid motion of the plane, `x e23 + y e31 + z e12 + w 1`.
///
/// A reflection through a unitized line is the line itself with `w = 0`.
/// The weight is `x e23 + y e31`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Flector2D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(Flector2D { x, y, z, w });
impl_operator_ops!(Flector2D * [Motor2D, Flector2D] >> [Vector2D, Point2D, FlatPoint2D, Line2D]);

impl Flector2D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Reflection through a unitized line.
    #[inline]
    pub fn make_reflection(line: Line2D) -> Self {
        Self::new(line.x, line.y, line.z, 0.)
    }

    /// Reflection through a unitized line followed by a slide of `distance`
    /// along its direction.
    pub fn make_glide_reflection(line: Line2D, distance: f32) -> Self {
        Motor2D::make_translation(line.direction() * distance) * Self::make_reflection(line)
    }

    /// Matrix of the motion. The flector must be unitized.
    pub fn transform_matrix(&self) -> Transform2D {
        let Self { x, y, z, w } = *self;
        let xy = -2. * x * y;
        Transform2D::new(
            y * y - x * x,
            xy,
            -2. * (w * y + x * z),
            xy,
            x * x - y * y,
            2. * (w * x - y * z),
        )
    }

    /// Matrix of the reverse motion. The flector must be unitized.
    pub fn inverse_transform_matrix(&self) -> Transform2D {
        let Self { x, y, z, w } = *self;
        let xy = -2. * x * y;
        Transform2D::new(
            y * y - x * x,
            xy,
            2. * (w * y - x * z),
            xy,
            x * x - y * y,
            -2. * (w * x + y * z),
        )
    }

    /// Both matrices, sharing the common products.
    pub fn transform_matrices(&self) -> (Transform2D, Transform2D) {
        let Self { x, y, z, w } = *self;
        let c = y * y - x * x;
        let xy = -2. * x * y;
        let wy = 2. * w * y;
        let xz = 2. * x * z;
        let wx = 2. * w * x;
        let yz = 2. * y * z;
        (
            Transform2D::new(c, xy, -wy - xz, xy, -c, wx - yz),
            Transform2D::new(c, xy, wy - xz, xy, -c, -wx - yz),
        )
    }

    /// Extracts the flector of a rigid transform with determinant `-1`.
    ///
    /// When `m00 < 1` the larger component of the mirror normal is read from
    /// the diagonal and the other from the off-diagonal sum. Otherwise the
    /// mirror is close to horizontal. The normal is then rescaled to unit
    /// length. The result matches the original flector up to sign.
    pub fn set_transform_matrix(&mut self, m: &Transform2D) -> &mut Self {
        let tx = m[(0, 2)];
        let ty = m[(1, 2)];
        let m00 = m[(0, 0)];
        let xy = (m[(0, 1)] + m[(1, 0)]) * -0.25;

        let (x, y) = if m00 < 1. {
            if m00 < 0. {
                let x = saturate((1. - m00) * 0.5).sqrt();
                (x, xy / x)
            } else {
                let y = saturate((1. + m00) * 0.5).sqrt();
                (xy / y, y)
            }
        } else {
            (xy, 1.)
        };
        let r = inverse_sqrt(x * x + y * y);
        let (x, y) = (x * r, y * r);

        self.x = x;
        self.y = y;
        self.z = (x * tx + y * ty) * -0.5;
        self.w = (x * ty - y * tx) * 0.5;
        self
    }
}

impl From<&Transform2D> for Flector2D {
    fn from(m: &Transform2D) -> Self {
        let mut flector = Flector2D::default();
        flector.set_transform_matrix(m);
        flector
    }
}

impl Reverse for Flector2D {
    type Output = Flector2D;
    #[inline]
    fn rev(self) -> Flector2D {
        Flector2D::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl Antireverse for Flector2D {
    #[inline]
    fn antirev(self) -> Self {
        Flector2D::new(self.x, self.y, self.z, -self.w)
    }
}

impl BulkNorm for Flector2D {
    type Output = f32;
    #[inline]
    fn squared_bulk_norm(self) -> f32 {
        self.z * self.z + self.w * self.w
    }
}

impl WeightNorm for Flector2D {
    type Output = f32;
    #[inline]
    fn squared_weight_norm(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Unitize for Flector2D {
    type Output = Flector2D;
    #[inline]
    fn unitize(self) -> Flector2D {
        self * inverse_sqrt(self.squared_weight_norm())
    }
}

impl Antigeo<Flector2D> for Flector2D {
    type Output = Motor2D;
    #[inline]
    fn antigeo(self, g: Flector2D) -> Motor2D {
        let f = self;
        Motor2D::new(
            f.x * g.w + f.y * g.z - f.z * g.y + f.w * g.x,
            f.y * g.w - f.x * g.z + f.z * g.x + f.w * g.y,
            f.x * g.y - f.y * g.x,
            f.x * g.x + f.y * g.y,
        )
    }
}

impl Antigeo<Motor2D> for Flector2D {
    type Output = Flector2D;
    #[inline]
    fn antigeo(self, a: Motor2D) -> Flector2D {
        let f = self;
        Flector2D::new(
            a.w * f.x - a.z * f.y,
            a.z * f.x + a.w * f.y,
            a.x * f.y - a.y * f.x - a.z * f.w + a.w * f.z,
            a.x * f.x + a.y * f.y + a.z * f.z + a.w * f.w,
        )
    }
}

impl Antisandwich<Vector2D> for Flector2D {
    type Output = Vector2D;
    #[inline]
    fn antisandwich(self, v: Vector2D) -> Vector2D {
        let Self { x, y, .. } = self;
        let c = y * y - x * x;
        let s = -2. * x * y;
        Vector2D::new(v.x * c + v.y * s, v.x * s - v.y * c)
    }
}

/// The flector must be unitized.
impl Antisandwich<Point2D> for Flector2D {
    type Output = Point2D;
    #[inline]
    fn antisandwich(self, p: Point2D) -> Point2D {
        let Self { x, y, z, w } = self;
        let c = y * y - x * x;
        let s = -2. * x * y;
        Point2D::new(
            p.x * c + p.y * s - 2. * (w * y + x * z),
            p.x * s - p.y * c + 2. * (w * x - y * z),
        )
    }
}

impl Antisandwich<FlatPoint2D> for Flector2D {
    type Output = FlatPoint2D;
    #[inline]
    fn antisandwich(self, p: FlatPoint2D) -> FlatPoint2D {
        let Self { x, y, z, w } = self;
        let c = y * y - x * x;
        let s = -2. * x * y;
        FlatPoint2D::new(
            p.x * c + p.y * s - 2. * p.z * (w * y + x * z),
            p.x * s - p.y * c + 2. * p.z * (w * x - y * z),
            p.z * (x * x + y * y),
        )
    }
}

impl Antisandwich<Line2D> for Flector2D {
    type Output = Line2D;
    #[inline]
    fn antisandwich(self, l: Line2D) -> Line2D {
        let Self { x, y, z, w } = self;
        let c = y * y - x * x;
        let s = -2. * x * y;
        Line2D::new(
            l.x * c + l.y * s,
            l.x * s - l.y * c,
            l.z * (x * x + y * y) + 2. * w * (y * l.x - x * l.y) - 2. * z * (x * l.x + y * l.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Antiwedge, Wedge};

    fn close(a: Point2D, b: Point2D) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn reflection_through_y_axis() {
        let f = Flector2D::make_reflection(Line2D::Y_AXIS);
        assert_eq!(Point2D::new(-2., 3.), f >> Point2D::new(2., 3.));
        assert_eq!(Vector2D::new(-2., 3.), f >> Vector2D::new(2., 3.));
    }

    #[test]
    fn reflection_keeps_points_on_mirror() {
        let l = Line2D::new(1., 1., -2.).unitize();
        let f = Flector2D::make_reflection(l);
        let p = Point2D::new(3., -1.);
        assert!(close(p, f >> p));
        let q = Point2D::new(0., 0.);
        assert!(close(Point2D::new(2., 2.), f >> q));
    }

    #[test]
    fn double_reflection_is_motion() {
        let a = Flector2D::make_reflection(Line2D::X_AXIS);
        let b = Flector2D::make_reflection(Line2D::Y_AXIS);
        let m: Motor2D = b * a;
        assert!(close(Point2D::new(-1., -2.), m >> Point2D::new(1., 2.)));
    }

    #[test]
    fn glide_reflection() {
        let f = Flector2D::make_glide_reflection(Line2D::X_AXIS, 3.);
        assert!(close(Point2D::new(4., -2.), f >> Point2D::new(1., 2.)));
    }

    #[test]
    fn line_normal_moves_like_a_vector() {
        let f = Motor2D::make_rotation_about(0.4, Point2D::new(1., 0.))
            * Flector2D::make_glide_reflection(Line2D::new(3., 4., 1.).unitize(), 0.5);
        let p = Point2D::new(2., -1.);
        let q = Point2D::new(-3., 0.5);
        let l = p.wedge(q);
        let moved = f >> l;
        assert!(moved.antiwedge(f >> p).abs() < 1e-5);
        assert!(moved.antiwedge(f >> q).abs() < 1e-5);
        assert!(((f >> l.normal()) - moved.normal()).magnitude() < 1e-5);

        let expected = l * f.inverse_transform_matrix();
        assert!((moved - expected).squared_weight_norm() < 1e-8);
        assert!((moved - expected).squared_bulk_norm() < 1e-8);
    }

    #[test]
    fn matrix_agrees_with_sandwich() {
        let f = Motor2D::make_translation(Vector2D::new(1., -2.))
            * Flector2D::make_reflection(Line2D::new(0.6, -0.8, 1.5));
        let (forward, inverse) = f.transform_matrices();
        let p = Point2D::new(0.25, 5.);
        assert!(close(forward * p, f >> p));
        assert!(close(f.transform_matrix() * p, f >> p));
        assert!(close(inverse * (f >> p), p));
        assert!(close(f.inverse_transform_matrix() * (f >> p), p));
        assert!((forward.determinant() + 1.).abs() < 1e-5);
    }

    #[test]
    fn matrix_round_trip_up_to_sign() {
        let flectors = [
            Flector2D::make_reflection(Line2D::new(0.6, -0.8, 1.5)),
            Flector2D::make_glide_reflection(Line2D::new(-0.8, 0.6, -2.), 1.25),
            Flector2D::make_reflection(Line2D::X_AXIS),
        ];
        for f in flectors {
            let back = Flector2D::from(&f.transform_matrix());
            let d = (back - f).weight_norm().min((back + f).weight_norm())
                + (back - f).bulk_norm().min((back + f).bulk_norm());
            assert!(d < 1e-4, "{f:?} {back:?}");
        }
    }

    #[test]
    fn nearly_horizontal_mirror_round_trip() {
        for angle in [1e-3f32, -1e-3, 1e-5] {
            let (sin, cos) = angle.sin_cos();
            let line = Line2D::new(-sin, cos, 0.5);
            let f = Flector2D::make_glide_reflection(line, 2.);
            let back = Flector2D::from(&f.transform_matrix());
            assert!((back.weight_norm() - 1.).abs() < 1e-6, "{back:?}");
            for p in [Point2D::new(2., 2.), Point2D::new(-4., 3.)] {
                assert!(((f >> p) - (back >> p)).magnitude() < 1e-4);
            }
        }
    }

    #[test]
    fn reverse_and_antireverse_are_involutions() {
        let f = Flector2D::new(1., 2., 3., 4.);
        assert_eq!(f, f.rev().rev());
        assert_eq!(f, f.antirev().antirev());
    }
}
