use super::Matrix2D;
use crate::ga_2d::{Point2D, Vector2D};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, Mul};

const BOTTOM_ROW: [f32; 3] = [0., 0., 1.];

/// 3×3 affine matrix whose last row is always `(0, 0, 1)`.
///
/// Only the upper 2×3 block is stored. Indexing by `(row, col)` reads the
/// implicit last row, and no method writes it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transform2D {
    cols: [[f32; 2]; 3],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    pub const IDENTITY: Self = Self::new(1., 0., 0., 0., 1., 0.);

    /// Upper two rows given in row order.
    #[inline]
    pub const fn new(n00: f32, n01: f32, n02: f32, n10: f32, n11: f32, n12: f32) -> Self {
        Self {
            cols: [[n00, n10], [n01, n11], [n02, n12]],
        }
    }

    #[inline]
    pub const fn from_columns(a: Vector2D, b: Vector2D, translation: Vector2D) -> Self {
        Self {
            cols: [[a.x, a.y], [b.x, b.y], [translation.x, translation.y]],
        }
    }

    #[inline]
    pub fn from_matrix_translation(m: &Matrix2D, translation: Vector2D) -> Self {
        Self::from_columns(m.column(0), m.column(1), translation)
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vector2D {
        let [x, y] = self.cols[j];
        Vector2D::new(x, y)
    }

    #[inline]
    pub fn matrix(&self) -> Matrix2D {
        Matrix2D::from_columns(self.column(0), self.column(1))
    }

    #[inline]
    pub fn set_matrix(&mut self, m: &Matrix2D) {
        let t = self.translation();
        *self = Self::from_matrix_translation(m, t);
    }

    #[inline]
    pub fn translation(&self) -> Vector2D {
        self.column(2)
    }

    #[inline]
    pub fn set_translation(&mut self, t: Vector2D) {
        self.cols[2] = [t.x, t.y];
    }

    pub fn make_translation(t: Vector2D) -> Self {
        Self::from_columns(Vector2D::X_UNIT, Vector2D::Y_UNIT, t)
    }

    pub fn make_rotation(angle: f32) -> Self {
        Self::from_matrix_translation(&Matrix2D::make_rotation(angle), Vector2D::ZERO)
    }

    /// Counter-clockwise rotation about `center`.
    pub fn make_rotation_about(angle: f32, center: Point2D) -> Self {
        let m = Matrix2D::make_rotation(angle);
        let c = center.to_vector();
        Self::from_matrix_translation(&m, c - m * c)
    }

    pub fn make_scale(sx: f32, sy: f32) -> Self {
        Self::from_matrix_translation(&Matrix2D::make_scale(sx, sy), Vector2D::ZERO)
    }

    /// Reflection through the line through the origin perpendicular to the
    /// unit vector `a`.
    pub fn make_reflection(a: Vector2D) -> Self {
        Self::from_matrix_translation(&Matrix2D::make_reflection(a), Vector2D::ZERO)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.matrix().determinant()
    }

    /// Affine inverse. A singular linear part gives infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let m = self.matrix().inverse();
        Self::from_matrix_translation(&m, -(m * self.translation()))
    }
}

impl Index<(usize, usize)> for Transform2D {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if row == 2 {
            &BOTTOM_ROW[col]
        } else {
            &self.cols[col][row]
        }
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;
    fn mul(self, rhs: Transform2D) -> Transform2D {
        let m = self.matrix();
        Transform2D::from_columns(
            m * rhs.column(0),
            m * rhs.column(1),
            m * rhs.translation() + self.translation(),
        )
    }
}

impl Mul<Vector2D> for Transform2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        self.column(0) * v.x + self.column(1) * v.y
    }
}

impl Mul<Point2D> for Transform2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, p: Point2D) -> Point2D {
        let v = self * p.to_vector() + self.translation();
        Point2D::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection() {
        let t = Transform2D::make_reflection(Vector2D::new(0.6, 0.8));
        assert!((t.determinant() + 1.).abs() < 1e-6);
        let p = t * Point2D::new(0.6, 0.8);
        assert!((p - Point2D::new(-0.6, -0.8)).magnitude() < 1e-6);
        let q = t * Point2D::new(-0.8, 0.6);
        assert!((q - Point2D::new(-0.8, 0.6)).magnitude() < 1e-6);
        assert_eq!(Vector2D::ZERO, t.translation());
    }

    #[test]
    fn bottom_row_is_fixed() {
        let t = Transform2D::new(1., 2., 3., 4., 5., 6.);
        assert_eq!(3., t[(0, 2)]);
        assert_eq!(4., t[(1, 0)]);
        assert_eq!([0., 0., 1.], [t[(2, 0)], t[(2, 1)], t[(2, 2)]]);
    }

    #[test]
    fn rotation_about_center_fixes_center() {
        let c = Point2D::new(2., -1.);
        let t = Transform2D::make_rotation_about(0.8, c);
        assert!((t * c - c).magnitude() < 1e-6);
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = Transform2D::make_rotation_about(0.8, Point2D::new(2., -1.))
            * Transform2D::make_scale(2., 0.5);
        let p = Point2D::new(0.3, 7.);
        assert!(((t.inverse() * (t * p)) - p).magnitude() < 1e-5);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform2D::make_translation(Vector2D::new(1., 2.));
        assert_eq!(Point2D::new(1., 2.), t * Point2D::new(0., 0.));
        assert_eq!(Vector2D::new(1., 0.), t * Vector2D::new(1., 0.));
    }
}
