use crate::ga_2d::{Point2D, Vector2D};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// 2×2 matrix stored by columns and indexed by `(row, col)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix2D {
    cols: [[f32; 2]; 2],
}

impl Matrix2D {
    pub const ZERO: Self = Self::new(0., 0., 0., 0.);
    pub const IDENTITY: Self = Self::new(1., 0., 0., 1.);

    /// Entries given in row order.
    #[inline]
    pub const fn new(n00: f32, n01: f32, n10: f32, n11: f32) -> Self {
        Self {
            cols: [[n00, n10], [n01, n11]],
        }
    }

    #[inline]
    pub const fn from_columns(a: Vector2D, b: Vector2D) -> Self {
        Self {
            cols: [[a.x, a.y], [b.x, b.y]],
        }
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vector2D {
        let [x, y] = self.cols[j];
        Vector2D::new(x, y)
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vector2D {
        Vector2D::new(self.cols[0][i], self.cols[1][i])
    }

    #[inline]
    pub fn set_column(&mut self, j: usize, v: Vector2D) {
        self.cols[j] = [v.x, v.y];
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1))
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    pub fn adjugate(&self) -> Self {
        Self::new(self[(1, 1)], -self[(0, 1)], -self[(1, 0)], self[(0, 0)])
    }

    /// Inverse matrix. Singular input gives infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        self.adjugate() * self.determinant().recip()
    }

    /// Re-orthonormalizes the matrix keeping the direction of `column`.
    ///
    /// The other column is rebuilt perpendicular to it, so the result is a
    /// rotation.
    pub fn orthogonalize(&mut self, column: usize) {
        let a = self.column(column % 2).normalize();
        if column % 2 == 0 {
            self.set_column(0, a);
            self.set_column(1, Vector2D::new(-a.y, a.x));
        } else {
            self.set_column(0, Vector2D::new(a.y, -a.x));
            self.set_column(1, a);
        }
    }

    /// Counter-clockwise rotation.
    pub fn make_rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, s, c)
    }

    pub fn make_scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0., 0., sy)
    }

    /// Reflection through the line perpendicular to the unit vector `a`.
    pub fn make_reflection(a: Vector2D) -> Self {
        let x = a.x * -2.;
        let y = a.y * -2.;
        let xy = x * a.y;
        Self::new(x * a.x + 1., xy, xy, y * a.y + 1.)
    }

    /// Reflection through the line along the unit vector `a`.
    pub fn make_involution(a: Vector2D) -> Self {
        let x = a.x * 2.;
        let y = a.y * 2.;
        let xy = x * a.y;
        Self::new(x * a.x - 1., xy, xy, y * a.y - 1.)
    }

    /// Skew by `angle` along unit `a`, proportional to the projection onto
    /// unit `b`, which must be perpendicular to `a`.
    pub fn make_skew(angle: f32, a: Vector2D, b: Vector2D) -> Self {
        let t = angle.tan();
        let x = a.x * t;
        let y = a.y * t;
        Self::new(x * b.x + 1., x * b.y, y * b.x, y * b.y + 1.)
    }
}

impl Index<(usize, usize)> for Matrix2D {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Matrix2D {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl Add for Matrix2D {
    type Output = Matrix2D;
    fn add(self, rhs: Matrix2D) -> Matrix2D {
        Matrix2D::from_columns(
            self.column(0) + rhs.column(0),
            self.column(1) + rhs.column(1),
        )
    }
}

impl Sub for Matrix2D {
    type Output = Matrix2D;
    fn sub(self, rhs: Matrix2D) -> Matrix2D {
        Matrix2D::from_columns(
            self.column(0) - rhs.column(0),
            self.column(1) - rhs.column(1),
        )
    }
}

impl Mul<f32> for Matrix2D {
    type Output = Matrix2D;
    fn mul(self, rhs: f32) -> Matrix2D {
        Matrix2D::from_columns(self.column(0) * rhs, self.column(1) * rhs)
    }
}

impl Mul<Vector2D> for Matrix2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        self.column(0) * v.x + self.column(1) * v.y
    }
}

impl Mul<Point2D> for Matrix2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, p: Point2D) -> Point2D {
        let v = self * p.to_vector();
        Point2D::new(v.x, v.y)
    }
}

impl Mul for Matrix2D {
    type Output = Matrix2D;
    fn mul(self, rhs: Matrix2D) -> Matrix2D {
        Matrix2D::from_columns(self * rhs.column(0), self * rhs.column(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonalize_keeps_column() {
        for column in [0, 1] {
            let mut m = Matrix2D::make_rotation(0.7) + Matrix2D::new(0.01, -0.02, 0.03, 0.01);
            let kept = m.column(column).normalize();
            m.orthogonalize(column);
            assert!((m.column(column) - kept).magnitude() < 1e-6);
            assert!((m.determinant() - 1.).abs() < 1e-6);
            let p = m.transpose() * m;
            assert!((p[(0, 1)]).abs() < 1e-6);
            assert!((p[(0, 0)] - 1.).abs() < 1e-6 && (p[(1, 1)] - 1.).abs() < 1e-6);
        }
    }

    #[test]
    fn row_order_constructor() {
        let m = Matrix2D::new(1., 2., 3., 4.);
        assert_eq!(2., m[(0, 1)]);
        assert_eq!(Vector2D::new(1., 3.), m.column(0));
        assert_eq!(Vector2D::new(3., 4.), m.row(1));
        assert_eq!(-2., m.determinant());
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Matrix2D::new(2., 1., -1., 3.);
        let d = m * m.inverse() - Matrix2D::IDENTITY;
        for i in 0..2 {
            for j in 0..2 {
                assert!(d[(i, j)].abs() < 1e-6);
            }
        }
    }

    #[test]
    fn reflection_and_involution_are_opposite() {
        let a = Vector2D::new(0.6, 0.8);
        let sum = Matrix2D::make_reflection(a) + Matrix2D::make_involution(a);
        for i in 0..2 {
            for j in 0..2 {
                assert!(sum[(i, j)].abs() < 1e-6);
            }
        }
        let r = Matrix2D::make_reflection(a) * a;
        assert!((r + a).magnitude() < 1e-6);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let v = Matrix2D::make_rotation(std::f32::consts::FRAC_PI_2) * Vector2D::X_UNIT;
        assert!((v - Vector2D::Y_UNIT).magnitude() < 1e-6);
    }

    #[test]
    fn skew_moves_along_a() {
        let m = Matrix2D::make_skew(std::f32::consts::FRAC_PI_4, Vector2D::X_UNIT, Vector2D::Y_UNIT);
        let v = m * Vector2D::new(0., 2.);
        assert!((v - Vector2D::new(2., 2.)).magnitude() < 1e-5);
    }
}
