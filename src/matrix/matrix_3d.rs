use crate::ga_3d::{Bivector3D, Point3D, Vector3D};
use crate::scalar::clamp_unit;
use crate::Wedge;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// 3×3 matrix stored by columns and indexed by `(row, col)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix3D {
    cols: [[f32; 3]; 3],
}

impl Matrix3D {
    pub const ZERO: Self = Self::new(0., 0., 0., 0., 0., 0., 0., 0., 0.);
    pub const IDENTITY: Self = Self::new(1., 0., 0., 0., 1., 0., 0., 0., 1.);

    /// Entries given in row order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        n00: f32,
        n01: f32,
        n02: f32,
        n10: f32,
        n11: f32,
        n12: f32,
        n20: f32,
        n21: f32,
        n22: f32,
    ) -> Self {
        Self {
            cols: [[n00, n10, n20], [n01, n11, n21], [n02, n12, n22]],
        }
    }

    #[inline]
    pub const fn from_columns(a: Vector3D, b: Vector3D, c: Vector3D) -> Self {
        Self {
            cols: [[a.x, a.y, a.z], [b.x, b.y, b.z], [c.x, c.y, c.z]],
        }
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vector3D {
        let [x, y, z] = self.cols[j];
        Vector3D::new(x, y, z)
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vector3D {
        Vector3D::new(self.cols[0][i], self.cols[1][i], self.cols[2][i])
    }

    #[inline]
    pub fn set_column(&mut self, j: usize, v: Vector3D) {
        self.cols[j] = [v.x, v.y, v.z];
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    /// `a ∧ b ∧ c` for the columns `a`, `b`, `c`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.column(0)
            .wedge(self.column(1))
            .wedge(self.column(2))
    }

    /// Rows of the adjugate are the wedges `b ∧ c`, `c ∧ a`, `a ∧ b`.
    pub fn adjugate(&self) -> Self {
        let (g0, g1, g2) = self.column_wedges();
        Self::from_rows(g0, g1, g2, 1.)
    }

    /// Inverse matrix. Singular input gives infinite or NaN entries.
    pub fn inverse(&self) -> Self {
        let (g0, g1, g2) = self.column_wedges();
        let inv_det = g2.wedge(self.column(2)).recip();
        Self::from_rows(g0, g1, g2, inv_det)
    }

    fn column_wedges(&self) -> (Bivector3D, Bivector3D, Bivector3D) {
        let a = self.column(0);
        let b = self.column(1);
        let c = self.column(2);
        (b.wedge(c), c.wedge(a), a.wedge(b))
    }

    fn from_rows(g0: Bivector3D, g1: Bivector3D, g2: Bivector3D, s: f32) -> Self {
        Self::new(
            g0.x * s,
            g0.y * s,
            g0.z * s,
            g1.x * s,
            g1.y * s,
            g1.z * s,
            g2.x * s,
            g2.y * s,
            g2.z * s,
        )
    }

    /// Re-orthonormalizes the matrix keeping the direction of `column`.
    ///
    /// The next column (cyclically) is made perpendicular to it and the last
    /// one is rebuilt as their cross product, so the result is a rotation.
    pub fn orthogonalize(&mut self, column: usize) {
        let i = column % 3;
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let a = self.column(i).normalize();
        let b = self.column(j).reject_from_unit(a).normalize();
        let c = a.cross(b);

        self.set_column(i, a);
        self.set_column(j, b);
        self.set_column(k, c);
    }

    pub fn make_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1., 0., 0., 0., c, -s, 0., s, c)
    }

    pub fn make_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0., s, 0., 1., 0., -s, 0., c)
    }

    pub fn make_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, 0., s, c, 0., 0., 0., 1.)
    }

    /// Rotation by `angle` about the unit `axis`, counter-clockwise when the
    /// axis points at the viewer.
    pub fn make_rotation(angle: f32, axis: Vector3D) -> Self {
        let (s, c) = angle.sin_cos();
        let d = 1. - c;

        let x = axis.x * d;
        let y = axis.y * d;
        let z = axis.z * d;
        let axay = x * axis.y;
        let axaz = x * axis.z;
        let ayaz = y * axis.z;

        Self::new(
            c + x * axis.x,
            axay - s * axis.z,
            axaz + s * axis.y,
            axay + s * axis.z,
            c + y * axis.y,
            ayaz - s * axis.x,
            axaz - s * axis.y,
            ayaz + s * axis.x,
            c + z * axis.z,
        )
    }

    /// Reflection through the plane perpendicular to the unit vector `a`.
    pub fn make_reflection(a: Vector3D) -> Self {
        Self::outer(a, a, -2.) + Self::IDENTITY
    }

    /// Rotation by half a turn about the unit vector `a`.
    pub fn make_involution(a: Vector3D) -> Self {
        Self::outer(a, a, 2.) - Self::IDENTITY
    }

    pub fn make_scale(scale: f32) -> Self {
        Self::make_scale_xyz(scale, scale, scale)
    }

    pub fn make_scale_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new(sx, 0., 0., 0., sy, 0., 0., 0., sz)
    }

    /// Scale by `scale` along the unit vector `a`, identity across it.
    pub fn make_scale_along(scale: f32, a: Vector3D) -> Self {
        Self::outer(a, a, scale - 1.) + Self::IDENTITY
    }

    /// Skew by `angle` along unit `a`, proportional to the projection onto
    /// unit `b`, which must be perpendicular to `a`.
    pub fn make_skew(angle: f32, a: Vector3D, b: Vector3D) -> Self {
        Self::outer(a, b, angle.tan()) + Self::IDENTITY
    }

    /// `s a bᵀ`
    fn outer(a: Vector3D, b: Vector3D, s: f32) -> Self {
        Self::from_columns(a * (b.x * s), a * (b.y * s), a * (b.z * s))
    }

    /// Rotation about x, then y, then z: `Rz(z) Ry(y) Rx(x)`.
    pub fn make_euler_rotation(x: f32, y: f32, z: f32) -> Self {
        Self::make_rotation_z(z) * Self::make_rotation_y(y) * Self::make_rotation_x(x)
    }

    /// Angles `(x, y, z)` such that `make_euler_rotation(x, y, z)` rebuilds a
    /// rotation matrix.
    ///
    /// At gimbal lock (`y = ±π/2`) the x angle is reported as zero and the
    /// whole rotation about the shared axis is folded into z.
    pub fn euler_angles(&self) -> (f32, f32, f32) {
        use std::f32::consts::FRAC_PI_2;

        let sy = -self[(2, 0)];
        if sy < 1. {
            if sy > -1. {
                let x = self[(2, 1)].atan2(self[(2, 2)]);
                let y = clamp_unit(sy).asin();
                let z = self[(1, 0)].atan2(self[(0, 0)]);
                (x, y, z)
            } else {
                (0., -FRAC_PI_2, (-self[(0, 1)]).atan2(self[(1, 1)]))
            }
        } else {
            (0., FRAC_PI_2, (-self[(0, 1)]).atan2(self[(1, 1)]))
        }
    }
}

impl Index<(usize, usize)> for Matrix3D {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Matrix3D {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl Add for Matrix3D {
    type Output = Matrix3D;
    fn add(self, rhs: Matrix3D) -> Matrix3D {
        Matrix3D::from_columns(
            self.column(0) + rhs.column(0),
            self.column(1) + rhs.column(1),
            self.column(2) + rhs.column(2),
        )
    }
}

impl Sub for Matrix3D {
    type Output = Matrix3D;
    fn sub(self, rhs: Matrix3D) -> Matrix3D {
        Matrix3D::from_columns(
            self.column(0) - rhs.column(0),
            self.column(1) - rhs.column(1),
            self.column(2) - rhs.column(2),
        )
    }
}

impl Mul<f32> for Matrix3D {
    type Output = Matrix3D;
    fn mul(self, rhs: f32) -> Matrix3D {
        Matrix3D::from_columns(self.column(0) * rhs, self.column(1) * rhs, self.column(2) * rhs)
    }
}

impl Mul<Vector3D> for Matrix3D {
    type Output = Vector3D;
    #[inline]
    fn mul(self, v: Vector3D) -> Vector3D {
        self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z
    }
}

impl Mul<Point3D> for Matrix3D {
    type Output = Point3D;
    #[inline]
    fn mul(self, p: Point3D) -> Point3D {
        let v = self * p.to_vector();
        Point3D::new(v.x, v.y, v.z)
    }
}

impl Mul for Matrix3D {
    type Output = Matrix3D;
    fn mul(self, rhs: Matrix3D) -> Matrix3D {
        Matrix3D::from_columns(
            self * rhs.column(0),
            self * rhs.column(1),
            self * rhs.column(2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_close(a: Matrix3D, b: Matrix3D) {
        for i in 0..3 {
            for j in 0..3 {
                assert!((a[(i, j)] - b[(i, j)]).abs() < 1e-5, "{a:?}\n{b:?}");
            }
        }
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let v = Matrix3D::make_rotation_z(FRAC_PI_2) * Vector3D::X_UNIT;
        assert!((v - Vector3D::Y_UNIT).magnitude() < 1e-6);
    }

    #[test]
    fn axis_rotation_matches_principal_rotations() {
        let a = 0.7;
        assert_close(Matrix3D::make_rotation_x(a), Matrix3D::make_rotation(a, Vector3D::X_UNIT));
        assert_close(Matrix3D::make_rotation_y(a), Matrix3D::make_rotation(a, Vector3D::Y_UNIT));
        assert_close(Matrix3D::make_rotation_z(a), Matrix3D::make_rotation(a, Vector3D::Z_UNIT));
    }

    #[test]
    fn inverse_via_wedges() {
        let m = Matrix3D::new(2., 3., 5., -1., 4., 0.5, 0., 1., 3.);
        assert_close(Matrix3D::IDENTITY, m * m.inverse());
        assert_close(Matrix3D::IDENTITY, m.inverse() * m);
        assert_close(m.adjugate() * m, Matrix3D::IDENTITY * m.determinant());
    }

    #[test]
    fn determinant_of_rotation_is_one() {
        let r = Matrix3D::make_rotation(1.1, Vector3D::new(1., 2., 2.) / 3.);
        assert!((r.determinant() - 1.).abs() < 1e-5);
        assert_close(r.transpose(), r.inverse());
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Matrix3D::make_scale_xyz(1., 1., 0.);
        assert!(!m.inverse()[(0, 0)].is_finite());
    }

    #[test]
    fn orthogonalize_keeps_chosen_column() {
        for column in 0..3 {
            let mut m = Matrix3D::make_rotation(0.4, Vector3D::new(0., 0.6, 0.8));
            m[(0, 1)] += 0.01;
            m[(2, 0)] -= 0.02;
            let kept = m.column(column).normalize();
            m.orthogonalize(column);

            assert!((m.column(column) - kept).magnitude() < 1e-6);
            assert_close(m * m.transpose(), Matrix3D::IDENTITY);
            assert!((m.determinant() - 1.).abs() < 1e-5);
        }
    }

    #[test]
    fn reflection_flips_axis() {
        let a = Vector3D::new(0., 0.6, 0.8);
        let m = Matrix3D::make_reflection(a);
        assert!((m * a + a).magnitude() < 1e-6);
        assert!((m.determinant() + 1.).abs() < 1e-5);
        let n = Matrix3D::make_involution(a);
        assert!((n * a - a).magnitude() < 1e-6);
    }

    #[test]
    fn scale_along_axis() {
        let m = Matrix3D::make_scale_along(3., Vector3D::Z_UNIT);
        assert_eq!(Vector3D::new(1., 1., 3.), m * Vector3D::new(1., 1., 1.));
        assert_eq!(Matrix3D::make_scale_xyz(1., 1., 3.), m);
    }

    #[test]
    fn skew() {
        let m = Matrix3D::make_skew(FRAC_PI_4, Vector3D::X_UNIT, Vector3D::Y_UNIT);
        let v = m * Vector3D::new(0., 2., 1.);
        assert!((v - Vector3D::new(2., 2., 1.)).magnitude() < 1e-5);
    }

    #[test]
    fn euler_round_trip() {
        let (x, y, z) = (0.3, -0.5, 1.2);
        let m = Matrix3D::make_euler_rotation(x, y, z);
        let (ex, ey, ez) = m.euler_angles();
        assert!((ex - x).abs() < 1e-5);
        assert!((ey - y).abs() < 1e-5);
        assert!((ez - z).abs() < 1e-5);
    }

    #[test]
    fn euler_gimbal_lock() {
        for y in [FRAC_PI_2, -FRAC_PI_2] {
            let m = Matrix3D::new(0., 0., y.signum(), 0., 1., 0., -y.signum(), 0., 0.)
                * Matrix3D::make_rotation_x(0.25);
            let m = Matrix3D::make_rotation_z(0.5) * m;
            let (ex, ey, ez) = m.euler_angles();
            assert_eq!(0., ex);
            assert_eq!(y, ey);
            assert_close(m, Matrix3D::make_euler_rotation(ex, ey, ez));
        }
    }
}
