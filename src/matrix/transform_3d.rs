use super::Matrix3D;
use crate::ga_3d::{Point3D, Vector3D};
use crate::ga_4d::Vector4D;
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, Mul};

const BOTTOM_ROW: [f32; 4] = [0., 0., 0., 1.];

/// 4×4 affine matrix whose last row is always `(0, 0, 0, 1)`.
///
/// Only the upper 3×4 block is stored. Indexing by `(row, col)` reads the
/// implicit last row, and no method writes it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transform3D {
    cols: [[f32; 3]; 4],
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    pub const IDENTITY: Self = Self::new(1., 0., 0., 0., 0., 1., 0., 0., 0., 0., 1., 0.);

    /// Upper three rows given in row order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        n00: f32,
        n01: f32,
        n02: f32,
        n03: f32,
        n10: f32,
        n11: f32,
        n12: f32,
        n13: f32,
        n20: f32,
        n21: f32,
        n22: f32,
        n23: f32,
    ) -> Self {
        Self {
            cols: [
                [n00, n10, n20],
                [n01, n11, n21],
                [n02, n12, n22],
                [n03, n13, n23],
            ],
        }
    }

    #[inline]
    pub const fn from_columns(a: Vector3D, b: Vector3D, c: Vector3D, translation: Vector3D) -> Self {
        Self {
            cols: [
                [a.x, a.y, a.z],
                [b.x, b.y, b.z],
                [c.x, c.y, c.z],
                [translation.x, translation.y, translation.z],
            ],
        }
    }

    #[inline]
    pub fn from_matrix_translation(m: &Matrix3D, translation: Vector3D) -> Self {
        Self::from_columns(m.column(0), m.column(1), m.column(2), translation)
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vector3D {
        let [x, y, z] = self.cols[j];
        Vector3D::new(x, y, z)
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3D {
        Matrix3D::from_columns(self.column(0), self.column(1), self.column(2))
    }

    #[inline]
    pub fn set_matrix(&mut self, m: &Matrix3D) {
        let t = self.translation();
        *self = Self::from_matrix_translation(m, t);
    }

    #[inline]
    pub fn translation(&self) -> Vector3D {
        self.column(3)
    }

    #[inline]
    pub fn set_translation(&mut self, t: Vector3D) {
        self.cols[3] = [t.x, t.y, t.z];
    }

    pub fn make_translation(t: Vector3D) -> Self {
        Self::from_columns(Vector3D::X_UNIT, Vector3D::Y_UNIT, Vector3D::Z_UNIT, t)
    }

    pub fn make_rotation_x(angle: f32) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_rotation_x(angle), Vector3D::ZERO)
    }

    pub fn make_rotation_y(angle: f32) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_rotation_y(angle), Vector3D::ZERO)
    }

    pub fn make_rotation_z(angle: f32) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_rotation_z(angle), Vector3D::ZERO)
    }

    pub fn make_rotation(angle: f32, axis: Vector3D) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_rotation(angle, axis), Vector3D::ZERO)
    }

    pub fn make_scale(scale: f32) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_scale(scale), Vector3D::ZERO)
    }

    pub fn make_scale_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_scale_xyz(sx, sy, sz), Vector3D::ZERO)
    }

    pub fn make_reflection(a: Vector3D) -> Self {
        Self::from_matrix_translation(&Matrix3D::make_reflection(a), Vector3D::ZERO)
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

impl Index<(usize, usize)> for Transform3D {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if row == 3 {
            &BOTTOM_ROW[col]
        } else {
            &self.cols[col][row]
        }
    }
}

impl Mul for Transform3D {
    type Output = Transform3D;
    fn mul(self, rhs: Transform3D) -> Transform3D {
        let m = self.matrix();
        Transform3D::from_columns(
            m * rhs.column(0),
            m * rhs.column(1),
            m * rhs.column(2),
            m * rhs.translation() + self.translation(),
        )
    }
}

impl Mul<Vector3D> for Transform3D {
    type Output = Vector3D;
    #[inline]
    fn mul(self, v: Vector3D) -> Vector3D {
        self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z
    }
}

impl Mul<Point3D> for Transform3D {
    type Output = Point3D;
    #[inline]
    fn mul(self, p: Point3D) -> Point3D {
        let v = self * p.to_vector() + self.translation();
        Point3D::new(v.x, v.y, v.z)
    }
}

impl Mul<Vector4D> for Transform3D {
    type Output = Vector4D;
    #[inline]
    fn mul(self, p: Vector4D) -> Vector4D {
        let v = self * p.xyz() + self.translation() * p.w;
        Vector4D::from_xyz_w(v, p.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_row_is_fixed() {
        let t = Transform3D::make_translation(Vector3D::new(1., 2., 3.));
        assert_eq!(3., t[(2, 3)]);
        assert_eq!([0., 0., 0., 1.], [t[(3, 0)], t[(3, 1)], t[(3, 2)], t[(3, 3)]]);
        assert_eq!(Transform3D::IDENTITY, Transform3D::default());
    }

    #[test]
    fn composition_applies_right_first() {
        let r = Transform3D::make_rotation_z(std::f32::consts::FRAC_PI_2);
        let t = Transform3D::make_translation(Vector3D::X_UNIT);
        let p = (t * r) * Point3D::new(1., 0., 0.);
        assert!((p - Point3D::new(1., 1., 0.)).magnitude() < 1e-6);
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = Transform3D::make_rotation(0.9, Vector3D::new(0., 0.6, 0.8))
            * Transform3D::make_translation(Vector3D::new(1., -2., 4.))
            * Transform3D::make_scale_xyz(1., 2., 3.);
        let p = Point3D::new(0.3, 7., -1.);
        assert!(((t.inverse() * (t * p)) - p).magnitude() < 1e-4);
    }

    #[test]
    fn homogeneous_points_carry_weight() {
        let t = Transform3D::make_translation(Vector3D::new(1., 2., 3.));
        assert_eq!(Vector4D::new(3., 5., 7., 2.), t * Vector4D::new(1., 1., 1., 2.));
        assert_eq!(Vector4D::new(1., 1., 1., 0.), t * Vector4D::new(1., 1., 1., 0.));
    }
}
