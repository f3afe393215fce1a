use plane_types::{Point, TransformSpec};
use serde::{Deserialize, Serialize};

use crate::rotation::quarter_turns;

/// A 3x3 homogeneous 2D affine matrix stored in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    /// Column-major 3x3 matrix entries.
    pub m: [f64; 9],
}

impl Affine2 {
    pub fn identity() -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        #[rustfmt::skip]
        let m = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            dx,  dy,  1.0,
        ];
        Self { m }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        #[rustfmt::skip]
        let m = [
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    /// Counter-clockwise rotation by `turns` quarter turns. The cosine and
    /// sine are exact integers, so no rounding error is introduced.
    pub fn quarter_rotation(turns: u8) -> Self {
        let (c, s) = match turns % 4 {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
        #[rustfmt::skip]
        let m = [
            c,   s,   0.0,
            -s,  c,   0.0,
            0.0, 0.0, 1.0,
        ];
        Self { m }
    }

    pub fn reflection_x() -> Self {
        Self::scaling(1.0, -1.0)
    }

    pub fn reflection_y() -> Self {
        Self::scaling(-1.0, 1.0)
    }

    /// Conjugate `self` so it acts about `pivot` instead of the origin:
    /// translate by `-pivot`, apply, translate back.
    pub fn about(&self, pivot: Point) -> Self {
        Self::translation(pivot.x, pivot.y)
            .then(self)
            .then(&Self::translation(-pivot.x, -pivot.y))
    }

    /// Matrix element access (row, col), 0-indexed.
    fn at(&self, row: usize, col: usize) -> f64 {
        self.m[col * 3 + row]
    }

    pub fn transform_point(&self, p: Point) -> Point {
        let x = self.at(0, 0) * p.x + self.at(0, 1) * p.y + self.at(0, 2);
        let y = self.at(1, 0) * p.x + self.at(1, 1) * p.y + self.at(1, 2);
        Point::new(x, y)
    }

    /// Compose two transforms: self * other (`other` is applied first).
    pub fn then(&self, other: &Affine2) -> Affine2 {
        let mut result = [0.0f64; 9];
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * other.at(k, col);
                }
                result[col * 3 + row] = sum;
            }
        }
        Affine2 { m: result }
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix form of a transform descriptor.
///
/// Rotations that are not quarter turns map to the identity, matching
/// [`crate::compute_expected_points`].
pub fn to_affine(transform: &TransformSpec) -> Affine2 {
    match *transform {
        TransformSpec::Identity | TransformSpec::Unrecognized { .. } => Affine2::identity(),
        TransformSpec::ReflectX => Affine2::reflection_x(),
        TransformSpec::ReflectY => Affine2::reflection_y(),
        TransformSpec::Translate { dx, dy } => Affine2::translation(dx, dy),
        TransformSpec::Rotate { angle, pivot } => match quarter_turns(angle) {
            Some(turns) => Affine2::quarter_rotation(turns).about(pivot),
            None => Affine2::identity(),
        },
        TransformSpec::Dilate { factor, pivot } => Affine2::scaling(factor, factor).about(pivot),
    }
}
