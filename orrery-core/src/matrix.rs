/// Hand-written 4x4 affine transform matrices
use std::f32::consts::PI;
use std::ops::{Index, IndexMut};

use nalgebra::Point3;

/// A 4x4 homogeneous transform stored as 16 scalars in column-major order,
/// the same layout a fixed-function graphics pipeline expects. Entry at
/// row `i`, column `j` lives at index `j * 4 + i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create an identity matrix
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a matrix from 16 scalars in column-major order
    pub fn from_column_slice(values: &[f32]) -> Self {
        let mut m = [0.0; 16];
        m.copy_from_slice(&values[..16]);
        Self { m }
    }

    /// View the matrix as its 16 column-major scalars
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.m
    }

    /// Compose another transform onto this one: `self = self * other`.
    ///
    /// Standard 4x4 multiplication over the column-major layout, written
    /// into a temporary so the in-place update never reads an entry it has
    /// already overwritten.
    pub fn compose(&mut self, other: &Mat4) {
        let mut result = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k * 4 + row] * other.m[col * 4 + k];
                }
                result[col * 4 + row] = sum;
            }
        }
        self.m = result;
    }

    /// Create a translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut t = Self::identity();
        t.m[12] = x;
        t.m[13] = y;
        t.m[14] = z;
        t
    }

    /// Create a right-handed rotation about the Y axis, angle in degrees
    pub fn rotation_y(degrees: f32) -> Self {
        let rad = degrees * PI / 180.0;
        let (s, c) = rad.sin_cos();

        // Column-major: (row 0, col 2) = sin lands at [8], (row 2, col 0)
        // = -sin at [2].
        let mut r = Self::identity();
        r.m[0] = c;
        r.m[2] = -s;
        r.m[8] = s;
        r.m[10] = c;
        r
    }

    /// The translation column: entries [12], [13], [14]
    pub fn translation_part(&self) -> (f32, f32, f32) {
        (self.m[12], self.m[13], self.m[14])
    }

    /// Apply the transform to a point (w = 1, affine last row assumed)
    pub fn transform_point(&self, p: &Point3<f32>) -> Point3<f32> {
        let m = &self.m;
        Point3::new(
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.m[index]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.m[index]
    }
}
