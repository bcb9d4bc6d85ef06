use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::common::FloatValueType;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 4x4 `Matrix4x4`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        Self {
            m: [
                [T::one(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::one(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::one(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::one()],
            ],
        }
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [
                [T::zero(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::zero()],
                [T::zero(), T::zero(), T::zero(), T::zero()],
            ],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
                [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
            ],
        }
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// Panics if the matrix is singular.
    pub fn inverted(&self) -> Self {
        // Gauss-Jordan elimination with full pivoting, in place. Row operations
        // are applied to the matrix as if it was augmented with an identity on
        // the right, but since every finished column is known to hold identity
        // values, the inverse fits in a single matrix with some bookkeeping.

        let mut mi = self.m;
        // Row and column of each pivot in pivoting order
        let mut indxc = [0, 0, 0, 0];
        let mut indxr = [0, 0, 0, 0];
        let mut ipiv = [0, 0, 0, 0];

        // Reduce one column per iteration
        for col in 0..4 {
            let mut icol = 0;
            let mut irow = 0;
            let mut big = T::zero();

            // Pivot on the largest remaining value for numerical stability
            for row in 0..4 {
                if ipiv[row] != 1 {
                    for (rcol, &piv) in ipiv.iter().enumerate() {
                        if (piv == 0) && (mi[row][rcol].abs() > big) {
                            big = mi[row][rcol].abs();
                            irow = row;
                            icol = rcol;
                        }
                    }
                }
            }
            ipiv[icol] += 1;

            // Swap rows to get the pivot onto its target row
            if irow != icol {
                // split_at_mut needs to know which index is smaller
                if irow > icol {
                    let (top, bottom) = mi.split_at_mut(irow);
                    std::mem::swap(&mut top[icol], &mut bottom[0]);
                } else {
                    let (top, bottom) = mi.split_at_mut(icol);
                    std::mem::swap(&mut top[irow], &mut bottom[0]);
                }
            }

            // Columns are not swapped in memory, only recorded for a final
            // unscramble pass
            indxr[col] = irow;
            indxc[col] = icol;

            assert!(mi[icol][icol] != T::zero(), "Can't invert, singular matrix");

            // Scale the pivot row so the diagonal becomes 1
            let pivinv = T::one() / mi[icol][icol];
            mi[icol][icol] = T::one();
            for l in 0..4 {
                mi[icol][l] *= pivinv;
            }

            // Zero the pivot column on the other rows
            for row in 0..4 {
                if row != icol {
                    let factor = mi[row][icol];
                    mi[row][icol] = T::zero();
                    for rcol in 0..4 {
                        mi[row][rcol] -= factor * mi[icol][rcol];
                    }
                }
            }
        }

        // Undo the implicit column permutation left by the row swaps
        for col in (0..4).rev() {
            if indxr[col] != indxc[col] {
                let (a, b) = {
                    let a = indxr[col];
                    let b = indxc[col];
                    if a < b {
                        (a, b)
                    } else {
                        (b, a)
                    }
                };
                for row in &mut mi {
                    let (front, back) = row.split_at_mut(b);
                    std::mem::swap(&mut front[a], &mut back[0]);
                }
            }
        }
        Matrix4x4::new(mi)
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
