//! Dense Cholesky factorisation for the reduced stiffness matrix.

use nalgebra::{DMatrix, DVector};

use crate::errors::SingularError;

/// Lower-triangular factor `L` of a symmetric positive definite matrix `K = L·Lᵀ`.
#[derive(Clone, Debug)]
pub struct Cholesky {
    /// Lower triangle holds `L`; the strict upper triangle is zero.
    lower: DMatrix<f64>,
}

impl Cholesky {
    /// Factor `matrix`, reading only its lower triangle.
    ///
    /// # Errors
    ///
    /// Returns [`SingularError::NonPositivePivot`] as soon as a pivot is zero,
    /// negative or NaN, i.e. when `matrix` is not positive definite.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{DMatrix, DVector};
    /// use trussrig::cholesky::Cholesky;
    ///
    /// let k = DMatrix::from_row_slice(2, 2, &[4.0, 2.0, 2.0, 3.0]);
    /// let x = Cholesky::factor(&k).expect("SPD").solve(&DVector::from_vec(vec![2.0, 1.0]));
    /// assert!((x[0] - 0.5).abs() < 1.0e-12);
    /// assert!(x[1].abs() < 1.0e-12);
    /// ```
    pub fn factor(matrix: &DMatrix<f64>) -> Result<Self, SingularError> {
        let n = matrix.nrows();
        let mut lower = DMatrix::<f64>::zeros(n, n);
        for j in 0..n {
            let mut pivot = matrix[(j, j)];
            for k in 0..j {
                pivot -= lower[(j, k)] * lower[(j, k)];
            }
            if pivot.is_nan() || pivot <= 0.0 {
                return Err(SingularError::NonPositivePivot {
                    pivot_index: j,
                    pivot,
                });
            }
            let diagonal = pivot.sqrt();
            lower[(j, j)] = diagonal;
            for i in (j + 1)..n {
                let mut sum = matrix[(i, j)];
                for k in 0..j {
                    sum -= lower[(i, k)] * lower[(j, k)];
                }
                lower[(i, j)] = sum / diagonal;
            }
        }
        Ok(Self { lower })
    }

    /// Solve `K·x = b` by forward then backward substitution.
    #[must_use]
    pub fn solve(&self, b: &DVector<f64>) -> DVector<f64> {
        let n = self.lower.nrows();
        let mut x = b.clone();

        // L·y = b
        for i in 0..n {
            let mut sum = x[i];
            for k in 0..i {
                sum -= self.lower[(i, k)] * x[k];
            }
            x[i] = sum / self.lower[(i, i)];
        }

        // Lᵀ·x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for k in (i + 1)..n {
                sum -= self.lower[(k, i)] * x[k];
            }
            x[i] = sum / self.lower[(i, i)];
        }
        x
    }

    /// The lower-triangular factor.
    #[must_use]
    pub fn lower(&self) -> &DMatrix<f64> {
        &self.lower
    }
}
