//! Small dense linear algebra for coefficient estimation

use crate::{MathError, Result};

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// Intended for the small systems that arise from normal equations
/// (a handful of coefficients), not for large matrices.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = a.len();
    if n == 0 || b.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(MathError::InvalidInput(
            "Matrix and right-hand side dimensions do not match".to_string(),
        ));
    }

    for col in 0..n {
        // Partial pivot: largest absolute value in this column
        let mut pivot_row = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot_row][col].abs() {
                pivot_row = row;
            }
        }

        if a[pivot_row][col].abs() < 1e-12 {
            return Err(MathError::CalculationError(
                "Matrix is singular or nearly singular".to_string(),
            ));
        }

        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for col in row + 1..n {
            sum -= a[row][col] * x[col];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}

/// Least-squares solution of an overdetermined system via the normal
/// equations: minimizes `|rows * x - y|`.
///
/// Each entry of `rows` is one observation row; all rows must share the
/// same width and there must be at least as many rows as unknowns.
pub fn least_squares(rows: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>> {
    if rows.is_empty() || rows.len() != y.len() {
        return Err(MathError::InvalidInput(
            "Observation rows and targets do not match".to_string(),
        ));
    }

    let width = rows[0].len();
    if width == 0 || rows.iter().any(|row| row.len() != width) {
        return Err(MathError::InvalidInput(
            "Observation rows must share a non-zero width".to_string(),
        ));
    }
    if rows.len() < width {
        return Err(MathError::InsufficientData(format!(
            "Need at least {} observations to estimate {} coefficients",
            width, width
        )));
    }

    // Normal equations: (XᵀX) x = Xᵀy
    let mut xtx = vec![vec![0.0; width]; width];
    let mut xty = vec![0.0; width];

    for (row, &target) in rows.iter().zip(y.iter()) {
        for i in 0..width {
            xty[i] += row[i] * target;
            for j in 0..width {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }

    solve(xtx, xty)
}
