//! Dense linear solve for the flexibility equations `D·X = b`

use nalgebra::{DMatrix, DVector};

use crate::errors::{BeamError, BeamResult};

/// Default relative pivot tolerance below which a matrix counts as singular
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Solve `a·x = b` by LU decomposition with partial pivoting.
///
/// The matrix is treated as singular when its smallest pivot is below
/// `tolerance` times its largest entry; that fails with
/// [`BeamError::SingularSystem`].
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>, tolerance: f64) -> BeamResult<DVector<f64>> {
    let size = a.nrows();
    if a.ncols() != size || b.len() != size {
        return Err(BeamError::invalid_input(
            "linear_system",
            format!("{}x{} matrix, {} rhs", a.nrows(), a.ncols(), b.len()),
            "Matrix must be square and match the right-hand side",
        ));
    }
    if size == 0 {
        return Ok(DVector::zeros(0));
    }

    let scale = a.amax();
    if scale == 0.0 || !scale.is_finite() {
        return Err(BeamError::SingularSystem { size });
    }

    let lu = a.clone().lu();
    let smallest_pivot = lu
        .u()
        .diagonal()
        .iter()
        .fold(f64::INFINITY, |acc, pivot| acc.min(pivot.abs()));
    if smallest_pivot <= tolerance * scale {
        return Err(BeamError::SingularSystem { size });
    }

    lu.solve(b).ok_or(BeamError::SingularSystem { size })
}
