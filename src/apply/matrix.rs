//! Element-wise evaluation over 2-D row-major matrices.

use super::{ApplyError, Operand};
use crate::matrix::Matrix;
use crate::special::{gamma_inc, Tail};

/// Evaluate every element of `x` against the operand, producing the flat
/// row-major result buffer.
///
/// A matrix operand must match `x`'s `[rows, cols]` shape exactly
/// ([`ApplyError::ShapeMismatch`] otherwise, raised before any evaluation);
/// a scalar operand broadcasts. Any other operand kind is not meaningful
/// against a matrix and resolves every element to NaN.
pub(super) fn map_matrix(
    x: &Matrix<f64>,
    a: &Operand<'_>,
    tail: Tail,
    regularized: bool,
) -> Result<Vec<f64>, ApplyError> {
    if let Operand::Matrix(om) = a {
        if om.shape() != x.shape() {
            return Err(ApplyError::ShapeMismatch {
                expected: x.shape(),
                got: om.shape(),
            });
        }
    }

    let out = x
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &xi)| match a {
            Operand::Scalar(s) => gamma_inc(*s, xi, tail, regularized),
            Operand::Matrix(om) => gamma_inc(om.as_slice()[i], xi, tail, regularized),
            _ => f64::NAN,
        })
        .collect();

    Ok(out)
}
