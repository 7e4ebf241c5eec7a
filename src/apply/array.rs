//! Element-wise evaluation over plain dynamic sequences.

use serde_json::Value;

use super::{value_to_f64, ApplyError, Operand};
use crate::special::{gamma_inc, Tail};

/// Evaluate a sequence of dynamic values against the operand.
///
/// A non-numeric primary element yields NaN at its position regardless of
/// the operand; a non-numeric resolved operand value likewise yields NaN.
/// Both containers must agree on length (checked before any evaluation).
pub(super) fn map_sequence(
    seq: &[Value],
    a: &Operand<'_>,
    tail: Tail,
    regularized: bool,
) -> Result<Vec<f64>, ApplyError> {
    a.check_len(seq.len())?;

    let out = seq
        .iter()
        .enumerate()
        .map(|(i, cell)| match (a.value_at(i), value_to_f64(cell)) {
            (Some(s), Some(x)) => gamma_inc(s, x, tail, regularized),
            _ => f64::NAN,
        })
        .collect();

    Ok(out)
}
