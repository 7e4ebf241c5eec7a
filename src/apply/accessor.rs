//! Accessor-mediated element access over record sequences.

use serde_json::Value;

use super::{value_to_f64, ApplyError, Operand};
use crate::special::{gamma_inc, Tail};

/// Which value an accessor is being asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The evaluation point x, read from the primary sequence.
    Primary,
    /// The shape parameter s, read from an operand record sequence.
    Operand,
}

/// Caller-supplied extraction function mapping a record, its element index,
/// and the requested [`Slot`] to a numeric value. Returning `None` marks the
/// value non-numeric, which resolves to NaN at that position.
pub type AccessorFn = Box<dyn Fn(&Value, usize, Slot) -> Option<f64>>;

/// Evaluate over a record sequence, routing every primary read through the
/// accessor.
///
/// When the operand is itself a sequence, each operand element is offered to
/// the accessor with [`Slot::Operand`] first and read as a plain number if
/// the accessor declines; other operand kinds resolve directly.
pub(super) fn map_accessor(
    records: &[Value],
    a: &Operand<'_>,
    accessor: &AccessorFn,
    tail: Tail,
    regularized: bool,
) -> Result<Vec<f64>, ApplyError> {
    a.check_len(records.len())?;

    let out = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let x = accessor(record, i, Slot::Primary);
            let s = match a {
                Operand::Sequence(cells) => {
                    accessor(&cells[i], i, Slot::Operand).or_else(|| value_to_f64(&cells[i]))
                }
                other => other.value_at(i),
            };
            match (s, x) {
                (Some(s), Some(x)) => gamma_inc(s, x, tail, regularized),
                _ => f64::NAN,
            }
        })
        .collect();

    Ok(out)
}
