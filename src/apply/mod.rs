//! Bulk evaluation: map the incomplete gamma evaluator over heterogeneous
//! container shapes with a uniform options surface.
//!
//! The supported shapes form a closed tagged union ([`Input`]): scalars,
//! plain dynamic sequences (`serde_json::Value` elements, which may carry
//! records for accessor or key-path addressing), dtype-erased numeric
//! [`Buffer`]s, and row-major [`Matrix`]es. The second operand ([`Operand`])
//! supplies the shape parameter s per element: a scalar broadcasts, a
//! same-length container pairs element-wise, and [`Operand::Absent`]
//! resolves every element to NaN.
//!
//! Malformed *call shape* (length or matrix-shape disagreement, bad option
//! values) is a programmer error and raises [`ApplyError`] before anything
//! is written. Malformed *data content* (a boolean where a number should be,
//! a missing record field) is expected in bulk pipelines and degrades to NaN
//! at that position only; the result container is always fully populated.
//!
//! # Example
//!
//! ```
//! use incgamma::{gammainc, Buffer, Input, Operand, Options, Output};
//!
//! let x = Buffer::from(vec![0.5_f64, 1.0, 2.0]);
//! let out = gammainc(Input::Buffer(x), Operand::Scalar(1.0), &Options::default()).unwrap();
//! match out {
//!     Output::Buffer(b) => assert!((b.get(1) - 0.6321206).abs() < 1e-4),
//!     _ => unreachable!(),
//! }
//! ```

use core::fmt;

use serde_json::{Number, Value};

use crate::matrix::Matrix;
use crate::special::gamma_inc;

mod accessor;
mod array;
mod buffer;
mod deepset;
mod matrix;
mod options;


pub use accessor::{AccessorFn, Slot};
pub use buffer::Buffer;
pub use deepset::KeyPath;
pub use options::{DType, Options, RawOptions};

/// Hard failures of the bulk entry point.
///
/// Everything data-shaped (non-numeric elements, out-of-domain parameters)
/// is soft and resolves to NaN instead; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Operand/primary length or matrix-shape disagreement. One-dimensional
    /// lengths are reported as `[len, 1]`.
    ShapeMismatch {
        expected: [usize; 2],
        got: [usize; 2],
    },
    /// A malformed configuration value, identified by its key.
    InvalidOption { key: &'static str, reason: String },
    /// The requested output element representation has no concrete backing.
    UnsupportedDType(String),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected[0], expected[1], got[0], got[1]
            ),
            Self::InvalidOption { key, reason } => {
                write!(f, "invalid `{key}` option: {reason}")
            }
            Self::UnsupportedDType(name) => write!(f, "unsupported dtype: `{name}`"),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Primary input to [`gammainc`]: the evaluation points x.
#[derive(Debug)]
pub enum Input {
    Scalar(f64),
    /// Dynamic sequence; elements may be numbers, records, or junk.
    Sequence(Vec<Value>),
    Buffer(Buffer),
    Matrix(Matrix<f64>),
}

/// Second operand of [`gammainc`]: the shape parameter s.
#[derive(Debug)]
pub enum Operand<'a> {
    /// Broadcast to every element.
    Scalar(f64),
    /// Element-wise pairing; length must match the primary.
    Sequence(&'a [Value]),
    /// Element-wise pairing; length must match the primary.
    Buffer(&'a Buffer),
    /// Element-wise pairing; shape must match a matrix primary.
    Matrix(&'a Matrix<f64>),
    /// No usable operand: every element resolves to NaN.
    Absent,
}

impl Operand<'_> {
    /// Element count, for container operands.
    fn len(&self) -> Option<usize> {
        match self {
            Self::Sequence(cells) => Some(cells.len()),
            Self::Buffer(b) => Some(b.len()),
            Self::Matrix(m) => Some(m.len()),
            Self::Scalar(_) | Self::Absent => None,
        }
    }

    /// Raise [`ApplyError::ShapeMismatch`] when a container operand does not
    /// pair one-to-one with a primary of `expected` elements.
    fn check_len(&self, expected: usize) -> Result<(), ApplyError> {
        match self.len() {
            Some(n) if n != expected => Err(ApplyError::ShapeMismatch {
                expected: [expected, 1],
                got: [n, 1],
            }),
            _ => Ok(()),
        }
    }

    /// Resolve the operand value at linear position `i`; `None` means
    /// non-numeric and maps to NaN at that position.
    fn value_at(&self, i: usize) -> Option<f64> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Sequence(cells) => value_to_f64(&cells[i]),
            Self::Buffer(b) => Some(b.get(i)),
            Self::Matrix(m) => Some(m.as_slice()[i]),
            Self::Absent => None,
        }
    }
}

/// Result container of [`gammainc`], matching the input shape.
#[derive(Debug)]
pub enum Output {
    Scalar(f64),
    /// In-place sequence results (same allocation as the input) and key-path
    /// record results. Non-finite values are encoded as `Value::Null`.
    Sequence(Vec<Value>),
    /// Freshly allocated bulk results, or an in-place buffer.
    Buffer(Buffer),
    /// Matrix results in the default 64-bit float representation.
    Matrix(Matrix<f64>),
    /// Matrix results cast into a non-default dtype.
    TypedMatrix { shape: [usize; 2], data: Buffer },
}

/// Read a dynamic value as a number. Booleans, strings, nulls, and
/// structured values are non-numeric.
pub(crate) fn value_to_f64(v: &Value) -> Option<f64> {
    v.as_f64()
}

/// Store a computed value into a dynamic slot. JSON numbers cannot carry
/// NaN or infinities, so non-finite results are encoded as null.
pub(crate) fn f64_to_value(v: f64) -> Value {
    match Number::from_f64(v) {
        Some(n) => Value::Number(n),
        None => Value::Null,
    }
}

/// Evaluate the incomplete gamma function over any supported input shape.
///
/// The primary input supplies the evaluation points x, the operand supplies
/// the shape parameter s (scalar broadcast or element-wise), and `opts`
/// selects tail, regularization, copy/in-place behavior, output dtype, and
/// record addressing (accessor or key path). See the module docs for the
/// error policy.
///
/// # Example
///
/// ```
/// use incgamma::{gammainc, Input, Operand, Options, Output};
///
/// // Scalar fast path: P(2, 4)
/// let out = gammainc(Input::Scalar(4.0), Operand::Scalar(2.0), &Options::default()).unwrap();
/// match out {
///     Output::Scalar(v) => assert!((v - 0.9084218).abs() < 1e-4),
///     _ => unreachable!(),
/// }
/// ```
pub fn gammainc(x: Input, a: Operand<'_>, opts: &Options) -> Result<Output, ApplyError> {
    match x {
        Input::Scalar(v) => scalar_entry(v, a, opts),
        Input::Sequence(seq) => sequence_entry(seq, a, opts),
        Input::Buffer(b) => buffer_entry(b, a, opts),
        Input::Matrix(m) => matrix_entry(m, a, opts),
    }
}

/// Scalar primary: direct evaluation against a scalar operand, broadcast of
/// the point against a container operand, NaN against anything else.
fn scalar_entry(v: f64, a: Operand<'_>, opts: &Options) -> Result<Output, ApplyError> {
    match a {
        Operand::Scalar(s) => Ok(Output::Scalar(gamma_inc(
            s,
            v,
            opts.tail,
            opts.regularized,
        ))),
        Operand::Sequence(_) | Operand::Buffer(_) => {
            let n = a.len().unwrap_or(0);
            let results: Vec<f64> = (0..n)
                .map(|i| match a.value_at(i) {
                    Some(s) => gamma_inc(s, v, opts.tail, opts.regularized),
                    None => f64::NAN,
                })
                .collect();
            Ok(Output::Buffer(Buffer::from_f64(
                &results,
                opts.dtype.unwrap_or(DType::Float64),
            )))
        }
        Operand::Matrix(om) => {
            let filled = Matrix::fill(om.nrows(), om.ncols(), v);
            let results = matrix::map_matrix(&filled, &a, opts.tail, opts.regularized)?;
            Ok(finish_matrix_output(om.shape(), results, opts))
        }
        Operand::Absent => Ok(Output::Scalar(f64::NAN)),
    }
}

/// Sequence primary: key-path records, accessor records, or plain dynamic
/// values, in that resolution order.
fn sequence_entry(mut seq: Vec<Value>, a: Operand<'_>, opts: &Options) -> Result<Output, ApplyError> {
    if let Some(path) = &opts.path {
        deepset::map_deepset(&mut seq, &a, path, opts.tail, opts.regularized)?;
        return Ok(Output::Sequence(seq));
    }

    let results = if let Some(acc) = &opts.accessor {
        accessor::map_accessor(&seq, &a, acc, opts.tail, opts.regularized)?
    } else {
        array::map_sequence(&seq, &a, opts.tail, opts.regularized)?
    };

    if !opts.copy {
        for (slot, &r) in seq.iter_mut().zip(results.iter()) {
            *slot = f64_to_value(r);
        }
        return Ok(Output::Sequence(seq));
    }

    Ok(Output::Buffer(Buffer::from_f64(
        &results,
        opts.dtype.unwrap_or(DType::Float64),
    )))
}

/// Buffer primary: element-wise over the typed buffer, writing through the
/// input's own dtype in place or into a fresh buffer of the requested dtype.
fn buffer_entry(mut b: Buffer, a: Operand<'_>, opts: &Options) -> Result<Output, ApplyError> {
    a.check_len(b.len())?;

    let results: Vec<f64> = (0..b.len())
        .map(|i| match a.value_at(i) {
            Some(s) => gamma_inc(s, b.get(i), opts.tail, opts.regularized),
            None => f64::NAN,
        })
        .collect();

    if !opts.copy {
        for (i, &r) in results.iter().enumerate() {
            b.set(i, r);
        }
        return Ok(Output::Buffer(b));
    }

    Ok(Output::Buffer(Buffer::from_f64(
        &results,
        opts.dtype.unwrap_or(DType::Float64),
    )))
}

/// Matrix primary: element-wise with shape validation against a matrix
/// operand.
fn matrix_entry(mut m: Matrix<f64>, a: Operand<'_>, opts: &Options) -> Result<Output, ApplyError> {
    let results = matrix::map_matrix(&m, &a, opts.tail, opts.regularized)?;

    if !opts.copy {
        m.as_mut_slice().copy_from_slice(&results);
        return Ok(Output::Matrix(m));
    }

    Ok(finish_matrix_output(m.shape(), results, opts))
}

/// Wrap flat matrix results in the output representation the options ask
/// for: an f64 matrix by default, a dtype-cast buffer plus shape otherwise.
fn finish_matrix_output(shape: [usize; 2], results: Vec<f64>, opts: &Options) -> Output {
    match opts.dtype {
        None | Some(DType::Float64) => {
            Output::Matrix(Matrix::from_vec(shape[0], shape[1], results))
        }
        Some(dt) => Output::TypedMatrix {
            shape,
            data: Buffer::from_f64(&results, dt),
        },
    }
}
