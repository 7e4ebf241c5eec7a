//! # incgamma
//!
//! Incomplete gamma functions γ(s,x) and Γ(s,x) — regularized or not — for
//! scalars and for bulk inputs: plain sequences, typed numeric buffers,
//! accessor-mediated record collections, deep-path-addressed records, and
//! row-major matrices.
//!
//! ## Quick start
//!
//! ```
//! use incgamma::special::{gamma_inc, Tail};
//!
//! // Regularized lower incomplete gamma: the gamma-distribution CDF
//! let p = gamma_inc(2.0_f64, 4.0, Tail::Lower, true);
//! assert!((p - 0.9084218).abs() < 1e-4);
//!
//! // Upper tail by complement, stable on both sides of s ≈ x
//! let q = gamma_inc(2.0_f64, 4.0, Tail::Upper, true);
//! assert!((p + q - 1.0).abs() < 1e-12);
//! ```
//!
//! Bulk evaluation over a typed buffer with a broadcast shape parameter:
//!
//! ```
//! use incgamma::{gammainc, Buffer, Input, Operand, Options, Output};
//!
//! let x = Buffer::from(vec![0.5_f64, 1.0, 2.0, 4.0]);
//! let out = gammainc(Input::Buffer(x), Operand::Scalar(2.0), &Options::default()).unwrap();
//! match out {
//!     Output::Buffer(b) => assert_eq!(b.len(), 4),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`special`] — the numeric core: Lanczos [`special::gamma`] /
//!   [`special::lgamma`] and the dual-algorithm incomplete gamma evaluator
//!   [`special::gamma_inc`] (power series below the crossover, modified
//!   Lentz continued fraction above it, complement for the other tail).
//!   Fail-soft: out-of-domain inputs evaluate to NaN, never an error.
//!
//! - [`apply`] — the bulk dispatcher: a closed tagged union of input shapes
//!   ([`Input`]), an element-wise operand ([`Operand`]), validated
//!   [`Options`] (tail, regularization, copy/in-place, output [`DType`],
//!   accessor or [`KeyPath`] record addressing), and the single entry point
//!   [`gammainc`]. Shape disagreements raise [`ApplyError`]; bad data
//!   degrades to NaN per element.
//!
//! - [`matrix`] — heap-allocated row-major [`Matrix`] with runtime
//!   `[rows, cols]` shape.
//!
//! - [`traits`] — element trait hierarchy: [`Scalar`] for buffer/matrix
//!   elements, [`FloatScalar`] for the evaluators (f32/f64).

pub mod apply;
pub mod matrix;
pub mod special;
pub mod traits;

pub use apply::{
    gammainc, AccessorFn, ApplyError, Buffer, DType, Input, KeyPath, Operand, Options, Output,
    RawOptions, Slot,
};
pub use matrix::Matrix;
pub use special::{gamma_inc, gamma_inc_lower, gamma_inc_upper, Tail};
pub use traits::{FloatScalar, Scalar};
