use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, ToPrimitive, Zero};

/// Trait for types that can be used as buffer or matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and the fixed-width integer types. The
/// `NumCast`/`ToPrimitive` bounds let dtype-erased storage widen any
/// element to `f64` and narrow computed values back.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + NumCast + ToPrimitive {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + NumCast + ToPrimitive> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by the special-function evaluators (`ln`, `exp`, `abs`, NaN
/// handling). Implemented by `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
