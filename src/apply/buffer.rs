//! Dtype-erased fixed-width numeric buffers.

use super::options::DType;

/// A typed numeric buffer with its element representation erased behind one
/// enum variant per [`DType`].
///
/// Reads widen to `f64`; writes narrow with the destination's native `as`
/// cast, so storing a fractional value into an integer buffer truncates and
/// out-of-range values saturate (NaN stores as 0 in integer variants), the
/// same store semantics a typed destination imposes on any assignment.
///
/// # Example
///
/// ```
/// use incgamma::{Buffer, DType};
///
/// let mut b = Buffer::zeros(DType::Int32, 2);
/// b.set(0, 0.95);
/// assert_eq!(b.get(0), 0.0); // truncated by the int32 store
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    Int8(Vec<i8>),
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl Buffer {
    /// Allocate a zero-filled buffer of `len` elements of `dtype`.
    pub fn zeros(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::Int8 => Self::Int8(vec![0; len]),
            DType::UInt8 => Self::UInt8(vec![0; len]),
            DType::Int16 => Self::Int16(vec![0; len]),
            DType::UInt16 => Self::UInt16(vec![0; len]),
            DType::Int32 => Self::Int32(vec![0; len]),
            DType::UInt32 => Self::UInt32(vec![0; len]),
            DType::Float32 => Self::Float32(vec![0.0; len]),
            DType::Float64 => Self::Float64(vec![0.0; len]),
        }
    }

    /// Build a buffer of `dtype` from computed values, narrowing each one
    /// through the destination's store cast.
    pub fn from_f64(values: &[f64], dtype: DType) -> Self {
        let mut out = Self::zeros(dtype, values.len());
        for (i, &v) in values.iter().enumerate() {
            out.set(i, v);
        }
        out
    }

    /// The buffer's element representation.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Int8(_) => DType::Int8,
            Self::UInt8(_) => DType::UInt8,
            Self::Int16(_) => DType::Int16,
            Self::UInt16(_) => DType::UInt16,
            Self::Int32(_) => DType::Int32,
            Self::UInt32(_) => DType::UInt32,
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
        }
    }

    /// Element count.
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::UInt8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::UInt16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::UInt32(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
        }
    }

    /// True when the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read element `i`, widened to `f64`.
    pub fn get(&self, i: usize) -> f64 {
        match self {
            Self::Int8(v) => v[i] as f64,
            Self::UInt8(v) => v[i] as f64,
            Self::Int16(v) => v[i] as f64,
            Self::UInt16(v) => v[i] as f64,
            Self::Int32(v) => v[i] as f64,
            Self::UInt32(v) => v[i] as f64,
            Self::Float32(v) => v[i] as f64,
            Self::Float64(v) => v[i],
        }
    }

    /// Store `value` at element `i` through the buffer's native cast.
    pub fn set(&mut self, i: usize, value: f64) {
        match self {
            Self::Int8(v) => v[i] = value as i8,
            Self::UInt8(v) => v[i] = value as u8,
            Self::Int16(v) => v[i] = value as i16,
            Self::UInt16(v) => v[i] = value as u16,
            Self::Int32(v) => v[i] = value as i32,
            Self::UInt32(v) => v[i] = value as u32,
            Self::Float32(v) => v[i] = value as f32,
            Self::Float64(v) => v[i] = value,
        }
    }

    /// Copy the contents out as `f64` values.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

macro_rules! impl_buffer_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$t>> for Buffer {
                fn from(v: Vec<$t>) -> Self {
                    Buffer::$variant(v)
                }
            }
        )*
    };
}

impl_buffer_from!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    f32 => Float32,
    f64 => Float64,
);
