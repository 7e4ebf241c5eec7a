//! Option validation for the bulk entry point.
//!
//! Callers describe a job with [`RawOptions`] (everything optional, string
//! names for tail and dtype); a single validation pass either produces a
//! fully-populated immutable [`Options`] or a typed [`ApplyError`] naming the
//! offending key. Dispatch code never sees a partially-valid configuration.

use super::accessor::AccessorFn;
use super::deepset::KeyPath;
use super::ApplyError;
use crate::special::Tail;

/// Output element representations for freshly allocated buffers.
///
/// Names follow the conventional typed-array vocabulary; [`DType::parse`]
/// accepts exactly these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Float64,
}

impl DType {
    /// Parse a dtype name. Returns `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "uint8" => Some(Self::UInt8),
            "int16" => Some(Self::Int16),
            "uint16" => Some(Self::UInt16),
            "int32" => Some(Self::Int32),
            "uint32" => Some(Self::UInt32),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Canonical name of this dtype.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

/// Unvalidated options as supplied by the caller.
///
/// All fields default to "not set"; [`RawOptions::validate`] resolves
/// defaults and rejects malformed values.
#[derive(Default)]
pub struct RawOptions<'a> {
    /// Allocate fresh output instead of mutating the input (default true).
    pub copy: Option<bool>,
    /// `"lower"` or `"upper"` (default `"lower"`).
    pub tail: Option<&'a str>,
    /// Regularized (probability) form (default true).
    pub regularized: Option<bool>,
    /// Output element type name for fresh allocations (default `"float64"`).
    pub dtype: Option<&'a str>,
    /// Key path for in-place deep get/set over record sequences.
    pub path: Option<&'a str>,
    /// Key path separator (default `"."`).
    pub separator: Option<&'a str>,
    /// Accessor for reading numeric values out of records.
    pub accessor: Option<AccessorFn>,
}

/// Validated, immutable bulk-evaluation options.
pub struct Options {
    pub copy: bool,
    pub tail: Tail,
    pub regularized: bool,
    pub dtype: Option<DType>,
    pub path: Option<KeyPath>,
    pub accessor: Option<AccessorFn>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("copy", &self.copy)
            .field("tail", &self.tail)
            .field("regularized", &self.regularized)
            .field("dtype", &self.dtype)
            .field("path", &self.path)
            .field("accessor", &self.accessor.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            copy: true,
            tail: Tail::Lower,
            regularized: true,
            dtype: None,
            path: None,
            accessor: None,
        }
    }
}

impl<'a> RawOptions<'a> {
    /// Validate every supplied value and resolve defaults.
    ///
    /// Failures identify the offending key: an unknown `tail`, an empty
    /// `path` or `separator`, or a `path` combined with an `accessor` produce
    /// [`ApplyError::InvalidOption`]; an unknown `dtype` name produces
    /// [`ApplyError::UnsupportedDType`].
    pub fn validate(self) -> Result<Options, ApplyError> {
        let tail = match self.tail {
            None => Tail::Lower,
            Some("lower") => Tail::Lower,
            Some("upper") => Tail::Upper,
            Some(other) => {
                return Err(ApplyError::InvalidOption {
                    key: "tail",
                    reason: format!("expected \"lower\" or \"upper\", got \"{other}\""),
                })
            }
        };

        let dtype = match self.dtype {
            None => None,
            Some(name) => match DType::parse(name) {
                Some(dt) => Some(dt),
                None => return Err(ApplyError::UnsupportedDType(name.to_string())),
            },
        };

        let separator = match self.separator {
            None => ".",
            Some("") => {
                return Err(ApplyError::InvalidOption {
                    key: "separator",
                    reason: "separator must be a non-empty string".to_string(),
                })
            }
            Some(sep) => sep,
        };

        let path = match self.path {
            None => None,
            Some("") => {
                return Err(ApplyError::InvalidOption {
                    key: "path",
                    reason: "key path must be a non-empty string".to_string(),
                })
            }
            Some(p) => Some(KeyPath::parse(p, separator)),
        };

        if path.is_some() && self.accessor.is_some() {
            return Err(ApplyError::InvalidOption {
                key: "accessor",
                reason: "accessor and path are mutually exclusive".to_string(),
            });
        }

        Ok(Options {
            copy: self.copy.unwrap_or(true),
            tail,
            regularized: self.regularized.unwrap_or(true),
            dtype,
            path,
            accessor: self.accessor,
        })
    }
}
