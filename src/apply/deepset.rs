//! Deep-path-addressed record sequences: read a nested numeric field,
//! evaluate, and write the result back into the same field in place.

use serde_json::Value;

use super::{f64_to_value, value_to_f64, ApplyError, Operand};
use crate::special::{gamma_inc, Tail};

/// A separator-delimited key path, parsed once per bulk call and walked per
/// record.
///
/// Segments address [`Value::Object`] fields by name and [`Value::Array`]
/// elements by decimal index.
///
/// # Example
///
/// ```
/// use incgamma::KeyPath;
///
/// let path = KeyPath::parse("a/b", "/");
/// assert_eq!(path.segments(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split `path` on `separator` into segments.
    pub fn parse(path: &str, separator: &str) -> Self {
        Self {
            segments: path.split(separator).map(String::from).collect(),
        }
    }

    /// The parsed path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk `root` down the path, returning the addressed value if every
    /// segment resolves.
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut node = root;
        for seg in &self.segments {
            node = match node {
                Value::Object(map) => map.get(seg)?,
                Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Overwrite the addressed field with `value`, creating the final key on
    /// an existing parent object if needed. Returns false (and leaves the
    /// record untouched) when an intermediate segment is missing or an array
    /// index is out of bounds.
    pub fn set(&self, root: &mut Value, value: Value) -> bool {
        let (last, parents) = match self.segments.split_last() {
            Some(split) => split,
            None => return false,
        };

        let mut node = root;
        for seg in parents {
            node = match node {
                Value::Object(map) => match map.get_mut(seg) {
                    Some(child) => child,
                    None => return false,
                },
                Value::Array(items) => {
                    let idx = match seg.parse::<usize>() {
                        Ok(idx) => idx,
                        Err(_) => return false,
                    };
                    match items.get_mut(idx) {
                        Some(child) => child,
                        None => return false,
                    }
                }
                _ => return false,
            };
        }

        match node {
            Value::Object(map) => {
                map.insert(last.clone(), value);
                true
            }
            Value::Array(items) => {
                let idx = match last.parse::<usize>() {
                    Ok(idx) => idx,
                    Err(_) => return false,
                };
                match items.get_mut(idx) {
                    Some(slot) => {
                        *slot = value;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

/// Evaluate the addressed field of every record and write the result back in
/// place. Sibling fields are untouched; a record where the path does not
/// resolve to a number gets NaN written at the path (encoded as null).
pub(super) fn map_deepset(
    records: &mut [Value],
    a: &Operand<'_>,
    path: &KeyPath,
    tail: Tail,
    regularized: bool,
) -> Result<(), ApplyError> {
    a.check_len(records.len())?;

    for (i, record) in records.iter_mut().enumerate() {
        let x = path.get(record).and_then(value_to_f64);
        let result = match (a.value_at(i), x) {
            (Some(s), Some(x)) => gamma_inc(s, x, tail, regularized),
            _ => f64::NAN,
        };
        path.set(record, f64_to_value(result));
    }

    Ok(())
}
