//! Structural comparison of original and round-tripped values.
//!
//! This is the correctness judge behind verification. It walks both trees in
//! lockstep, applies the codec's declared [`Equivalence`] relaxations at
//! scalar leaves, and reports the first differing field path on mismatch.

use std::fmt;

use crate::codec::Equivalence;
use crate::value::Value;

/// A single point of disagreement between expected and decoded values.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Path to the differing node, e.g. `$.object.key-3.nested.b`.
    pub path: String,
    /// What differed.
    pub detail: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mismatch at {}: {}", self.path, self.detail)
    }
}

/// Compare a decoded value against the original under an equivalence policy.
///
/// # Errors
///
/// Returns the first [`Mismatch`] found in depth-first order.
pub fn compare(expected: &Value, actual: &Value, policy: &Equivalence) -> Result<(), Mismatch> {
    compare_at(expected, actual, policy, "$")
}

fn compare_at(
    expected: &Value,
    actual: &Value,
    policy: &Equivalence,
    path: &str,
) -> Result<(), Mismatch> {
    match (expected, actual) {
        (Value::Seq(want), Value::Seq(got)) => {
            if want.len() != got.len() {
                return Err(Mismatch {
                    path: path.to_string(),
                    detail: format!("sequence length {} != {}", got.len(), want.len()),
                });
            }
            for (i, (w, g)) in want.iter().zip(got).enumerate() {
                compare_at(w, g, policy, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        (Value::Map(want), Value::Map(got)) => {
            for key in want.keys() {
                if !got.contains_key(key) {
                    return Err(Mismatch {
                        path: format!("{path}.{key}"),
                        detail: "missing key".to_string(),
                    });
                }
            }
            for key in got.keys() {
                if !want.contains_key(key) {
                    return Err(Mismatch {
                        path: format!("{path}.{key}"),
                        detail: "unexpected key".to_string(),
                    });
                }
            }
            for (key, w) in want {
                compare_at(w, &got[key], policy, &format!("{path}.{key}"))?;
            }
            Ok(())
        }
        (want, got) => compare_scalar(want, got, policy, path),
    }
}

fn compare_scalar(
    want: &Value,
    got: &Value,
    policy: &Equivalence,
    path: &str,
) -> Result<(), Mismatch> {
    if scalar_matches(want, got, policy) {
        return Ok(());
    }
    Err(Mismatch {
        path: path.to_string(),
        detail: format!("expected {:?}, decoded {:?}", want, got),
    })
}

fn scalar_matches(want: &Value, got: &Value, policy: &Equivalence) -> bool {
    match (want, got) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => float_matches(*a, *b, policy),
        // Timestamps serialize as plain integers; self-describing decoders
        // cannot preserve the distinction.
        (Value::Timestamp(a), Value::Int(b)) | (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
        // Stringified-wrapper relaxation: parse the decoded string back to
        // the expected primitive type.
        (want, Value::Str(raw)) if policy.unwrap_stringified && want.is_scalar() => {
            unwrapped_matches(want, raw, policy)
        }
        _ => false,
    }
}

fn float_matches(a: f64, b: f64, policy: &Equivalence) -> bool {
    match policy.float_epsilon {
        Some(epsilon) => (a - b).abs() <= epsilon,
        None => a == b,
    }
}

fn unwrapped_matches(want: &Value, raw: &str, policy: &Equivalence) -> bool {
    match want {
        Value::Bool(a) => raw.parse::<bool>().is_ok_and(|b| *a == b),
        Value::Int(a) | Value::Timestamp(a) => raw.parse::<i64>().is_ok_and(|b| *a == b),
        Value::Float(a) => raw.parse::<f64>().is_ok_and(|b| float_matches(*a, b, policy)),
        Value::Str(a) => a == raw,
        Value::Null => raw.is_empty() || raw == "null",
        Value::Seq(_) | Value::Map(_) => false,
    }
}
