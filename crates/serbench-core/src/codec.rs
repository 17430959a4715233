//! Codec contract: the uniform wrapper around one serialization engine.
//!
//! The harness never looks inside a codec. Everything it needs is on this
//! trait: a unique name, an encode/decode pair over [`Value`], and the
//! equivalence policy the verification step should apply to round-tripped
//! data.

use bytes::Bytes;
use thiserror::Error;

use crate::value::Value;

/// Errors surfaced by codec implementations.
///
/// Concrete codecs wrap their library's error types into these variants;
/// the harness only ever records the message.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encoding failed.
    #[error("encode failed: {0}")]
    Encode(String),

    /// Decoding failed.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The codec cannot represent part of the workload.
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl CodecError {
    /// Wrap an arbitrary encode-side error.
    pub fn encode(err: impl std::fmt::Display) -> Self {
        CodecError::Encode(err.to_string())
    }

    /// Wrap an arbitrary decode-side error.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        CodecError::Decode(err.to_string())
    }
}

/// An encoded payload, either text or binary.
///
/// The size metric reported for a payload is its byte length; for text this
/// is the UTF-8 encoded length, not the character count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Text output (JSON, YAML, TOML, ...).
    Text(String),
    /// Binary output (MessagePack, ...).
    Binary(Bytes),
}

impl Payload {
    /// Byte length of the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Payload::Text(s) => s.len(),
            Payload::Binary(b) => b.len(),
        }
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Binary(Bytes::from(b))
    }
}

/// Equivalence policy a codec declares for its round-tripped values.
///
/// Strict structural equality is the default. Codecs with lossy or
/// type-mutating representations relax it here, at registration time; the
/// verification step never branches on codec names.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equivalence {
    /// Accept float leaves whose absolute difference is within this bound.
    pub float_epsilon: Option<f64>,
    /// Decoded scalar leaves may come back stringified; parse them back to
    /// their primitive type before comparing.
    pub unwrap_stringified: bool,
}

impl Equivalence {
    /// Strict structural deep equality.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Allow float leaves to differ by up to `epsilon` (absolute).
    #[must_use]
    pub fn float_epsilon(mut self, epsilon: f64) -> Self {
        self.float_epsilon = Some(epsilon);
        self
    }

    /// Unwrap stringified scalar leaves before comparing.
    #[must_use]
    pub fn unwrap_stringified(mut self) -> Self {
        self.unwrap_stringified = true;
        self
    }
}

/// A serialization engine behind a uniform encode/decode surface.
///
/// Implementations must be pure from the harness's perspective: `encode` and
/// `decode` may not mutate shared state, and the same input must be accepted
/// on every call within a run.
pub trait Codec {
    /// Unique codec name within a run; also the report label.
    fn name(&self) -> &str;

    /// Encode a value into a payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented or encoding fails.
    fn encode(&self, value: &Value) -> Result<Payload, CodecError>;

    /// Decode a payload back into a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is invalid for this codec.
    fn decode(&self, payload: &Payload) -> Result<Value, CodecError>;

    /// Equivalence policy applied when verifying this codec's round trips.
    fn equivalence(&self) -> Equivalence {
        Equivalence::strict()
    }
}
