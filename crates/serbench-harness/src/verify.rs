//! Round-trip verification.
//!
//! Encodes a workload, decodes it back, and judges the result under the
//! codec's declared equivalence policy. Codec failures of any kind, including
//! panics, become data in the [`VerificationRecord`]; nothing here propagates
//! past the runner.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serbench_core::{compare, Codec, CodecError, Value};
use tracing::{debug, warn};

use crate::report::VerificationRecord;

/// Run a codec call, converting errors and panics into a message.
///
/// Codecs are third-party code; a panicking one must not take the harness
/// down with it.
pub(crate) fn guarded<T>(f: impl FnOnce() -> Result<T, CodecError>) -> Result<T, String> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.to_string()),
        Err(panic) => Err(format!("panicked: {}", panic_message(panic.as_ref()))),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

/// Verify one codec against one tier's workload.
///
/// The decoded value is compared against the exact instance that was encoded,
/// so non-deterministic leaves generated per call cannot cause false
/// mismatches.
pub fn verify(codec: &dyn Codec, workload: &Value, tier: usize) -> VerificationRecord {
    let name = codec.name().to_string();

    let payload = match guarded(|| codec.encode(workload)) {
        Ok(payload) => payload,
        Err(message) => {
            warn!(codec = %name, tier, %message, "Encode failed");
            return failed(name, tier, None, message);
        }
    };
    let payload_bytes = payload.len();

    let decoded = match guarded(|| codec.decode(&payload)) {
        Ok(decoded) => decoded,
        Err(message) => {
            warn!(codec = %name, tier, %message, "Decode failed");
            return failed(name, tier, Some(payload_bytes), message);
        }
    };

    if let Err(mismatch) = compare(workload, &decoded, &codec.equivalence()) {
        warn!(codec = %name, tier, %mismatch, "Round-trip mismatch");
        return failed(name, tier, Some(payload_bytes), mismatch.to_string());
    }

    debug!(codec = %name, tier, payload_bytes, "Verified");
    VerificationRecord {
        codec: name,
        tier,
        live: true,
        payload_bytes: Some(payload_bytes),
        error: None,
    }
}

fn failed(
    codec: String,
    tier: usize,
    payload_bytes: Option<usize>,
    error: String,
) -> VerificationRecord {
    VerificationRecord {
        codec,
        tier,
        live: false,
        payload_bytes,
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{generate, Equivalence, Payload};

    struct JsonRoundtrip;

    impl Codec for JsonRoundtrip {
        fn name(&self) -> &str {
            "json-test"
        }
        fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
            serde_json::to_string(value)
                .map(Payload::Text)
                .map_err(CodecError::encode)
        }
        fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
            let Payload::Text(text) = payload else {
                return Err(CodecError::Decode("expected text payload".into()));
            };
            serde_json::from_str(text).map_err(CodecError::decode)
        }
    }

    struct BrokenDecode;

    impl Codec for BrokenDecode {
        fn name(&self) -> &str {
            "broken"
        }
        fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
            JsonRoundtrip.encode(value)
        }
        fn decode(&self, _payload: &Payload) -> Result<Value, CodecError> {
            Err(CodecError::Decode("refused".into()))
        }
    }

    struct PanickingEncode;

    impl Codec for PanickingEncode {
        fn name(&self) -> &str {
            "panicker"
        }
        fn encode(&self, _value: &Value) -> Result<Payload, CodecError> {
            panic!("boom");
        }
        fn decode(&self, _payload: &Payload) -> Result<Value, CodecError> {
            Ok(Value::Null)
        }
    }

    struct LossyFloats;

    impl Codec for LossyFloats {
        fn name(&self) -> &str {
            "lossy"
        }
        fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
            JsonRoundtrip.encode(value)
        }
        fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
            // Perturb every float slightly on the way back.
            fn perturb(value: Value) -> Value {
                match value {
                    Value::Float(f) => Value::Float(f + 1e-12),
                    Value::Seq(items) => Value::Seq(items.into_iter().map(perturb).collect()),
                    Value::Map(m) => {
                        Value::Map(m.into_iter().map(|(k, v)| (k, perturb(v))).collect())
                    }
                    other => other,
                }
            }
            JsonRoundtrip.decode(payload).map(perturb)
        }
        fn equivalence(&self) -> Equivalence {
            Equivalence::strict().float_epsilon(1e-9)
        }
    }

    #[test]
    fn test_roundtrip_codec_is_live() {
        let workload = generate(0);
        let record = verify(&JsonRoundtrip, &workload, 0);

        assert!(record.live);
        assert!(record.payload_bytes.unwrap() > 0);
        assert!(record.error.is_none());
    }

    #[test]
    fn test_verify_is_idempotent_for_pure_codec() {
        let workload = generate(5);
        let first = verify(&JsonRoundtrip, &workload, 5);
        let second = verify(&JsonRoundtrip, &workload, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_failure_keeps_payload_size() {
        let workload = generate(3);
        let record = verify(&BrokenDecode, &workload, 3);

        assert!(!record.live);
        assert!(record.payload_bytes.unwrap() > 0);
        assert!(record.error.as_deref().unwrap().contains("refused"));
    }

    #[test]
    fn test_panic_is_captured() {
        let workload = generate(0);
        let record = verify(&PanickingEncode, &workload, 0);

        assert!(!record.live);
        assert_eq!(record.payload_bytes, None);
        assert!(record.error.as_deref().unwrap().contains("panicked: boom"));
    }

    #[test]
    fn test_declared_tolerance_accepts_lossy_floats() {
        let workload = generate(2);
        let record = verify(&LossyFloats, &workload, 2);
        assert!(record.live, "tolerance should absorb the perturbation: {:?}", record.error);
    }

    #[test]
    fn test_mismatch_names_field_path() {
        struct DropsBoolean;
        impl Codec for DropsBoolean {
            fn name(&self) -> &str {
                "drops-bool"
            }
            fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
                JsonRoundtrip.encode(value)
            }
            fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
                let mut decoded = JsonRoundtrip.decode(payload)?;
                if let Value::Map(root) = &mut decoded {
                    root.insert("boolean".to_string(), Value::Bool(false));
                }
                Ok(decoded)
            }
        }

        let record = verify(&DropsBoolean, &generate(0), 0);
        assert!(!record.live);
        assert!(record.error.as_deref().unwrap().contains("$.boolean"));
    }
}
