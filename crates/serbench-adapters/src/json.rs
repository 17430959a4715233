//! JSON adapter (serde_json), the baseline text format.

use serbench_core::{Codec, CodecError, Payload, Value};

/// JSON via `serde_json`.
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
        serde_json::to_string(value)
            .map(Payload::Text)
            .map_err(CodecError::encode)
    }

    fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
        let Payload::Text(text) = payload else {
            return Err(CodecError::Decode("expected a text payload".into()));
        };
        serde_json::from_str(text).map_err(CodecError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{compare, generate, Equivalence};

    #[test]
    fn test_json_roundtrip() {
        let workload = generate(10);
        let payload = JsonCodec.encode(&workload).unwrap();
        assert!(payload.len() > 0);

        let decoded = JsonCodec.decode(&payload).unwrap();
        compare(&workload, &decoded, &Equivalence::strict()).unwrap();
    }

    #[test]
    fn test_json_rejects_binary_payload() {
        let payload = Payload::from(vec![0x82u8, 0x00]);
        assert!(JsonCodec.decode(&payload).is_err());
    }

    #[test]
    fn test_json_rejects_garbage() {
        let payload = Payload::Text("{not json".to_string());
        assert!(JsonCodec.decode(&payload).is_err());
    }
}
