//! TOML adapter (toml crate).
//!
//! TOML has no null and requires a table at the root. The standard workload
//! satisfies both; if a workload ever stops doing so, encoding fails and the
//! harness disables this adapter instead of aborting.

use serbench_core::{Codec, CodecError, Payload, Value};

/// TOML via the `toml` crate.
pub struct TomlCodec;

impl Codec for TomlCodec {
    fn name(&self) -> &str {
        "toml"
    }

    fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
        toml::to_string(value)
            .map(Payload::Text)
            .map_err(CodecError::encode)
    }

    fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
        let Payload::Text(text) = payload else {
            return Err(CodecError::Decode("expected a text payload".into()));
        };
        toml::from_str(text).map_err(CodecError::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{compare, generate, Equivalence};

    #[test]
    fn test_toml_roundtrip() {
        let workload = generate(5);
        let payload = TomlCodec.encode(&workload).unwrap();
        let decoded = TomlCodec.decode(&payload).unwrap();
        compare(&workload, &decoded, &Equivalence::strict()).unwrap();
    }

    #[test]
    fn test_toml_null_is_unrepresentable() {
        let err = TomlCodec.encode(&Value::Null).unwrap_err();
        assert!(matches!(err, CodecError::Encode(_)));
    }

    #[test]
    fn test_toml_rejects_garbage() {
        let payload = Payload::Text("= = =".to_string());
        assert!(TomlCodec.decode(&payload).is_err());
    }
}
