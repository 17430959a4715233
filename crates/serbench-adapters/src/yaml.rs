//! YAML adapter (serde_yaml).

use serbench_core::{Codec, CodecError, Equivalence, Payload, Value};

/// YAML via `serde_yaml`.
///
/// YAML float formatting is shortest-roundtrip, but a small absolute
/// tolerance is declared anyway to stay robust across `serde_yaml` releases
/// that changed float emission.
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn name(&self) -> &str {
        "yaml"
    }

    fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
        serde_yaml::to_string(value)
            .map(Payload::Text)
            .map_err(CodecError::encode)
    }

    fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
        let Payload::Text(text) = payload else {
            return Err(CodecError::Decode("expected a text payload".into()));
        };
        serde_yaml::from_str(text).map_err(CodecError::decode)
    }

    fn equivalence(&self) -> Equivalence {
        Equivalence::strict().float_epsilon(1e-9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serbench_core::{compare, generate};

    #[test]
    fn test_yaml_roundtrip() {
        let workload = generate(10);
        let payload = YamlCodec.encode(&workload).unwrap();
        let decoded = YamlCodec.decode(&payload).unwrap();
        compare(&workload, &decoded, &YamlCodec.equivalence()).unwrap();
    }

    #[test]
    fn test_yaml_empty_containers() {
        let workload = generate(0);
        let payload = YamlCodec.encode(&workload).unwrap();
        let decoded = YamlCodec.decode(&payload).unwrap();
        compare(&workload, &decoded, &YamlCodec.equivalence()).unwrap();
    }

    #[test]
    fn test_yaml_rejects_garbage() {
        let payload = Payload::Text(": : :".to_string());
        assert!(YamlCodec.decode(&payload).is_err());
    }
}
