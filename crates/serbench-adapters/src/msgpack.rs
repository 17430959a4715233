//! MessagePack adapter (rmp-serde), the binary format.

use serbench_core::{Codec, CodecError, Payload, Value};

/// MessagePack via `rmp-serde`, map keys written as strings.
pub struct MsgpackCodec;

impl Codec for MsgpackCodec {
    fn name(&self) -> &str {
        "messagepack"
    }

    fn encode(&self, value: &Value) -> Result<Payload, CodecError> {
        rmp_serde::to_vec_named(value)
            .map(Payload::from)
            .map_err(CodecError::encode)
    }

    fn decode(&self, payload: &Payload) -> Result<Value, CodecError> {
        let Payload::Binary(bytes) = payload else {
            return Err(CodecError::Decode("expected a binary payload".into()));
        };
        rmp_serde::from_slice(bytes).map_err(CodecError::decode)
    }
}
