//! # serbench-adapters
//!
//! Concrete [`Codec`] implementations plugged into the serbench harness.
//!
//! Each adapter is a thin wrapper over one serialization crate; the harness
//! never sees anything but the `Codec` surface. Adapters declare their
//! equivalence relaxations here, at the implementation, never by name inside
//! the harness.

use serbench_core::Codec;

pub mod json;
pub mod msgpack;
pub mod toml_fmt;
pub mod yaml;

pub use json::JsonCodec;
pub use msgpack::MsgpackCodec;
pub use toml_fmt::TomlCodec;
pub use yaml::YamlCodec;

/// The default adapter set, in report order. JSON first as the baseline.
#[must_use]
pub fn default_codecs() -> Vec<Box<dyn Codec>> {
    vec![
        Box::new(JsonCodec),
        Box::new(MsgpackCodec),
        Box::new(YamlCodec),
        Box::new(TomlCodec),
    ]
}
