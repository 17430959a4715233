//! # serbench-core
//!
//! Core types and contracts for the serbench serialization harness.
//!
//! This crate provides the fundamental building blocks:
//!
//! - **Value** - Format-neutral data tree exchanged with codecs
//! - **Workload** - Size-parameterized synthetic data generator
//! - **Codec** - Uniform encode/decode contract over one serialization engine
//! - **Registry** - Ordered, duplicate-checked codec collection
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Workload   │────▶│   Codec     │────▶│  Payload    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Registry   │
//!                     └─────────────┘
//! ```

pub mod codec;
pub mod compare;
pub mod registry;
pub mod value;
pub mod workload;

pub use codec::{Codec, CodecError, Equivalence, Payload};
pub use compare::{compare, Mismatch};
pub use registry::{Registry, RegistryError};
pub use value::Value;
pub use workload::generate;
