//! Ordered codec registry.
//!
//! Registration order is the report order, so iteration is deterministic and
//! matches configuration, not alphabetical or performance order. The registry
//! is sealed by handing it to the runner; nothing is added or removed after
//! orchestration begins.

use thiserror::Error;
use tracing::debug;

use crate::codec::Codec;

/// Registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A codec with this name is already registered.
    #[error("duplicate codec name: {0}")]
    DuplicateName(String),
}

/// Ordered collection of codecs for one run.
#[derive(Default)]
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a codec with the same name
    /// is already present.
    pub fn register(&mut self, codec: Box<dyn Codec>) -> Result<(), RegistryError> {
        let name = codec.name().to_string();
        if self.codecs.iter().any(|c| c.name() == name) {
            return Err(RegistryError::DuplicateName(name));
        }
        debug!(codec = %name, "Registered codec");
        self.codecs.push(codec);
        Ok(())
    }

    /// Iterate codecs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Codec> {
        self.codecs.iter().map(Box::as_ref)
    }

    /// Number of registered codecs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}
