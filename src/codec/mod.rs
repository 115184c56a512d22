//! Structure model ↔ JSON codec.
//!
//! [`Encoder`] and [`Decoder`] carry per-call state; the encoding of each
//! member kind lives in the [`JsonField`] impls in `field`.

mod decoder;
mod encoder;
mod field;
mod location;

pub use decoder::{kind_of, Decoder};
pub use encoder::Encoder;
pub use field::{Bool32, Bytes, CountOf, JsonField, LOD_CLAMP_NONE, NULL_TOKEN};
pub use location::{Location, Message, Segment, Severity};

use crate::error::Result;
use crate::model::Structure;

/// Codec output together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    pub messages: Vec<Message>,
}

impl<T> Generated<T> {
    pub fn new(value: T, messages: Vec<Message>) -> Self {
        Self { value, messages }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Generated<U> {
        Generated {
            value: f(self.value),
            messages: self.messages,
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Warning)
    }

    /// Messages rendered one per line
    pub fn report(&self) -> String {
        self.messages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Encode one root structure as pretty-printed JSON.
///
/// Handles are written as raw values since there is no document to name
/// them.
pub fn generate_struct_json(structure: &Structure) -> Result<Generated<String>> {
    let mut enc = Encoder::new();
    let value = enc.encode(structure)?;
    let text = serde_json::to_string_pretty(&value)?;
    tracing::debug!(
        "Encoded {} ({} warnings)",
        structure.vk_name(),
        enc.messages().len()
    );
    Ok(Generated::new(text, enc.into_messages()))
}

/// Decode one root structure; the `sType` member selects the kind.
pub fn parse_struct_json(text: &str) -> Result<Generated<Structure>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let mut dec = Decoder::new();
    let structure: Structure = dec.decode(&value)?;
    tracing::debug!(
        "Decoded {} ({} warnings)",
        structure.vk_name(),
        dec.messages().len()
    );
    Ok(Generated::new(structure, dec.into_messages()))
}
