//! Structure model to JSON.
//!
//! The [`Encoder`] carries the state of one encode walk: the optional name
//! registry used to turn handles into names, the current [`Location`] and the
//! warnings collected so far. Per-kind rules live in the [`JsonField`] impls;
//! the encoder only offers the member-level plumbing they share.

use super::field::JsonField;
use super::location::{Location, Message, Segment};
use crate::error::{PcJsonError, Result};
use crate::names::NameRegistry;
use serde_json::{Map, Value};

/// State of a single encode call.
#[derive(Debug, Default)]
pub struct Encoder<'r> {
    registry: Option<&'r NameRegistry>,
    location: Location,
    messages: Vec<Message>,
}

impl<'r> Encoder<'r> {
    /// Encoder that emits raw handle values
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder that emits registered handles by name
    pub fn with_registry(registry: &'r NameRegistry) -> Self {
        Self {
            registry: Some(registry),
            ..Self::default()
        }
    }

    pub fn registry(&self) -> Option<&'r NameRegistry> {
        self.registry
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Encode a value at the current location
    pub fn encode<T: JsonField>(&mut self, value: &T) -> Result<Value> {
        value.to_json(self)
    }

    /// Run `f` with `segment` appended to the current location
    pub fn scoped<R>(
        &mut self,
        segment: Segment<'_>,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.location.push(segment);
        let result = f(self);
        self.location.pop();
        result
    }

    /// Encode `value` and store it as member `key` of `obj`
    pub fn field<T: JsonField>(
        &mut self,
        obj: &mut Map<String, Value>,
        key: &str,
        value: &T,
    ) -> Result<()> {
        let encoded = self.scoped(Segment::Field(key), |enc| value.to_json(enc))?;
        obj.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Store an array length under `key`.
    ///
    /// Several arrays may share one count member (`colorAttachmentCount`
    /// covers both color and resolve attachments); their lengths must agree.
    pub fn count(
        &mut self,
        obj: &mut Map<String, Value>,
        key: &str,
        count: Option<usize>,
    ) -> Result<()> {
        let Some(count) = count else {
            return Ok(());
        };
        match obj.get(key).and_then(Value::as_u64) {
            Some(existing) if existing != count as u64 => self.scoped(Segment::Field(key), |enc| {
                Err(enc.error(format!(
                    "Count mismatch: {} is {} but the array holds {} elements",
                    key, existing, count
                )))
            }),
            Some(_) => Ok(()),
            None => {
                obj.insert(key.to_string(), Value::from(count as u64));
                Ok(())
            }
        }
    }

    /// Record a warning at the current location
    pub fn warn(&mut self, text: impl Into<String>) {
        let message = Message::warning(&self.location, text);
        tracing::debug!("{}", message);
        self.messages.push(message);
    }

    /// Build an error at the current location
    pub fn error(&self, text: impl Into<String>) -> PcJsonError {
        PcJsonError::schema(self.location.as_str(), text)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
