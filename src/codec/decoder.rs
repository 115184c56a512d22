//! JSON to structure model.
//!
//! The [`Decoder`] mirrors the [`Encoder`](super::Encoder): it owns the
//! location of the current walk and the warnings raised so far, and resolves
//! handle names through an optional [`NameRegistry`]. Decoded values own all
//! of their storage; nothing borrows from the input tree.

use super::field::JsonField;
use super::location::{Location, Message, Segment};
use crate::error::{PcJsonError, Result};
use crate::names::NameRegistry;
use serde_json::{Map, Value};

/// State of a single decode call.
#[derive(Debug, Default)]
pub struct Decoder<'r> {
    registry: Option<&'r NameRegistry>,
    location: Location,
    messages: Vec<Message>,
}

impl<'r> Decoder<'r> {
    /// Decoder that only accepts raw handle values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder that also resolves handle names
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

    /// Decode a value at the current location
    pub fn decode<T: JsonField>(&mut self, value: &Value) -> Result<T> {
        T::from_json(value, self)
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

    /// View `value` as an object
    pub fn object<'v>(&self, value: &'v Value) -> Result<&'v Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| self.error(format!("Expected an object, found {}", kind_of(value))))
    }

    /// Look up a required member
    pub fn member<'v>(&mut self, obj: &'v Map<String, Value>, key: &str) -> Result<&'v Value> {
        match obj.get(key) {
            Some(v) => Ok(v),
            None => self.scoped(Segment::Field(key), |dec| {
                Err(dec.error("Missing required field"))
            }),
        }
    }

    /// Decode required member `key` of `obj`
    pub fn field<T: JsonField>(&mut self, obj: &Map<String, Value>, key: &str) -> Result<T> {
        let value = self.member(obj, key)?;
        self.scoped(Segment::Field(key), |dec| T::from_json(value, dec))
    }

    /// Check that the count member `key` matches a decoded array length
    pub fn check_count(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        count: Option<usize>,
    ) -> Result<()> {
        let Some(count) = count else {
            return Ok(());
        };
        let declared = self.member(obj, key)?;
        self.scoped(Segment::Field(key), |dec| match declared.as_u64() {
            Some(n) if n == count as u64 => Ok(()),
            Some(n) => Err(dec.error(format!(
                "Count mismatch: {} is {} but the array holds {} elements",
                key, n, count
            ))),
            None => Err(dec.error("Not an unsigned integer count")),
        })
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

/// Short description of a JSON value's type for error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_location() {
        let mut dec = Decoder::new();
        let value = json!({ "offset": 0 });
        let obj = value.as_object().unwrap();
        let err = dec.field::<u32>(obj, "size").unwrap_err();
        assert_eq!(err.to_string(), "size: Missing required field");
    }

    #[test]
    fn test_count_mismatch() {
        let mut dec = Decoder::new();
        let value = json!({ "bindingCount": 3 });
        let obj = value.as_object().unwrap();
        dec.check_count(obj, "bindingCount", Some(3)).unwrap();
        dec.check_count(obj, "bindingCount", None).unwrap();
        let err = dec.check_count(obj, "bindingCount", Some(2)).unwrap_err();
        assert!(err.to_string().starts_with("bindingCount: Count mismatch"));
    }

    #[test]
    fn test_object_type_error() {
        let dec = Decoder::new();
        let err = dec.object(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("found an array"));
    }
}
