//! Per-kind encoding rules.
//!
//! Every member type of the structure model implements [`JsonField`]. The
//! canonical form is what the encoder writes; decoders also accept the
//! secondary forms listed on each impl.

use super::decoder::{kind_of, Decoder};
use super::encoder::Encoder;
use super::location::Segment;
use crate::error::{PcJsonError, Result};
use crate::model::handle::{
    DescriptorSetLayout, Handle, ObjectHandle, Pipeline, PipelineLayout, RenderPass, Sampler,
    SamplerYcbcrConversion, ShaderModule,
};
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use std::fmt;

/// Token used for absent pointers and empty arrays
pub const NULL_TOKEN: &str = "NULL";

/// Value of `VK_LOD_CLAMP_NONE`
pub const LOD_CLAMP_NONE: f32 = 1000.0;

/// A member type with a JSON representation.
pub trait JsonField: Sized {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value>;
    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self>;
}

/// Element count of an array member, used to fill its count member.
pub trait CountOf {
    /// `None` when the member is absent and places no constraint on the count
    fn count_of(&self) -> Option<usize>;
}

impl<T> CountOf for Vec<T> {
    fn count_of(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> CountOf for Option<Vec<T>> {
    fn count_of(&self) -> Option<usize> {
        self.as_ref().map(Vec::len)
    }
}

impl CountOf for Bytes {
    fn count_of(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

fn is_null_token(value: &Value) -> bool {
    value.as_str() == Some(NULL_TOKEN)
}

// ==================== Integers ====================

macro_rules! unsigned_field {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl JsonField for $ty {
                fn to_json(&self, _enc: &mut Encoder<'_>) -> Result<Value> {
                    Ok(Value::from(*self))
                }

                fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
                    value
                        .as_u64()
                        .and_then(|v| <$ty>::try_from(v).ok())
                        .ok_or_else(|| dec.error(concat!("Not ", $what)))
                }
            }
        )*
    };
}

unsigned_field! {
    u8 => "an 8-bit unsigned integer",
    u16 => "a 16-bit unsigned integer",
    u32 => "a 32-bit unsigned integer",
    u64 => "a 64-bit unsigned integer",
}

impl JsonField for i32 {
    fn to_json(&self, _enc: &mut Encoder<'_>) -> Result<Value> {
        Ok(Value::from(*self))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| dec.error("Not a 32-bit signed integer"))
    }
}

// ==================== Floats ====================

/// Canonical: a number, `"NaN"` for NaN, `"INFINITY"` / `"-INFINITY"`.
/// Also accepts `"VK_LOD_CLAMP_NONE"`.
impl JsonField for f32 {
    fn to_json(&self, _enc: &mut Encoder<'_>) -> Result<Value> {
        if self.is_nan() {
            Ok(Value::from("NaN"))
        } else if self.is_infinite() {
            Ok(Value::from(if *self > 0.0 { "INFINITY" } else { "-INFINITY" }))
        } else {
            Ok(Value::from(f64::from(*self)))
        }
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(|v| v as f32)
                .ok_or_else(|| dec.error("Not a floating point number")),
            Value::String(s) => match s.as_str() {
                "NaN" => Ok(f32::NAN),
                "INFINITY" => Ok(f32::INFINITY),
                "-INFINITY" => Ok(f32::NEG_INFINITY),
                "VK_LOD_CLAMP_NONE" => Ok(LOD_CLAMP_NONE),
                other => Err(dec.error(format!("Invalid float value \"{}\"", other))),
            },
            other => Err(dec.error(format!(
                "Not a floating point number, found {}",
                kind_of(other)
            ))),
        }
    }
}

// ==================== Bool32 ====================

/// A 32-bit boolean.
///
/// Only 0 and 1 are meaningful, but any 32-bit value is stored as given.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bool32(pub u32);

impl Bool32 {
    pub const FALSE: Bool32 = Bool32(0);
    pub const TRUE: Bool32 = Bool32(1);

    #[inline]
    pub fn is_true(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool32 {
    fn from(b: bool) -> Self {
        if b {
            Bool32::TRUE
        } else {
            Bool32::FALSE
        }
    }
}

impl fmt::Debug for Bool32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "VK_FALSE"),
            1 => write!(f, "VK_TRUE"),
            n => write!(f, "Bool32({})", n),
        }
    }
}

/// Canonical: `"VK_TRUE"` / `"VK_FALSE"`. Also accepts any unsigned
/// 32-bit number, stored verbatim.
impl JsonField for Bool32 {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        match self.0 {
            0 => Ok(Value::from("VK_FALSE")),
            1 => Ok(Value::from("VK_TRUE")),
            n => {
                enc.warn(format!("Non-canonical VkBool32 value {}", n));
                Ok(Value::from(n))
            }
        }
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        match value {
            Value::String(s) if s == "VK_TRUE" => Ok(Bool32::TRUE),
            Value::String(s) if s == "VK_FALSE" => Ok(Bool32::FALSE),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Bool32)
                .ok_or_else(|| dec.error("Not a valid VkBool32 value")),
            other => Err(dec.error(format!(
                "Not a valid VkBool32 value, found {}",
                kind_of(other)
            ))),
        }
    }
}

// ==================== Strings and byte buffers ====================

impl JsonField for String {
    fn to_json(&self, _enc: &mut Encoder<'_>) -> Result<Value> {
        Ok(Value::from(self.as_str()))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| dec.error(format!("Not a string, found {}", kind_of(value))))
    }
}

/// Opaque byte buffer such as SPIR-V code or specialization data.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({} bytes)", self.0.len())
    }
}

/// Canonical: standard padded base64, `"NULL"` when empty. Also accepts an
/// array of integers in 0..=255.
impl JsonField for Bytes {
    fn to_json(&self, _enc: &mut Encoder<'_>) -> Result<Value> {
        if self.0.is_empty() {
            return Ok(Value::from(NULL_TOKEN));
        }
        Ok(Value::from(general_purpose::STANDARD.encode(&self.0)))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        match value {
            Value::String(s) if s == NULL_TOKEN => Ok(Bytes::default()),
            Value::String(s) => general_purpose::STANDARD
                .decode(s)
                .map(Bytes)
                .map_err(|e| dec.error(format!("Invalid base64 data: {}", e))),
            Value::Array(items) => {
                let mut bytes = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let byte = dec.scoped(Segment::Index(i), |dec| u8::from_json(item, dec))?;
                    bytes.push(byte);
                }
                Ok(Bytes(bytes))
            }
            other => Err(dec.error(format!(
                "Expected base64 data or a byte array, found {}",
                kind_of(other)
            ))),
        }
    }
}

// ==================== Containers ====================

/// Canonical: an array, or `"NULL"` when empty.
impl<T: JsonField> JsonField for Vec<T> {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        if self.is_empty() {
            return Ok(Value::from(NULL_TOKEN));
        }
        let mut items = Vec::with_capacity(self.len());
        for (i, item) in self.iter().enumerate() {
            items.push(enc.scoped(Segment::Index(i), |enc| item.to_json(enc))?);
        }
        Ok(Value::Array(items))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        if is_null_token(value) {
            return Ok(Vec::new());
        }
        let items = value.as_array().ok_or_else(|| {
            dec.error(format!("Expected an array or \"NULL\", found {}", kind_of(value)))
        })?;
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            out.push(dec.scoped(Segment::Index(i), |dec| T::from_json(item, dec))?);
        }
        Ok(out)
    }
}

/// Canonical: the value, or `"NULL"` when absent.
///
/// An empty `Vec` also encodes as `"NULL"`, so `Some(vec![])` reads back as
/// `None`. Models treat both as "no array".
impl<T: JsonField> JsonField for Option<T> {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        match self {
            Some(v) => enc.scoped(Segment::Pointee, |enc| v.to_json(enc)),
            None => Ok(Value::from(NULL_TOKEN)),
        }
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        if is_null_token(value) {
            return Ok(None);
        }
        dec.scoped(Segment::Pointee, |dec| T::from_json(value, dec))
            .map(Some)
    }
}

impl<T: JsonField> JsonField for Box<T> {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        (**self).to_json(enc)
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        T::from_json(value, dec).map(Box::new)
    }
}

/// Fixed-size arrays always carry exactly `N` elements.
impl<T: JsonField + Copy + Default, const N: usize> JsonField for [T; N] {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        let mut items = Vec::with_capacity(N);
        for (i, item) in self.iter().enumerate() {
            items.push(enc.scoped(Segment::Index(i), |enc| item.to_json(enc))?);
        }
        Ok(Value::Array(items))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| dec.error(format!("Expected an array, found {}", kind_of(value))))?;
        if items.len() != N {
            return Err(dec.error(format!(
                "Expected {} elements, found {}",
                N,
                items.len()
            )));
        }
        let mut out = [T::default(); N];
        for (i, item) in items.iter().enumerate() {
            out[i] = dec.scoped(Segment::Index(i), |dec| T::from_json(item, dec))?;
        }
        Ok(out)
    }
}

// ==================== Handles ====================

/// Canonical: `""` for null, the registered name when the encoder has one,
/// the raw value otherwise.
fn encode_handle<H: ObjectHandle>(handle: H, enc: &mut Encoder<'_>) -> Result<Value> {
    if handle.is_null() {
        return Ok(Value::from(""));
    }
    if let Some(name) = enc
        .registry()
        .and_then(|r| r.name_of(H::CATEGORY, handle.handle()))
    {
        return Ok(Value::from(name));
    }
    Ok(Value::from(handle.handle().raw()))
}

fn decode_handle<H: ObjectHandle>(value: &Value, dec: &mut Decoder<'_>) -> Result<H> {
    match value {
        Value::String(s) if s.is_empty() => Ok(H::null()),
        Value::String(name) => {
            let resolved = match dec.registry() {
                Some(registry) => registry.resolve(H::CATEGORY, name),
                None => Err(PcJsonError::UnknownReference {
                    category: H::CATEGORY,
                    name: name.clone(),
                }),
            };
            resolved
                .map(H::from_handle)
                .map_err(|e| e.with_context(dec.location().as_str().to_string()))
        }
        Value::Number(n) => n
            .as_u64()
            .map(|raw| H::from_handle(Handle(raw)))
            .ok_or_else(|| dec.error(format!("Invalid {} handle value", H::CATEGORY))),
        other => Err(dec.error(format!(
            "Expected a {} name or handle, found {}",
            H::CATEGORY,
            kind_of(other)
        ))),
    }
}

macro_rules! handle_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonField for $ty {
                fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
                    encode_handle(*self, enc)
                }

                fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
                    decode_handle(value, dec)
                }
            }
        )*
    };
}

handle_field!(
    DescriptorSetLayout,
    Sampler,
    SamplerYcbcrConversion,
    PipelineLayout,
    RenderPass,
    ShaderModule,
    Pipeline,
);
