//! Content-derived pipeline UUIDs.
//!
//! The UUID is the MD5 digest of a walk over the generated JSON tree with
//! `PipelineUUID` left out:
//!
//! - arrays: element count as `u32` LE, then each element
//! - objects: member values in key order (keys themselves are not hashed)
//! - booleans: one byte
//! - strings: byte length as `u64` LE, then the bytes
//! - numbers: the value as `f64` LE, integers included
//!
//! Identical content therefore always yields the identical UUID, across runs
//! and processes.

use crate::error::{PcJsonError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const UUID_SIZE: usize = crate::model::device::UUID_SIZE;

/// 16-byte pipeline identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PipelineUuid(pub [u8; UUID_SIZE]);

impl PipelineUuid {
    pub const fn as_bytes(&self) -> &[u8; UUID_SIZE] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.0.iter().map(|b| Value::from(*b)).collect())
    }

    /// Read a `PipelineUUID` array; `None` unless it holds 16 bytes
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array().filter(|items| items.len() == UUID_SIZE)?;
        let mut bytes = [0u8; UUID_SIZE];
        for (byte, item) in bytes.iter_mut().zip(items) {
            *byte = item.as_u64().and_then(|v| u8::try_from(v).ok())?;
        }
        Some(PipelineUuid(bytes))
    }
}

impl From<[u8; UUID_SIZE]> for PipelineUuid {
    fn from(bytes: [u8; UUID_SIZE]) -> Self {
        PipelineUuid(bytes)
    }
}

impl fmt::Debug for PipelineUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PipelineUuid({})", self)
    }
}

/// Lowercase hex, no separators
impl fmt::Display for PipelineUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Hash a pipeline document tree.
///
/// A `PipelineUUID` member at the top level is ignored. With
/// `exclude_filenames`, the `filename` of every `ShaderFileNames` entry is
/// left out so that captures differing only in output paths agree.
pub fn content_uuid(document: &Value, exclude_filenames: bool) -> Result<PipelineUuid> {
    let mut tree = document.clone();
    if let Some(root) = tree.as_object_mut() {
        root.remove("PipelineUUID");
        if exclude_filenames {
            for state in root.values_mut() {
                strip_filenames(state);
            }
        }
    }

    let mut ctx = md5::Context::new();
    feed(&mut ctx, &tree, "<root>")?;
    let digest = ctx.compute();
    tracing::trace!("Content hash {:x}", digest);
    Ok(PipelineUuid(digest.0))
}

fn strip_filenames(state: &mut Value) {
    let Some(Value::Array(entries)) = state.get_mut("ShaderFileNames") else {
        return;
    };
    for entry in entries {
        if let Some(obj) = entry.as_object_mut() {
            obj.remove("filename");
        }
    }
}

fn feed(ctx: &mut md5::Context, value: &Value, path: &str) -> Result<()> {
    match value {
        Value::Array(items) => {
            ctx.consume((items.len() as u32).to_le_bytes());
            for item in items {
                feed(ctx, item, path)?;
            }
        }
        Value::Object(members) => {
            let mut keys: Vec<&String> = members.keys().collect();
            keys.sort();
            for key in keys {
                feed(ctx, &members[key], key)?;
            }
        }
        Value::Bool(b) => ctx.consume([u8::from(*b)]),
        Value::String(s) => {
            ctx.consume((s.len() as u64).to_le_bytes());
            ctx.consume(s.as_bytes());
        }
        Value::Number(n) => {
            let v = n
                .as_f64()
                .ok_or_else(|| PcJsonError::schema(path, "Number not representable"))?;
            ctx.consume(v.to_le_bytes());
        }
        Value::Null => return Err(PcJsonError::schema(path, "Unexpected JSON value type")),
    }
    Ok(())
}
