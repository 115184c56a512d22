//! Handle names for one pipeline document.
//!
//! A [`NameRegistry`] is a bidirectional map between handles and names,
//! namespaced by [`ObjectCategory`]. Names are either assigned in first-touch
//! order (`DescriptorSetLayout1`, `ImmutableSampler1`, `YcbcrSampler1`, ...)
//! or supplied by the caller and kept verbatim, so `"5"` or
//! `"descriptor_layout_1"` are as valid as generated names.
//!
//! Each document gets a fresh registry; registries are never shared between
//! documents or devices.

use crate::error::{PcJsonError, Result};
use crate::model::handle::Handle;
pub use crate::model::handle::ObjectCategory;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct Namespace {
    by_handle: HashMap<Handle, String>,
    by_name: HashMap<String, Handle>,
    /// Names in insertion order
    order: Vec<String>,
    next_ordinal: u32,
}

/// Bidirectional handle/name map for one document.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    namespaces: HashMap<ObjectCategory, Namespace>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `handle`, assigning the next ordinal name on first use.
    pub fn intern(&mut self, category: ObjectCategory, handle: Handle) -> &str {
        let ns = self.namespaces.entry(category).or_default();
        if !ns.by_handle.contains_key(&handle) {
            // Skip ordinals already taken by caller-supplied names.
            let name = loop {
                ns.next_ordinal += 1;
                let candidate = format!("{}{}", category.name_prefix(), ns.next_ordinal);
                if !ns.by_name.contains_key(&candidate) {
                    break candidate;
                }
            };
            tracing::trace!("Interned {} {:?} as {}", category, handle, name);
            ns.by_name.insert(name.clone(), handle);
            ns.by_handle.insert(handle, name.clone());
            ns.order.push(name);
        }
        ns.by_handle[&handle].as_str()
    }

    /// Bind a caller-chosen name to `handle`.
    ///
    /// Re-inserting the same pair is a no-op. A name already bound to another
    /// handle, or a handle already named differently, is rejected.
    pub fn insert(
        &mut self,
        category: ObjectCategory,
        name: impl Into<String>,
        handle: Handle,
    ) -> Result<()> {
        let name = name.into();
        let ns = self.namespaces.entry(category).or_default();
        match (ns.by_name.get(&name), ns.by_handle.get(&handle)) {
            (Some(&existing), _) if existing == handle => Ok(()),
            (Some(_), _) => Err(PcJsonError::DuplicateName { category, name }),
            (None, Some(other)) => Err(PcJsonError::DuplicateName {
                category,
                name: format!("{} (handle already named \"{}\")", name, other),
            }),
            (None, None) => {
                ns.by_name.insert(name.clone(), handle);
                ns.by_handle.insert(handle, name.clone());
                ns.order.push(name);
                Ok(())
            }
        }
    }

    pub fn name_of(&self, category: ObjectCategory, handle: Handle) -> Option<&str> {
        self.namespaces
            .get(&category)
            .and_then(|ns| ns.by_handle.get(&handle))
            .map(String::as_str)
    }

    /// Name for `handle`, failing if none was assigned
    pub fn require_name(&self, category: ObjectCategory, handle: Handle) -> Result<&str> {
        self.name_of(category, handle)
            .ok_or(PcJsonError::UnnamedHandle {
                category,
                handle: handle.raw(),
            })
    }

    /// Handle bound to `name`.
    pub fn resolve(&self, category: ObjectCategory, name: &str) -> Result<Handle> {
        self.namespaces
            .get(&category)
            .and_then(|ns| ns.by_name.get(name))
            .copied()
            .ok_or_else(|| PcJsonError::UnknownReference {
                category,
                name: name.to_string(),
            })
    }

    pub fn contains(&self, category: ObjectCategory, name: &str) -> bool {
        self.resolve(category, name).is_ok()
    }

    /// Names of one category in the order they were registered
    pub fn names(&self, category: ObjectCategory) -> impl Iterator<Item = &str> {
        self.namespaces
            .get(&category)
            .into_iter()
            .flat_map(|ns| ns.order.iter().map(String::as_str))
    }

    pub fn len(&self, category: ObjectCategory) -> usize {
        self.namespaces
            .get(&category)
            .map(|ns| ns.order.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.values().all(|ns| ns.order.is_empty())
    }
}
