//! Object handles and their categories.
//!
//! Handles are opaque 64-bit identifiers owned by the API layer. Each typed
//! handle is a newtype over [`Handle`] bound to one [`ObjectCategory`], so a
//! sampler can never be stored where a descriptor set layout is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, untyped object handle. Zero is the null handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(pub u64);

impl Handle {
    pub const NULL: Handle = Handle(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Handle(NULL)")
        } else {
            write!(f, "Handle(0x{:x})", self.0)
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a logical device, as seen by the interception layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace for object names in a pipeline document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectCategory {
    DescriptorSetLayout,
    Sampler,
    SamplerYcbcrConversion,
    PipelineLayout,
    RenderPass,
    ShaderModule,
    Pipeline,
}

impl ObjectCategory {
    pub const ALL: [ObjectCategory; 7] = [
        ObjectCategory::DescriptorSetLayout,
        ObjectCategory::Sampler,
        ObjectCategory::SamplerYcbcrConversion,
        ObjectCategory::PipelineLayout,
        ObjectCategory::RenderPass,
        ObjectCategory::ShaderModule,
        ObjectCategory::Pipeline,
    ];

    /// Prefix used for automatically assigned names.
    pub fn name_prefix(self) -> &'static str {
        match self {
            ObjectCategory::DescriptorSetLayout => "DescriptorSetLayout",
            ObjectCategory::Sampler => "ImmutableSampler",
            ObjectCategory::SamplerYcbcrConversion => "YcbcrSampler",
            ObjectCategory::PipelineLayout => "PipelineLayout",
            ObjectCategory::RenderPass => "RenderPass",
            ObjectCategory::ShaderModule => "ShaderModule",
            ObjectCategory::Pipeline => "Pipeline",
        }
    }

    /// Name of the document side table holding objects of this category.
    pub fn side_table(self) -> Option<&'static str> {
        match self {
            ObjectCategory::DescriptorSetLayout => Some("DescriptorSetLayouts"),
            ObjectCategory::Sampler => Some("ImmutableSamplers"),
            ObjectCategory::SamplerYcbcrConversion => Some("YcbcrSamplers"),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectCategory::DescriptorSetLayout => "DescriptorSetLayout",
            ObjectCategory::Sampler => "Sampler",
            ObjectCategory::SamplerYcbcrConversion => "SamplerYcbcrConversion",
            ObjectCategory::PipelineLayout => "PipelineLayout",
            ObjectCategory::RenderPass => "RenderPass",
            ObjectCategory::ShaderModule => "ShaderModule",
            ObjectCategory::Pipeline => "Pipeline",
        };
        f.write_str(name)
    }
}

/// A handle type bound to one object category.
pub trait ObjectHandle: Copy + Eq + std::hash::Hash + fmt::Debug {
    const CATEGORY: ObjectCategory;

    fn from_handle(handle: Handle) -> Self;
    fn handle(self) -> Handle;

    #[inline]
    fn null() -> Self {
        Self::from_handle(Handle::NULL)
    }

    #[inline]
    fn is_null(self) -> bool {
        self.handle().is_null()
    }
}

macro_rules! typed_handle {
    ($( $(#[$meta:meta])* $name:ident => $category:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
            pub struct $name(pub Handle);

            impl $name {
                pub const NULL: $name = $name(Handle::NULL);

                pub const fn from_raw(raw: u64) -> Self {
                    $name(Handle(raw))
                }

                pub const fn is_null(self) -> bool {
                    self.0 .0 == 0
                }
            }

            impl ObjectHandle for $name {
                const CATEGORY: ObjectCategory = ObjectCategory::$category;

                #[inline]
                fn from_handle(handle: Handle) -> Self {
                    $name(handle)
                }

                #[inline]
                fn handle(self) -> Handle {
                    self.0
                }
            }

            impl From<$name> for Handle {
                fn from(h: $name) -> Handle {
                    h.0
                }
            }
        )*
    };
}

typed_handle! {
    DescriptorSetLayout => DescriptorSetLayout,
    Sampler => Sampler,
    SamplerYcbcrConversion => SamplerYcbcrConversion,
    PipelineLayout => PipelineLayout,
    /// Render pass handle; graphics pipelines reference it but documents never name it.
    RenderPass => RenderPass,
    /// Shader module handle; replaced by shader file names in documents.
    ShaderModule => ShaderModule,
    Pipeline => Pipeline,
}
