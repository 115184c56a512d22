//! The structure model.
//!
//! One Rust type per API structure, generated by the macros in `macros`.
//! Extensible structures carry their `pNext` chain as a
//! [`Chain`](chain::Chain); root structures are gathered in
//! [`Structure`](structure::Structure).

#[macro_use]
mod macros;

pub mod chain;
pub mod descriptor;
pub mod device;
pub mod enums;
pub mod flags;
pub mod format;
pub mod handle;
pub mod pipeline;
pub mod render_pass;
pub mod sampler;
pub mod structure;

pub use crate::codec::{Bool32, Bytes};
pub use chain::{Chain, Extension};
pub use descriptor::*;
pub use device::*;
pub use enums::*;
pub use flags::*;
pub use format::Format;
pub use handle::{
    DescriptorSetLayout, DeviceId, Handle, ObjectCategory, ObjectHandle, Pipeline, PipelineLayout,
    RenderPass, Sampler, SamplerYcbcrConversion, ShaderModule,
};
pub use pipeline::*;
pub use render_pass::*;
pub use sampler::*;
pub use structure::Structure;

/// A structure with a C API name
pub trait VkStructure {
    const VK_NAME: &'static str;
}

/// A structure identified by an `sType` discriminant
pub trait Tagged: VkStructure {
    const STRUCTURE_TYPE: StructureType;
}
