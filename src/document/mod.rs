//! Pipeline documents.
//!
//! A [`PipelineDocument`] is everything needed to rebuild one pipeline
//! offline: the pipeline record, its layout, the descriptor set layouts and
//! immutable samplers it references, the shader file names and the enabled
//! extensions. Objects shared through handles live in three named side
//! tables; references into a side table are handles whose raw value is the
//! entry's index plus one.

mod assembler;
pub mod uuid;

pub use assembler::{
    find_side_table_entry, generate_pipeline_json, generate_pipeline_value, parse_pipeline_json,
    parse_pipeline_value,
};
pub use uuid::{content_uuid, PipelineUuid};

use crate::codec::{kind_of, Decoder, Encoder, JsonField};
use crate::error::Result;
use crate::model::handle::{Handle, ObjectHandle};
use crate::model::{
    ComputePipelineCreateInfo, DescriptorSetLayoutCreateInfo, GraphicsPipelineCreateInfo,
    PhysicalDeviceFeatures2, Pipeline, PipelineLayout, PipelineLayoutCreateInfo, RenderPass,
    RenderPassCreateInfo, RenderPassCreateInfo2, SamplerCreateInfo,
    SamplerYcbcrConversionCreateInfo, ShaderModule, ShaderStageFlags,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A side-table entry: a structure under its document-wide name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Named<T> {
    pub name: String,
    pub value: T,
}

impl<T> Named<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Handle that refers to entry `index` of a side table
pub fn side_table_handle<H: ObjectHandle>(index: usize) -> H {
    H::from_handle(Handle(index as u64 + 1))
}

/// Where a shader stage's SPIR-V binary was written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShaderFileName {
    /// A single stage bit
    pub stage: ShaderStageFlags,
    pub filename: String,
}

impl ShaderFileName {
    pub fn new(stage: ShaderStageFlags, filename: impl Into<String>) -> Self {
        Self {
            stage,
            filename: filename.into(),
        }
    }
}

impl JsonField for ShaderFileName {
    fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
        let mut obj = Map::new();
        enc.field(&mut obj, "stage", &self.stage)?;
        enc.field(&mut obj, "filename", &self.filename)?;
        Ok(Value::Object(obj))
    }

    fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| dec.error(format!("Invalid format, found {}", kind_of(value))))?;
        Ok(Self {
            stage: dec.field(obj, "stage")?,
            filename: dec.field(obj, "filename")?,
        })
    }
}

/// Render pass of a graphics pipeline, in either API revision.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPassState {
    V1(RenderPassCreateInfo),
    V2(RenderPassCreateInfo2),
}

impl RenderPassState {
    /// Document key the render pass is stored under
    pub fn key(&self) -> &'static str {
        match self {
            RenderPassState::V1(_) => "Renderpass",
            RenderPassState::V2(_) => "Renderpass2",
        }
    }

    pub fn subpass_count(&self) -> usize {
        match self {
            RenderPassState::V1(rp) => rp.subpasses.len(),
            RenderPassState::V2(rp) => rp.subpasses.len(),
        }
    }

    pub fn attachment_count(&self) -> usize {
        match self {
            RenderPassState::V1(rp) => rp.attachments.len(),
            RenderPassState::V2(rp) => rp.attachments.len(),
        }
    }
}

impl Default for RenderPassState {
    fn default() -> Self {
        RenderPassState::V1(RenderPassCreateInfo::default())
    }
}

impl From<RenderPassCreateInfo> for RenderPassState {
    fn from(rp: RenderPassCreateInfo) -> Self {
        RenderPassState::V1(rp)
    }
}

impl From<RenderPassCreateInfo2> for RenderPassState {
    fn from(rp: RenderPassCreateInfo2) -> Self {
        RenderPassState::V2(rp)
    }
}

/// State shared by compute and graphics documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineResources {
    pub ycbcr_samplers: Vec<Named<SamplerYcbcrConversionCreateInfo>>,
    pub immutable_samplers: Vec<Named<SamplerCreateInfo>>,
    pub descriptor_set_layouts: Vec<Named<DescriptorSetLayoutCreateInfo>>,
    pub pipeline_layout: PipelineLayoutCreateInfo,
    pub shader_file_names: Vec<ShaderFileName>,
    pub device_features: Option<PhysicalDeviceFeatures2>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputePipelineState {
    pub resources: PipelineResources,
    pub pipeline: ComputePipelineCreateInfo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsPipelineState {
    pub resources: PipelineResources,
    pub pipeline: GraphicsPipelineCreateInfo,
    pub render_pass: RenderPassState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Compute(ComputePipelineState),
    Graphics(GraphicsPipelineState),
}

impl PipelineState {
    /// Document key the state is stored under
    pub fn key(&self) -> &'static str {
        match self {
            PipelineState::Compute(_) => "ComputePipelineState",
            PipelineState::Graphics(_) => "GraphicsPipelineState",
        }
    }
}

/// One captured pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDocument {
    pub state: PipelineState,
    pub enabled_extensions: Vec<String>,
    pub pipeline_uuid: PipelineUuid,
}

impl PipelineDocument {
    pub fn compute(state: ComputePipelineState) -> Self {
        Self {
            state: PipelineState::Compute(state),
            enabled_extensions: Vec::new(),
            pipeline_uuid: PipelineUuid::default(),
        }
    }

    pub fn graphics(state: GraphicsPipelineState) -> Self {
        Self {
            state: PipelineState::Graphics(state),
            enabled_extensions: Vec::new(),
            pipeline_uuid: PipelineUuid::default(),
        }
    }

    pub fn resources(&self) -> &PipelineResources {
        match &self.state {
            PipelineState::Compute(s) => &s.resources,
            PipelineState::Graphics(s) => &s.resources,
        }
    }

    pub fn resources_mut(&mut self) -> &mut PipelineResources {
        match &mut self.state {
            PipelineState::Compute(s) => &mut s.resources,
            PipelineState::Graphics(s) => &mut s.resources,
        }
    }

    pub fn is_graphics(&self) -> bool {
        matches!(self.state, PipelineState::Graphics(_))
    }

    /// Clear handles that only identify objects of the capturing process.
    ///
    /// Shader modules are replaced by [`ShaderFileName`]s and the layout and
    /// render pass bodies travel inline, so their handles carry no meaning
    /// in a document.
    pub fn eliminate_irrelevant_handles(&mut self) {
        match &mut self.state {
            PipelineState::Compute(s) => {
                s.pipeline.layout = PipelineLayout::NULL;
                s.pipeline.base_pipeline_handle = Pipeline::NULL;
                s.pipeline.stage.module = ShaderModule::NULL;
            }
            PipelineState::Graphics(s) => {
                s.pipeline.layout = PipelineLayout::NULL;
                s.pipeline.render_pass = RenderPass::NULL;
                s.pipeline.base_pipeline_handle = Pipeline::NULL;
                for stage in &mut s.pipeline.stages {
                    stage.module = ShaderModule::NULL;
                }
            }
        }
    }
}

/// How the generator fills in `PipelineUUID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UuidMode {
    /// Use the document's own UUID
    Provided,
    /// MD5 of the generated document
    #[default]
    ContentHash,
    /// MD5 of the generated document with shader file names left out
    ContentHashExcludingFilenames,
}

/// Options for [`generate_pipeline_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub uuid_mode: UuidMode,
    pub pretty: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            uuid_mode: UuidMode::ContentHash,
            pretty: true,
        }
    }
}
