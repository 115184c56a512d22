//! Pipeline creation structures.

use super::enums::{
    BlendFactor, BlendOp, CompareOp, DiscardRectangleModeEXT, DynamicState, FrontFace, LogicOp,
    PolygonMode, PrimitiveTopology, StencilOp, VertexInputRate,
};
use super::flags::{
    ColorComponentFlags, CullModeFlags, PipelineCreateFlags, PipelineShaderStageCreateFlags,
    ReservedFlags, SampleCountFlags, ShaderStageFlags,
};
use super::format::Format;
use super::handle::{Pipeline, PipelineLayout, RenderPass, ShaderModule};
use crate::codec::{Bool32, Bytes};

// ==================== Geometry ====================

vk_struct! {
    pub struct Offset2D("VkOffset2D") {
        "x" => x: i32,
        "y" => y: i32,
    }
}

vk_struct! {
    pub struct Extent2D("VkExtent2D") {
        "width" => width: u32,
        "height" => height: u32,
    }
}

vk_struct! {
    pub struct Rect2D("VkRect2D") {
        "offset" => offset: Offset2D,
        "extent" => extent: Extent2D,
    }
}

vk_struct! {
    pub struct Viewport("VkViewport") {
        "x" => x: f32,
        "y" => y: f32,
        "width" => width: f32,
        "height" => height: f32,
        "minDepth" => min_depth: f32,
        "maxDepth" => max_depth: f32,
    }
}

// ==================== Shader stages ====================

vk_struct! {
    /// SPIR-V module; `codeSize` is in bytes
    pub struct ShaderModuleCreateInfo("VkShaderModuleCreateInfo", SHADER_MODULE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        ["codeSize"] "pCode" => code: Bytes,
    }
}

vk_struct! {
    pub struct SpecializationMapEntry("VkSpecializationMapEntry") {
        "constantID" => constant_id: u32,
        "offset" => offset: u32,
        "size" => size: u64,
    }
}

vk_struct! {
    /// Specialization constants of one stage
    pub struct SpecializationInfo("VkSpecializationInfo") {
        ["mapEntryCount"] "pMapEntries" => map_entries: Vec<SpecializationMapEntry>,
        /// Raw constant data, indexed by the map entries
        ["dataSize"] "pData" => data: Bytes,
    }
}

vk_struct! {
    pub struct PipelineShaderStageCreateInfo("VkPipelineShaderStageCreateInfo", PIPELINE_SHADER_STAGE_CREATE_INFO) chain {
        "flags" => flags: PipelineShaderStageCreateFlags,
        "stage" => stage: ShaderStageFlags,
        /// Not meaningful in a pipeline document; written as `""`
        "module" => module: ShaderModule,
        /// Entry point name
        "pName" => name: String,
        "pSpecializationInfo" => specialization_info: Option<Box<SpecializationInfo>>,
    }
}

vk_struct! {
    pub struct PipelineShaderStageRequiredSubgroupSizeCreateInfo(
        "VkPipelineShaderStageRequiredSubgroupSizeCreateInfo",
        PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO
    ) {
        "requiredSubgroupSize" => required_subgroup_size: u32,
    }
}

// ==================== Fixed-function state ====================

vk_struct! {
    pub struct VertexInputBindingDescription("VkVertexInputBindingDescription") {
        "binding" => binding: u32,
        "stride" => stride: u32,
        "inputRate" => input_rate: VertexInputRate,
    }
}

vk_struct! {
    pub struct VertexInputAttributeDescription("VkVertexInputAttributeDescription") {
        "location" => location: u32,
        "binding" => binding: u32,
        "format" => format: Format,
        "offset" => offset: u32,
    }
}

vk_struct! {
    pub struct PipelineVertexInputStateCreateInfo("VkPipelineVertexInputStateCreateInfo", PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        ["vertexBindingDescriptionCount"] "pVertexBindingDescriptions" => vertex_binding_descriptions: Vec<VertexInputBindingDescription>,
        ["vertexAttributeDescriptionCount"] "pVertexAttributeDescriptions" => vertex_attribute_descriptions: Vec<VertexInputAttributeDescription>,
    }
}

vk_struct! {
    pub struct PipelineInputAssemblyStateCreateInfo("VkPipelineInputAssemblyStateCreateInfo", PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "topology" => topology: PrimitiveTopology,
        "primitiveRestartEnable" => primitive_restart_enable: Bool32,
    }
}

vk_struct! {
    pub struct PipelineTessellationStateCreateInfo("VkPipelineTessellationStateCreateInfo", PIPELINE_TESSELLATION_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "patchControlPoints" => patch_control_points: u32,
    }
}

vk_struct! {
    /// Viewports and scissors.
    ///
    /// The counts are kept explicitly: with dynamic viewport state the
    /// arrays are absent while the counts still matter.
    pub struct PipelineViewportStateCreateInfo("VkPipelineViewportStateCreateInfo", PIPELINE_VIEWPORT_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "viewportCount" => viewport_count: u32,
        ["viewportCount"] "pViewports" => viewports: Option<Vec<Viewport>>,
        "scissorCount" => scissor_count: u32,
        ["scissorCount"] "pScissors" => scissors: Option<Vec<Rect2D>>,
    }
}

vk_struct! {
    pub struct PipelineRasterizationStateCreateInfo("VkPipelineRasterizationStateCreateInfo", PIPELINE_RASTERIZATION_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "depthClampEnable" => depth_clamp_enable: Bool32,
        "rasterizerDiscardEnable" => rasterizer_discard_enable: Bool32,
        "polygonMode" => polygon_mode: PolygonMode,
        "cullMode" => cull_mode: CullModeFlags,
        "frontFace" => front_face: FrontFace,
        "depthBiasEnable" => depth_bias_enable: Bool32,
        "depthBiasConstantFactor" => depth_bias_constant_factor: f32,
        "depthBiasClamp" => depth_bias_clamp: f32,
        "depthBiasSlopeFactor" => depth_bias_slope_factor: f32,
        "lineWidth" => line_width: f32,
    }
}

vk_struct! {
    pub struct PipelineMultisampleStateCreateInfo("VkPipelineMultisampleStateCreateInfo", PIPELINE_MULTISAMPLE_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "rasterizationSamples" => rasterization_samples: SampleCountFlags,
        "sampleShadingEnable" => sample_shading_enable: Bool32,
        "minSampleShading" => min_sample_shading: f32,
        /// One word per 32 samples
        "pSampleMask" => sample_mask: Option<Vec<u32>>,
        "alphaToCoverageEnable" => alpha_to_coverage_enable: Bool32,
        "alphaToOneEnable" => alpha_to_one_enable: Bool32,
    }
}

vk_struct! {
    pub struct StencilOpState("VkStencilOpState") {
        "failOp" => fail_op: StencilOp,
        "passOp" => pass_op: StencilOp,
        "depthFailOp" => depth_fail_op: StencilOp,
        "compareOp" => compare_op: CompareOp,
        "compareMask" => compare_mask: u32,
        "writeMask" => write_mask: u32,
        "reference" => reference: u32,
    }
}

vk_struct! {
    pub struct PipelineDepthStencilStateCreateInfo("VkPipelineDepthStencilStateCreateInfo", PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "depthTestEnable" => depth_test_enable: Bool32,
        "depthWriteEnable" => depth_write_enable: Bool32,
        "depthCompareOp" => depth_compare_op: CompareOp,
        "depthBoundsTestEnable" => depth_bounds_test_enable: Bool32,
        "stencilTestEnable" => stencil_test_enable: Bool32,
        "front" => front: StencilOpState,
        "back" => back: StencilOpState,
        "minDepthBounds" => min_depth_bounds: f32,
        "maxDepthBounds" => max_depth_bounds: f32,
    }
}

vk_struct! {
    pub struct PipelineColorBlendAttachmentState("VkPipelineColorBlendAttachmentState") {
        "blendEnable" => blend_enable: Bool32,
        "srcColorBlendFactor" => src_color_blend_factor: BlendFactor,
        "dstColorBlendFactor" => dst_color_blend_factor: BlendFactor,
        "colorBlendOp" => color_blend_op: BlendOp,
        "srcAlphaBlendFactor" => src_alpha_blend_factor: BlendFactor,
        "dstAlphaBlendFactor" => dst_alpha_blend_factor: BlendFactor,
        "alphaBlendOp" => alpha_blend_op: BlendOp,
        "colorWriteMask" => color_write_mask: ColorComponentFlags,
    }
}

vk_struct! {
    pub struct PipelineColorBlendStateCreateInfo("VkPipelineColorBlendStateCreateInfo", PIPELINE_COLOR_BLEND_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        "logicOpEnable" => logic_op_enable: Bool32,
        "logicOp" => logic_op: LogicOp,
        ["attachmentCount"] "pAttachments" => attachments: Vec<PipelineColorBlendAttachmentState>,
        "blendConstants" => blend_constants: [f32; 4],
    }
}

vk_struct! {
    pub struct PipelineDynamicStateCreateInfo("VkPipelineDynamicStateCreateInfo", PIPELINE_DYNAMIC_STATE_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        ["dynamicStateCount"] "pDynamicStates" => dynamic_states: Vec<DynamicState>,
    }
}

vk_struct! {
    pub struct PipelineDiscardRectangleStateCreateInfoEXT(
        "VkPipelineDiscardRectangleStateCreateInfoEXT",
        PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT
    ) {
        "flags" => flags: ReservedFlags,
        "discardRectangleMode" => discard_rectangle_mode: DiscardRectangleModeEXT,
        ["discardRectangleCount"] "pDiscardRectangles" => discard_rectangles: Vec<Rect2D>,
    }
}

// ==================== Pipelines ====================

vk_struct! {
    /// Creation record of a graphics pipeline.
    ///
    /// Every state block is optional; absent blocks encode as `"NULL"`.
    pub struct GraphicsPipelineCreateInfo("VkGraphicsPipelineCreateInfo", GRAPHICS_PIPELINE_CREATE_INFO) chain {
        "flags" => flags: PipelineCreateFlags,
        ["stageCount"] "pStages" => stages: Vec<PipelineShaderStageCreateInfo>,
        "pVertexInputState" => vertex_input_state: Option<Box<PipelineVertexInputStateCreateInfo>>,
        "pInputAssemblyState" => input_assembly_state: Option<Box<PipelineInputAssemblyStateCreateInfo>>,
        "pTessellationState" => tessellation_state: Option<Box<PipelineTessellationStateCreateInfo>>,
        "pViewportState" => viewport_state: Option<Box<PipelineViewportStateCreateInfo>>,
        "pRasterizationState" => rasterization_state: Option<Box<PipelineRasterizationStateCreateInfo>>,
        "pMultisampleState" => multisample_state: Option<Box<PipelineMultisampleStateCreateInfo>>,
        "pDepthStencilState" => depth_stencil_state: Option<Box<PipelineDepthStencilStateCreateInfo>>,
        "pColorBlendState" => color_blend_state: Option<Box<PipelineColorBlendStateCreateInfo>>,
        "pDynamicState" => dynamic_state: Option<Box<PipelineDynamicStateCreateInfo>>,
        "layout" => layout: PipelineLayout,
        "renderPass" => render_pass: RenderPass,
        "subpass" => subpass: u32,
        "basePipelineHandle" => base_pipeline_handle: Pipeline,
        "basePipelineIndex" => base_pipeline_index: i32,
    }
}

vk_struct! {
    pub struct ComputePipelineCreateInfo("VkComputePipelineCreateInfo", COMPUTE_PIPELINE_CREATE_INFO) chain {
        "flags" => flags: PipelineCreateFlags,
        "stage" => stage: PipelineShaderStageCreateInfo,
        "layout" => layout: PipelineLayout,
        "basePipelineHandle" => base_pipeline_handle: Pipeline,
        "basePipelineIndex" => base_pipeline_index: i32,
    }
}

impl GraphicsPipelineCreateInfo {
    /// Union of the stages of all shader stages
    pub fn stage_flags(&self) -> ShaderStageFlags {
        self.stages
            .iter()
            .fold(ShaderStageFlags::empty(), |acc, s| acc | s.stage)
    }
}
