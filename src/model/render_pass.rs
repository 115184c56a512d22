//! Render passes, in both the core and the `2` flavor.

use super::enums::{AttachmentLoadOp, AttachmentStoreOp, ImageLayout, PipelineBindPoint};
use super::flags::{
    AccessFlags, AttachmentDescriptionFlags, DependencyFlags, ImageAspectFlags,
    PipelineStageFlags, ReservedFlags, ResolveModeFlags, SampleCountFlags,
};
use super::format::Format;
use super::pipeline::Extent2D;

/// Subpass index standing for everything outside the render pass
pub const SUBPASS_EXTERNAL: u32 = u32::MAX;

/// Attachment index for an unused attachment slot
pub const ATTACHMENT_UNUSED: u32 = u32::MAX;

vk_struct! {
    pub struct AttachmentDescription("VkAttachmentDescription") {
        "flags" => flags: AttachmentDescriptionFlags,
        "format" => format: Format,
        "samples" => samples: SampleCountFlags,
        "loadOp" => load_op: AttachmentLoadOp,
        "storeOp" => store_op: AttachmentStoreOp,
        "stencilLoadOp" => stencil_load_op: AttachmentLoadOp,
        "stencilStoreOp" => stencil_store_op: AttachmentStoreOp,
        "initialLayout" => initial_layout: ImageLayout,
        "finalLayout" => final_layout: ImageLayout,
    }
}

vk_struct! {
    pub struct AttachmentReference("VkAttachmentReference") {
        "attachment" => attachment: u32,
        "layout" => layout: ImageLayout,
    }
}

vk_struct! {
    /// One subpass.
    ///
    /// Resolve attachments, when present, pair up with the color
    /// attachments and share their count.
    pub struct SubpassDescription("VkSubpassDescription") {
        "flags" => flags: ReservedFlags,
        "pipelineBindPoint" => pipeline_bind_point: PipelineBindPoint,
        ["inputAttachmentCount"] "pInputAttachments" => input_attachments: Vec<AttachmentReference>,
        ["colorAttachmentCount"] "pColorAttachments" => color_attachments: Vec<AttachmentReference>,
        ["colorAttachmentCount"] "pResolveAttachments" => resolve_attachments: Option<Vec<AttachmentReference>>,
        "pDepthStencilAttachment" => depth_stencil_attachment: Option<Box<AttachmentReference>>,
        ["preserveAttachmentCount"] "pPreserveAttachments" => preserve_attachments: Vec<u32>,
    }
}

vk_struct! {
    pub struct SubpassDependency("VkSubpassDependency") {
        "srcSubpass" => src_subpass: u32,
        "dstSubpass" => dst_subpass: u32,
        "srcStageMask" => src_stage_mask: PipelineStageFlags,
        "dstStageMask" => dst_stage_mask: PipelineStageFlags,
        "srcAccessMask" => src_access_mask: AccessFlags,
        "dstAccessMask" => dst_access_mask: AccessFlags,
        "dependencyFlags" => dependency_flags: DependencyFlags,
    }
}

vk_struct! {
    pub struct RenderPassCreateInfo("VkRenderPassCreateInfo", RENDER_PASS_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        ["attachmentCount"] "pAttachments" => attachments: Vec<AttachmentDescription>,
        ["subpassCount"] "pSubpasses" => subpasses: Vec<SubpassDescription>,
        ["dependencyCount"] "pDependencies" => dependencies: Vec<SubpassDependency>,
    }
}

vk_struct! {
    pub struct InputAttachmentAspectReference("VkInputAttachmentAspectReference") {
        "subpass" => subpass: u32,
        "inputAttachmentIndex" => input_attachment_index: u32,
        "aspectMask" => aspect_mask: ImageAspectFlags,
    }
}

vk_struct! {
    pub struct RenderPassInputAttachmentAspectCreateInfo(
        "VkRenderPassInputAttachmentAspectCreateInfo",
        RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO
    ) {
        ["aspectReferenceCount"] "pAspectReferences" => aspect_references: Vec<InputAttachmentAspectReference>,
    }
}

vk_struct! {
    pub struct RenderPassMultiviewCreateInfo("VkRenderPassMultiviewCreateInfo", RENDER_PASS_MULTIVIEW_CREATE_INFO) {
        ["subpassCount"] "pViewMasks" => view_masks: Vec<u32>,
        ["dependencyCount"] "pViewOffsets" => view_offsets: Vec<i32>,
        ["correlationMaskCount"] "pCorrelationMasks" => correlation_masks: Vec<u32>,
    }
}

// ==================== Render pass 2 ====================

vk_struct! {
    pub struct AttachmentDescription2("VkAttachmentDescription2", ATTACHMENT_DESCRIPTION_2) chain {
        "flags" => flags: AttachmentDescriptionFlags,
        "format" => format: Format,
        "samples" => samples: SampleCountFlags,
        "loadOp" => load_op: AttachmentLoadOp,
        "storeOp" => store_op: AttachmentStoreOp,
        "stencilLoadOp" => stencil_load_op: AttachmentLoadOp,
        "stencilStoreOp" => stencil_store_op: AttachmentStoreOp,
        "initialLayout" => initial_layout: ImageLayout,
        "finalLayout" => final_layout: ImageLayout,
    }
}

vk_struct! {
    pub struct AttachmentReference2("VkAttachmentReference2", ATTACHMENT_REFERENCE_2) chain {
        "attachment" => attachment: u32,
        "layout" => layout: ImageLayout,
        "aspectMask" => aspect_mask: ImageAspectFlags,
    }
}

vk_struct! {
    pub struct SubpassDescription2("VkSubpassDescription2", SUBPASS_DESCRIPTION_2) chain {
        "flags" => flags: ReservedFlags,
        "pipelineBindPoint" => pipeline_bind_point: PipelineBindPoint,
        "viewMask" => view_mask: u32,
        ["inputAttachmentCount"] "pInputAttachments" => input_attachments: Vec<AttachmentReference2>,
        ["colorAttachmentCount"] "pColorAttachments" => color_attachments: Vec<AttachmentReference2>,
        ["colorAttachmentCount"] "pResolveAttachments" => resolve_attachments: Option<Vec<AttachmentReference2>>,
        "pDepthStencilAttachment" => depth_stencil_attachment: Option<Box<AttachmentReference2>>,
        ["preserveAttachmentCount"] "pPreserveAttachments" => preserve_attachments: Vec<u32>,
    }
}

vk_struct! {
    pub struct SubpassDependency2("VkSubpassDependency2", SUBPASS_DEPENDENCY_2) chain {
        "srcSubpass" => src_subpass: u32,
        "dstSubpass" => dst_subpass: u32,
        "srcStageMask" => src_stage_mask: PipelineStageFlags,
        "dstStageMask" => dst_stage_mask: PipelineStageFlags,
        "srcAccessMask" => src_access_mask: AccessFlags,
        "dstAccessMask" => dst_access_mask: AccessFlags,
        "dependencyFlags" => dependency_flags: DependencyFlags,
        "viewOffset" => view_offset: i32,
    }
}

vk_struct! {
    pub struct RenderPassCreateInfo2("VkRenderPassCreateInfo2", RENDER_PASS_CREATE_INFO_2) chain {
        "flags" => flags: ReservedFlags,
        ["attachmentCount"] "pAttachments" => attachments: Vec<AttachmentDescription2>,
        ["subpassCount"] "pSubpasses" => subpasses: Vec<SubpassDescription2>,
        ["dependencyCount"] "pDependencies" => dependencies: Vec<SubpassDependency2>,
        ["correlatedViewMaskCount"] "pCorrelatedViewMasks" => correlated_view_masks: Vec<u32>,
    }
}

vk_struct! {
    pub struct AttachmentDescriptionStencilLayout(
        "VkAttachmentDescriptionStencilLayout",
        ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT
    ) {
        "stencilInitialLayout" => stencil_initial_layout: ImageLayout,
        "stencilFinalLayout" => stencil_final_layout: ImageLayout,
    }
}

vk_struct! {
    pub struct AttachmentReferenceStencilLayout("VkAttachmentReferenceStencilLayout", ATTACHMENT_REFERENCE_STENCIL_LAYOUT) {
        "stencilLayout" => stencil_layout: ImageLayout,
    }
}

vk_struct! {
    pub struct SubpassDescriptionDepthStencilResolve(
        "VkSubpassDescriptionDepthStencilResolve",
        SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE
    ) {
        "depthResolveMode" => depth_resolve_mode: ResolveModeFlags,
        "stencilResolveMode" => stencil_resolve_mode: ResolveModeFlags,
        "pDepthStencilResolveAttachment" => depth_stencil_resolve_attachment: Option<Box<AttachmentReference2>>,
    }
}

vk_struct! {
    pub struct FragmentShadingRateAttachmentInfoKHR(
        "VkFragmentShadingRateAttachmentInfoKHR",
        FRAGMENT_SHADING_RATE_ATTACHMENT_INFO_KHR
    ) {
        "pFragmentShadingRateAttachment" => fragment_shading_rate_attachment: Option<Box<AttachmentReference2>>,
        "shadingRateAttachmentTexelSize" => shading_rate_attachment_texel_size: Extent2D,
    }
}
