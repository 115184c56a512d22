//! Bitmask types.
//!
//! A zero mask encodes as `0`. Otherwise an exact alias (such as
//! `VK_SHADER_STAGE_ALL`) wins, then the individual bit names joined by
//! `" | "` in ascending bit order.

vk_flags! {
    /// Flags reserved for future use; always zero in practice
    pub struct ReservedFlags("VkFlags") {}
}

vk_flags! {
    pub struct ShaderStageFlags("VkShaderStageFlags") {
        VERTEX = 0x1 => "VK_SHADER_STAGE_VERTEX_BIT",
        TESSELLATION_CONTROL = 0x2 => "VK_SHADER_STAGE_TESSELLATION_CONTROL_BIT",
        TESSELLATION_EVALUATION = 0x4 => "VK_SHADER_STAGE_TESSELLATION_EVALUATION_BIT",
        GEOMETRY = 0x8 => "VK_SHADER_STAGE_GEOMETRY_BIT",
        FRAGMENT = 0x10 => "VK_SHADER_STAGE_FRAGMENT_BIT",
        COMPUTE = 0x20 => "VK_SHADER_STAGE_COMPUTE_BIT",
    }
    aliases {
        ALL_GRAPHICS = 0x1F => "VK_SHADER_STAGE_ALL_GRAPHICS",
        ALL = 0x7FFF_FFFF => "VK_SHADER_STAGE_ALL",
    }
}

vk_flags! {
    pub struct PipelineCreateFlags("VkPipelineCreateFlags") {
        DISABLE_OPTIMIZATION = 0x1 => "VK_PIPELINE_CREATE_DISABLE_OPTIMIZATION_BIT",
        ALLOW_DERIVATIVES = 0x2 => "VK_PIPELINE_CREATE_ALLOW_DERIVATIVES_BIT",
        DERIVATIVE = 0x4 => "VK_PIPELINE_CREATE_DERIVATIVE_BIT",
        VIEW_INDEX_FROM_DEVICE_INDEX = 0x8 => "VK_PIPELINE_CREATE_VIEW_INDEX_FROM_DEVICE_INDEX_BIT",
        DISPATCH_BASE = 0x10 => "VK_PIPELINE_CREATE_DISPATCH_BASE_BIT",
        FAIL_ON_PIPELINE_COMPILE_REQUIRED = 0x100 => "VK_PIPELINE_CREATE_FAIL_ON_PIPELINE_COMPILE_REQUIRED_BIT",
        EARLY_RETURN_ON_FAILURE = 0x200 => "VK_PIPELINE_CREATE_EARLY_RETURN_ON_FAILURE_BIT",
    }
}

vk_flags! {
    pub struct PipelineShaderStageCreateFlags("VkPipelineShaderStageCreateFlags") {
        ALLOW_VARYING_SUBGROUP_SIZE = 0x1 => "VK_PIPELINE_SHADER_STAGE_CREATE_ALLOW_VARYING_SUBGROUP_SIZE_BIT",
        REQUIRE_FULL_SUBGROUPS = 0x2 => "VK_PIPELINE_SHADER_STAGE_CREATE_REQUIRE_FULL_SUBGROUPS_BIT",
    }
}

vk_flags! {
    pub struct CullModeFlags("VkCullModeFlags") {
        FRONT = 0x1 => "VK_CULL_MODE_FRONT_BIT",
        BACK = 0x2 => "VK_CULL_MODE_BACK_BIT",
    }
    aliases {
        NONE = 0 => "VK_CULL_MODE_NONE",
        FRONT_AND_BACK = 0x3 => "VK_CULL_MODE_FRONT_AND_BACK",
    }
}

vk_flags! {
    pub struct ColorComponentFlags("VkColorComponentFlags") {
        R = 0x1 => "VK_COLOR_COMPONENT_R_BIT",
        G = 0x2 => "VK_COLOR_COMPONENT_G_BIT",
        B = 0x4 => "VK_COLOR_COMPONENT_B_BIT",
        A = 0x8 => "VK_COLOR_COMPONENT_A_BIT",
    }
}

vk_flags! {
    /// Sample counts; single-bit where a `VkSampleCountFlagBits` is expected
    pub struct SampleCountFlags("VkSampleCountFlags") {
        TYPE_1 = 0x1 => "VK_SAMPLE_COUNT_1_BIT",
        TYPE_2 = 0x2 => "VK_SAMPLE_COUNT_2_BIT",
        TYPE_4 = 0x4 => "VK_SAMPLE_COUNT_4_BIT",
        TYPE_8 = 0x8 => "VK_SAMPLE_COUNT_8_BIT",
        TYPE_16 = 0x10 => "VK_SAMPLE_COUNT_16_BIT",
        TYPE_32 = 0x20 => "VK_SAMPLE_COUNT_32_BIT",
        TYPE_64 = 0x40 => "VK_SAMPLE_COUNT_64_BIT",
    }
}

vk_flags! {
    pub struct DescriptorSetLayoutCreateFlags("VkDescriptorSetLayoutCreateFlags") {
        PUSH_DESCRIPTOR_KHR = 0x1 => "VK_DESCRIPTOR_SET_LAYOUT_CREATE_PUSH_DESCRIPTOR_BIT_KHR",
        UPDATE_AFTER_BIND_POOL = 0x2 => "VK_DESCRIPTOR_SET_LAYOUT_CREATE_UPDATE_AFTER_BIND_POOL_BIT",
    }
}

vk_flags! {
    pub struct DescriptorBindingFlags("VkDescriptorBindingFlags") {
        UPDATE_AFTER_BIND = 0x1 => "VK_DESCRIPTOR_BINDING_UPDATE_AFTER_BIND_BIT",
        UPDATE_UNUSED_WHILE_PENDING = 0x2 => "VK_DESCRIPTOR_BINDING_UPDATE_UNUSED_WHILE_PENDING_BIT",
        PARTIALLY_BOUND = 0x4 => "VK_DESCRIPTOR_BINDING_PARTIALLY_BOUND_BIT",
        VARIABLE_DESCRIPTOR_COUNT = 0x8 => "VK_DESCRIPTOR_BINDING_VARIABLE_DESCRIPTOR_COUNT_BIT",
    }
}

vk_flags! {
    pub struct SamplerCreateFlags("VkSamplerCreateFlags") {
        SUBSAMPLED_EXT = 0x1 => "VK_SAMPLER_CREATE_SUBSAMPLED_BIT_EXT",
        SUBSAMPLED_COARSE_RECONSTRUCTION_EXT = 0x2 => "VK_SAMPLER_CREATE_SUBSAMPLED_COARSE_RECONSTRUCTION_BIT_EXT",
    }
}

vk_flags! {
    pub struct AttachmentDescriptionFlags("VkAttachmentDescriptionFlags") {
        MAY_ALIAS = 0x1 => "VK_ATTACHMENT_DESCRIPTION_MAY_ALIAS_BIT",
    }
}

vk_flags! {
    pub struct PipelineStageFlags("VkPipelineStageFlags") {
        TOP_OF_PIPE = 0x1 => "VK_PIPELINE_STAGE_TOP_OF_PIPE_BIT",
        DRAW_INDIRECT = 0x2 => "VK_PIPELINE_STAGE_DRAW_INDIRECT_BIT",
        VERTEX_INPUT = 0x4 => "VK_PIPELINE_STAGE_VERTEX_INPUT_BIT",
        VERTEX_SHADER = 0x8 => "VK_PIPELINE_STAGE_VERTEX_SHADER_BIT",
        TESSELLATION_CONTROL_SHADER = 0x10 => "VK_PIPELINE_STAGE_TESSELLATION_CONTROL_SHADER_BIT",
        TESSELLATION_EVALUATION_SHADER = 0x20 => "VK_PIPELINE_STAGE_TESSELLATION_EVALUATION_SHADER_BIT",
        GEOMETRY_SHADER = 0x40 => "VK_PIPELINE_STAGE_GEOMETRY_SHADER_BIT",
        FRAGMENT_SHADER = 0x80 => "VK_PIPELINE_STAGE_FRAGMENT_SHADER_BIT",
        EARLY_FRAGMENT_TESTS = 0x100 => "VK_PIPELINE_STAGE_EARLY_FRAGMENT_TESTS_BIT",
        LATE_FRAGMENT_TESTS = 0x200 => "VK_PIPELINE_STAGE_LATE_FRAGMENT_TESTS_BIT",
        COLOR_ATTACHMENT_OUTPUT = 0x400 => "VK_PIPELINE_STAGE_COLOR_ATTACHMENT_OUTPUT_BIT",
        COMPUTE_SHADER = 0x800 => "VK_PIPELINE_STAGE_COMPUTE_SHADER_BIT",
        TRANSFER = 0x1000 => "VK_PIPELINE_STAGE_TRANSFER_BIT",
        BOTTOM_OF_PIPE = 0x2000 => "VK_PIPELINE_STAGE_BOTTOM_OF_PIPE_BIT",
        HOST = 0x4000 => "VK_PIPELINE_STAGE_HOST_BIT",
        ALL_GRAPHICS = 0x8000 => "VK_PIPELINE_STAGE_ALL_GRAPHICS_BIT",
        ALL_COMMANDS = 0x10000 => "VK_PIPELINE_STAGE_ALL_COMMANDS_BIT",
    }
}

vk_flags! {
    pub struct AccessFlags("VkAccessFlags") {
        INDIRECT_COMMAND_READ = 0x1 => "VK_ACCESS_INDIRECT_COMMAND_READ_BIT",
        INDEX_READ = 0x2 => "VK_ACCESS_INDEX_READ_BIT",
        VERTEX_ATTRIBUTE_READ = 0x4 => "VK_ACCESS_VERTEX_ATTRIBUTE_READ_BIT",
        UNIFORM_READ = 0x8 => "VK_ACCESS_UNIFORM_READ_BIT",
        INPUT_ATTACHMENT_READ = 0x10 => "VK_ACCESS_INPUT_ATTACHMENT_READ_BIT",
        SHADER_READ = 0x20 => "VK_ACCESS_SHADER_READ_BIT",
        SHADER_WRITE = 0x40 => "VK_ACCESS_SHADER_WRITE_BIT",
        COLOR_ATTACHMENT_READ = 0x80 => "VK_ACCESS_COLOR_ATTACHMENT_READ_BIT",
        COLOR_ATTACHMENT_WRITE = 0x100 => "VK_ACCESS_COLOR_ATTACHMENT_WRITE_BIT",
        DEPTH_STENCIL_ATTACHMENT_READ = 0x200 => "VK_ACCESS_DEPTH_STENCIL_ATTACHMENT_READ_BIT",
        DEPTH_STENCIL_ATTACHMENT_WRITE = 0x400 => "VK_ACCESS_DEPTH_STENCIL_ATTACHMENT_WRITE_BIT",
        TRANSFER_READ = 0x800 => "VK_ACCESS_TRANSFER_READ_BIT",
        TRANSFER_WRITE = 0x1000 => "VK_ACCESS_TRANSFER_WRITE_BIT",
        HOST_READ = 0x2000 => "VK_ACCESS_HOST_READ_BIT",
        HOST_WRITE = 0x4000 => "VK_ACCESS_HOST_WRITE_BIT",
        MEMORY_READ = 0x8000 => "VK_ACCESS_MEMORY_READ_BIT",
        MEMORY_WRITE = 0x10000 => "VK_ACCESS_MEMORY_WRITE_BIT",
    }
}

vk_flags! {
    pub struct DependencyFlags("VkDependencyFlags") {
        BY_REGION = 0x1 => "VK_DEPENDENCY_BY_REGION_BIT",
        VIEW_LOCAL = 0x2 => "VK_DEPENDENCY_VIEW_LOCAL_BIT",
        DEVICE_GROUP = 0x4 => "VK_DEPENDENCY_DEVICE_GROUP_BIT",
    }
}

vk_flags! {
    pub struct ImageAspectFlags("VkImageAspectFlags") {
        COLOR = 0x1 => "VK_IMAGE_ASPECT_COLOR_BIT",
        DEPTH = 0x2 => "VK_IMAGE_ASPECT_DEPTH_BIT",
        STENCIL = 0x4 => "VK_IMAGE_ASPECT_STENCIL_BIT",
        METADATA = 0x8 => "VK_IMAGE_ASPECT_METADATA_BIT",
        PLANE_0 = 0x10 => "VK_IMAGE_ASPECT_PLANE_0_BIT",
        PLANE_1 = 0x20 => "VK_IMAGE_ASPECT_PLANE_1_BIT",
        PLANE_2 = 0x40 => "VK_IMAGE_ASPECT_PLANE_2_BIT",
    }
}

vk_flags! {
    pub struct ResolveModeFlags("VkResolveModeFlags") {
        SAMPLE_ZERO = 0x1 => "VK_RESOLVE_MODE_SAMPLE_ZERO_BIT",
        AVERAGE = 0x2 => "VK_RESOLVE_MODE_AVERAGE_BIT",
        MIN = 0x4 => "VK_RESOLVE_MODE_MIN_BIT",
        MAX = 0x8 => "VK_RESOLVE_MODE_MAX_BIT",
    }
    aliases {
        NONE = 0 => "VK_RESOLVE_MODE_NONE",
    }
}

vk_flags! {
    pub struct PipelineCacheCreateFlags("VkPipelineCacheCreateFlags") {
        EXTERNALLY_SYNCHRONIZED = 0x1 => "VK_PIPELINE_CACHE_CREATE_EXTERNALLY_SYNCHRONIZED_BIT",
        READ_ONLY = 0x2 => "VK_PIPELINE_CACHE_CREATE_READ_ONLY_BIT",
        USE_APPLICATION_STORAGE = 0x4 => "VK_PIPELINE_CACHE_CREATE_USE_APPLICATION_STORAGE_BIT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder};
    use serde_json::json;

    #[test]
    fn test_flags_text_bit_order() {
        let flags = ShaderStageFlags::FRAGMENT | ShaderStageFlags::VERTEX;
        assert_eq!(
            flags.to_text().unwrap(),
            "VK_SHADER_STAGE_VERTEX_BIT | VK_SHADER_STAGE_FRAGMENT_BIT"
        );
        assert_eq!(ShaderStageFlags::ALL.to_text().unwrap(), "VK_SHADER_STAGE_ALL");
        assert_eq!(
            ShaderStageFlags::ALL_GRAPHICS.to_text().unwrap(),
            "VK_SHADER_STAGE_ALL_GRAPHICS"
        );
    }

    #[test]
    fn test_flags_encode() {
        let mut enc = Encoder::new();
        assert_eq!(enc.encode(&CullModeFlags::NONE).unwrap(), json!(0));
        assert_eq!(
            enc.encode(&(PipelineStageFlags::EARLY_FRAGMENT_TESTS | PipelineStageFlags::LATE_FRAGMENT_TESTS))
                .unwrap(),
            json!("VK_PIPELINE_STAGE_EARLY_FRAGMENT_TESTS_BIT | VK_PIPELINE_STAGE_LATE_FRAGMENT_TESTS_BIT")
        );
        assert!(enc.messages().is_empty());

        // Unknown bit: raw number plus a warning
        assert_eq!(enc.encode(&ColorComponentFlags(0x31)).unwrap(), json!(0x31));
        assert_eq!(enc.messages().len(), 1);
    }

    #[test]
    fn test_flags_decode_forms() {
        let mut dec = Decoder::new();
        assert_eq!(
            dec.decode::<ColorComponentFlags>(&json!(
                "VK_COLOR_COMPONENT_R_BIT|VK_COLOR_COMPONENT_G_BIT |  VK_COLOR_COMPONENT_A_BIT"
            ))
            .unwrap(),
            ColorComponentFlags(0xB)
        );
        assert_eq!(
            dec.decode::<ShaderStageFlags>(&json!("VK_SHADER_STAGE_ALL")).unwrap(),
            ShaderStageFlags::ALL
        );
        assert_eq!(
            dec.decode::<CullModeFlags>(&json!("VK_CULL_MODE_NONE")).unwrap(),
            CullModeFlags::empty()
        );
        assert_eq!(dec.decode::<AccessFlags>(&json!(0)).unwrap(), AccessFlags::empty());
        let err = dec
            .decode::<ShaderStageFlags>(&json!("VK_SHADER_STAGE_VERTEX_BIT | VK_BOGUS"))
            .unwrap_err();
        assert!(err.to_string().contains("VK_BOGUS"));
    }
}
