//! Enumerations.
//!
//! Enums are open: a value outside the named set is carried through, encoded
//! numerically and reported as a warning.

vk_enum! {
    /// Structure discriminant (`sType`)
    pub struct StructureType("VkStructureType") {
        DEVICE_CREATE_INFO = 3 => "VK_STRUCTURE_TYPE_DEVICE_CREATE_INFO",
        SHADER_MODULE_CREATE_INFO = 16 => "VK_STRUCTURE_TYPE_SHADER_MODULE_CREATE_INFO",
        PIPELINE_CACHE_CREATE_INFO = 17 => "VK_STRUCTURE_TYPE_PIPELINE_CACHE_CREATE_INFO",
        PIPELINE_SHADER_STAGE_CREATE_INFO = 18 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
        PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO = 19 => "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
        PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO = 20 => "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
        PIPELINE_TESSELLATION_STATE_CREATE_INFO = 21 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_STATE_CREATE_INFO",
        PIPELINE_VIEWPORT_STATE_CREATE_INFO = 22 => "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO",
        PIPELINE_RASTERIZATION_STATE_CREATE_INFO = 23 => "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_STATE_CREATE_INFO",
        PIPELINE_MULTISAMPLE_STATE_CREATE_INFO = 24 => "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
        PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO = 25 => "VK_STRUCTURE_TYPE_PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO",
        PIPELINE_COLOR_BLEND_STATE_CREATE_INFO = 26 => "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
        PIPELINE_DYNAMIC_STATE_CREATE_INFO = 27 => "VK_STRUCTURE_TYPE_PIPELINE_DYNAMIC_STATE_CREATE_INFO",
        GRAPHICS_PIPELINE_CREATE_INFO = 28 => "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
        COMPUTE_PIPELINE_CREATE_INFO = 29 => "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO",
        PIPELINE_LAYOUT_CREATE_INFO = 30 => "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
        SAMPLER_CREATE_INFO = 31 => "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO",
        DESCRIPTOR_SET_LAYOUT_CREATE_INFO = 32 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
        RENDER_PASS_CREATE_INFO = 38 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO",
        PHYSICAL_DEVICE_VULKAN_1_1_FEATURES = 49 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES",
        RENDER_PASS_MULTIVIEW_CREATE_INFO = 1000053000 => "VK_STRUCTURE_TYPE_RENDER_PASS_MULTIVIEW_CREATE_INFO",
        PHYSICAL_DEVICE_FEATURES_2 = 1000059000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
        PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT = 1000099001 => "VK_STRUCTURE_TYPE_PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT",
        ATTACHMENT_DESCRIPTION_2 = 1000109000 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_2",
        ATTACHMENT_REFERENCE_2 = 1000109001 => "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_2",
        SUBPASS_DESCRIPTION_2 = 1000109002 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_2",
        SUBPASS_DEPENDENCY_2 = 1000109003 => "VK_STRUCTURE_TYPE_SUBPASS_DEPENDENCY_2",
        RENDER_PASS_CREATE_INFO_2 = 1000109004 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO_2",
        RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO = 1000117001 => "VK_STRUCTURE_TYPE_RENDER_PASS_INPUT_ATTACHMENT_ASPECT_CREATE_INFO",
        SAMPLER_REDUCTION_MODE_CREATE_INFO = 1000130001 => "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
        SAMPLER_YCBCR_CONVERSION_CREATE_INFO = 1000156000 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_CREATE_INFO",
        SAMPLER_YCBCR_CONVERSION_INFO = 1000156001 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
        PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES = 1000156004 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES",
        DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO = 1000161000 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO",
        SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE = 1000199001 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_DEPTH_STENCIL_RESOLVE",
        PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO = 1000225001 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO",
        FRAGMENT_SHADING_RATE_ATTACHMENT_INFO_KHR = 1000226000 => "VK_STRUCTURE_TYPE_FRAGMENT_SHADING_RATE_ATTACHMENT_INFO_KHR",
        ATTACHMENT_REFERENCE_STENCIL_LAYOUT = 1000241001 => "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_STENCIL_LAYOUT",
        ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT = 1000241002 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_STENCIL_LAYOUT",
        PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES = 1000298000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES",
        DEVICE_OBJECT_RESERVATION_CREATE_INFO = 1000298002 => "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
        PIPELINE_POOL_SIZE = 1000298005 => "VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE",
        PIPELINE_OFFLINE_CREATE_INFO = 1000298010 => "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
        PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES = 1000314007 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES",
    }
}

vk_enum! {
    pub struct CompareOp("VkCompareOp") {
        NEVER = 0 => "VK_COMPARE_OP_NEVER",
        LESS = 1 => "VK_COMPARE_OP_LESS",
        EQUAL = 2 => "VK_COMPARE_OP_EQUAL",
        LESS_OR_EQUAL = 3 => "VK_COMPARE_OP_LESS_OR_EQUAL",
        GREATER = 4 => "VK_COMPARE_OP_GREATER",
        NOT_EQUAL = 5 => "VK_COMPARE_OP_NOT_EQUAL",
        GREATER_OR_EQUAL = 6 => "VK_COMPARE_OP_GREATER_OR_EQUAL",
        ALWAYS = 7 => "VK_COMPARE_OP_ALWAYS",
    }
}

vk_enum! {
    pub struct Filter("VkFilter") {
        NEAREST = 0 => "VK_FILTER_NEAREST",
        LINEAR = 1 => "VK_FILTER_LINEAR",
        CUBIC_EXT = 1000015000 => "VK_FILTER_CUBIC_EXT",
    }
}

vk_enum! {
    pub struct SamplerMipmapMode("VkSamplerMipmapMode") {
        NEAREST = 0 => "VK_SAMPLER_MIPMAP_MODE_NEAREST",
        LINEAR = 1 => "VK_SAMPLER_MIPMAP_MODE_LINEAR",
    }
}

vk_enum! {
    pub struct SamplerAddressMode("VkSamplerAddressMode") {
        REPEAT = 0 => "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        MIRRORED_REPEAT = 1 => "VK_SAMPLER_ADDRESS_MODE_MIRRORED_REPEAT",
        CLAMP_TO_EDGE = 2 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_EDGE",
        CLAMP_TO_BORDER = 3 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_BORDER",
        MIRROR_CLAMP_TO_EDGE = 4 => "VK_SAMPLER_ADDRESS_MODE_MIRROR_CLAMP_TO_EDGE",
    }
}

vk_enum! {
    pub struct BorderColor("VkBorderColor") {
        FLOAT_TRANSPARENT_BLACK = 0 => "VK_BORDER_COLOR_FLOAT_TRANSPARENT_BLACK",
        INT_TRANSPARENT_BLACK = 1 => "VK_BORDER_COLOR_INT_TRANSPARENT_BLACK",
        FLOAT_OPAQUE_BLACK = 2 => "VK_BORDER_COLOR_FLOAT_OPAQUE_BLACK",
        INT_OPAQUE_BLACK = 3 => "VK_BORDER_COLOR_INT_OPAQUE_BLACK",
        FLOAT_OPAQUE_WHITE = 4 => "VK_BORDER_COLOR_FLOAT_OPAQUE_WHITE",
        INT_OPAQUE_WHITE = 5 => "VK_BORDER_COLOR_INT_OPAQUE_WHITE",
    }
}

vk_enum! {
    pub struct SamplerReductionMode("VkSamplerReductionMode") {
        WEIGHTED_AVERAGE = 0 => "VK_SAMPLER_REDUCTION_MODE_WEIGHTED_AVERAGE",
        MIN = 1 => "VK_SAMPLER_REDUCTION_MODE_MIN",
        MAX = 2 => "VK_SAMPLER_REDUCTION_MODE_MAX",
    }
}

vk_enum! {
    pub struct SamplerYcbcrModelConversion("VkSamplerYcbcrModelConversion") {
        RGB_IDENTITY = 0 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_RGB_IDENTITY",
        YCBCR_IDENTITY = 1 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_IDENTITY",
        YCBCR_709 = 2 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_709",
        YCBCR_601 = 3 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_601",
        YCBCR_2020 = 4 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_2020",
    }
}

vk_enum! {
    pub struct SamplerYcbcrRange("VkSamplerYcbcrRange") {
        ITU_FULL = 0 => "VK_SAMPLER_YCBCR_RANGE_ITU_FULL",
        ITU_NARROW = 1 => "VK_SAMPLER_YCBCR_RANGE_ITU_NARROW",
    }
}

vk_enum! {
    pub struct ChromaLocation("VkChromaLocation") {
        COSITED_EVEN = 0 => "VK_CHROMA_LOCATION_COSITED_EVEN",
        MIDPOINT = 1 => "VK_CHROMA_LOCATION_MIDPOINT",
    }
}

vk_enum! {
    pub struct ComponentSwizzle("VkComponentSwizzle") {
        IDENTITY = 0 => "VK_COMPONENT_SWIZZLE_IDENTITY",
        ZERO = 1 => "VK_COMPONENT_SWIZZLE_ZERO",
        ONE = 2 => "VK_COMPONENT_SWIZZLE_ONE",
        R = 3 => "VK_COMPONENT_SWIZZLE_R",
        G = 4 => "VK_COMPONENT_SWIZZLE_G",
        B = 5 => "VK_COMPONENT_SWIZZLE_B",
        A = 6 => "VK_COMPONENT_SWIZZLE_A",
    }
}

vk_enum! {
    pub struct DescriptorType("VkDescriptorType") {
        SAMPLER = 0 => "VK_DESCRIPTOR_TYPE_SAMPLER",
        COMBINED_IMAGE_SAMPLER = 1 => "VK_DESCRIPTOR_TYPE_COMBINED_IMAGE_SAMPLER",
        SAMPLED_IMAGE = 2 => "VK_DESCRIPTOR_TYPE_SAMPLED_IMAGE",
        STORAGE_IMAGE = 3 => "VK_DESCRIPTOR_TYPE_STORAGE_IMAGE",
        UNIFORM_TEXEL_BUFFER = 4 => "VK_DESCRIPTOR_TYPE_UNIFORM_TEXEL_BUFFER",
        STORAGE_TEXEL_BUFFER = 5 => "VK_DESCRIPTOR_TYPE_STORAGE_TEXEL_BUFFER",
        UNIFORM_BUFFER = 6 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER",
        STORAGE_BUFFER = 7 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER",
        UNIFORM_BUFFER_DYNAMIC = 8 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER_DYNAMIC",
        STORAGE_BUFFER_DYNAMIC = 9 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER_DYNAMIC",
        INPUT_ATTACHMENT = 10 => "VK_DESCRIPTOR_TYPE_INPUT_ATTACHMENT",
    }
}

vk_enum! {
    pub struct PrimitiveTopology("VkPrimitiveTopology") {
        POINT_LIST = 0 => "VK_PRIMITIVE_TOPOLOGY_POINT_LIST",
        LINE_LIST = 1 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST",
        LINE_STRIP = 2 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP",
        TRIANGLE_LIST = 3 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        TRIANGLE_STRIP = 4 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP",
        TRIANGLE_FAN = 5 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_FAN",
        LINE_LIST_WITH_ADJACENCY = 6 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST_WITH_ADJACENCY",
        LINE_STRIP_WITH_ADJACENCY = 7 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP_WITH_ADJACENCY",
        TRIANGLE_LIST_WITH_ADJACENCY = 8 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST_WITH_ADJACENCY",
        TRIANGLE_STRIP_WITH_ADJACENCY = 9 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP_WITH_ADJACENCY",
        PATCH_LIST = 10 => "VK_PRIMITIVE_TOPOLOGY_PATCH_LIST",
    }
}

vk_enum! {
    pub struct PolygonMode("VkPolygonMode") {
        FILL = 0 => "VK_POLYGON_MODE_FILL",
        LINE = 1 => "VK_POLYGON_MODE_LINE",
        POINT = 2 => "VK_POLYGON_MODE_POINT",
    }
}

vk_enum! {
    pub struct FrontFace("VkFrontFace") {
        COUNTER_CLOCKWISE = 0 => "VK_FRONT_FACE_COUNTER_CLOCKWISE",
        CLOCKWISE = 1 => "VK_FRONT_FACE_CLOCKWISE",
    }
}

vk_enum! {
    pub struct LogicOp("VkLogicOp") {
        CLEAR = 0 => "VK_LOGIC_OP_CLEAR",
        AND = 1 => "VK_LOGIC_OP_AND",
        AND_REVERSE = 2 => "VK_LOGIC_OP_AND_REVERSE",
        COPY = 3 => "VK_LOGIC_OP_COPY",
        AND_INVERTED = 4 => "VK_LOGIC_OP_AND_INVERTED",
        NO_OP = 5 => "VK_LOGIC_OP_NO_OP",
        XOR = 6 => "VK_LOGIC_OP_XOR",
        OR = 7 => "VK_LOGIC_OP_OR",
        NOR = 8 => "VK_LOGIC_OP_NOR",
        EQUIVALENT = 9 => "VK_LOGIC_OP_EQUIVALENT",
        INVERT = 10 => "VK_LOGIC_OP_INVERT",
        OR_REVERSE = 11 => "VK_LOGIC_OP_OR_REVERSE",
        COPY_INVERTED = 12 => "VK_LOGIC_OP_COPY_INVERTED",
        OR_INVERTED = 13 => "VK_LOGIC_OP_OR_INVERTED",
        NAND = 14 => "VK_LOGIC_OP_NAND",
        SET = 15 => "VK_LOGIC_OP_SET",
    }
}

vk_enum! {
    pub struct BlendFactor("VkBlendFactor") {
        ZERO = 0 => "VK_BLEND_FACTOR_ZERO",
        ONE = 1 => "VK_BLEND_FACTOR_ONE",
        SRC_COLOR = 2 => "VK_BLEND_FACTOR_SRC_COLOR",
        ONE_MINUS_SRC_COLOR = 3 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR",
        DST_COLOR = 4 => "VK_BLEND_FACTOR_DST_COLOR",
        ONE_MINUS_DST_COLOR = 5 => "VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR",
        SRC_ALPHA = 6 => "VK_BLEND_FACTOR_SRC_ALPHA",
        ONE_MINUS_SRC_ALPHA = 7 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA",
        DST_ALPHA = 8 => "VK_BLEND_FACTOR_DST_ALPHA",
        ONE_MINUS_DST_ALPHA = 9 => "VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA",
        CONSTANT_COLOR = 10 => "VK_BLEND_FACTOR_CONSTANT_COLOR",
        ONE_MINUS_CONSTANT_COLOR = 11 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR",
        CONSTANT_ALPHA = 12 => "VK_BLEND_FACTOR_CONSTANT_ALPHA",
        ONE_MINUS_CONSTANT_ALPHA = 13 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_ALPHA",
        SRC_ALPHA_SATURATE = 14 => "VK_BLEND_FACTOR_SRC_ALPHA_SATURATE",
        SRC1_COLOR = 15 => "VK_BLEND_FACTOR_SRC1_COLOR",
        ONE_MINUS_SRC1_COLOR = 16 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_COLOR",
        SRC1_ALPHA = 17 => "VK_BLEND_FACTOR_SRC1_ALPHA",
        ONE_MINUS_SRC1_ALPHA = 18 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_ALPHA",
    }
}

vk_enum! {
    pub struct BlendOp("VkBlendOp") {
        ADD = 0 => "VK_BLEND_OP_ADD",
        SUBTRACT = 1 => "VK_BLEND_OP_SUBTRACT",
        REVERSE_SUBTRACT = 2 => "VK_BLEND_OP_REVERSE_SUBTRACT",
        MIN = 3 => "VK_BLEND_OP_MIN",
        MAX = 4 => "VK_BLEND_OP_MAX",
    }
}

vk_enum! {
    pub struct StencilOp("VkStencilOp") {
        KEEP = 0 => "VK_STENCIL_OP_KEEP",
        ZERO = 1 => "VK_STENCIL_OP_ZERO",
        REPLACE = 2 => "VK_STENCIL_OP_REPLACE",
        INCREMENT_AND_CLAMP = 3 => "VK_STENCIL_OP_INCREMENT_AND_CLAMP",
        DECREMENT_AND_CLAMP = 4 => "VK_STENCIL_OP_DECREMENT_AND_CLAMP",
        INVERT = 5 => "VK_STENCIL_OP_INVERT",
        INCREMENT_AND_WRAP = 6 => "VK_STENCIL_OP_INCREMENT_AND_WRAP",
        DECREMENT_AND_WRAP = 7 => "VK_STENCIL_OP_DECREMENT_AND_WRAP",
    }
}

vk_enum! {
    pub struct DynamicState("VkDynamicState") {
        VIEWPORT = 0 => "VK_DYNAMIC_STATE_VIEWPORT",
        SCISSOR = 1 => "VK_DYNAMIC_STATE_SCISSOR",
        LINE_WIDTH = 2 => "VK_DYNAMIC_STATE_LINE_WIDTH",
        DEPTH_BIAS = 3 => "VK_DYNAMIC_STATE_DEPTH_BIAS",
        BLEND_CONSTANTS = 4 => "VK_DYNAMIC_STATE_BLEND_CONSTANTS",
        DEPTH_BOUNDS = 5 => "VK_DYNAMIC_STATE_DEPTH_BOUNDS",
        STENCIL_COMPARE_MASK = 6 => "VK_DYNAMIC_STATE_STENCIL_COMPARE_MASK",
        STENCIL_WRITE_MASK = 7 => "VK_DYNAMIC_STATE_STENCIL_WRITE_MASK",
        STENCIL_REFERENCE = 8 => "VK_DYNAMIC_STATE_STENCIL_REFERENCE",
        DISCARD_RECTANGLE_EXT = 1000099000 => "VK_DYNAMIC_STATE_DISCARD_RECTANGLE_EXT",
        LINE_STIPPLE_EXT = 1000259000 => "VK_DYNAMIC_STATE_LINE_STIPPLE_EXT",
        CULL_MODE = 1000267000 => "VK_DYNAMIC_STATE_CULL_MODE",
        FRONT_FACE = 1000267001 => "VK_DYNAMIC_STATE_FRONT_FACE",
        PRIMITIVE_TOPOLOGY = 1000267002 => "VK_DYNAMIC_STATE_PRIMITIVE_TOPOLOGY",
    }
}

vk_enum! {
    pub struct VertexInputRate("VkVertexInputRate") {
        VERTEX = 0 => "VK_VERTEX_INPUT_RATE_VERTEX",
        INSTANCE = 1 => "VK_VERTEX_INPUT_RATE_INSTANCE",
    }
}

vk_enum! {
    pub struct AttachmentLoadOp("VkAttachmentLoadOp") {
        LOAD = 0 => "VK_ATTACHMENT_LOAD_OP_LOAD",
        CLEAR = 1 => "VK_ATTACHMENT_LOAD_OP_CLEAR",
        DONT_CARE = 2 => "VK_ATTACHMENT_LOAD_OP_DONT_CARE",
    }
}

vk_enum! {
    pub struct AttachmentStoreOp("VkAttachmentStoreOp") {
        STORE = 0 => "VK_ATTACHMENT_STORE_OP_STORE",
        DONT_CARE = 1 => "VK_ATTACHMENT_STORE_OP_DONT_CARE",
        NONE = 1000301000 => "VK_ATTACHMENT_STORE_OP_NONE",
    }
}

vk_enum! {
    pub struct ImageLayout("VkImageLayout") {
        UNDEFINED = 0 => "VK_IMAGE_LAYOUT_UNDEFINED",
        GENERAL = 1 => "VK_IMAGE_LAYOUT_GENERAL",
        COLOR_ATTACHMENT_OPTIMAL = 2 => "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_ATTACHMENT_OPTIMAL = 3 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_READ_ONLY_OPTIMAL = 4 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_READ_ONLY_OPTIMAL",
        SHADER_READ_ONLY_OPTIMAL = 5 => "VK_IMAGE_LAYOUT_SHADER_READ_ONLY_OPTIMAL",
        TRANSFER_SRC_OPTIMAL = 6 => "VK_IMAGE_LAYOUT_TRANSFER_SRC_OPTIMAL",
        TRANSFER_DST_OPTIMAL = 7 => "VK_IMAGE_LAYOUT_TRANSFER_DST_OPTIMAL",
        PREINITIALIZED = 8 => "VK_IMAGE_LAYOUT_PREINITIALIZED",
        PRESENT_SRC_KHR = 1000001002 => "VK_IMAGE_LAYOUT_PRESENT_SRC_KHR",
        DEPTH_READ_ONLY_STENCIL_ATTACHMENT_OPTIMAL = 1000117000 => "VK_IMAGE_LAYOUT_DEPTH_READ_ONLY_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_ATTACHMENT_STENCIL_READ_ONLY_OPTIMAL = 1000117001 => "VK_IMAGE_LAYOUT_DEPTH_ATTACHMENT_STENCIL_READ_ONLY_OPTIMAL",
        FRAGMENT_SHADING_RATE_ATTACHMENT_OPTIMAL_KHR = 1000164003 => "VK_IMAGE_LAYOUT_FRAGMENT_SHADING_RATE_ATTACHMENT_OPTIMAL_KHR",
        DEPTH_ATTACHMENT_OPTIMAL = 1000241000 => "VK_IMAGE_LAYOUT_DEPTH_ATTACHMENT_OPTIMAL",
        DEPTH_READ_ONLY_OPTIMAL = 1000241001 => "VK_IMAGE_LAYOUT_DEPTH_READ_ONLY_OPTIMAL",
        STENCIL_ATTACHMENT_OPTIMAL = 1000241002 => "VK_IMAGE_LAYOUT_STENCIL_ATTACHMENT_OPTIMAL",
        STENCIL_READ_ONLY_OPTIMAL = 1000241003 => "VK_IMAGE_LAYOUT_STENCIL_READ_ONLY_OPTIMAL",
        READ_ONLY_OPTIMAL = 1000314000 => "VK_IMAGE_LAYOUT_READ_ONLY_OPTIMAL",
        ATTACHMENT_OPTIMAL = 1000314001 => "VK_IMAGE_LAYOUT_ATTACHMENT_OPTIMAL",
    }
}

vk_enum! {
    pub struct PipelineBindPoint("VkPipelineBindPoint") {
        GRAPHICS = 0 => "VK_PIPELINE_BIND_POINT_GRAPHICS",
        COMPUTE = 1 => "VK_PIPELINE_BIND_POINT_COMPUTE",
    }
}

vk_enum! {
    pub struct DiscardRectangleModeEXT("VkDiscardRectangleModeEXT") {
        INCLUSIVE = 0 => "VK_DISCARD_RECTANGLE_MODE_INCLUSIVE_EXT",
        EXCLUSIVE = 1 => "VK_DISCARD_RECTANGLE_MODE_EXCLUSIVE_EXT",
    }
}

vk_enum! {
    pub struct PipelineMatchControl("VkPipelineMatchControl") {
        APPLICATION_UUID_EXACT_MATCH = 0 => "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
    }
}

vk_enum! {
    /// Query kinds that size per-pool reservation limits
    pub struct QueryType("VkQueryType") {
        OCCLUSION = 0 => "VK_QUERY_TYPE_OCCLUSION",
        PIPELINE_STATISTICS = 1 => "VK_QUERY_TYPE_PIPELINE_STATISTICS",
        TIMESTAMP = 2 => "VK_QUERY_TYPE_TIMESTAMP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder};
    use serde_json::json;

    #[test]
    fn test_enum_names() {
        assert_eq!(CompareOp::ALWAYS.name(), Some("VK_COMPARE_OP_ALWAYS"));
        assert_eq!(
            StructureType::from_name("VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO"),
            Some(StructureType::SAMPLER_CREATE_INFO)
        );
        assert_eq!(CompareOp(137).name(), None);
        assert_eq!(format!("{:?}", CompareOp(137)), "VkCompareOp(137)");
    }

    #[test]
    fn test_unknown_enum_value_encodes_numerically() {
        let mut enc = Encoder::new();
        assert_eq!(enc.encode(&CompareOp(137)).unwrap(), json!(137));
        assert_eq!(enc.messages().len(), 1);
        assert!(enc.messages()[0].text.contains("VkCompareOp"));

        let mut dec = Decoder::new();
        assert_eq!(dec.decode::<CompareOp>(&json!(137)).unwrap(), CompareOp(137));
        assert_eq!(
            dec.decode::<CompareOp>(&json!("VK_COMPARE_OP_LESS")).unwrap(),
            CompareOp::LESS
        );
        assert!(dec.decode::<CompareOp>(&json!("VK_COMPARE_OP_SOMETIMES")).is_err());
    }
}
