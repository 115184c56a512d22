//! Device-level structures: features, object reservation and offline
//! pipeline identification.

use super::enums::PipelineMatchControl;
use super::flags::PipelineCacheCreateFlags;
use crate::codec::{Bool32, Bytes};

// ==================== Features ====================

vk_struct! {
    pub struct PhysicalDeviceFeatures("VkPhysicalDeviceFeatures") {
        "robustBufferAccess" => robust_buffer_access: Bool32,
        "fullDrawIndexUint32" => full_draw_index_uint32: Bool32,
        "imageCubeArray" => image_cube_array: Bool32,
        "independentBlend" => independent_blend: Bool32,
        "geometryShader" => geometry_shader: Bool32,
        "tessellationShader" => tessellation_shader: Bool32,
        "sampleRateShading" => sample_rate_shading: Bool32,
        "dualSrcBlend" => dual_src_blend: Bool32,
        "logicOp" => logic_op: Bool32,
        "multiDrawIndirect" => multi_draw_indirect: Bool32,
        "drawIndirectFirstInstance" => draw_indirect_first_instance: Bool32,
        "depthClamp" => depth_clamp: Bool32,
        "depthBiasClamp" => depth_bias_clamp: Bool32,
        "fillModeNonSolid" => fill_mode_non_solid: Bool32,
        "depthBounds" => depth_bounds: Bool32,
        "wideLines" => wide_lines: Bool32,
        "largePoints" => large_points: Bool32,
        "alphaToOne" => alpha_to_one: Bool32,
        "multiViewport" => multi_viewport: Bool32,
        "samplerAnisotropy" => sampler_anisotropy: Bool32,
        "textureCompressionETC2" => texture_compression_etc2: Bool32,
        "textureCompressionASTC_LDR" => texture_compression_astc_ldr: Bool32,
        "textureCompressionBC" => texture_compression_bc: Bool32,
        "occlusionQueryPrecise" => occlusion_query_precise: Bool32,
        "pipelineStatisticsQuery" => pipeline_statistics_query: Bool32,
        "vertexPipelineStoresAndAtomics" => vertex_pipeline_stores_and_atomics: Bool32,
        "fragmentStoresAndAtomics" => fragment_stores_and_atomics: Bool32,
        "shaderTessellationAndGeometryPointSize" => shader_tessellation_and_geometry_point_size: Bool32,
        "shaderImageGatherExtended" => shader_image_gather_extended: Bool32,
        "shaderStorageImageExtendedFormats" => shader_storage_image_extended_formats: Bool32,
        "shaderStorageImageMultisample" => shader_storage_image_multisample: Bool32,
        "shaderStorageImageReadWithoutFormat" => shader_storage_image_read_without_format: Bool32,
        "shaderStorageImageWriteWithoutFormat" => shader_storage_image_write_without_format: Bool32,
        "shaderUniformBufferArrayDynamicIndexing" => shader_uniform_buffer_array_dynamic_indexing: Bool32,
        "shaderSampledImageArrayDynamicIndexing" => shader_sampled_image_array_dynamic_indexing: Bool32,
        "shaderStorageBufferArrayDynamicIndexing" => shader_storage_buffer_array_dynamic_indexing: Bool32,
        "shaderStorageImageArrayDynamicIndexing" => shader_storage_image_array_dynamic_indexing: Bool32,
        "shaderClipDistance" => shader_clip_distance: Bool32,
        "shaderCullDistance" => shader_cull_distance: Bool32,
        "shaderFloat64" => shader_float64: Bool32,
        "shaderInt64" => shader_int64: Bool32,
        "shaderInt16" => shader_int16: Bool32,
        "shaderResourceResidency" => shader_resource_residency: Bool32,
        "shaderResourceMinLod" => shader_resource_min_lod: Bool32,
        "sparseBinding" => sparse_binding: Bool32,
        "sparseResidencyBuffer" => sparse_residency_buffer: Bool32,
        "sparseResidencyImage2D" => sparse_residency_image_2d: Bool32,
        "sparseResidencyImage3D" => sparse_residency_image_3d: Bool32,
        "sparseResidency2Samples" => sparse_residency_2_samples: Bool32,
        "sparseResidency4Samples" => sparse_residency_4_samples: Bool32,
        "sparseResidency8Samples" => sparse_residency_8_samples: Bool32,
        "sparseResidency16Samples" => sparse_residency_16_samples: Bool32,
        "sparseResidencyAliased" => sparse_residency_aliased: Bool32,
        "variableMultisampleRate" => variable_multisample_rate: Bool32,
        "inheritedQueries" => inherited_queries: Bool32,
    }
}

vk_struct! {
    /// Core features plus feature structures chained behind them
    pub struct PhysicalDeviceFeatures2("VkPhysicalDeviceFeatures2", PHYSICAL_DEVICE_FEATURES_2) chain {
        "features" => features: PhysicalDeviceFeatures,
    }
}

vk_struct! {
    pub struct PhysicalDeviceVulkan11Features("VkPhysicalDeviceVulkan11Features", PHYSICAL_DEVICE_VULKAN_1_1_FEATURES) {
        "storageBuffer16BitAccess" => storage_buffer_16bit_access: Bool32,
        "uniformAndStorageBuffer16BitAccess" => uniform_and_storage_buffer_16bit_access: Bool32,
        "storagePushConstant16" => storage_push_constant16: Bool32,
        "storageInputOutput16" => storage_input_output16: Bool32,
        "multiview" => multiview: Bool32,
        "multiviewGeometryShader" => multiview_geometry_shader: Bool32,
        "multiviewTessellationShader" => multiview_tessellation_shader: Bool32,
        "variablePointersStorageBuffer" => variable_pointers_storage_buffer: Bool32,
        "variablePointers" => variable_pointers: Bool32,
        "protectedMemory" => protected_memory: Bool32,
        "samplerYcbcrConversion" => sampler_ycbcr_conversion: Bool32,
        "shaderDrawParameters" => shader_draw_parameters: Bool32,
    }
}

vk_struct! {
    pub struct PhysicalDeviceVulkanSC10Features("VkPhysicalDeviceVulkanSC10Features", PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES) {
        "shaderAtomicInstructions" => shader_atomic_instructions: Bool32,
    }
}

vk_struct! {
    pub struct PhysicalDeviceSynchronization2Features(
        "VkPhysicalDeviceSynchronization2Features",
        PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES
    ) {
        "synchronization2" => synchronization2: Bool32,
    }
}

vk_struct! {
    pub struct PhysicalDeviceSamplerYcbcrConversionFeatures(
        "VkPhysicalDeviceSamplerYcbcrConversionFeatures",
        PHYSICAL_DEVICE_SAMPLER_YCBCR_CONVERSION_FEATURES
    ) {
        "samplerYcbcrConversion" => sampler_ycbcr_conversion: Bool32,
    }
}

// ==================== Object reservation ====================

vk_struct! {
    pub struct PipelineCacheCreateInfo("VkPipelineCacheCreateInfo", PIPELINE_CACHE_CREATE_INFO) {
        "flags" => flags: PipelineCacheCreateFlags,
        ["initialDataSize"] "pInitialData" => initial_data: Bytes,
    }
}

vk_struct! {
    pub struct PipelinePoolSize("VkPipelinePoolSize", PIPELINE_POOL_SIZE) {
        "poolEntrySize" => pool_entry_size: u64,
        "poolEntryCount" => pool_entry_count: u32,
    }
}

vk_struct! {
    /// Static sizing of a device's object tables.
    ///
    /// Request counts are peak concurrently-live object counts; the `max*`
    /// members are per-object maxima.
    pub struct DeviceObjectReservationCreateInfo(
        "VkDeviceObjectReservationCreateInfo",
        DEVICE_OBJECT_RESERVATION_CREATE_INFO
    ) {
        ["pipelineCacheCreateInfoCount"] "pPipelineCacheCreateInfos" => pipeline_cache_create_infos: Vec<PipelineCacheCreateInfo>,
        ["pipelinePoolSizeCount"] "pPipelinePoolSizes" => pipeline_pool_sizes: Vec<PipelinePoolSize>,
        "semaphoreRequestCount" => semaphore_request_count: u32,
        "commandBufferRequestCount" => command_buffer_request_count: u32,
        "fenceRequestCount" => fence_request_count: u32,
        "deviceMemoryRequestCount" => device_memory_request_count: u32,
        "bufferRequestCount" => buffer_request_count: u32,
        "imageRequestCount" => image_request_count: u32,
        "eventRequestCount" => event_request_count: u32,
        "queryPoolRequestCount" => query_pool_request_count: u32,
        "bufferViewRequestCount" => buffer_view_request_count: u32,
        "imageViewRequestCount" => image_view_request_count: u32,
        "layeredImageViewRequestCount" => layered_image_view_request_count: u32,
        "pipelineCacheRequestCount" => pipeline_cache_request_count: u32,
        "pipelineLayoutRequestCount" => pipeline_layout_request_count: u32,
        "renderPassRequestCount" => render_pass_request_count: u32,
        "graphicsPipelineRequestCount" => graphics_pipeline_request_count: u32,
        "computePipelineRequestCount" => compute_pipeline_request_count: u32,
        "descriptorSetLayoutRequestCount" => descriptor_set_layout_request_count: u32,
        "samplerRequestCount" => sampler_request_count: u32,
        "descriptorPoolRequestCount" => descriptor_pool_request_count: u32,
        "descriptorSetRequestCount" => descriptor_set_request_count: u32,
        "framebufferRequestCount" => framebuffer_request_count: u32,
        "commandPoolRequestCount" => command_pool_request_count: u32,
        "samplerYcbcrConversionRequestCount" => sampler_ycbcr_conversion_request_count: u32,
        "surfaceRequestCount" => surface_request_count: u32,
        "swapchainRequestCount" => swapchain_request_count: u32,
        "displayModeRequestCount" => display_mode_request_count: u32,
        "subpassDescriptionRequestCount" => subpass_description_request_count: u32,
        "attachmentDescriptionRequestCount" => attachment_description_request_count: u32,
        "descriptorSetLayoutBindingRequestCount" => descriptor_set_layout_binding_request_count: u32,
        "descriptorSetLayoutBindingLimit" => descriptor_set_layout_binding_limit: u32,
        "maxImageViewMipLevels" => max_image_view_mip_levels: u32,
        "maxImageViewArrayLayers" => max_image_view_array_layers: u32,
        "maxLayeredImageViewMipLevels" => max_layered_image_view_mip_levels: u32,
        "maxOcclusionQueriesPerPool" => max_occlusion_queries_per_pool: u32,
        "maxPipelineStatisticsQueriesPerPool" => max_pipeline_statistics_queries_per_pool: u32,
        "maxTimestampQueriesPerPool" => max_timestamp_queries_per_pool: u32,
        "maxImmutableSamplersPerDescriptorSetLayout" => max_immutable_samplers_per_descriptor_set_layout: u32,
    }
}

// ==================== Offline pipelines ====================

/// Length of a pipeline identifier
pub const UUID_SIZE: usize = 16;

vk_struct! {
    /// Identifies an offline-compiled pipeline in the pipeline cache
    pub struct PipelineOfflineCreateInfo("VkPipelineOfflineCreateInfo", PIPELINE_OFFLINE_CREATE_INFO) {
        "pipelineIdentifier" => pipeline_identifier: [u8; UUID_SIZE],
        "matchControl" => match_control: PipelineMatchControl,
        "poolEntrySize" => pool_entry_size: u64,
    }
}
