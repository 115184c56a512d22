//! Counter and limit identifiers, and the snapshot record they feed.

use crate::model::DeviceObjectReservationCreateInfo;
use serde::{Deserialize, Serialize};

macro_rules! reservation_fields {
    (
        counters { $( $cvariant:ident => $cfield:ident : $cmember:literal, )* }
        limits { $( $lvariant:ident => $lfield:ident : $lmember:literal, )* }
    ) => {
        /// Object category with a live count and a high-water mark.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Counter {
            $( $cvariant, )*
        }

        impl Counter {
            pub const ALL: &'static [Counter] = &[ $( Counter::$cvariant, )* ];

            #[inline]
            pub fn index(self) -> usize {
                self as usize
            }

            /// `VkDeviceObjectReservationCreateInfo` member fed by this counter
            pub fn member(self) -> &'static str {
                match self {
                    $( Counter::$cvariant => $cmember, )*
                }
            }
        }

        /// Per-object maximum, independent of live counts.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Limit {
            $( $lvariant, )*
        }

        impl Limit {
            pub const ALL: &'static [Limit] = &[ $( Limit::$lvariant, )* ];

            #[inline]
            pub fn index(self) -> usize {
                self as usize
            }

            pub fn member(self) -> &'static str {
                match self {
                    $( Limit::$lvariant => $lmember, )*
                }
            }
        }

        /// Peak counts of one device at a point in time.
        ///
        /// Request counts hold high-water marks, never live counts.
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ReservationSnapshot {
            $( #[serde(rename = $cmember)] pub $cfield: u32, )*
            $( #[serde(rename = $lmember)] pub $lfield: u32, )*
        }

        impl ReservationSnapshot {
            pub(crate) fn from_values(high_water: &[u32], limits: &[u32]) -> Self {
                Self {
                    $( $cfield: high_water[Counter::$cvariant.index()], )*
                    $( $lfield: limits[Limit::$lvariant.index()], )*
                }
            }

            pub fn request_count(&self, counter: Counter) -> u32 {
                match counter {
                    $( Counter::$cvariant => self.$cfield, )*
                }
            }

            pub fn limit(&self, limit: Limit) -> u32 {
                match limit {
                    $( Limit::$lvariant => self.$lfield, )*
                }
            }

            /// Every member with its value, request counts first
            pub fn members(&self) -> Vec<(&'static str, u32)> {
                vec![
                    $( ($cmember, self.$cfield), )*
                    $( ($lmember, self.$lfield), )*
                ]
            }

            /// The snapshot as a create info ready for encoding.
            ///
            /// Pipeline cache and pool sizes are not tracked and stay empty.
            pub fn to_create_info(&self) -> DeviceObjectReservationCreateInfo {
                DeviceObjectReservationCreateInfo {
                    $( $cfield: self.$cfield, )*
                    $( $lfield: self.$lfield, )*
                    ..Default::default()
                }
            }
        }
    };
}

reservation_fields! {
    counters {
        Semaphore => semaphore_request_count: "semaphoreRequestCount",
        CommandBuffer => command_buffer_request_count: "commandBufferRequestCount",
        Fence => fence_request_count: "fenceRequestCount",
        DeviceMemory => device_memory_request_count: "deviceMemoryRequestCount",
        Buffer => buffer_request_count: "bufferRequestCount",
        Image => image_request_count: "imageRequestCount",
        Event => event_request_count: "eventRequestCount",
        QueryPool => query_pool_request_count: "queryPoolRequestCount",
        BufferView => buffer_view_request_count: "bufferViewRequestCount",
        ImageView => image_view_request_count: "imageViewRequestCount",
        LayeredImageView => layered_image_view_request_count: "layeredImageViewRequestCount",
        PipelineCache => pipeline_cache_request_count: "pipelineCacheRequestCount",
        PipelineLayout => pipeline_layout_request_count: "pipelineLayoutRequestCount",
        RenderPass => render_pass_request_count: "renderPassRequestCount",
        GraphicsPipeline => graphics_pipeline_request_count: "graphicsPipelineRequestCount",
        ComputePipeline => compute_pipeline_request_count: "computePipelineRequestCount",
        DescriptorSetLayout => descriptor_set_layout_request_count: "descriptorSetLayoutRequestCount",
        Sampler => sampler_request_count: "samplerRequestCount",
        DescriptorPool => descriptor_pool_request_count: "descriptorPoolRequestCount",
        DescriptorSet => descriptor_set_request_count: "descriptorSetRequestCount",
        Framebuffer => framebuffer_request_count: "framebufferRequestCount",
        CommandPool => command_pool_request_count: "commandPoolRequestCount",
        SamplerYcbcrConversion => sampler_ycbcr_conversion_request_count: "samplerYcbcrConversionRequestCount",
        Swapchain => swapchain_request_count: "swapchainRequestCount",
        SubpassDescription => subpass_description_request_count: "subpassDescriptionRequestCount",
        AttachmentDescription => attachment_description_request_count: "attachmentDescriptionRequestCount",
        DescriptorSetLayoutBinding => descriptor_set_layout_binding_request_count: "descriptorSetLayoutBindingRequestCount",
    }
    limits {
        DescriptorSetLayoutBindingLimit => descriptor_set_layout_binding_limit: "descriptorSetLayoutBindingLimit",
        MaxImageViewMipLevels => max_image_view_mip_levels: "maxImageViewMipLevels",
        MaxImageViewArrayLayers => max_image_view_array_layers: "maxImageViewArrayLayers",
        MaxLayeredImageViewMipLevels => max_layered_image_view_mip_levels: "maxLayeredImageViewMipLevels",
        MaxOcclusionQueriesPerPool => max_occlusion_queries_per_pool: "maxOcclusionQueriesPerPool",
        MaxPipelineStatisticsQueriesPerPool => max_pipeline_statistics_queries_per_pool: "maxPipelineStatisticsQueriesPerPool",
        MaxTimestampQueriesPerPool => max_timestamp_queries_per_pool: "maxTimestampQueriesPerPool",
        MaxImmutableSamplersPerDescriptorSetLayout => max_immutable_samplers_per_descriptor_set_layout: "maxImmutableSamplersPerDescriptorSetLayout",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names() {
        assert_eq!(Counter::ALL.len(), 27);
        assert_eq!(Limit::ALL.len(), 8);
        assert_eq!(Counter::LayeredImageView.member(), "layeredImageViewRequestCount");
        assert_eq!(Limit::MaxTimestampQueriesPerPool.index(), 6);
    }

    #[test]
    fn test_snapshot_serializes_with_member_names() {
        let snapshot = ReservationSnapshot {
            sampler_request_count: 4,
            max_image_view_mip_levels: 11,
            ..Default::default()
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["samplerRequestCount"], 4);
        assert_eq!(value["maxImageViewMipLevels"], 11);

        let back: ReservationSnapshot =
            serde_json::from_str(r#"{ "fenceRequestCount": 2 }"#).unwrap();
        assert_eq!(back.request_count(Counter::Fence), 2);
        assert_eq!(back.limit(Limit::MaxImageViewArrayLayers), 0);
    }

    #[test]
    fn test_to_create_info() {
        let snapshot = ReservationSnapshot {
            descriptor_set_layout_binding_request_count: 9,
            descriptor_set_layout_binding_limit: 5,
            ..Default::default()
        };
        let info = snapshot.to_create_info();
        assert_eq!(info.descriptor_set_layout_binding_request_count, 9);
        assert_eq!(info.descriptor_set_layout_binding_limit, 5);
        assert_eq!(info.surface_request_count, 0);
        assert!(info.pipeline_pool_sizes.is_empty());
    }
}
