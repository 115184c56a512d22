//! Root structures: the kinds that can be encoded or decoded on their own.

use super::descriptor::{DescriptorSetLayoutCreateInfo, PipelineLayoutCreateInfo};
use super::device::{
    DeviceObjectReservationCreateInfo, PhysicalDeviceFeatures2, PipelineOfflineCreateInfo,
};
use super::pipeline::{ComputePipelineCreateInfo, GraphicsPipelineCreateInfo, ShaderModuleCreateInfo};
use super::render_pass::{RenderPassCreateInfo, RenderPassCreateInfo2};
use super::sampler::{SamplerCreateInfo, SamplerYcbcrConversionCreateInfo};
use super::{StructureType, Tagged, VkStructure};
use crate::codec::{Decoder, Encoder, JsonField};
use crate::error::Result;
use serde_json::Value;

macro_rules! root_structures {
    ( $( $variant:ident($ty:ty) ),* $(,)? ) => {
        /// Any root structure, discriminated by `sType`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Structure {
            $( $variant($ty), )*
        }

        impl Structure {
            pub fn structure_type(&self) -> StructureType {
                match self {
                    $( Structure::$variant(_) => <$ty as Tagged>::STRUCTURE_TYPE, )*
                }
            }

            /// API type name, e.g. `VkSamplerCreateInfo`
            pub fn vk_name(&self) -> &'static str {
                match self {
                    $( Structure::$variant(_) => <$ty as VkStructure>::VK_NAME, )*
                }
            }

            /// Whether `stype` names a root structure
            pub fn is_root(stype: StructureType) -> bool {
                $( if stype == <$ty as Tagged>::STRUCTURE_TYPE { return true; } )*
                false
            }
        }

        impl JsonField for Structure {
            fn to_json(&self, enc: &mut Encoder<'_>) -> Result<Value> {
                match self {
                    $( Structure::$variant(inner) => inner.to_json(enc), )*
                }
            }

            fn from_json(value: &Value, dec: &mut Decoder<'_>) -> Result<Self> {
                let obj = dec.object(value)?;
                if !obj.contains_key("sType") {
                    return Err(dec.error("Missing sType from JSON"));
                }
                let stype: StructureType = dec.field(obj, "sType")?;
                $(
                    if stype == <$ty as Tagged>::STRUCTURE_TYPE {
                        return <$ty as JsonField>::from_json(value, dec).map(Structure::$variant);
                    }
                )*
                Err(dec.error(format!("Unsupported structure type: {}", stype)))
            }
        }

        $(
            impl From<$ty> for Structure {
                fn from(inner: $ty) -> Self {
                    Structure::$variant(inner)
                }
            }
        )*
    };
}

root_structures! {
    GraphicsPipeline(GraphicsPipelineCreateInfo),
    ComputePipeline(ComputePipelineCreateInfo),
    SamplerYcbcrConversion(SamplerYcbcrConversionCreateInfo),
    Sampler(SamplerCreateInfo),
    DescriptorSetLayout(DescriptorSetLayoutCreateInfo),
    PipelineLayout(PipelineLayoutCreateInfo),
    DeviceFeatures(PhysicalDeviceFeatures2),
    RenderPass(RenderPassCreateInfo),
    RenderPass2(RenderPassCreateInfo2),
    ShaderModule(ShaderModuleCreateInfo),
    DeviceObjectReservation(DeviceObjectReservationCreateInfo),
    PipelineOffline(PipelineOfflineCreateInfo),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_stype() {
        let value = json!({
            "sType": "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
            "pNext": "NULL",
            "flags": 0,
            "setLayoutCount": 0,
            "pSetLayouts": "NULL",
            "pushConstantRangeCount": 0,
            "pPushConstantRanges": "NULL"
        });
        let structure: Structure = Decoder::new().decode(&value).unwrap();
        assert_eq!(structure.structure_type(), StructureType::PIPELINE_LAYOUT_CREATE_INFO);
        assert_eq!(structure.vk_name(), "VkPipelineLayoutCreateInfo");
        assert_eq!(Encoder::new().encode(&structure).unwrap(), value);
    }

    #[test]
    fn test_unsupported_root() {
        let err = Decoder::new()
            .decode::<Structure>(&json!({
                "sType": "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
                "pNext": "NULL"
            }))
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported structure type"));
        assert!(!Structure::is_root(StructureType::SAMPLER_REDUCTION_MODE_CREATE_INFO));
        assert!(Structure::is_root(StructureType::PIPELINE_OFFLINE_CREATE_INFO));
    }
}
