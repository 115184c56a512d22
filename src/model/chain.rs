//! Extension chains.
//!
//! An extensible structure keeps its `pNext` chain as an ordered [`Chain`] of
//! [`Extension`] values. On the wire each link is an object with its own
//! `sType` and `pNext`; the last link's `pNext` is `"NULL"`.
//!
//! Which structure may extend which parent is fixed per extension kind and
//! checked in both directions.

use super::device::{
    PhysicalDeviceSamplerYcbcrConversionFeatures, PhysicalDeviceSynchronization2Features,
    PhysicalDeviceVulkan11Features, PhysicalDeviceVulkanSC10Features, PipelineOfflineCreateInfo,
};
use super::pipeline::{
    PipelineDiscardRectangleStateCreateInfoEXT, PipelineShaderStageRequiredSubgroupSizeCreateInfo,
};
use super::render_pass::{
    AttachmentDescriptionStencilLayout, AttachmentReferenceStencilLayout,
    FragmentShadingRateAttachmentInfoKHR, RenderPassInputAttachmentAspectCreateInfo,
    RenderPassMultiviewCreateInfo, SubpassDescriptionDepthStencilResolve,
};
use super::sampler::{SamplerReductionModeCreateInfo, SamplerYcbcrConversionInfo};
use super::descriptor::DescriptorSetLayoutBindingFlagsCreateInfo;
use super::{StructureType, Tagged};
use crate::codec::{kind_of, Decoder, Encoder, Segment, NULL_TOKEN};
use crate::error::Result;
use serde_json::{Map, Value};

/// Members of a tagged structure, without `pNext`.
///
/// Chain links are written through this so the chain can attach its own
/// `pNext`.
pub trait Member: Sized {
    fn encode_members(&self, enc: &mut Encoder<'_>) -> Result<Map<String, Value>>;
    fn decode_members(obj: &Map<String, Value>, dec: &mut Decoder<'_>) -> Result<Self>;
}

/// A structure that can appear as a link of an extension chain
pub trait ExtensionKind: Tagged + Sized {
    fn from_extension(ext: &Extension) -> Option<&Self>;
}

/// Check the `sType` member of `obj`.
pub fn expect_structure_type(
    obj: &Map<String, Value>,
    expected: StructureType,
    dec: &mut Decoder<'_>,
) -> Result<()> {
    if !obj.contains_key("sType") {
        return Err(dec.error("Missing sType from JSON"));
    }
    let found: StructureType = dec.field(obj, "sType")?;
    if found != expected {
        return Err(dec.error(format!(
            "Unexpected structure type {}, expected {}",
            found, expected
        )));
    }
    Ok(())
}

macro_rules! extensions {
    ( $( $variant:ident($ty:ty) extends [ $( $parent:ident ),* $(,)? ] ),* $(,)? ) => {
        /// A structure reachable through a `pNext` chain.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Extension {
            $( $variant($ty), )*
        }

        impl Extension {
            pub fn structure_type(&self) -> StructureType {
                match self {
                    $( Extension::$variant(_) => <$ty as Tagged>::STRUCTURE_TYPE, )*
                }
            }

            /// Parents an extension of type `stype` may be chained to
            pub fn allowed_parents(stype: StructureType) -> Option<&'static [StructureType]> {
                $(
                    if stype == <$ty as Tagged>::STRUCTURE_TYPE {
                        return Some(&[ $( StructureType::$parent ),* ]);
                    }
                )*
                None
            }

            pub fn extends(&self, parent: StructureType) -> bool {
                Self::allowed_parents(self.structure_type())
                    .map(|parents| parents.contains(&parent))
                    .unwrap_or(false)
            }

            fn encode_members(&self, enc: &mut Encoder<'_>) -> Result<Map<String, Value>> {
                match self {
                    $( Extension::$variant(inner) => Member::encode_members(inner, enc), )*
                }
            }

            /// Decode a link of type `stype`; `None` for unsupported types
            fn decode_members(
                stype: StructureType,
                obj: &Map<String, Value>,
                dec: &mut Decoder<'_>,
            ) -> Result<Option<Extension>> {
                $(
                    if stype == <$ty as Tagged>::STRUCTURE_TYPE {
                        return <$ty as Member>::decode_members(obj, dec)
                            .map(|inner| Some(Extension::$variant(inner)));
                    }
                )*
                Ok(None)
            }
        }

        $(
            impl From<$ty> for Extension {
                fn from(inner: $ty) -> Self {
                    Extension::$variant(inner)
                }
            }

            impl ExtensionKind for $ty {
                fn from_extension(ext: &Extension) -> Option<&Self> {
                    match ext {
                        Extension::$variant(inner) => Some(inner),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )*
    };
}

extensions! {
    PipelineOfflineCreateInfo(PipelineOfflineCreateInfo)
        extends [GRAPHICS_PIPELINE_CREATE_INFO, COMPUTE_PIPELINE_CREATE_INFO],
    PipelineDiscardRectangleStateCreateInfoEXT(PipelineDiscardRectangleStateCreateInfoEXT)
        extends [GRAPHICS_PIPELINE_CREATE_INFO],
    PipelineShaderStageRequiredSubgroupSizeCreateInfo(PipelineShaderStageRequiredSubgroupSizeCreateInfo)
        extends [PIPELINE_SHADER_STAGE_CREATE_INFO],
    SamplerReductionModeCreateInfo(SamplerReductionModeCreateInfo)
        extends [SAMPLER_CREATE_INFO],
    SamplerYcbcrConversionInfo(SamplerYcbcrConversionInfo)
        extends [SAMPLER_CREATE_INFO],
    DescriptorSetLayoutBindingFlagsCreateInfo(DescriptorSetLayoutBindingFlagsCreateInfo)
        extends [DESCRIPTOR_SET_LAYOUT_CREATE_INFO],
    RenderPassInputAttachmentAspectCreateInfo(RenderPassInputAttachmentAspectCreateInfo)
        extends [RENDER_PASS_CREATE_INFO],
    RenderPassMultiviewCreateInfo(RenderPassMultiviewCreateInfo)
        extends [RENDER_PASS_CREATE_INFO],
    AttachmentDescriptionStencilLayout(AttachmentDescriptionStencilLayout)
        extends [ATTACHMENT_DESCRIPTION_2],
    AttachmentReferenceStencilLayout(AttachmentReferenceStencilLayout)
        extends [ATTACHMENT_REFERENCE_2],
    SubpassDescriptionDepthStencilResolve(SubpassDescriptionDepthStencilResolve)
        extends [SUBPASS_DESCRIPTION_2],
    FragmentShadingRateAttachmentInfoKHR(FragmentShadingRateAttachmentInfoKHR)
        extends [SUBPASS_DESCRIPTION_2],
    PhysicalDeviceVulkan11Features(PhysicalDeviceVulkan11Features)
        extends [PHYSICAL_DEVICE_FEATURES_2, DEVICE_CREATE_INFO],
    PhysicalDeviceVulkanSC10Features(PhysicalDeviceVulkanSC10Features)
        extends [PHYSICAL_DEVICE_FEATURES_2, DEVICE_CREATE_INFO],
    PhysicalDeviceSynchronization2Features(PhysicalDeviceSynchronization2Features)
        extends [PHYSICAL_DEVICE_FEATURES_2, DEVICE_CREATE_INFO],
    PhysicalDeviceSamplerYcbcrConversionFeatures(PhysicalDeviceSamplerYcbcrConversionFeatures)
        extends [PHYSICAL_DEVICE_FEATURES_2, DEVICE_CREATE_INFO],
}

/// Ordered extension chain of one structure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chain(pub Vec<Extension>);

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, ext: impl Into<Extension>) -> Self {
        self.0.push(ext.into());
        self
    }

    pub fn push(&mut self, ext: impl Into<Extension>) {
        self.0.push(ext.into());
    }

    /// First link of type `T`; later duplicates are shadowed
    pub fn find<T: ExtensionKind>(&self) -> Option<&T> {
        self.0.iter().find_map(T::from_extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode the chain as the `pNext` value of a `parent` structure.
    pub fn encode_chain(
        &self,
        parent: StructureType,
        parent_name: &str,
        enc: &mut Encoder<'_>,
    ) -> Result<Value> {
        self.encode_links(0, parent, parent_name, enc)
    }

    fn encode_links(
        &self,
        index: usize,
        parent: StructureType,
        parent_name: &str,
        enc: &mut Encoder<'_>,
    ) -> Result<Value> {
        let Some(ext) = self.0.get(index) else {
            return Ok(Value::from(NULL_TOKEN));
        };
        enc.scoped(Segment::Pointee, |enc| {
            let stype = ext.structure_type();
            if !ext.extends(parent) {
                return Err(enc.error(format!(
                    "Invalid structure type extending {}: {}",
                    parent_name, stype
                )));
            }
            if self.0[..index].iter().any(|e| e.structure_type() == stype) {
                enc.warn(format!("Duplicate {} in extension chain", stype));
            }
            let mut obj = ext.encode_members(enc)?;
            let next = enc.scoped(Segment::Field("pNext"), |enc| {
                self.encode_links(index + 1, parent, parent_name, enc)
            })?;
            obj.insert("pNext".to_string(), next);
            Ok(Value::Object(obj))
        })
    }

    /// Decode the `pNext` value of a `parent` structure.
    pub fn decode_chain(
        parent: StructureType,
        parent_name: &str,
        value: &Value,
        dec: &mut Decoder<'_>,
    ) -> Result<Chain> {
        let mut links = Vec::new();
        decode_links(parent, parent_name, value, dec, &mut links)?;
        Ok(Chain(links))
    }
}

fn decode_links(
    parent: StructureType,
    parent_name: &str,
    value: &Value,
    dec: &mut Decoder<'_>,
    links: &mut Vec<Extension>,
) -> Result<()> {
    if value.as_str() == Some(NULL_TOKEN) {
        return Ok(());
    }
    let Some(obj) = value.as_object() else {
        return Err(dec.error(format!(
            "Malformed pNext: expected an object or \"NULL\", found {}",
            kind_of(value)
        )));
    };
    dec.scoped(Segment::Pointee, |dec| {
        if !obj.contains_key("sType") {
            return Err(dec.error("Missing sType from JSON"));
        }
        let stype: StructureType = dec.field(obj, "sType")?;
        let ext = Extension::decode_members(stype, obj, dec)?
            .ok_or_else(|| dec.error(format!("Unsupported structure type: {}", stype)))?;
        if !ext.extends(parent) {
            return Err(dec.error(format!(
                "Invalid structure type extending {}: {}",
                parent_name, stype
            )));
        }
        if links.iter().any(|e| e.structure_type() == stype) {
            dec.warn(format!("Duplicate {} in extension chain", stype));
        }
        links.push(ext);
        let next = dec.member(obj, "pNext")?;
        dec.scoped(Segment::Field("pNext"), |dec| {
            decode_links(parent, parent_name, next, dec, links)
        })
    })
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Extension;
    type IntoIter = std::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
