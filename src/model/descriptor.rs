//! Descriptor set layouts and pipeline layouts.

use super::enums::DescriptorType;
use super::flags::{
    DescriptorBindingFlags, DescriptorSetLayoutCreateFlags, ReservedFlags, ShaderStageFlags,
};
use super::handle::{DescriptorSetLayout, Sampler};

vk_struct! {
    /// One binding of a descriptor set layout.
    ///
    /// Immutable samplers, when present, hold exactly `descriptorCount`
    /// entries.
    pub struct DescriptorSetLayoutBinding("VkDescriptorSetLayoutBinding") {
        "binding" => binding: u32,
        "descriptorType" => descriptor_type: DescriptorType,
        "descriptorCount" => descriptor_count: u32,
        "stageFlags" => stage_flags: ShaderStageFlags,
        ["descriptorCount"] "pImmutableSamplers" => immutable_samplers: Option<Vec<Sampler>>,
    }
}

vk_struct! {
    pub struct DescriptorSetLayoutCreateInfo("VkDescriptorSetLayoutCreateInfo", DESCRIPTOR_SET_LAYOUT_CREATE_INFO) chain {
        "flags" => flags: DescriptorSetLayoutCreateFlags,
        ["bindingCount"] "pBindings" => bindings: Vec<DescriptorSetLayoutBinding>,
    }
}

vk_struct! {
    pub struct DescriptorSetLayoutBindingFlagsCreateInfo(
        "VkDescriptorSetLayoutBindingFlagsCreateInfo",
        DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO
    ) {
        ["bindingCount"] "pBindingFlags" => binding_flags: Vec<DescriptorBindingFlags>,
    }
}

vk_struct! {
    pub struct PushConstantRange("VkPushConstantRange") {
        "stageFlags" => stage_flags: ShaderStageFlags,
        "offset" => offset: u32,
        "size" => size: u32,
    }
}

vk_struct! {
    pub struct PipelineLayoutCreateInfo("VkPipelineLayoutCreateInfo", PIPELINE_LAYOUT_CREATE_INFO) chain {
        "flags" => flags: ReservedFlags,
        ["setLayoutCount"] "pSetLayouts" => set_layouts: Vec<DescriptorSetLayout>,
        ["pushConstantRangeCount"] "pPushConstantRanges" => push_constant_ranges: Vec<PushConstantRange>,
    }
}

impl DescriptorSetLayoutBinding {
    /// Non-null immutable samplers of this binding
    pub fn samplers(&self) -> impl Iterator<Item = Sampler> + '_ {
        self.immutable_samplers
            .iter()
            .flatten()
            .copied()
            .filter(|s| !s.is_null())
    }
}

impl DescriptorSetLayoutCreateInfo {
    /// Largest binding number plus one.
    ///
    /// A layout without bindings reports 0 rather than 1, so empty layouts
    /// do not raise `descriptorSetLayoutBindingLimit`.
    pub fn binding_limit(&self) -> u32 {
        self.bindings
            .iter()
            .map(|b| b.binding.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Largest `descriptorCount` among bindings with immutable samplers
    pub fn max_immutable_samplers(&self) -> u32 {
        self.bindings
            .iter()
            .filter(|b| b.immutable_samplers.is_some())
            .map(|b| b.descriptor_count)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder};
    use crate::model::handle::Handle;
    use crate::model::ObjectCategory;
    use crate::names::NameRegistry;
    use serde_json::json;

    fn layout() -> DescriptorSetLayoutCreateInfo {
        DescriptorSetLayoutCreateInfo {
            bindings: vec![
                DescriptorSetLayoutBinding {
                    binding: 0,
                    descriptor_type: DescriptorType::UNIFORM_BUFFER,
                    descriptor_count: 1,
                    stage_flags: ShaderStageFlags::VERTEX,
                    immutable_samplers: None,
                },
                DescriptorSetLayoutBinding {
                    binding: 3,
                    descriptor_type: DescriptorType::COMBINED_IMAGE_SAMPLER,
                    descriptor_count: 2,
                    stage_flags: ShaderStageFlags::FRAGMENT,
                    immutable_samplers: Some(vec![Sampler::from_raw(7), Sampler::from_raw(8)]),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_binding_limits() {
        let layout = layout();
        assert_eq!(layout.binding_limit(), 4);
        assert_eq!(layout.max_immutable_samplers(), 2);
        assert_eq!(DescriptorSetLayoutCreateInfo::default().binding_limit(), 0);
    }

    #[test]
    fn test_immutable_samplers_by_name() {
        let mut registry = NameRegistry::new();
        registry.intern(ObjectCategory::Sampler, Handle(7));
        registry.intern(ObjectCategory::Sampler, Handle(8));

        let value = Encoder::with_registry(&registry).encode(&layout()).unwrap();
        assert_eq!(value["bindingCount"], json!(2));
        assert_eq!(value["pBindings"][0]["pImmutableSamplers"], json!("NULL"));
        assert_eq!(
            value["pBindings"][1]["pImmutableSamplers"],
            json!(["ImmutableSampler1", "ImmutableSampler2"])
        );

        let decoded: DescriptorSetLayoutCreateInfo =
            Decoder::with_registry(&registry).decode(&value).unwrap();
        assert_eq!(decoded, layout());
    }

    #[test]
    fn test_immutable_sampler_count_checked() {
        let mut value = Encoder::new().encode(&layout()).unwrap();
        value["pBindings"][1]["descriptorCount"] = json!(3);
        let err = Decoder::new()
            .decode::<DescriptorSetLayoutCreateInfo>(&value)
            .unwrap_err();
        assert!(err.to_string().starts_with("pBindings[1]->descriptorCount"));
    }
}
