//! Test data builders for creating model structures

use vksc_pipeline_json::document::{ComputePipelineState, PipelineDocument, ShaderFileName};
use vksc_pipeline_json::model::{
    ComputePipelineCreateInfo, DescriptorSetLayoutBinding, DescriptorSetLayoutCreateInfo,
    DescriptorType, Filter, PipelineLayout, PipelineShaderStageCreateInfo, Sampler,
    SamplerCreateInfo, SamplerYcbcrConversion, SamplerYcbcrConversionInfo, ShaderModule,
    ShaderStageFlags,
};

/// Builder for `VkSamplerCreateInfo`
pub struct SamplerBuilder {
    info: SamplerCreateInfo,
}

impl SamplerBuilder {
    pub fn new() -> Self {
        Self {
            info: SamplerCreateInfo {
                mag_filter: Filter::LINEAR,
                min_filter: Filter::LINEAR,
                max_anisotropy: 1.0,
                ..Default::default()
            },
        }
    }

    pub fn max_lod(mut self, max_lod: f32) -> Self {
        self.info.max_lod = max_lod;
        self
    }

    pub fn ycbcr(mut self, conversion: SamplerYcbcrConversion) -> Self {
        self.info.next.push(SamplerYcbcrConversionInfo { conversion });
        self
    }

    pub fn build(self) -> SamplerCreateInfo {
        self.info
    }
}

/// Builder for `VkDescriptorSetLayoutCreateInfo`
pub struct DescriptorSetLayoutBuilder {
    bindings: Vec<DescriptorSetLayoutBinding>,
}

impl DescriptorSetLayoutBuilder {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn binding(mut self, binding: u32, descriptor_type: DescriptorType, count: u32) -> Self {
        self.bindings.push(DescriptorSetLayoutBinding {
            binding,
            descriptor_type,
            descriptor_count: count,
            stage_flags: ShaderStageFlags::COMPUTE,
            immutable_samplers: None,
        });
        self
    }

    pub fn sampler_binding(
        mut self,
        binding: u32,
        descriptor_type: DescriptorType,
        samplers: &[Sampler],
    ) -> Self {
        self.bindings.push(DescriptorSetLayoutBinding {
            binding,
            descriptor_type,
            descriptor_count: samplers.len() as u32,
            stage_flags: ShaderStageFlags::COMPUTE,
            immutable_samplers: Some(samplers.to_vec()),
        });
        self
    }

    pub fn build(self) -> DescriptorSetLayoutCreateInfo {
        DescriptorSetLayoutCreateInfo {
            bindings: self.bindings,
            ..Default::default()
        }
    }
}

/// Builder for `VkComputePipelineCreateInfo`
pub struct ComputePipelineBuilder {
    info: ComputePipelineCreateInfo,
}

impl ComputePipelineBuilder {
    pub fn new() -> Self {
        Self {
            info: ComputePipelineCreateInfo {
                stage: PipelineShaderStageCreateInfo {
                    stage: ShaderStageFlags::COMPUTE,
                    name: "main".to_string(),
                    ..Default::default()
                },
                base_pipeline_index: -1,
                ..Default::default()
            },
        }
    }

    pub fn layout(mut self, layout: PipelineLayout) -> Self {
        self.info.layout = layout;
        self
    }

    pub fn module(mut self, module: ShaderModule) -> Self {
        self.info.stage.module = module;
        self
    }

    pub fn entry_point(mut self, name: &str) -> Self {
        self.info.stage.name = name.to_string();
        self
    }

    pub fn build(self) -> ComputePipelineCreateInfo {
        self.info
    }
}

/// Builder for whole compute documents
pub struct ComputeDocumentBuilder {
    state: ComputePipelineState,
}

impl ComputeDocumentBuilder {
    pub fn new() -> Self {
        let mut state = ComputePipelineState::default();
        state.pipeline = ComputePipelineBuilder::new().build();
        state.resources.shader_file_names = vec![ShaderFileName::new(
            ShaderStageFlags::COMPUTE,
            "app_device_0_pipeline_1.compute.spv",
        )];
        Self { state }
    }

    pub fn pipeline(mut self, pipeline: ComputePipelineCreateInfo) -> Self {
        self.state.pipeline = pipeline;
        self
    }

    pub fn shader_file(mut self, filename: &str) -> Self {
        self.state.resources.shader_file_names =
            vec![ShaderFileName::new(ShaderStageFlags::COMPUTE, filename)];
        self
    }

    pub fn build(self) -> PipelineDocument {
        PipelineDocument::compute(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_set_layout_builder() {
        let info = DescriptorSetLayoutBuilder::new()
            .binding(0, DescriptorType::UNIFORM_BUFFER, 1)
            .sampler_binding(1, DescriptorType::SAMPLER, &[Sampler::from_raw(7)])
            .build();

        assert_eq!(info.bindings.len(), 2);
        assert_eq!(info.bindings[0].immutable_samplers, None);
        assert_eq!(info.bindings[1].descriptor_count, 1);
    }

    #[test]
    fn test_compute_document_builder() {
        let doc = ComputeDocumentBuilder::new().shader_file("x.spv").build();
        assert_eq!(doc.resources().shader_file_names[0].filename, "x.spv");
        assert!(!doc.is_graphics());
    }
}
