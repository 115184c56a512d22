//! Pipeline capture.
//!
//! [`CaptureStore`] keeps the create infos of every object a pipeline can
//! depend on, per device, as the interception layer reports them. When a
//! pipeline is captured, its dependency graph is walked and flattened into a
//! self-contained [`PipelineDocument`]: shared objects move into named side
//! tables and every reference is rewritten to point into them.

mod artifacts;
mod features;

pub use artifacts::{pipeline_json_file_name, shader_file_name, stage_suffix, ArtifactWriter};
pub use features::{filter_device_features, DeviceChainEntry};

use crate::codec::Bytes;
use crate::config::CaptureSettings;
use crate::document::{
    side_table_handle, ComputePipelineState, GraphicsPipelineState, Named, PipelineDocument,
    PipelineResources, RenderPassState, ShaderFileName,
};
use crate::error::{PcJsonError, Result};
use crate::model::{
    ComputePipelineCreateInfo, DescriptorSetLayout, DescriptorSetLayoutCreateInfo,
    DescriptorType, DeviceId, Extension, GraphicsPipelineCreateInfo, Handle, ObjectCategory,
    ObjectHandle, PhysicalDeviceFeatures, Pipeline, PipelineLayout, PipelineLayoutCreateInfo,
    PipelineShaderStageCreateInfo, RenderPass, Sampler, SamplerCreateInfo, SamplerYcbcrConversion,
    SamplerYcbcrConversionCreateInfo, ShaderModule, ShaderModuleCreateInfo,
};
use crate::names::NameRegistry;
use crate::reservation::ReservationTracker;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::PathBuf;

/// Create info of a pipeline, either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineCreateInfo {
    Graphics(GraphicsPipelineCreateInfo),
    Compute(ComputePipelineCreateInfo),
}

impl PipelineCreateInfo {
    pub fn layout(&self) -> PipelineLayout {
        match self {
            PipelineCreateInfo::Graphics(info) => info.layout,
            PipelineCreateInfo::Compute(info) => info.layout,
        }
    }
}

impl From<GraphicsPipelineCreateInfo> for PipelineCreateInfo {
    fn from(info: GraphicsPipelineCreateInfo) -> Self {
        PipelineCreateInfo::Graphics(info)
    }
}

impl From<ComputePipelineCreateInfo> for PipelineCreateInfo {
    fn from(info: ComputePipelineCreateInfo) -> Self {
        PipelineCreateInfo::Compute(info)
    }
}

/// What a device was created with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceRecord {
    pub enabled_extensions: Vec<String>,
    pub enabled_features: Option<PhysicalDeviceFeatures>,
    pub chain: Vec<DeviceChainEntry>,
}

/// SPIR-V of one captured stage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderBinary {
    pub filename: String,
    pub code: Bytes,
}

/// A captured pipeline and the shader binaries its document names.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    pub process: String,
    pub device: DeviceId,
    pub pipeline_index: u32,
    pub document: PipelineDocument,
    pub shaders: Vec<ShaderBinary>,
}

#[derive(Debug, Default)]
struct DeviceObjects {
    record: DeviceRecord,
    ycbcr_conversions: HashMap<SamplerYcbcrConversion, SamplerYcbcrConversionCreateInfo>,
    samplers: HashMap<Sampler, SamplerCreateInfo>,
    set_layouts: HashMap<DescriptorSetLayout, DescriptorSetLayoutCreateInfo>,
    pipeline_layouts: HashMap<PipelineLayout, PipelineLayoutCreateInfo>,
    render_passes: HashMap<RenderPass, RenderPassState>,
    shader_modules: HashMap<ShaderModule, ShaderModuleCreateInfo>,
    pipelines: HashMap<Pipeline, (u32, PipelineCreateInfo)>,
    next_pipeline_index: u32,
}

fn lookup<'a, H, T>(map: &'a HashMap<H, T>, handle: H) -> Result<&'a T>
where
    H: ObjectHandle,
{
    map.get(&handle).ok_or_else(|| {
        PcJsonError::Capture(format!(
            "{} {:?} is not a live object of this device",
            H::CATEGORY,
            handle.handle()
        ))
    })
}

fn record<H: Eq + Hash, T>(map: &mut HashMap<H, T>, handle: H, info: T, what: &str) {
    if map.insert(handle, info).is_some() {
        tracing::warn!("{} recorded twice, keeping the newer create info", what);
    }
}

/// Forget `device` in the store and the tracker.
///
/// With [`CaptureSettings::reservation_headers`] set, the final reservation
/// snapshot of the device is written as a header; its path is returned.
pub fn release_device(
    store: &mut CaptureStore,
    tracker: &ReservationTracker,
    writer: &ArtifactWriter,
    settings: &CaptureSettings,
    device: DeviceId,
) -> Result<Option<PathBuf>> {
    if !store.remove_device(device) {
        tracing::debug!("Device {} had no recorded objects", device);
    }
    let Some(snapshot) = tracker.remove_device(device) else {
        tracing::warn!("Device {} was not tracked, no reservation header", device);
        return Ok(None);
    };
    if !settings.reservation_headers {
        return Ok(None);
    }
    writer
        .write_reservation_header(store.process(), device, &snapshot)
        .map(Some)
}

/// Object store of every observed device.
#[derive(Debug, Default)]
pub struct CaptureStore {
    process: String,
    devices: HashMap<DeviceId, DeviceObjects>,
}

impl CaptureStore {
    /// `process` prefixes every artifact name.
    pub fn new(process: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            devices: HashMap::new(),
        }
    }

    /// Store named after the configured process
    pub fn from_settings(settings: &CaptureSettings) -> Self {
        Self::new(settings.process_name())
    }

    pub fn process(&self) -> &str {
        &self.process
    }

    pub fn record_device(&mut self, device: DeviceId, record: DeviceRecord) {
        tracing::debug!(
            "Device {} created with {} extensions",
            device,
            record.enabled_extensions.len()
        );
        self.devices.entry(device).or_default().record = record;
    }

    /// Forget a device and every object recorded for it
    pub fn remove_device(&mut self, device: DeviceId) -> bool {
        self.devices.remove(&device).is_some()
    }

    fn objects_mut(&mut self, device: DeviceId) -> &mut DeviceObjects {
        self.devices.entry(device).or_insert_with(|| {
            tracing::warn!("Object recorded for unknown device {}", device);
            DeviceObjects::default()
        })
    }

    pub fn record_ycbcr_conversion(
        &mut self,
        device: DeviceId,
        handle: SamplerYcbcrConversion,
        info: SamplerYcbcrConversionCreateInfo,
    ) {
        let objects = self.objects_mut(device);
        record(&mut objects.ycbcr_conversions, handle, info, "Y'CbCr conversion");
    }

    pub fn record_sampler(&mut self, device: DeviceId, handle: Sampler, info: SamplerCreateInfo) {
        let objects = self.objects_mut(device);
        record(&mut objects.samplers, handle, info, "Sampler");
    }

    pub fn record_descriptor_set_layout(
        &mut self,
        device: DeviceId,
        handle: DescriptorSetLayout,
        info: DescriptorSetLayoutCreateInfo,
    ) {
        let objects = self.objects_mut(device);
        record(&mut objects.set_layouts, handle, info, "Descriptor set layout");
    }

    pub fn record_pipeline_layout(
        &mut self,
        device: DeviceId,
        handle: PipelineLayout,
        info: PipelineLayoutCreateInfo,
    ) {
        let objects = self.objects_mut(device);
        record(&mut objects.pipeline_layouts, handle, info, "Pipeline layout");
    }

    pub fn record_render_pass(
        &mut self,
        device: DeviceId,
        handle: RenderPass,
        info: impl Into<RenderPassState>,
    ) {
        let objects = self.objects_mut(device);
        record(&mut objects.render_passes, handle, info.into(), "Render pass");
    }

    pub fn record_shader_module(
        &mut self,
        device: DeviceId,
        handle: ShaderModule,
        info: ShaderModuleCreateInfo,
    ) {
        let objects = self.objects_mut(device);
        record(&mut objects.shader_modules, handle, info, "Shader module");
    }

    /// Record a pipeline and return its per-device index, counted from 1.
    pub fn record_pipeline(
        &mut self,
        device: DeviceId,
        handle: Pipeline,
        info: impl Into<PipelineCreateInfo>,
    ) -> u32 {
        let objects = self.objects_mut(device);
        objects.next_pipeline_index += 1;
        let index = objects.next_pipeline_index;
        objects.pipelines.insert(handle, (index, info.into()));
        index
    }

    /// Forget one object; returns whether it was known.
    pub fn remove_object(
        &mut self,
        device: DeviceId,
        category: ObjectCategory,
        handle: impl Into<Handle>,
    ) -> bool {
        let Some(objects) = self.devices.get_mut(&device) else {
            tracing::error!("Destroying {} on unknown device {}", category, device);
            return false;
        };
        let handle = handle.into();
        match category {
            ObjectCategory::SamplerYcbcrConversion => objects
                .ycbcr_conversions
                .remove(&SamplerYcbcrConversion::from_handle(handle))
                .is_some(),
            ObjectCategory::Sampler => objects
                .samplers
                .remove(&Sampler::from_handle(handle))
                .is_some(),
            ObjectCategory::DescriptorSetLayout => objects
                .set_layouts
                .remove(&DescriptorSetLayout::from_handle(handle))
                .is_some(),
            ObjectCategory::PipelineLayout => objects
                .pipeline_layouts
                .remove(&PipelineLayout::from_handle(handle))
                .is_some(),
            ObjectCategory::RenderPass => objects
                .render_passes
                .remove(&RenderPass::from_handle(handle))
                .is_some(),
            ObjectCategory::ShaderModule => objects
                .shader_modules
                .remove(&ShaderModule::from_handle(handle))
                .is_some(),
            ObjectCategory::Pipeline => objects
                .pipelines
                .remove(&Pipeline::from_handle(handle))
                .is_some(),
        }
    }

    /// Flatten `pipeline` and everything it references into a document.
    ///
    /// Side-table entries are named in first-touch order: set layouts in
    /// layout order, each followed by the samplers of its bindings and then
    /// their conversions. Every dependency must still be recorded.
    pub fn capture_for_pipeline(&self, device: DeviceId, pipeline: Pipeline) -> Result<Capture> {
        let objects = self
            .devices
            .get(&device)
            .ok_or_else(|| PcJsonError::Capture(format!("Unknown device {}", device)))?;
        let (pipeline_index, info) = lookup(&objects.pipelines, pipeline)?;
        let pipeline_index = *pipeline_index;

        let mut tables = SideTables::new(objects);
        let mut pipeline_layout = lookup(&objects.pipeline_layouts, info.layout())?.clone();
        for set_layout in pipeline_layout.set_layouts.iter_mut() {
            *set_layout = tables.set_layout(*set_layout)?;
        }
        let mut resources = tables.finish();
        resources.pipeline_layout = pipeline_layout;
        resources.device_features = Some(filter_device_features(
            objects.record.enabled_features.as_ref(),
            &objects.record.chain,
        ));

        let mut shaders = Vec::new();
        let mut capture_stage = |stage: &PipelineShaderStageCreateInfo| -> Result<()> {
            let module = lookup(&objects.shader_modules, stage.module)?;
            let filename = shader_file_name(&self.process, device, pipeline_index, stage.stage)?;
            resources
                .shader_file_names
                .push(ShaderFileName::new(stage.stage, filename.clone()));
            shaders.push(ShaderBinary {
                filename,
                code: module.code.clone(),
            });
            Ok(())
        };

        let mut document = match info {
            PipelineCreateInfo::Compute(info) => {
                capture_stage(&info.stage)?;
                PipelineDocument::compute(ComputePipelineState {
                    resources,
                    pipeline: info.clone(),
                })
            }
            PipelineCreateInfo::Graphics(info) => {
                for stage in &info.stages {
                    capture_stage(stage)?;
                }
                let render_pass = lookup(&objects.render_passes, info.render_pass)?.clone();
                PipelineDocument::graphics(GraphicsPipelineState {
                    resources,
                    pipeline: info.clone(),
                    render_pass,
                })
            }
        };
        document.enabled_extensions = objects.record.enabled_extensions.clone();
        document.eliminate_irrelevant_handles();

        tracing::debug!(
            "Captured pipeline {} of device {}: {} set layouts, {} samplers, {} conversions",
            pipeline_index,
            device,
            document.resources().descriptor_set_layouts.len(),
            document.resources().immutable_samplers.len(),
            document.resources().ycbcr_samplers.len(),
        );
        Ok(Capture {
            process: self.process.clone(),
            device,
            pipeline_index,
            document,
            shaders,
        })
    }
}

/// Side tables under construction for one capture.
struct SideTables<'a> {
    objects: &'a DeviceObjects,
    registry: NameRegistry,
    resources: PipelineResources,
}

impl<'a> SideTables<'a> {
    fn new(objects: &'a DeviceObjects) -> Self {
        Self {
            objects,
            registry: NameRegistry::new(),
            resources: PipelineResources::default(),
        }
    }

    fn finish(self) -> PipelineResources {
        self.resources
    }

    /// Index of an already interned entry
    fn existing<H: ObjectHandle, T>(&self, table: &[Named<T>], handle: H) -> Option<usize> {
        let name = self.registry.name_of(H::CATEGORY, handle.handle())?;
        table.iter().position(|entry| entry.name == name)
    }

    fn set_layout(&mut self, handle: DescriptorSetLayout) -> Result<DescriptorSetLayout> {
        if let Some(index) = self.existing(&self.resources.descriptor_set_layouts, handle) {
            return Ok(side_table_handle(index));
        }
        let mut body = lookup(&self.objects.set_layouts, handle)?.clone();
        let name = self
            .registry
            .intern(ObjectCategory::DescriptorSetLayout, handle.handle())
            .to_string();
        let index = self.resources.descriptor_set_layouts.len();
        self.resources
            .descriptor_set_layouts
            .push(Named::new(name, DescriptorSetLayoutCreateInfo::default()));

        for binding in body.bindings.iter_mut() {
            let takes_samplers = binding.descriptor_type == DescriptorType::SAMPLER
                || binding.descriptor_type == DescriptorType::COMBINED_IMAGE_SAMPLER;
            if !takes_samplers {
                binding.immutable_samplers = None;
                continue;
            }
            if let Some(samplers) = binding.immutable_samplers.as_mut() {
                for sampler in samplers.iter_mut().filter(|s| !s.is_null()) {
                    *sampler = self.sampler(*sampler)?;
                }
            }
        }
        self.resources.descriptor_set_layouts[index].value = body;
        Ok(side_table_handle(index))
    }

    fn sampler(&mut self, handle: Sampler) -> Result<Sampler> {
        if let Some(index) = self.existing(&self.resources.immutable_samplers, handle) {
            return Ok(side_table_handle(index));
        }
        let mut body = lookup(&self.objects.samplers, handle)?.clone();
        let name = self.registry.intern(ObjectCategory::Sampler, handle.handle()).to_string();
        let index = self.resources.immutable_samplers.len();
        self.resources
            .immutable_samplers
            .push(Named::new(name, SamplerCreateInfo::default()));

        for ext in body.next.0.iter_mut() {
            if let Extension::SamplerYcbcrConversionInfo(info) = ext {
                if !info.conversion.is_null() {
                    info.conversion = self.ycbcr_conversion(info.conversion)?;
                }
            }
        }
        self.resources.immutable_samplers[index].value = body;
        Ok(side_table_handle(index))
    }

    fn ycbcr_conversion(&mut self, handle: SamplerYcbcrConversion) -> Result<SamplerYcbcrConversion> {
        if let Some(index) = self.existing(&self.resources.ycbcr_samplers, handle) {
            return Ok(side_table_handle(index));
        }
        let body = lookup(&self.objects.ycbcr_conversions, handle)?.clone();
        let name = self
            .registry
            .intern(ObjectCategory::SamplerYcbcrConversion, handle.handle())
            .to_string();
        let index = self.resources.ycbcr_samplers.len();
        self.resources.ycbcr_samplers.push(Named::new(name, body));
        Ok(side_table_handle(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PipelineState;
    use crate::model::{
        DescriptorSetLayoutBinding, Format, PipelineShaderStageCreateInfo, RenderPassCreateInfo,
        SamplerYcbcrConversionInfo, ShaderStageFlags, SubpassDescription,
    };

    const DEV: DeviceId = DeviceId(1);

    fn stage(stage: ShaderStageFlags, module: u64) -> PipelineShaderStageCreateInfo {
        PipelineShaderStageCreateInfo {
            stage,
            module: ShaderModule::from_raw(module),
            name: "main".to_string(),
            ..Default::default()
        }
    }

    fn sampler_binding(binding: u32, samplers: &[u64]) -> DescriptorSetLayoutBinding {
        DescriptorSetLayoutBinding {
            binding,
            descriptor_type: DescriptorType::COMBINED_IMAGE_SAMPLER,
            descriptor_count: samplers.len() as u32,
            stage_flags: ShaderStageFlags::COMPUTE,
            immutable_samplers: Some(samplers.iter().map(|h| Sampler::from_raw(*h)).collect()),
        }
    }

    /// Two set layouts sharing sampler 0x20, which uses conversion 0x10.
    fn store_with_shared_sampler() -> CaptureStore {
        let mut store = CaptureStore::new("app");
        store.record_device(
            DEV,
            DeviceRecord {
                enabled_extensions: vec!["VK_KHR_sampler_ycbcr_conversion".to_string()],
                ..Default::default()
            },
        );
        store.record_ycbcr_conversion(
            DEV,
            SamplerYcbcrConversion::from_raw(0x10),
            SamplerYcbcrConversionCreateInfo {
                format: Format::G8_B8_R8_3PLANE_420_UNORM,
                ..Default::default()
            },
        );
        let mut sampler = SamplerCreateInfo::default();
        sampler.next.push(SamplerYcbcrConversionInfo {
            conversion: SamplerYcbcrConversion::from_raw(0x10),
        });
        store.record_sampler(DEV, Sampler::from_raw(0x20), sampler);
        store.record_sampler(DEV, Sampler::from_raw(0x21), SamplerCreateInfo::default());
        store.record_descriptor_set_layout(
            DEV,
            DescriptorSetLayout::from_raw(0x30),
            DescriptorSetLayoutCreateInfo {
                bindings: vec![sampler_binding(0, &[0x20, 0x21])],
                ..Default::default()
            },
        );
        store.record_descriptor_set_layout(
            DEV,
            DescriptorSetLayout::from_raw(0x31),
            DescriptorSetLayoutCreateInfo {
                bindings: vec![sampler_binding(1, &[0x20])],
                ..Default::default()
            },
        );
        store.record_pipeline_layout(
            DEV,
            PipelineLayout::from_raw(0x40),
            PipelineLayoutCreateInfo {
                set_layouts: vec![
                    DescriptorSetLayout::from_raw(0x30),
                    DescriptorSetLayout::from_raw(0x31),
                    DescriptorSetLayout::from_raw(0x30),
                ],
                ..Default::default()
            },
        );
        store.record_shader_module(
            DEV,
            ShaderModule::from_raw(0x50),
            ShaderModuleCreateInfo {
                code: Bytes(vec![3, 2, 35, 7]),
                ..Default::default()
            },
        );
        store
    }

    fn compute_info() -> ComputePipelineCreateInfo {
        ComputePipelineCreateInfo {
            stage: stage(ShaderStageFlags::COMPUTE, 0x50),
            layout: PipelineLayout::from_raw(0x40),
            ..Default::default()
        }
    }

    #[test]
    fn test_capture_builds_side_tables_in_first_touch_order() {
        let mut store = store_with_shared_sampler();
        let index = store.record_pipeline(DEV, Pipeline::from_raw(0x60), compute_info());
        assert_eq!(index, 1);

        let capture = store.capture_for_pipeline(DEV, Pipeline::from_raw(0x60)).unwrap();
        let resources = capture.document.resources();
        assert_eq!(
            resources.descriptor_set_layouts.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["DescriptorSetLayout1", "DescriptorSetLayout2"]
        );
        assert_eq!(
            resources.immutable_samplers.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["ImmutableSampler1", "ImmutableSampler2"]
        );
        assert_eq!(resources.ycbcr_samplers.len(), 1);

        // References point into the side tables
        assert_eq!(
            resources.pipeline_layout.set_layouts,
            vec![
                DescriptorSetLayout::from_raw(1),
                DescriptorSetLayout::from_raw(2),
                DescriptorSetLayout::from_raw(1),
            ]
        );
        let second = &resources.descriptor_set_layouts[1].value;
        assert_eq!(
            second.bindings[0].immutable_samplers,
            Some(vec![Sampler::from_raw(1)])
        );
        assert_eq!(
            resources.immutable_samplers[0].value.ycbcr_conversion(),
            Some(SamplerYcbcrConversion::from_raw(1))
        );

        assert_eq!(capture.shaders.len(), 1);
        assert_eq!(capture.shaders[0].filename, "app_device_1_pipeline_1.compute.spv");
        assert_eq!(capture.shaders[0].code, Bytes(vec![3, 2, 35, 7]));
        assert_eq!(
            capture.document.enabled_extensions,
            vec!["VK_KHR_sampler_ycbcr_conversion".to_string()]
        );
        assert!(resources.device_features.is_some());
    }

    #[test]
    fn test_capture_eliminates_process_handles() {
        let mut store = store_with_shared_sampler();
        store.record_pipeline(DEV, Pipeline::from_raw(0x60), compute_info());
        let capture = store.capture_for_pipeline(DEV, Pipeline::from_raw(0x60)).unwrap();
        let PipelineState::Compute(state) = &capture.document.state else {
            panic!("expected a compute document");
        };
        assert!(state.pipeline.layout.is_null());
        assert!(state.pipeline.stage.module.is_null());
    }

    #[test]
    fn test_capture_graphics_pipeline() {
        let mut store = store_with_shared_sampler();
        store.record_shader_module(DEV, ShaderModule::from_raw(0x51), ShaderModuleCreateInfo::default());
        store.record_render_pass(
            DEV,
            RenderPass::from_raw(0x70),
            RenderPassCreateInfo {
                subpasses: vec![SubpassDescription::default()],
                ..Default::default()
            },
        );
        let info = GraphicsPipelineCreateInfo {
            stages: vec![
                stage(ShaderStageFlags::VERTEX, 0x50),
                stage(ShaderStageFlags::FRAGMENT, 0x51),
            ],
            layout: PipelineLayout::from_raw(0x40),
            render_pass: RenderPass::from_raw(0x70),
            ..Default::default()
        };
        store.record_pipeline(DEV, Pipeline::from_raw(0x61), compute_info());
        let index = store.record_pipeline(DEV, Pipeline::from_raw(0x62), info);
        assert_eq!(index, 2);

        let capture = store.capture_for_pipeline(DEV, Pipeline::from_raw(0x62)).unwrap();
        let files: Vec<_> = capture
            .document
            .resources()
            .shader_file_names
            .iter()
            .map(|f| f.filename.as_str())
            .collect();
        assert_eq!(
            files,
            vec!["app_device_1_pipeline_2.vert.spv", "app_device_1_pipeline_2.frag.spv"]
        );
        let PipelineState::Graphics(state) = &capture.document.state else {
            panic!("expected a graphics document");
        };
        assert_eq!(state.render_pass.subpass_count(), 1);
        assert!(state.pipeline.render_pass.is_null());
    }

    #[test]
    fn test_capture_missing_dependency() {
        let mut store = store_with_shared_sampler();
        store.record_pipeline(DEV, Pipeline::from_raw(0x60), compute_info());
        assert!(store.remove_object(DEV, ObjectCategory::Sampler, Sampler::from_raw(0x21)));

        let err = store.capture_for_pipeline(DEV, Pipeline::from_raw(0x60)).unwrap_err();
        assert!(matches!(err, PcJsonError::Capture(_)));
        assert!(err.to_string().contains("Sampler"));

        let err = store.capture_for_pipeline(DeviceId(9), Pipeline::from_raw(0x60)).unwrap_err();
        assert!(err.to_string().contains("Unknown device 9"));
    }

    #[test]
    fn test_non_sampler_bindings_drop_immutable_samplers() {
        let mut store = store_with_shared_sampler();
        store.record_descriptor_set_layout(
            DEV,
            DescriptorSetLayout::from_raw(0x32),
            DescriptorSetLayoutCreateInfo {
                bindings: vec![DescriptorSetLayoutBinding {
                    descriptor_type: DescriptorType::UNIFORM_BUFFER,
                    descriptor_count: 1,
                    immutable_samplers: Some(vec![Sampler::from_raw(0x99)]),
                    ..Default::default()
                }],
                ..Default::default()
            },
        );
        store.record_pipeline_layout(
            DEV,
            PipelineLayout::from_raw(0x40),
            PipelineLayoutCreateInfo {
                set_layouts: vec![DescriptorSetLayout::from_raw(0x32)],
                ..Default::default()
            },
        );
        store.record_pipeline(DEV, Pipeline::from_raw(0x60), compute_info());
        let capture = store.capture_for_pipeline(DEV, Pipeline::from_raw(0x60)).unwrap();
        let resources = capture.document.resources();
        assert!(resources.immutable_samplers.is_empty());
        assert_eq!(resources.descriptor_set_layouts[0].value.bindings[0].immutable_samplers, None);
    }
}
