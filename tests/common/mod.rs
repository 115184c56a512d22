//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use serde_json::Value;
use vksc_pipeline_json::capture::{CaptureStore, DeviceRecord};
use vksc_pipeline_json::model::{
    Bytes, DescriptorSetLayout, DescriptorType, DeviceId, Format, Pipeline, PipelineLayout, PipelineLayoutCreateInfo, Sampler,
    SamplerYcbcrConversion, SamplerYcbcrConversionCreateInfo, ShaderModule, ShaderModuleCreateInfo,
};
use vksc_pipeline_json::reservation::{Counter, ObjectEvent, ReservationTracker};

pub use builders::*;

/// Handles used by one [`record_compute_session`] call
pub struct SessionHandles {
    pub pipeline: Pipeline,
    pub pipeline_index: u32,
}

/// Record a compute pipeline with three bindings: a plain uniform buffer, a
/// combined image sampler, and a combined image sampler with a Y'CbCr
/// conversion. Every handle is offset by `base` so that sessions differ only
/// in handle values.
pub fn record_compute_session(
    store: &mut CaptureStore,
    tracker: &ReservationTracker,
    device: DeviceId,
    base: u64,
) -> SessionHandles {
    tracker.register_device(device);
    store.record_device(
        device,
        DeviceRecord {
            enabled_extensions: vec!["VK_KHR_sampler_ycbcr_conversion".to_string()],
            ..Default::default()
        },
    );

    let conversion = SamplerYcbcrConversion::from_raw(base + 1);
    store.record_ycbcr_conversion(
        device,
        conversion,
        SamplerYcbcrConversionCreateInfo {
            format: Format::G8_B8_R8_3PLANE_420_UNORM,
            ..Default::default()
        },
    );
    tracker.on_create(device, ObjectEvent::Object(Counter::SamplerYcbcrConversion));

    let plain_sampler = Sampler::from_raw(base + 2);
    let ycbcr_sampler = Sampler::from_raw(base + 3);
    store.record_sampler(device, plain_sampler, SamplerBuilder::new().build());
    store.record_sampler(device, ycbcr_sampler, SamplerBuilder::new().ycbcr(conversion).build());
    tracker.on_create(device, ObjectEvent::Object(Counter::Sampler));
    tracker.on_create(device, ObjectEvent::Object(Counter::Sampler));

    let set_layout_handle = DescriptorSetLayout::from_raw(base + 4);
    let set_layout = DescriptorSetLayoutBuilder::new()
        .binding(0, DescriptorType::UNIFORM_BUFFER, 1)
        .sampler_binding(1, DescriptorType::COMBINED_IMAGE_SAMPLER, &[plain_sampler])
        .sampler_binding(2, DescriptorType::COMBINED_IMAGE_SAMPLER, &[ycbcr_sampler])
        .build();
    tracker.on_create(
        device,
        ObjectEvent::descriptor_set_layout(set_layout_handle, &set_layout),
    );
    store.record_descriptor_set_layout(device, set_layout_handle, set_layout);

    let layout = PipelineLayout::from_raw(base + 5);
    store.record_pipeline_layout(
        device,
        layout,
        PipelineLayoutCreateInfo {
            set_layouts: vec![set_layout_handle],
            ..Default::default()
        },
    );
    tracker.on_create(device, ObjectEvent::Object(Counter::PipelineLayout));

    let module = ShaderModule::from_raw(base + 6);
    store.record_shader_module(
        device,
        module,
        ShaderModuleCreateInfo {
            code: Bytes(vec![0x03, 0x02, 0x23, 0x07]),
            ..Default::default()
        },
    );

    let pipeline = Pipeline::from_raw(base + 7);
    let pipeline_index = store.record_pipeline(
        device,
        pipeline,
        ComputePipelineBuilder::new().layout(layout).module(module).build(),
    );
    tracker.on_create(device, ObjectEvent::Object(Counter::ComputePipeline));

    SessionHandles {
        pipeline,
        pipeline_index,
    }
}

/// Remove every `filename` member of `ShaderFileNames` entries
pub fn strip_filenames(tree: &mut Value) {
    for state in ["ComputePipelineState", "GraphicsPipelineState"] {
        if let Some(Value::Array(entries)) = tree
            .get_mut(state)
            .and_then(|s| s.get_mut("ShaderFileNames"))
        {
            for entry in entries {
                if let Some(obj) = entry.as_object_mut() {
                    obj.remove("filename");
                }
            }
        }
    }
}
