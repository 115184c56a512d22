//! Benchmarks for pipeline document encoding, decoding and hashing
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vksc_pipeline_json::document::{
    content_uuid, generate_pipeline_json, generate_pipeline_value, parse_pipeline_json,
    ComputePipelineState, GeneratorOptions, Named, PipelineDocument, ShaderFileName,
};
use vksc_pipeline_json::model::{
    DescriptorSetLayout, DescriptorSetLayoutBinding, DescriptorSetLayoutCreateInfo,
    DescriptorType, DeviceId, Sampler, SamplerCreateInfo, ShaderStageFlags,
};
use vksc_pipeline_json::reservation::{Counter, ObjectEvent, ReservationTracker};

/// Compute document with `layouts` set layouts, each binding one sampler.
fn document_with_layouts(layouts: usize) -> PipelineDocument {
    let mut state = ComputePipelineState::default();
    state.pipeline.stage.stage = ShaderStageFlags::COMPUTE;
    state.pipeline.stage.name = "main".to_string();

    let resources = &mut state.resources;
    for i in 0..layouts {
        resources
            .immutable_samplers
            .push(Named::new(format!("ImmutableSampler{}", i + 1), SamplerCreateInfo::default()));
        let info = DescriptorSetLayoutCreateInfo {
            bindings: vec![DescriptorSetLayoutBinding {
                binding: 0,
                descriptor_type: DescriptorType::COMBINED_IMAGE_SAMPLER,
                descriptor_count: 1,
                stage_flags: ShaderStageFlags::COMPUTE,
                immutable_samplers: Some(vec![Sampler::from_raw(i as u64 + 1)]),
            }],
            ..Default::default()
        };
        resources
            .descriptor_set_layouts
            .push(Named::new(format!("DescriptorSetLayout{}", i + 1), info));
        resources
            .pipeline_layout
            .set_layouts
            .push(DescriptorSetLayout::from_raw(i as u64 + 1));
    }
    resources.shader_file_names = vec![ShaderFileName::new(
        ShaderStageFlags::COMPUTE,
        "bench_device_0_pipeline_1.compute.spv",
    )];
    PipelineDocument::compute(state)
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let options = GeneratorOptions::default();

    for layouts in [1usize, 8, 32].iter() {
        let doc = document_with_layouts(*layouts);
        group.throughput(Throughput::Elements(*layouts as u64));
        group.bench_with_input(BenchmarkId::new("pipeline_json", layouts), &doc, |b, doc| {
            b.iter(|| generate_pipeline_json(black_box(doc), &options))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = GeneratorOptions::default();

    for layouts in [1usize, 8, 32].iter() {
        let text = generate_pipeline_json(&document_with_layouts(*layouts), &options)
            .map(|g| g.value)
            .unwrap_or_default();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("pipeline_json", layouts), &text, |b, text| {
            b.iter(|| parse_pipeline_json(black_box(text)))
        });
    }

    group.finish();
}

fn bench_content_uuid(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_uuid");
    let tree = generate_pipeline_value(&document_with_layouts(32), &GeneratorOptions::default())
        .map(|g| g.value)
        .unwrap_or_default();

    group.bench_function("with_filenames", |b| {
        b.iter(|| content_uuid(black_box(&tree), false))
    });
    group.bench_function("excluding_filenames", |b| {
        b.iter(|| content_uuid(black_box(&tree), true))
    });

    group.finish();
}

fn bench_reservation(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservation");
    let tracker = ReservationTracker::new();
    tracker.register_device(DeviceId(0));
    let event = ObjectEvent::Object(Counter::Buffer);

    group.bench_function("create_destroy", |b| {
        b.iter(|| {
            tracker.on_create(DeviceId(0), black_box(event));
            tracker.on_destroy(DeviceId(0), black_box(event));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_parse,
    bench_content_uuid,
    bench_reservation
);
criterion_main!(benches);
