//! Integration tests for capturing pipelines and writing artifacts
//!
//! Run with: cargo test --test capture_integration

mod common;

use common::*;
use vksc_pipeline_json::capture::{
    pipeline_json_file_name, release_device, ArtifactWriter, CaptureStore,
};
use vksc_pipeline_json::config::CaptureSettings;
use vksc_pipeline_json::document::{
    generate_pipeline_value, parse_pipeline_json, GeneratorOptions, UuidMode,
};
use vksc_pipeline_json::model::{DeviceId, ObjectCategory, Pipeline};
use vksc_pipeline_json::reservation::{header, ReservationTracker};

fn excluding_filenames() -> GeneratorOptions {
    GeneratorOptions {
        uuid_mode: UuidMode::ContentHashExcludingFilenames,
        pretty: false,
    }
}

#[test]
fn test_same_pipeline_on_two_devices_hashes_identically() {
    let mut store = CaptureStore::new("app");
    let tracker = ReservationTracker::new();
    let first = record_compute_session(&mut store, &tracker, DeviceId(0), 0x1000);
    let second = record_compute_session(&mut store, &tracker, DeviceId(1), 0x9000);

    let a = store.capture_for_pipeline(DeviceId(0), first.pipeline).unwrap();
    let b = store.capture_for_pipeline(DeviceId(1), second.pipeline).unwrap();
    assert_ne!(a.shaders[0].filename, b.shaders[0].filename);

    let mut tree_a = generate_pipeline_value(&a.document, &excluding_filenames())
        .unwrap()
        .value;
    let mut tree_b = generate_pipeline_value(&b.document, &excluding_filenames())
        .unwrap()
        .value;
    assert_eq!(tree_a["PipelineUUID"], tree_b["PipelineUUID"]);

    // Apart from file names the documents are identical
    strip_filenames(&mut tree_a);
    strip_filenames(&mut tree_b);
    assert_eq!(tree_a, tree_b);
}

#[test]
fn test_filenames_change_the_default_hash() {
    let mut store = CaptureStore::new("app");
    let tracker = ReservationTracker::new();
    let first = record_compute_session(&mut store, &tracker, DeviceId(0), 0x1000);
    let second = record_compute_session(&mut store, &tracker, DeviceId(1), 0x1000);

    let options = GeneratorOptions::default();
    let a = store.capture_for_pipeline(DeviceId(0), first.pipeline).unwrap();
    let b = store.capture_for_pipeline(DeviceId(1), second.pipeline).unwrap();
    let uuid_a = generate_pipeline_value(&a.document, &options).unwrap().value["PipelineUUID"].clone();
    let uuid_b = generate_pipeline_value(&b.document, &options).unwrap().value["PipelineUUID"].clone();
    assert_ne!(uuid_a, uuid_b);
}

#[test]
fn test_write_capture_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path().join("out")).unwrap();

    let mut store = CaptureStore::new("demo");
    let tracker = ReservationTracker::new();
    let session = record_compute_session(&mut store, &tracker, DeviceId(2), 0x1000);
    let capture = store.capture_for_pipeline(DeviceId(2), session.pipeline).unwrap();
    let uuid = writer
        .write_capture(&capture, &GeneratorOptions::default())
        .unwrap();

    let shader = writer.dir().join("demo_device_2_pipeline_1.compute.spv");
    assert_eq!(std::fs::read(&shader).unwrap(), vec![0x03, 0x02, 0x23, 0x07]);

    let json_path = writer
        .dir()
        .join(pipeline_json_file_name("demo", DeviceId(2), session.pipeline_index));
    let text = std::fs::read_to_string(&json_path).unwrap();
    let parsed = parse_pipeline_json(&text).unwrap();
    assert!(parsed.messages.is_empty());
    assert_eq!(parsed.value.pipeline_uuid, uuid);
    assert_eq!(
        parsed.value.resources().shader_file_names[0].filename,
        "demo_device_2_pipeline_1.compute.spv"
    );
}

#[test]
fn test_write_reservation_header_on_device_removal() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path()).unwrap();

    let mut store = CaptureStore::new("demo");
    let tracker = ReservationTracker::new();
    record_compute_session(&mut store, &tracker, DeviceId(4), 0x1000);

    assert!(store.remove_device(DeviceId(4)));
    let snapshot = tracker.remove_device(DeviceId(4)).unwrap();
    assert_eq!(snapshot.sampler_request_count, 2);
    assert_eq!(snapshot.compute_pipeline_request_count, 1);

    let path = writer
        .write_reservation_header("demo", DeviceId(4), &snapshot)
        .unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        header::header_file_name("demo", DeviceId(4)).as_str()
    );
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("g_objectResCreateInfo_4.samplerRequestCount"));
    assert!(text.ends_with("#endif\n"));
}

#[test]
fn test_release_device_writes_header_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path()).unwrap();
    let settings = CaptureSettings {
        process_name: Some("demo".to_string()),
        reservation_headers: true,
        ..Default::default()
    };

    let mut store = CaptureStore::from_settings(&settings);
    assert_eq!(store.process(), "demo");
    let tracker = ReservationTracker::new();
    record_compute_session(&mut store, &tracker, DeviceId(5), 0x1000);

    let path = release_device(&mut store, &tracker, &writer, &settings, DeviceId(5))
        .unwrap()
        .unwrap();
    assert_eq!(path, dir.path().join(header::header_file_name("demo", DeviceId(5))));
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.contains("g_objectResCreateInfo_5.computePipelineRequestCount"));
    assert!(tracker.snapshot(DeviceId(5)).is_none());
    assert!(store.capture_for_pipeline(DeviceId(5), Pipeline::from_raw(0x1007)).is_err());

    // Already released
    assert!(release_device(&mut store, &tracker, &writer, &settings, DeviceId(5))
        .unwrap()
        .is_none());
}

#[test]
fn test_release_device_without_headers() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path()).unwrap();
    let settings = CaptureSettings::default();

    let mut store = CaptureStore::new("demo");
    let tracker = ReservationTracker::new();
    record_compute_session(&mut store, &tracker, DeviceId(6), 0x1000);

    let written = release_device(&mut store, &tracker, &writer, &settings, DeviceId(6)).unwrap();
    assert!(written.is_none());
    assert!(tracker.devices().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_destroyed_pipeline_cannot_be_captured() {
    let mut store = CaptureStore::new("app");
    let tracker = ReservationTracker::new();
    let session = record_compute_session(&mut store, &tracker, DeviceId(0), 0x1000);

    assert!(store.remove_object(DeviceId(0), ObjectCategory::Pipeline, session.pipeline));
    assert!(!store.remove_object(DeviceId(0), ObjectCategory::Pipeline, session.pipeline));
    assert!(store
        .capture_for_pipeline(DeviceId(0), session.pipeline)
        .is_err());
    assert!(store
        .capture_for_pipeline(DeviceId(0), Pipeline::from_raw(0xdead))
        .is_err());
}
