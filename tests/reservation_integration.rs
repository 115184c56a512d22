//! Integration tests for the object reservation tracker
//!
//! Run with: cargo test --test reservation_integration

mod common;

use common::*;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use vksc_pipeline_json::capture::CaptureStore;
use vksc_pipeline_json::model::DeviceId;
use vksc_pipeline_json::reservation::{Counter, ObjectEvent, ReservationTracker};

const A: DeviceId = DeviceId(1);
const B: DeviceId = DeviceId(2);

fn tracker_with(devices: &[DeviceId]) -> ReservationTracker {
    let tracker = ReservationTracker::new();
    for device in devices {
        assert!(tracker.register_device(*device));
    }
    tracker
}

#[test]
fn test_devices_are_isolated() {
    let tracker = tracker_with(&[A, B]);
    let semaphore = ObjectEvent::Object(Counter::Semaphore);

    // Device A: 3 live, one destroyed, 2 more created -> peak of 4
    for _ in 0..3 {
        tracker.on_create(A, semaphore);
    }
    tracker.on_destroy(A, semaphore);
    tracker.on_create(A, semaphore);
    tracker.on_create(A, semaphore);

    tracker.on_create(B, semaphore);

    assert_eq!(tracker.snapshot(A).unwrap().semaphore_request_count, 4);
    assert_eq!(tracker.snapshot(B).unwrap().semaphore_request_count, 1);
    assert_eq!(tracker.counters(A).unwrap().live(Counter::Semaphore), 4);
    assert_eq!(tracker.devices(), vec![A, B]);
}

#[test]
fn test_untracked_device_is_ignored() {
    let tracker = tracker_with(&[A]);
    tracker.on_create(B, ObjectEvent::Object(Counter::Fence));
    assert!(tracker.snapshot(B).is_none());
    assert_eq!(tracker.snapshot(A).unwrap().fence_request_count, 0);
}

#[test]
fn test_concurrent_devices() {
    const THREADS: usize = 4;
    const ROUNDS: usize = 500;

    let tracker = Arc::new(tracker_with(&[A, B]));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let tracker = Arc::clone(&tracker);
            let device = if i % 2 == 0 { A } else { B };
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    tracker.on_create(device, ObjectEvent::Object(Counter::Buffer));
                    tracker.on_create(device, ObjectEvent::CommandBuffers(2));
                    tracker.on_destroy(device, ObjectEvent::Object(Counter::Buffer));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for device in [A, B] {
        let counters = tracker.counters(device).unwrap();
        assert_eq!(counters.live(Counter::Buffer), 0);
        let peak = counters.high_water(Counter::Buffer) as usize;
        assert!((1..=THREADS / 2).contains(&peak));

        // Command buffers are never released, so the peak is the total
        let snapshot = tracker.snapshot(device).unwrap();
        assert_eq!(
            snapshot.command_buffer_request_count as usize,
            THREADS / 2 * ROUNDS * 2
        );
    }
}

#[test]
fn test_snapshot_feeds_create_info() {
    let tracker = tracker_with(&[A]);
    tracker.on_create(A, ObjectEvent::Object(Counter::Image));
    tracker.on_create(A, ObjectEvent::DescriptorSets(5));

    let info = tracker.remove_device(A).unwrap().to_create_info();
    assert_eq!(info.image_request_count, 1);
    assert_eq!(info.descriptor_set_request_count, 5);
    assert!(tracker.snapshot(A).is_none());
}

#[test]
fn test_sessions_sum_per_device() {
    let mut store = CaptureStore::new("app");
    let tracker = ReservationTracker::new();

    // Two sessions on A, one on B; every session creates a 3-binding layout
    record_compute_session(&mut store, &tracker, A, 0x1000);
    record_compute_session(&mut store, &tracker, A, 0x2000);
    record_compute_session(&mut store, &tracker, B, 0x1000);

    let same_device = tracker.snapshot(A).unwrap();
    assert_eq!(same_device.descriptor_set_layout_binding_request_count, 6);
    assert_eq!(same_device.descriptor_set_layout_binding_limit, 3);
    assert_eq!(same_device.descriptor_set_layout_request_count, 2);

    let other = tracker.snapshot(B).unwrap();
    assert_eq!(other.descriptor_set_layout_binding_request_count, 3);
    assert_eq!(other.descriptor_set_layout_binding_limit, 3);
    assert_eq!(other.descriptor_set_layout_request_count, 1);
}

#[test]
fn test_over_release_does_not_lose_concurrent_creates() {
    const CREATES: usize = 2000;
    const RELEASES: usize = 500;

    let tracker = Arc::new(tracker_with(&[A]));
    let event = ObjectEvent::Object(Counter::Fence);
    let creator = {
        let tracker = Arc::clone(&tracker);
        thread::spawn(move || {
            for _ in 0..CREATES {
                tracker.on_create(A, event);
            }
        })
    };
    let releaser = {
        let tracker = Arc::clone(&tracker);
        thread::spawn(move || {
            for _ in 0..RELEASES {
                tracker.on_destroy(A, event);
            }
        })
    };
    creator.join().unwrap();
    releaser.join().unwrap();

    // Each release removes at most one object, clamped or not
    let live = tracker.counters(A).unwrap().live(Counter::Fence) as usize;
    assert!((CREATES - RELEASES..=CREATES).contains(&live), "live = {}", live);
}

proptest! {
    #[test]
    fn test_high_water_mark_is_prefix_max(ops in prop::collection::vec(any::<bool>(), 0..200)) {
        let tracker = tracker_with(&[A]);
        let counters = tracker.counters(A).unwrap();
        let event = ObjectEvent::Object(Counter::Event);

        let mut live = 0u32;
        let mut peak = 0u32;
        for create in ops {
            if create {
                tracker.on_create(A, event);
                live += 1;
            } else if live > 0 {
                tracker.on_destroy(A, event);
                live -= 1;
            }
            peak = peak.max(live);

            prop_assert_eq!(counters.live(Counter::Event), live);
            prop_assert_eq!(counters.high_water(Counter::Event), peak);
            prop_assert!(counters.high_water(Counter::Event) >= counters.live(Counter::Event));
        }
        prop_assert_eq!(tracker.snapshot(A).unwrap().event_request_count, peak);
    }
}
