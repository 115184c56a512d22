//! Object reservation tracking.
//!
//! Safety-critical devices size their object tables up front. The tracker
//! observes create and destroy events per device and keeps, for every object
//! category, the live count and the highest live count ever seen. A
//! [`ReservationSnapshot`] of those high-water marks is what a device needs
//! to reserve to run the same workload again.
//!
//! Events may arrive from any thread. Counters are atomics; the device map
//! sits behind an `RwLock` that is only written when devices come and go.

mod counters;
pub mod header;

pub use counters::{Counter, Limit, ReservationSnapshot};

use crate::document::RenderPassState;
use crate::model::{
    DescriptorSetLayout, DescriptorSetLayoutCreateInfo, DeviceId, Handle, ObjectHandle,
    QueryType, RenderPass,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// One create or destroy, with what the derived counters need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectEvent {
    /// One object of a category without derived counts
    Object(Counter),
    CommandBuffers(u32),
    /// Descriptor sets allocated or freed; only non-null sets count on free
    DescriptorSets(u32),
    DescriptorSetLayout {
        handle: Handle,
        binding_count: u32,
        binding_limit: u32,
        max_immutable_samplers: u32,
    },
    RenderPass {
        handle: Handle,
        subpass_count: u32,
        attachment_count: u32,
    },
    ImageView {
        handle: Handle,
        level_count: u32,
        layer_count: u32,
    },
    QueryPool {
        query_type: QueryType,
        query_count: u32,
    },
}

impl ObjectEvent {
    pub fn descriptor_set_layout(
        handle: DescriptorSetLayout,
        info: &DescriptorSetLayoutCreateInfo,
    ) -> Self {
        ObjectEvent::DescriptorSetLayout {
            handle: handle.handle(),
            binding_count: info.bindings.len() as u32,
            binding_limit: info.binding_limit(),
            max_immutable_samplers: info.max_immutable_samplers(),
        }
    }

    pub fn render_pass(handle: RenderPass, info: &RenderPassState) -> Self {
        ObjectEvent::RenderPass {
            handle: handle.handle(),
            subpass_count: info.subpass_count() as u32,
            attachment_count: info.attachment_count() as u32,
        }
    }

    /// Amounts this event adds to (or removes from) each live count
    fn amounts(&self) -> Vec<(Counter, u32)> {
        match *self {
            ObjectEvent::Object(counter) => vec![(counter, 1)],
            ObjectEvent::CommandBuffers(count) => vec![(Counter::CommandBuffer, count)],
            ObjectEvent::DescriptorSets(count) => vec![(Counter::DescriptorSet, count)],
            ObjectEvent::DescriptorSetLayout { binding_count, .. } => vec![
                (Counter::DescriptorSetLayout, 1),
                (Counter::DescriptorSetLayoutBinding, binding_count),
            ],
            ObjectEvent::RenderPass {
                subpass_count,
                attachment_count,
                ..
            } => vec![
                (Counter::RenderPass, 1),
                (Counter::SubpassDescription, subpass_count),
                (Counter::AttachmentDescription, attachment_count),
            ],
            ObjectEvent::ImageView { layer_count, .. } if layer_count > 1 => {
                vec![(Counter::ImageView, 1), (Counter::LayeredImageView, 1)]
            }
            ObjectEvent::ImageView { .. } => vec![(Counter::ImageView, 1)],
            ObjectEvent::QueryPool { .. } => vec![(Counter::QueryPool, 1)],
        }
    }

    /// Limits this event raises on creation
    fn limits(&self) -> Vec<(Limit, u32)> {
        match *self {
            ObjectEvent::DescriptorSetLayout {
                binding_limit,
                max_immutable_samplers,
                ..
            } => vec![
                (Limit::DescriptorSetLayoutBindingLimit, binding_limit),
                (Limit::MaxImmutableSamplersPerDescriptorSetLayout, max_immutable_samplers),
            ],
            ObjectEvent::ImageView {
                level_count,
                layer_count,
                ..
            } => {
                let mut limits = vec![
                    (Limit::MaxImageViewMipLevels, level_count),
                    (Limit::MaxImageViewArrayLayers, layer_count),
                ];
                if layer_count > 1 {
                    limits.push((Limit::MaxLayeredImageViewMipLevels, level_count));
                }
                limits
            }
            ObjectEvent::QueryPool {
                query_type,
                query_count,
            } => match query_type {
                QueryType::OCCLUSION => vec![(Limit::MaxOcclusionQueriesPerPool, query_count)],
                QueryType::PIPELINE_STATISTICS => {
                    vec![(Limit::MaxPipelineStatisticsQueriesPerPool, query_count)]
                }
                QueryType::TIMESTAMP => vec![(Limit::MaxTimestampQueriesPerPool, query_count)],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Key under which creation amounts are remembered for the destroy
    fn key(&self) -> Option<(Counter, Handle)> {
        match *self {
            ObjectEvent::DescriptorSetLayout { handle, .. } => {
                Some((Counter::DescriptorSetLayout, handle))
            }
            ObjectEvent::RenderPass { handle, .. } => Some((Counter::RenderPass, handle)),
            ObjectEvent::ImageView { handle, .. } => Some((Counter::ImageView, handle)),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Gauge {
    live: AtomicU32,
    high_water: AtomicU32,
}

/// Counters of one device.
#[derive(Debug)]
pub struct DeviceCounters {
    gauges: Vec<Gauge>,
    limits: Vec<AtomicU32>,
    recorded: Mutex<HashMap<(Counter, Handle), Vec<(Counter, u32)>>>,
}

impl Default for DeviceCounters {
    fn default() -> Self {
        Self {
            gauges: Counter::ALL.iter().map(|_| Gauge::default()).collect(),
            limits: Limit::ALL.iter().map(|_| AtomicU32::new(0)).collect(),
            recorded: Mutex::new(HashMap::new()),
        }
    }
}

impl DeviceCounters {
    fn add(&self, counter: Counter, amount: u32) {
        let gauge = &self.gauges[counter.index()];
        let live = gauge
            .live
            .fetch_add(amount, Ordering::AcqRel)
            .saturating_add(amount);
        gauge.high_water.fetch_max(live, Ordering::AcqRel);
    }

    fn sub(&self, counter: Counter, amount: u32) {
        let gauge = &self.gauges[counter.index()];
        // Over-release clamps to zero in the same update as the subtraction
        let previous = gauge
            .live
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                Some(live.saturating_sub(amount))
            })
            .unwrap_or_else(|live| live);
        if previous < amount {
            tracing::error!(
                "Releasing {} of {:?} with only {} live",
                amount,
                counter,
                previous
            );
        }
    }

    fn raise(&self, limit: Limit, value: u32) {
        self.limits[limit.index()].fetch_max(value, Ordering::AcqRel);
    }

    pub fn live(&self, counter: Counter) -> u32 {
        self.gauges[counter.index()].live.load(Ordering::Acquire)
    }

    pub fn high_water(&self, counter: Counter) -> u32 {
        self.gauges[counter.index()].high_water.load(Ordering::Acquire)
    }

    fn created(&self, event: &ObjectEvent) {
        let amounts = event.amounts();
        for &(counter, amount) in &amounts {
            self.add(counter, amount);
        }
        for (limit, value) in event.limits() {
            self.raise(limit, value);
        }
        if let Some(key) = event.key() {
            self.recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key, amounts);
        }
    }

    fn destroyed(&self, event: &ObjectEvent) {
        let recorded = event.key().and_then(|key| {
            self.recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&key)
        });
        let amounts = match recorded {
            Some(amounts) => amounts,
            None => {
                if let Some((counter, handle)) = event.key() {
                    tracing::warn!("No creation recorded for {:?} {:?}", counter, handle);
                }
                event.amounts()
            }
        };
        for (counter, amount) in amounts {
            self.sub(counter, amount);
        }
    }

    pub fn snapshot(&self) -> ReservationSnapshot {
        let high_water: Vec<u32> = Counter::ALL.iter().map(|c| self.high_water(*c)).collect();
        let limits: Vec<u32> = self
            .limits
            .iter()
            .map(|l| l.load(Ordering::Acquire))
            .collect();
        ReservationSnapshot::from_values(&high_water, &limits)
    }
}

/// High-water-mark tracker for every live device.
#[derive(Debug, Default)]
pub struct ReservationTracker {
    devices: RwLock<HashMap<DeviceId, Arc<DeviceCounters>>>,
}

impl ReservationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `device`; returns false if it already was.
    pub fn register_device(&self, device: DeviceId) -> bool {
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        if devices.contains_key(&device) {
            return false;
        }
        tracing::debug!("Tracking object reservations of device {}", device);
        devices.insert(device, Arc::new(DeviceCounters::default()));
        true
    }

    /// Stop tracking `device` and return its final snapshot.
    pub fn remove_device(&self, device: DeviceId) -> Option<ReservationSnapshot> {
        let counters = self
            .devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&device)?;
        Some(counters.snapshot())
    }

    pub fn devices(&self) -> Vec<DeviceId> {
        let mut ids: Vec<DeviceId> = self
            .devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        ids.sort();
        ids
    }

    /// Counters of `device`, if it is tracked
    pub fn counters(&self, device: DeviceId) -> Option<Arc<DeviceCounters>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&device)
            .cloned()
    }

    fn with_device(&self, device: DeviceId, what: &str, f: impl FnOnce(&DeviceCounters)) {
        match self.counters(device) {
            Some(counters) => f(&counters),
            None => tracing::error!("{} on untracked device {}", what, device),
        }
    }

    pub fn on_create(&self, device: DeviceId, event: ObjectEvent) {
        self.with_device(device, "Create", |counters| counters.created(&event));
    }

    pub fn on_destroy(&self, device: DeviceId, event: ObjectEvent) {
        self.with_device(device, "Destroy", |counters| counters.destroyed(&event));
    }

    pub fn snapshot(&self, device: DeviceId) -> Option<ReservationSnapshot> {
        self.counters(device).map(|counters| counters.snapshot())
    }
}
