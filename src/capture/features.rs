//! Physical device features of a captured device.

use crate::model::{
    DeviceObjectReservationCreateInfo, Extension, PhysicalDeviceFeatures,
    PhysicalDeviceFeatures2, StructureType,
};

/// One link of a device creation chain, as recorded at device creation.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceChainEntry {
    /// `VkPhysicalDeviceFeatures2` together with its own chain
    Features2(PhysicalDeviceFeatures2),
    /// A structure the model knows as an extension
    Extension(Extension),
    ObjectReservation(DeviceObjectReservationCreateInfo),
    /// Anything else; only its type is kept
    Other(StructureType),
}

impl DeviceChainEntry {
    pub fn structure_type(&self) -> StructureType {
        match self {
            DeviceChainEntry::Features2(_) => StructureType::PHYSICAL_DEVICE_FEATURES_2,
            DeviceChainEntry::Extension(ext) => ext.structure_type(),
            DeviceChainEntry::ObjectReservation(_) => {
                StructureType::DEVICE_OBJECT_RESERVATION_CREATE_INFO
            }
            DeviceChainEntry::Other(stype) => *stype,
        }
    }
}

impl From<Extension> for DeviceChainEntry {
    fn from(ext: Extension) -> Self {
        DeviceChainEntry::Extension(ext)
    }
}

impl From<PhysicalDeviceFeatures2> for DeviceChainEntry {
    fn from(features: PhysicalDeviceFeatures2) -> Self {
        DeviceChainEntry::Features2(features)
    }
}

/// Collect the features a device was created with.
///
/// A `VkPhysicalDeviceFeatures2` in the chain supplies the core features and
/// takes precedence over `enabled_features`. Every feature structure found
/// either in the device chain or in the `VkPhysicalDeviceFeatures2` chain is
/// kept once, in first-seen order; all other structures are dropped.
pub fn filter_device_features(
    enabled_features: Option<&PhysicalDeviceFeatures>,
    chain: &[DeviceChainEntry],
) -> PhysicalDeviceFeatures2 {
    let mut filtered = PhysicalDeviceFeatures2::default();
    if let Some(features) = enabled_features {
        filtered.features = features.clone();
    }

    fn keep(filtered: &mut PhysicalDeviceFeatures2, ext: &Extension) {
        if !ext.extends(StructureType::PHYSICAL_DEVICE_FEATURES_2) {
            return;
        }
        let stype = ext.structure_type();
        if filtered.next.iter().any(|e| e.structure_type() == stype) {
            tracing::warn!("Ignoring duplicate {} in device creation chain", stype);
            return;
        }
        filtered.next.push(ext.clone());
    }

    let mut seen_features2 = false;
    for entry in chain {
        match entry {
            DeviceChainEntry::Features2(features2) if !seen_features2 => {
                seen_features2 = true;
                filtered.features = features2.features.clone();
                for ext in &features2.next {
                    keep(&mut filtered, ext);
                }
            }
            DeviceChainEntry::Extension(ext) => keep(&mut filtered, ext),
            other => tracing::trace!("Dropping {} from device features", other.structure_type()),
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Bool32, Chain, PhysicalDeviceSynchronization2Features, PhysicalDeviceVulkanSC10Features,
        SamplerReductionModeCreateInfo,
    };

    fn sc10(enabled: bool) -> Extension {
        PhysicalDeviceVulkanSC10Features {
            shader_atomic_instructions: Bool32::from(enabled),
        }
        .into()
    }

    #[test]
    fn test_enabled_features_without_chain() {
        let mut core = PhysicalDeviceFeatures::default();
        core.robust_buffer_access = Bool32::TRUE;
        let filtered = filter_device_features(Some(&core), &[]);
        assert_eq!(filtered.features.robust_buffer_access, Bool32::TRUE);
        assert!(filtered.next.is_empty());
    }

    #[test]
    fn test_features2_takes_precedence() {
        let mut core = PhysicalDeviceFeatures::default();
        core.shader_int64 = Bool32::TRUE;
        let features2 = PhysicalDeviceFeatures2 {
            features: core,
            next: Chain::new().with(PhysicalDeviceSynchronization2Features {
                synchronization2: Bool32::TRUE,
            }),
        };
        let chain = vec![
            DeviceChainEntry::Other(StructureType::DEVICE_OBJECT_RESERVATION_CREATE_INFO),
            features2.into(),
            sc10(true).into(),
        ];
        let filtered = filter_device_features(Some(&PhysicalDeviceFeatures::default()), &chain);
        assert_eq!(filtered.features.shader_int64, Bool32::TRUE);
        let kinds: Vec<_> = filtered.next.iter().map(Extension::structure_type).collect();
        assert_eq!(
            kinds,
            vec![
                StructureType::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES,
                StructureType::PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES,
            ]
        );
    }

    #[test]
    fn test_non_feature_links_dropped() {
        let chain = vec![
            DeviceChainEntry::Extension(SamplerReductionModeCreateInfo::default().into()),
            sc10(true).into(),
            sc10(false).into(),
        ];
        let filtered = filter_device_features(None, &chain);
        assert_eq!(filtered.next.len(), 1);
        assert_eq!(
            filtered
                .next
                .find::<PhysicalDeviceVulkanSC10Features>()
                .map(|f| f.shader_atomic_instructions),
            Some(Bool32::TRUE)
        );
    }
}
