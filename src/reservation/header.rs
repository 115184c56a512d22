//! C++ header initializing a `VkDeviceObjectReservationCreateInfo`.

use super::ReservationSnapshot;
use crate::model::DeviceId;
use std::fmt::Write;

const MEMBER_WIDTH: usize = 43;

/// `<process>_objectResInfo_<device>.hpp`
pub fn header_file_name(process: &str, device: DeviceId) -> String {
    format!("{}_objectResInfo_{}.hpp", process, device)
}

/// Render the header for one device.
///
/// The generated `SetObjectResCreateInfo()` fills `sType`, `pNext` and every
/// request count and limit of the snapshot.
pub fn render_header(process: &str, device: DeviceId, snapshot: &ReservationSnapshot) -> String {
    let guard = format!("{}_objectResInfo_{}_HPP", process, device);
    let var = format!("g_objectResCreateInfo_{}", device);

    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {}", guard);
    let _ = writeln!(out, "#define {}", guard);
    out.push('\n');
    out.push_str("#include <vulkan/vulkan_sc_core.h>\n\n");
    let _ = writeln!(out, "static VkDeviceObjectReservationCreateInfo {} {{}};", var);
    out.push_str("static void SetObjectResCreateInfo()\n{\n");

    let mut assign = |member: &str, value: &dyn std::fmt::Display| {
        let _ = writeln!(out, "\t{}.{:<width$}= {};", var, member, value, width = MEMBER_WIDTH);
    };
    assign("sType", &"VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO");
    assign("pNext", &"nullptr");
    for (member, value) in snapshot.members() {
        assign(member, &value);
    }

    out.push_str("}\n\n#endif\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_file_name() {
        assert_eq!(header_file_name("app", DeviceId(0)), "app_objectResInfo_0.hpp");
    }

    #[test]
    fn test_render_header() {
        let snapshot = ReservationSnapshot {
            semaphore_request_count: 3,
            max_immutable_samplers_per_descriptor_set_layout: 2,
            ..Default::default()
        };
        let text = render_header("app", DeviceId(1), &snapshot);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "#ifndef app_objectResInfo_1_HPP");
        assert_eq!(lines[1], "#define app_objectResInfo_1_HPP");
        assert_eq!(lines[3], "#include <vulkan/vulkan_sc_core.h>");
        assert_eq!(
            lines[5],
            "static VkDeviceObjectReservationCreateInfo g_objectResCreateInfo_1 {};"
        );
        assert_eq!(
            lines[8],
            "\tg_objectResCreateInfo_1.sType                                      = VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO;"
        );
        assert_eq!(
            lines[10],
            "\tg_objectResCreateInfo_1.semaphoreRequestCount                      = 3;"
        );
        assert_eq!(
            lines[44],
            "\tg_objectResCreateInfo_1.maxImmutableSamplersPerDescriptorSetLayout = 2;"
        );
        assert_eq!(lines[45], "}");
        assert_eq!(lines.last(), Some(&"#endif"));

        let assignments = lines.iter().filter(|l| l.starts_with('\t')).count();
        assert_eq!(assignments, 2 + 35);
    }
}
