//! Ansible inventory rendering for a BIG-IQ device list.
//!
//! The whole file is rendered in memory first; callers write it out in one
//! operation only after the API call has succeeded, so a failed call can
//! never leave a truncated inventory behind.

use chrono::{DateTime, Utc};

use crate::types::DeviceRecord;

/// Default Ansible group name for imported devices
pub const DEFAULT_GROUP: &str = "bigiq_devices";

/// Render a device list as an Ansible INI inventory.
///
/// Layout: two header comment lines (device count + source, import date),
/// a blank line, the `[group]` section marker, then one
/// `hostname\t\tansible_host=ip` line per device.
#[must_use]
pub fn render(
    devices: &[DeviceRecord],
    source_host: &str,
    group: &str,
    imported_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "#    imported {} devices from bigiq:  {}\n",
        devices.len(),
        source_host
    ));
    out.push_str(&format!("#    import date:  {imported_at}\n\n"));
    out.push_str(&format!("[{group}]\n"));

    for device in devices {
        out.push_str(&format!(
            "{}\t\tansible_host={}\n",
            device.hostname, device.management_address
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_devices(n: usize) -> Vec<DeviceRecord> {
        (1..=n)
            .map(|i| DeviceRecord {
                hostname: format!("bigip{i}.example.net"),
                management_address: format!("10.1.1.{i}"),
            })
            .collect()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn line_count_matches_device_count() {
        let devices = make_devices(3);
        let text = render(&devices, "10.10.10.10", DEFAULT_GROUP, fixed_time());
        let lines: Vec<&str> = text.lines().collect();

        // two header comments, one blank, one section marker, then devices
        assert!(lines[0].starts_with("#    imported 3 devices from bigiq:  10.10.10.10"));
        assert!(lines[1].starts_with("#    import date:  "));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "[bigiq_devices]");
        assert_eq!(lines.len(), 4 + 3);
    }

    #[test]
    fn device_line_format() {
        let devices = make_devices(1);
        let text = render(&devices, "bigiq.example.net", DEFAULT_GROUP, fixed_time());
        assert!(text.ends_with("bigip1.example.net\t\tansible_host=10.1.1.1\n"));
    }

    #[test]
    fn custom_group_name() {
        let text = render(&[], "bigiq.example.net", "prod_f5", fixed_time());
        assert!(text.contains("[prod_f5]\n"));
    }

    #[test]
    fn empty_list_still_has_header_and_marker() {
        let text = render(&[], "bigiq.example.net", DEFAULT_GROUP, fixed_time());
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("#    imported 0 devices"));
    }
}
