//! BIG-IQ device inventory types.
//!
//! These mirror the subset of the resolver device-group payload we select
//! with `?$select=hostname,managementAddress`.

use serde::{Deserialize, Serialize};

/// One managed device from a BIG-IQ device group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device hostname as registered on the BIG-IQ
    #[serde(default)]
    pub hostname: String,

    /// Management IP address
    #[serde(rename = "managementAddress", default)]
    pub management_address: String,
}

/// Response envelope for the device-group devices collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceList {
    /// Devices in the group
    #[serde(default)]
    pub items: Vec<DeviceRecord>,
}

impl DeviceList {
    /// Number of devices in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the group has no devices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
