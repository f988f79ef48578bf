//! BIG-IQ device inventory endpoints.

use crate::F5Client;
use f5ops_core::{DeviceList, Result};

/// Device group holding every BIG-IP a BIG-IQ manages
pub const ALL_DEVICES_GROUP: &str = "cm-bigip-allDevices";

/// Device inventory endpoints (BIG-IQ only)
pub struct DevicesApi<'a> {
    client: &'a F5Client,
}

impl<'a> DevicesApi<'a> {
    pub(crate) fn new(client: &'a F5Client) -> Self {
        Self { client }
    }

    /// List every managed device with its hostname and management address.
    ///
    /// Issues
    /// `GET /mgmt/shared/resolver/device-groups/cm-bigip-allDevices/devices`
    /// with a `$select` filter so the appliance only sends the two fields
    /// we use.
    pub async fn list(&self) -> Result<DeviceList> {
        self.list_group(ALL_DEVICES_GROUP).await
    }

    /// List devices in a specific resolver device group
    pub async fn list_group(&self, group: &str) -> Result<DeviceList> {
        self.client
            .get_with_query(
                &format!("/mgmt/shared/resolver/device-groups/{group}/devices"),
                &[("$select", "hostname,managementAddress")],
            )
            .await
    }
}
