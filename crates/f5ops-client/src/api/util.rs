//! BIG-IP `util` endpoints: ad-hoc bash/tmsh execution.

use crate::F5Client;
use f5ops_core::{Result, UtilCmdRequest, UtilCmdResponse};

/// Ad-hoc command execution endpoints
pub struct UtilApi<'a> {
    client: &'a F5Client,
}

impl<'a> UtilApi<'a> {
    pub(crate) fn new(client: &'a F5Client) -> Self {
        Self { client }
    }

    /// Run a bash (or `tmsh ...`) command on the appliance.
    ///
    /// The command is wrapped as `-c '<cmd>'`; embedded single quotes are
    /// escaped so they cannot break out of the quoting.
    pub async fn bash(&self, cmd: &str) -> Result<UtilCmdResponse> {
        let request = UtilCmdRequest::run(util_cmd_args(cmd));
        self.client.post("/mgmt/tm/util/bash", &request).await
    }
}

/// Wrap a command string as `utilCmdArgs` for the `util/bash` endpoint.
///
/// The appliance hands the args to bash, so the command is placed in
/// single quotes with embedded single quotes rewritten to `'\''`.
#[must_use]
pub fn util_cmd_args(cmd: &str) -> String {
    let escaped = cmd.replace('\'', r"'\''");
    format!("-c '{escaped}'")
}
