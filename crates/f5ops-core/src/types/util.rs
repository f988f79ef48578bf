//! `POST /mgmt/tm/util/bash` request and response types.

use serde::{Deserialize, Serialize};

/// Request body for the `util/bash` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilCmdRequest {
    /// Always `"run"` for ad-hoc execution
    pub command: String,

    /// Arguments handed to bash, e.g. `-c 'tmsh list sys version'`
    #[serde(rename = "utilCmdArgs")]
    pub util_cmd_args: String,
}

impl UtilCmdRequest {
    /// Build a `run` request with the given (already wrapped) args
    #[must_use]
    pub fn run(util_cmd_args: impl Into<String>) -> Self {
        Self {
            command: "run".to_string(),
            util_cmd_args: util_cmd_args.into(),
        }
    }
}

/// Response from the `util/bash` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilCmdResponse {
    /// Stdout/stderr of the executed command, absent when it produced none
    #[serde(rename = "commandResult", default)]
    pub command_result: Option<String>,
}

impl UtilCmdResponse {
    /// The command output, or an empty string if the appliance sent none
    #[must_use]
    pub fn output(&self) -> &str {
        self.command_result.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_icontrol_field_names() {
        let req = UtilCmdRequest::run("-c 'uptime'");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["command"], "run");
        assert_eq!(json["utilCmdArgs"], "-c 'uptime'");
    }

    #[test]
    fn response_without_result_yields_empty_output() {
        let resp: UtilCmdResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.output(), "");
    }

    #[test]
    fn response_with_result() {
        let resp: UtilCmdResponse =
            serde_json::from_str(r#"{"commandResult": "up 12 days\n"}"#).unwrap();
        assert_eq!(resp.output(), "up 12 days\n");
    }
}
