//! Checked external command execution.
//!
//! Every invocation uses an argument vector (never a shell string) and
//! every exit status is inspected; a non-zero status becomes an error
//! instead of silently flowing into the next step.

use std::process::Command;

use tracing::debug;

use crate::error::{DeviceError, Result};

/// Run `program` with `args`, returning trimmed stdout on success.
pub(crate) fn run_checked(program: &str, args: &[&str]) -> Result<String> {
    debug!(program, ?args, "executing");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| DeviceError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(DeviceError::CommandFailed {
            program: program.to_string(),
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_on_success() {
        let out = run_checked("true", &[]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn nonzero_status_is_an_error() {
        let err = run_checked("false", &[]).unwrap_err();
        match err {
            DeviceError::CommandFailed { program, status, .. } => {
                assert_eq!(program, "false");
                assert_eq!(status, 1);
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = run_checked("f5ops-no-such-binary", &[]).unwrap_err();
        assert!(matches!(err, DeviceError::Spawn { .. }));
    }
}
