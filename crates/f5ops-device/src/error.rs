use thiserror::Error;

/// Result type alias for device operations
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Errors from the certificate regeneration workflow
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The expected appliance marker files are not all present
    #[error("this host does not look like a BIG-IP: missing {missing}")]
    NotAnAppliance {
        /// Path of the first missing marker file
        missing: String,
    },

    /// An external command could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program name
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An external command exited non-zero
    #[error("{program} exited with status {status}: {stderr}")]
    CommandFailed {
        /// Program name
        program: String,
        /// Exit code, or -1 if killed by a signal
        status: i32,
        /// Captured stderr
        stderr: String,
    },

    /// The freshly generated key and certificate do not belong together
    #[error("new key and certificate do not match (cert modulus {cert}, key modulus {key})")]
    KeyCertMismatch {
        /// Abbreviated certificate modulus
        cert: String,
        /// Abbreviated key modulus
        key: String,
    },

    /// Local hostname could not be determined
    #[error("hostname lookup failed: {0}")]
    Hostname(String),

    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DeviceError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
