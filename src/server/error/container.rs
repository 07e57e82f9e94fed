use std::time::Duration;

use thiserror::Error;

/// Failures invoking the container runtime CLI.
///
/// None of these are fatal to the server; they are reported to the caller as a 500.
#[derive(Error, Debug)]
pub enum ContainerError {
    /// The runtime binary could not be found on `PATH`.
    #[error("{runtime} is not installed or not in PATH")]
    RuntimeMissing { runtime: String },

    /// The runtime did not answer within the configured timeout.
    #[error("{runtime} command timed out after {timeout:?}")]
    Timeout { runtime: String, timeout: Duration },

    /// The runtime exited with a non-zero status.
    #[error("{runtime} command failed: {stderr}")]
    CommandFailed { runtime: String, stderr: String },

    /// Spawning or waiting on the runtime failed for another reason.
    #[error("Failed to run {runtime}: {source}")]
    Io {
        runtime: String,
        #[source]
        source: std::io::Error,
    },
}
