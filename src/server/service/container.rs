//! Container runtime status through the runtime's CLI.
//!
//! Runs `<runtime> ps -a --format '{{json .}}'` and parses one JSON object per line. The
//! call is bounded by a timeout; the child process is killed if the timeout fires.

use std::{io, process::Stdio, time::Duration};

use tokio::process::Command;

use crate::server::{
    error::{container::ContainerError, AppError},
    model::container::{parse_ps_output, Container},
};

/// Container runtime CLI and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRuntime {
    /// Program name or path, e.g. `docker` or `podman`.
    pub program: String,
    pub timeout: Duration,
}

impl ContainerRuntime {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

pub struct ContainerService<'a> {
    runtime: &'a ContainerRuntime,
}

impl<'a> ContainerService<'a> {
    pub fn new(runtime: &'a ContainerRuntime) -> Self {
        Self { runtime }
    }

    /// Lists every container known to the runtime, running or not.
    ///
    /// # Returns
    /// - `Ok(Vec<Container>)` - Containers in the order the runtime reports them
    /// - `Err(AppError::ContainerErr)` - Runtime missing, timed out or exited non-zero
    pub async fn list(&self) -> Result<Vec<Container>, AppError> {
        let program = &self.runtime.program;

        let child = Command::new(program)
            .args(["ps", "-a", "--format", "{{json .}}"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| spawn_error(program, source))?;

        let output = tokio::time::timeout(self.runtime.timeout, child.wait_with_output())
            .await
            .map_err(|_| ContainerError::Timeout {
                runtime: program.clone(),
                timeout: self.runtime.timeout,
            })?
            .map_err(|source| ContainerError::Io {
                runtime: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ContainerError::CommandFailed {
                runtime: program.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(parse_ps_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

fn spawn_error(program: &str, source: io::Error) -> ContainerError {
    if source.kind() == io::ErrorKind::NotFound {
        ContainerError::RuntimeMissing {
            runtime: program.to_string(),
        }
    } else {
        ContainerError::Io {
            runtime: program.to_string(),
            source,
        }
    }
}
