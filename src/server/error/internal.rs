use thiserror::Error;

/// Internal issues with the server indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The blocking task sampling host resources panicked or was cancelled.
    #[error("Resource sampling task failed: {0}")]
    SamplingTask(#[from] tokio::task::JoinError),
}
