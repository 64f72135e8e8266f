//! src/error.rs
use crate::mapreduce::JobReport;

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// The document could not be obtained from its source.
#[derive(thiserror::Error)]
pub enum RetrievalError {
    #[error("Invalid document locator: {0}")]
    InvalidLocator(String),
    #[error("Unsupported locator scheme `{scheme}` in {locator}")]
    UnsupportedScheme { scheme: String, locator: String },
    #[error("Failed to download text from {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to download text from {url}: server answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to read document at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl std::fmt::Debug for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

/// A counting invocation did not complete.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WorkerError {
    #[error("Worker counting fragment {fragment} panicked: {message}")]
    Panicked { fragment: usize, message: String },
    #[error("Worker counting fragment {fragment} was cancelled")]
    Cancelled { fragment: usize },
}

impl WorkerError {
    pub fn fragment(&self) -> usize {
        match self {
            WorkerError::Panicked { fragment, .. } | WorkerError::Cancelled { fragment } => {
                *fragment
            }
        }
    }

    pub(crate) fn from_panic(fragment: usize, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        WorkerError::Panicked { fragment, message }
    }
}

#[derive(thiserror::Error)]
pub enum PresentationError {
    #[error("Failed to write chart")]
    Io(#[from] std::io::Error),
}

impl std::fmt::Debug for PresentationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

#[derive(thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to retrieve document")]
    Retrieval(#[from] RetrievalError),
    #[error("Failed to count words")]
    Worker(#[from] WorkerError),
    /// Counting succeeded; the finished report is kept.
    #[error("Failed to present word frequencies")]
    Presentation {
        report: Box<JobReport>,
        #[source]
        source: PresentationError,
    },
}

impl std::fmt::Debug for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}
