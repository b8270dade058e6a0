use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Target must be a number or one of pi, e, tau, phi, sqrt2, ln2: {0}")]
    UnknownTarget(String),
    #[error("Failed to write samples: {0}")]
    Io(#[from] std::io::Error),
}
