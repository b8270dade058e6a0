use thiserror::Error;

use crate::generator::GeneratorError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Expression length range [{min}, {max}) is empty")]
    InvalidLengthRange { min: usize, max: usize },
    #[error("At least one search worker is required")]
    NoWorkers,
    #[error("Generator error: {0}")]
    GeneratorError(#[from] GeneratorError),
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
