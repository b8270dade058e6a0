//! Utils module split into submodules

mod constants;
mod errors;
mod sampling;

pub use constants::{NAMED_TARGETS, epsilon_for_precision, parse_target};
pub use errors::UtilsError;
pub use sampling::write_samples;

#[cfg(test)]
mod tests;
