//! Random generation of valid postfix expressions

pub mod constants;
mod core;
mod errors;

pub use core::{ExpressionGenerator, generate};
pub use errors::GeneratorError;

#[cfg(test)]
mod tests;
