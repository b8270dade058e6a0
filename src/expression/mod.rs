//! Postfix expressions: atoms, the value stack, parsing, validation and evaluation

mod atom;
mod display;
mod errors;
mod eval;
mod parse;
mod stack;
mod validate;

pub use atom::{Atom, Operator};
pub use errors::ExpressionError;
pub use stack::ValueStack;
