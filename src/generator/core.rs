use log::debug;
use rand::Rng;

use crate::expression::{Atom, Operator, ValueStack};
use crate::generator::constants::{DEFAULT_MAX_LITERAL, DEFAULT_MIN_LITERAL, SQRT_WRAP_ODDS};
use crate::generator::errors::GeneratorError;

/// Random generator of structurally valid postfix expressions
pub struct ExpressionGenerator<R: Rng> {
    rng: R,
    min_literal: i64,
    max_literal: i64,
}

impl<R: Rng> ExpressionGenerator<R> {
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyLiteralRange`] if `min_literal >= max_literal`.
    pub fn new(rng: R, min_literal: i64, max_literal: i64) -> Result<Self, GeneratorError> {
        if min_literal >= max_literal {
            return Err(GeneratorError::EmptyLiteralRange {
                min: min_literal,
                max: max_literal,
            });
        }

        debug!(
            "Creating generator with literals in [{}, {})",
            min_literal, max_literal
        );
        Ok(Self {
            rng,
            min_literal,
            max_literal,
        })
    }

    /// Generator drawing literals from the default `[1, 10)` range
    pub fn with_default_range(rng: R) -> Self {
        Self {
            rng,
            min_literal: DEFAULT_MIN_LITERAL,
            max_literal: DEFAULT_MAX_LITERAL,
        }
    }

    pub fn literal_range(&self) -> (i64, i64) {
        (self.min_literal, self.max_literal)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate a random valid expression of roughly `length` tokens.
    ///
    /// Splitting long expressions in halves truncates odd lengths, so the
    /// result may be shorter than requested.
    pub fn generate(&mut self, length: usize) -> ValueStack {
        let mut atoms = Vec::with_capacity(length);
        self.generate_into(length, &mut atoms);
        ValueStack::from(atoms)
    }

    fn literal(&mut self) -> Atom {
        Atom::random_whole_number(&mut self.rng, self.min_literal, self.max_literal)
    }

    fn generate_into(&mut self, length: usize, out: &mut Vec<Atom>) {
        match length {
            0 => {}
            1 => out.push(self.literal()),
            2 => {
                out.push(self.literal());
                out.push(Atom::Operator(Operator::Sqrt));
            }
            3 => {
                out.push(self.literal());
                out.push(self.literal());
                out.push(Atom::Operator(Operator::random(&mut self.rng)));
            }
            _ => {
                if self.rng.random_ratio(1, SQRT_WRAP_ODDS) {
                    self.generate_into(length - 1, out);
                    out.push(Atom::Operator(Operator::Sqrt));
                } else {
                    self.generate_into(length / 2, out);
                    self.generate_into(length / 2, out);
                    out.push(Atom::Operator(Operator::random(&mut self.rng)));
                }
            }
        }
    }
}

/// Generate an expression with the thread-local RNG and default literal range
pub fn generate(length: usize) -> ValueStack {
    ExpressionGenerator::with_default_range(rand::rng()).generate(length)
}
