use std::str::FromStr;

use log::debug;

use crate::expression::atom::{Atom, Operator};
use crate::expression::errors::ExpressionError;
use crate::expression::stack::ValueStack;

impl ValueStack {
    /// Parse space-separated postfix text into a stack.
    ///
    /// Tokens are separated by exactly one space. The result is not checked
    /// for structural validity; see [`ValueStack::is_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::InvalidToken`] for the first token that is
    /// neither an operator symbol nor a floating-point literal.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        let mut stack = ValueStack::with_capacity(text.len() / 2 + 1);

        for (position, token) in text.split(' ').enumerate() {
            let atom = match Operator::from_symbol(token) {
                Some(op) => Atom::Operator(op),
                None => match token.parse::<f64>() {
                    Ok(n) => Atom::Number(n),
                    Err(_) => {
                        debug!("Rejecting token {:?} at position {}", token, position);
                        return Err(ExpressionError::InvalidToken {
                            token: token.to_string(),
                            position,
                        });
                    }
                },
            };
            stack.append(atom);
        }

        Ok(stack)
    }
}

impl FromStr for ValueStack {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueStack::parse(s)
    }
}
