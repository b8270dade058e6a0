use log::debug;

use crate::expression::atom::Atom;
use crate::expression::errors::ExpressionError;
use crate::expression::stack::ValueStack;

impl ValueStack {
    /// Evaluate the expression with stack-machine semantics.
    ///
    /// The stack itself is left untouched. Division by zero and square roots
    /// of negative numbers yield infinities or NaN. A malformed expression
    /// (one that would underflow the operand stack) evaluates to NaN.
    pub fn evaluate(&self) -> f64 {
        let mut operands: Vec<f64> = Vec::with_capacity(self.len());

        for atom in self.iter() {
            match atom {
                Atom::Number(n) => operands.push(*n),
                Atom::Operator(op) => {
                    let result = if op.arity() == 2 {
                        let (Some(x), Some(y)) = (operands.pop(), operands.pop()) else {
                            debug!("Operand stack underflow at {} in '{}'", op, self);
                            return f64::NAN;
                        };
                        op.apply_binary(y, x)
                    } else {
                        let Some(x) = operands.pop() else {
                            debug!("Operand stack underflow at {} in '{}'", op, self);
                            return f64::NAN;
                        };
                        op.apply_unary(x)
                    };
                    operands.push(result);
                }
            }
        }

        match operands.last() {
            Some(value) => *value,
            None => {
                debug!("Evaluated an empty expression");
                f64::NAN
            }
        }
    }

    /// Evaluate after checking structural validity.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::Malformed`] if the expression does not
    /// reduce to exactly one value.
    pub fn try_evaluate(&self) -> Result<f64, ExpressionError> {
        if !self.is_valid() {
            return Err(ExpressionError::Malformed(self.to_string()));
        }
        Ok(self.evaluate())
    }
}
