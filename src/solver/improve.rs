use log::debug;

use crate::expression::{Atom, ValueStack};

/// Outcome of a local improvement attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    pub improved: bool,
    pub value: f64,
    pub diff: f64,
    pub expression: ValueStack,
}

/// Try to move closer to `target` by incrementing a single literal by one.
///
/// Literals are tried left to right and the first increment that strictly
/// reduces the distance to `target` is kept. When none helps, the expression,
/// value and diff are returned unchanged.
pub fn improve(mut expression: ValueStack, target: f64, value: f64, diff: f64) -> Improvement {
    for index in 0..expression.len() {
        let original = match expression.get(index) {
            Some(Atom::Number(n)) => *n,
            _ => continue,
        };

        set_literal(&mut expression, index, original + 1.0);
        let new_value = expression.evaluate();
        let new_diff = (target - new_value).abs();

        if new_diff < diff {
            debug!(
                "Incrementing literal {} at {} moved diff {} -> {}",
                original, index, diff, new_diff
            );
            return Improvement {
                improved: true,
                value: new_value,
                diff: new_diff,
                expression,
            };
        }

        set_literal(&mut expression, index, original);
    }

    Improvement {
        improved: false,
        value,
        diff,
        expression,
    }
}

/// First-improvement hill climbing: apply [`improve`] until it stops helping
/// or `max_steps` increments have been taken.
pub fn climb(expression: ValueStack, target: f64, max_steps: usize) -> Improvement {
    let value = expression.evaluate();
    let mut current = Improvement {
        improved: false,
        value,
        diff: (target - value).abs(),
        expression,
    };

    for step in 0..max_steps {
        let next = improve(current.expression, target, current.value, current.diff);
        if !next.improved {
            debug!("Local search settled after {} steps", step);
            return Improvement {
                improved: current.improved,
                ..next
            };
        }
        current = next;
    }

    current
}

fn set_literal(expression: &mut ValueStack, index: usize, value: f64) {
    if let Some(atom) = expression.get_mut(index) {
        *atom = Atom::Number(value);
    }
}
