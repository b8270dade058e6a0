use rand::Rng;

/// Operators that may appear in a postfix expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
    Div,
    Sqrt,
}

/// Operators eligible for uniform random choice. `Sqrt` is only ever
/// introduced by the generator's unary-wrapping path.
const BINARY_OPERATORS: [Operator; 3] = [Operator::Add, Operator::Mul, Operator::Div];

impl Operator {
    /// Draw a binary operator uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        BINARY_OPERATORS[rng.random_range(0..BINARY_OPERATORS.len())]
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Sqrt => "√",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "√" => Some(Operator::Sqrt),
            _ => None,
        }
    }

    /// Number of operands consumed
    pub fn arity(self) -> usize {
        match self {
            Operator::Add | Operator::Mul | Operator::Div => 2,
            Operator::Sqrt => 1,
        }
    }

    /// Net change in stack depth when this operator is applied
    pub fn valence(self) -> i64 {
        1 - self.arity() as i64
    }

    /// Computes `left op right`. Division by zero follows IEEE semantics.
    #[inline]
    pub fn apply_binary(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Sqrt => f64::NAN,
        }
    }

    #[inline]
    pub fn apply_unary(self, operand: f64) -> f64 {
        match self {
            Operator::Sqrt => operand.sqrt(),
            Operator::Add | Operator::Mul | Operator::Div => f64::NAN,
        }
    }
}

/// A single token of a postfix expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atom {
    Number(f64),
    Operator(Operator),
}

impl Atom {
    pub fn is_operator(&self) -> bool {
        match self {
            Atom::Number(_) => false,
            Atom::Operator(_) => true,
        }
    }

    /// Draw an integer-valued literal uniformly from `[min, max)`.
    ///
    /// The caller guarantees `min < max`.
    pub fn random_whole_number<R: Rng>(rng: &mut R, min: i64, max: i64) -> Self {
        Atom::Number(rng.random_range(min..max) as f64)
    }

    /// Stack depth contribution used by the balance check
    pub fn valence(&self) -> i64 {
        match self {
            Atom::Number(_) => 1,
            Atom::Operator(op) => op.valence(),
        }
    }
}

impl From<Operator> for Atom {
    fn from(op: Operator) -> Self {
        Atom::Operator(op)
    }
}

impl From<f64> for Atom {
    fn from(value: f64) -> Self {
        Atom::Number(value)
    }
}
