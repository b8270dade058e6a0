use std::fmt;

use crate::expression::atom::{Atom, Operator};
use crate::expression::stack::ValueStack;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // Shortest representation that parses back to the same f64
            Atom::Number(n) => write!(f, "{}", n),
            Atom::Operator(op) => write!(f, "{}", op),
        }
    }
}

impl fmt::Display for ValueStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut atoms = self.iter();
        if let Some(first) = atoms.next() {
            write!(f, "{}", first)?;
            for atom in atoms {
                write!(f, " {}", atom)?;
            }
        }
        Ok(())
    }
}
