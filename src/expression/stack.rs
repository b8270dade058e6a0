use std::collections::VecDeque;

use crate::expression::atom::Atom;

/// Ordered sequence of atoms forming a postfix expression.
///
/// Front-to-back order is the left-to-right reading order of the expression.
/// `push`, `pop` and `peek` all operate on the front; forward construction
/// uses `append`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStack {
    atoms: VecDeque<Atom>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self {
            atoms: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: VecDeque::with_capacity(capacity),
        }
    }

    /// Prepend an atom
    pub fn push(&mut self, atom: Atom) {
        self.atoms.push_front(atom);
    }

    /// Add an atom at the end of the expression
    pub fn append(&mut self, atom: Atom) {
        self.atoms.push_back(atom);
    }

    /// Remove and return the front atom
    pub fn pop(&mut self) -> Option<Atom> {
        self.atoms.pop_front()
    }

    pub fn peek(&self) -> Option<&Atom> {
        self.atoms.front()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn literal_count(&self) -> usize {
        self.atoms.iter().filter(|atom| !atom.is_operator()).count()
    }
}

impl From<Vec<Atom>> for ValueStack {
    fn from(atoms: Vec<Atom>) -> Self {
        Self {
            atoms: VecDeque::from(atoms),
        }
    }
}

impl FromIterator<Atom> for ValueStack {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueStack {
    type Item = &'a Atom;
    type IntoIter = std::collections::vec_deque::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
