use crate::expression::stack::ValueStack;

impl ValueStack {
    /// Linear balance check: every prefix must leave at least one value on
    /// the stack and the whole expression must leave exactly one.
    pub fn is_valid(&self) -> bool {
        let mut depth: i64 = 0;

        for atom in self.iter() {
            depth += atom.valence();
            if depth <= 0 {
                return false;
            }
        }

        depth == 1
    }
}
