use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Couldn't parse token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },
    #[error("Malformed postfix expression: {0}")]
    Malformed(String),
}
