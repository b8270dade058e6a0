use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Literal range [{min}, {max}) is empty")]
    EmptyLiteralRange { min: i64, max: i64 },
}
