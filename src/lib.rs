//! rpn-approx - stochastic search for postfix expressions approximating a number
//!
//! Random, structurally valid reverse-Polish expressions over small integer
//! literals and the operators `+`, `*`, `/` and `√` are generated and
//! evaluated until one lands within `10^-precision` of the target.

pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Atom, ExpressionError, Operator, ValueStack};
pub use generator::{ExpressionGenerator, GeneratorError, generate};
pub use solver::{
    CancellationToken, Improvement, MatchCollector, MatchSink, SearchConfig, SearchMatch,
    SearchStats, Searcher, SolverError, StdoutSink, climb, improve, search,
};
pub use utils::{UtilsError, parse_target, write_samples};

/// Parse and evaluate a postfix expression, rejecting malformed input
///
/// # Arguments
///
/// * `text` - Space-separated postfix tokens, e.g. `"1 2 + √"`
///
/// # Errors
///
/// This function will return an error if:
/// * A token is neither an operator symbol nor a number
/// * The tokens do not reduce to exactly one value
///
/// # Examples
///
/// ```
/// use rpn_approx::evaluate_str;
///
/// match evaluate_str("1 2 + 3 4 / * 10 +") {
///     Ok(value) => assert_eq!(value, 12.25),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate_str(text: &str) -> Result<f64, ExpressionError> {
    ValueStack::parse(text)?.try_evaluate()
}
