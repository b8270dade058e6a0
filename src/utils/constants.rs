use std::f64::consts;

use log::debug;

use crate::utils::errors::UtilsError;

/// Named constants accepted in place of a numeric target
pub const NAMED_TARGETS: [(&str, f64); 6] = [
    ("pi", consts::PI),
    ("e", consts::E),
    ("tau", consts::TAU),
    ("phi", 1.618_033_988_749_895),
    ("sqrt2", consts::SQRT_2),
    ("ln2", consts::LN_2),
];

/// # Errors
///
/// Returns an error if the input is neither a known constant name nor a
/// floating-point number.
pub fn parse_target(input: &str) -> Result<f64, UtilsError> {
    let name = input.trim().to_ascii_lowercase();
    if let Some((_, value)) = NAMED_TARGETS.iter().find(|(n, _)| *n == name) {
        debug!("Resolved target '{}' to {}", input, value);
        return Ok(*value);
    }

    input
        .trim()
        .parse::<f64>()
        .map_err(|_| UtilsError::UnknownTarget(input.to_string()))
}

/// Acceptance radius for a match: `10^-precision`
pub fn epsilon_for_precision(precision: i32) -> f64 {
    10_f64.powi(-precision)
}
