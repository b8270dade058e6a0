// Default literal range for generated expressions, [min, max)
pub const DEFAULT_MIN_LITERAL: i64 = 1;
pub const DEFAULT_MAX_LITERAL: i64 = 10;
// One in SQRT_WRAP_ODDS long expressions is a square root of a shorter one
pub const SQRT_WRAP_ODDS: u32 = 4;
