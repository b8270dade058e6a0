// Number of concurrent search workers when none is configured
pub const DEFAULT_WORKERS: usize = 10;
