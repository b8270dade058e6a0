//! Concurrent stochastic search and local improvement

mod cancel;
pub mod constants;
mod core;
mod errors;
mod improve;
mod sink;

pub use cancel::CancellationToken;
pub use core::{SearchConfig, SearchStats, Searcher, search};
pub use errors::SolverError;
pub use improve::{Improvement, climb, improve};
pub use sink::{MatchCollector, MatchSink, SearchMatch, StdoutSink};
