use std::fmt;
use std::io::{self, Write};

use log::warn;
use parking_lot::Mutex;

use crate::expression::ValueStack;

/// An expression whose value landed inside the epsilon window
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    /// Distance to the target as a fraction of epsilon, always below 1
    pub ratio: f64,
    pub value: f64,
    pub expression: ValueStack,
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6},{:.6},{}", self.ratio, self.value, self.expression)
    }
}

/// Receiver of search matches, shared by all workers
pub trait MatchSink: Send + Sync {
    fn emit(&self, found: &SearchMatch);
}

/// Writes one `ratio,value,expression` line per match to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MatchSink for StdoutSink {
    fn emit(&self, found: &SearchMatch) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", found) {
            warn!("Failed to write match: {}", e);
        }
    }
}

/// Keeps every match in memory
#[derive(Debug, Default)]
pub struct MatchCollector {
    matches: Mutex<Vec<SearchMatch>>,
}

impl MatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matches.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.lock().is_empty()
    }

    pub fn into_matches(self) -> Vec<SearchMatch> {
        self.matches.into_inner()
    }
}

impl MatchSink for MatchCollector {
    fn emit(&self, found: &SearchMatch) {
        self.matches.lock().push(found.clone());
    }
}
