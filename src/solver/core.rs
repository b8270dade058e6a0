use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::generator::ExpressionGenerator;
use crate::solver::cancel::CancellationToken;
use crate::solver::constants::DEFAULT_WORKERS;
use crate::solver::errors::SolverError;
use crate::solver::sink::{MatchSink, SearchMatch, StdoutSink};
use crate::utils::epsilon_for_precision;

/// Parameters of a stochastic search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub target: f64,
    /// Number of decimal digits that must agree with the target
    pub precision: i32,
    pub min_len: usize,
    pub max_len: usize,
    pub min_num: i64,
    pub max_num: i64,
    pub workers: usize,
    /// Stop each worker after this many samples; `None` runs until cancelled
    pub samples_per_worker: Option<u64>,
    /// Base seed for reproducible runs; worker `i` uses `seed + i`
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new(
        target: f64,
        precision: i32,
        min_len: usize,
        max_len: usize,
        min_num: i64,
        max_num: i64,
    ) -> Self {
        Self {
            target,
            precision,
            min_len,
            max_len,
            min_num,
            max_num,
            workers: DEFAULT_WORKERS,
            samples_per_worker: None,
            seed: None,
        }
    }

    pub fn epsilon(&self) -> f64 {
        epsilon_for_precision(self.precision)
    }
}

/// Totals gathered once every worker has stopped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub samples: u64,
    pub matches: u64,
}

/// Runs independent generate/evaluate/compare workers in parallel
pub struct Searcher {
    config: SearchConfig,
    epsilon: f64,
}

impl Searcher {
    /// # Errors
    ///
    /// Returns an error if the length or literal range is empty or no
    /// workers are requested.
    pub fn new(config: SearchConfig) -> Result<Self, SolverError> {
        if config.min_len >= config.max_len {
            return Err(SolverError::InvalidLengthRange {
                min: config.min_len,
                max: config.max_len,
            });
        }
        if config.workers == 0 {
            return Err(SolverError::NoWorkers);
        }
        // Surface an empty literal range before any thread is started
        ExpressionGenerator::new(rand::rng(), config.min_num, config.max_num)?;

        let epsilon = config.epsilon();
        Ok(Self { config, epsilon })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Run the search, handing every match to `sink`.
    ///
    /// Blocks until `cancel` is triggered or every worker has used up its
    /// sample budget.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker thread pool cannot be created.
    pub fn run(
        &self,
        sink: &dyn MatchSink,
        cancel: &CancellationToken,
    ) -> Result<SearchStats, SolverError> {
        let config = &self.config;
        info!(
            "Searching for {} within {} using {} workers (lengths {}..{}, literals {}..{})",
            config.target,
            self.epsilon,
            config.workers,
            config.min_len,
            config.max_len,
            config.min_num,
            config.max_num
        );

        let generators = (0..config.workers)
            .map(|index| {
                ExpressionGenerator::new(self.worker_rng(index), config.min_num, config.max_num)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|index| format!("search-worker-{}", index))
            .build()?;

        let samples = AtomicU64::new(0);
        let matches = AtomicU64::new(0);

        pool.scope(|scope| {
            for (index, generator) in generators.into_iter().enumerate() {
                let samples = &samples;
                let matches = &matches;
                scope.spawn(move |_| {
                    let stats = self.work(index, generator, sink, cancel);
                    samples.fetch_add(stats.samples, Ordering::Relaxed);
                    matches.fetch_add(stats.matches, Ordering::Relaxed);
                });
            }
        });

        let stats = SearchStats {
            samples: samples.into_inner(),
            matches: matches.into_inner(),
        };
        info!(
            "Search stopped after {} samples with {} matches",
            stats.samples, stats.matches
        );
        Ok(stats)
    }

    fn worker_rng(&self, index: usize) -> ChaCha20Rng {
        match self.config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => ChaCha20Rng::from_rng(&mut rand::rng()),
        }
    }

    fn work<R: Rng>(
        &self,
        index: usize,
        mut generator: ExpressionGenerator<R>,
        sink: &dyn MatchSink,
        cancel: &CancellationToken,
    ) -> SearchStats {
        debug!("Worker {} started", index);
        let config = &self.config;
        let mut stats = SearchStats::default();

        while !cancel.is_cancelled() {
            if config
                .samples_per_worker
                .is_some_and(|budget| stats.samples >= budget)
            {
                break;
            }

            let length = generator
                .rng_mut()
                .random_range(config.min_len..config.max_len);
            let expression = generator.generate(length);
            let value = expression.evaluate();
            let diff = (config.target - value).abs();
            stats.samples += 1;

            if diff < self.epsilon {
                let found = SearchMatch {
                    ratio: diff / self.epsilon,
                    value,
                    expression,
                };
                trace!("Worker {} found {}", index, found);
                sink.emit(&found);
                stats.matches += 1;
            }
        }

        debug!(
            "Worker {} stopped after {} samples ({} matches)",
            index, stats.samples, stats.matches
        );
        stats
    }
}

/// Search forever, printing every match to stdout.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the worker pool cannot
/// be started. On success this only returns if every worker exits, which an
/// unbounded search never does.
pub fn search(
    target: f64,
    precision: i32,
    min_len: usize,
    max_len: usize,
    min_num: i64,
    max_num: i64,
) -> Result<SearchStats, SolverError> {
    let config = SearchConfig::new(target, precision, min_len, max_len, min_num, max_num);
    Searcher::new(config)?.run(&StdoutSink, &CancellationToken::new())
}
