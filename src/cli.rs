use std::io::{self, BufWriter};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rpn_approx::generator::constants::{DEFAULT_MAX_LITERAL, DEFAULT_MIN_LITERAL};
use rpn_approx::solver::constants::DEFAULT_WORKERS;
use rpn_approx::{
    CancellationToken, ExpressionGenerator, SearchConfig, Searcher, StdoutSink, ValueStack,
    parse_target, write_samples,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// rpn-approx - Find postfix expressions approximating a number
#[derive(Parser, Debug)]
#[command(name = "rpn-approx")]
#[command(about = "Randomly search for postfix expressions that approximate a target value")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search until interrupted, printing `ratio,value,expression` per match
    Search {
        /// Target value, or one of pi, e, tau, phi, sqrt2, ln2
        #[arg(default_value = "pi", allow_hyphen_values = true)]
        target: String,

        /// Number of decimal digits that must match
        #[arg(short, long, default_value_t = 5)]
        precision: i32,

        /// Minimum expression length in tokens (inclusive)
        #[arg(long, default_value_t = 10)]
        min_len: usize,

        /// Maximum expression length in tokens (exclusive)
        #[arg(long, default_value_t = 20)]
        max_len: usize,

        /// Smallest literal (inclusive)
        #[arg(long, default_value_t = 1)]
        min_num: i64,

        /// Largest literal (exclusive)
        #[arg(long, default_value_t = 100)]
        max_num: i64,

        /// Number of concurrent workers
        #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,

        /// Stop each worker after this many samples
        #[arg(long)]
        samples: Option<u64>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write random expressions and their values as CSV
    Sample {
        /// Number of rows
        #[arg(short, long, default_value_t = 1_000_000)]
        count: u64,

        /// Requested expression length in tokens
        #[arg(long, default_value_t = 5)]
        length: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a single postfix expression
    Eval {
        /// Space-separated postfix expression, e.g. "1 2 + √"
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_rng(&mut rand::rng()),
    }
}

/// Translate the `search` arguments into a search configuration
#[allow(clippy::too_many_arguments)]
pub fn search_config(
    target: &str,
    precision: i32,
    min_len: usize,
    max_len: usize,
    min_num: i64,
    max_num: i64,
    workers: usize,
    samples: Option<u64>,
    seed: Option<u64>,
) -> Result<SearchConfig> {
    let target = parse_target(target).context("Invalid target")?;

    let mut config = SearchConfig::new(target, precision, min_len, max_len, min_num, max_num);
    config.workers = workers;
    config.samples_per_worker = samples;
    config.seed = seed;
    Ok(config)
}

fn run_search(config: SearchConfig) -> Result<()> {
    let searcher = Searcher::new(config).context("Invalid search parameters")?;
    let stats = searcher
        .run(&StdoutSink, &CancellationToken::new())
        .context("Search failed")?;

    if stats.matches == 0 {
        warn!("No expression found in {} samples", stats.samples);
    }
    Ok(())
}

fn run_sample(count: u64, length: usize, seed: Option<u64>) -> Result<()> {
    let mut generator =
        ExpressionGenerator::new(seeded_rng(seed), DEFAULT_MIN_LITERAL, DEFAULT_MAX_LITERAL)?;
    let out = BufWriter::new(io::stdout().lock());
    write_samples(out, &mut generator, count, length).context("Failed to write samples")?;
    Ok(())
}

fn run_eval(text: &str) -> Result<()> {
    let expression = ValueStack::parse(text).context("Invalid expression")?;
    if !expression.is_valid() {
        bail!("'{}' is not a well-formed postfix expression", expression);
    }

    info!("Evaluating '{}'", expression);
    println!("{}", expression.evaluate());
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    match args.command {
        Command::Search {
            target,
            precision,
            min_len,
            max_len,
            min_num,
            max_num,
            workers,
            samples,
            seed,
        } => run_search(search_config(
            &target, precision, min_len, max_len, min_num, max_num, workers, samples, seed,
        )?),
        Command::Sample {
            count,
            length,
            seed,
        } => run_sample(count, length, seed),
        Command::Eval { expression } => run_eval(&expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let args = CliArgs::try_parse_from(["rpn-approx", "search"]);
        assert!(args.is_ok());
        if let Ok(CliArgs {
            command:
                Command::Search {
                    target,
                    precision,
                    min_len,
                    max_len,
                    min_num,
                    max_num,
                    workers,
                    samples,
                    seed,
                },
            log_level,
        }) = args
        {
            assert_eq!(target, "pi");
            assert_eq!(precision, 5);
            assert_eq!((min_len, max_len), (10, 20));
            assert_eq!((min_num, max_num), (1, 100));
            assert_eq!(workers, DEFAULT_WORKERS);
            assert_eq!(samples, None);
            assert_eq!(seed, None);
            assert!(matches!(log_level, LogLevel::Warn));
        } else {
            panic!("expected search command");
        }
    }

    #[test]
    fn test_search_negative_target() {
        let args = CliArgs::try_parse_from(["rpn-approx", "search", "-2.5", "--precision", "3"]);
        assert!(matches!(
            args,
            Ok(CliArgs {
                command: Command::Search { ref target, precision: 3, .. },
                ..
            }) if target == "-2.5"
        ));
    }

    #[test]
    fn test_eval_and_sample_commands() {
        let args = CliArgs::try_parse_from(["rpn-approx", "eval", "1 2 +"]);
        assert!(matches!(
            args,
            Ok(CliArgs { command: Command::Eval { ref expression }, .. }) if expression == "1 2 +"
        ));

        let args = CliArgs::try_parse_from(["rpn-approx", "-l", "debug", "sample", "-c", "10"]);
        assert!(matches!(
            args,
            Ok(CliArgs {
                command: Command::Sample { count: 10, length: 5, seed: None },
                log_level: LogLevel::Debug,
            })
        ));
    }

    #[test]
    fn test_search_config_from_args() {
        let config = search_config("tau", 4, 3, 9, 1, 50, 2, Some(100), Some(7));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.target, std::f64::consts::TAU);
            assert_eq!(config.workers, 2);
            assert_eq!(config.samples_per_worker, Some(100));
            assert_eq!(config.seed, Some(7));
        }

        assert!(search_config("nope", 4, 3, 9, 1, 50, 2, None, None).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
