use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::borrow::Cow;
use std::ops::Range;
use std::path::PathBuf;
use std::time::Instant;
use strmatch::config::Config;
use strmatch::{canon, loader, output, wordsplit, Algorithm, FuzzyMode, SuffixArray};
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strmatch")]
#[command(about = "Exact and approximate substring search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every exact occurrence of a pattern
    Search {
        /// Pattern to search for
        pattern: String,

        /// File to search in
        file: PathBuf,

        /// Matching algorithm
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Run every algorithm and check that they agree
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,

        /// Fold ASCII case in pattern and text
        #[arg(short, long)]
        ignore_case: bool,

        /// Print offsets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find approximate occurrences of a pattern
    Fuzzy {
        /// Pattern to search for (at most 64 bytes)
        pattern: String,

        /// File to search in
        file: PathBuf,

        /// Error model
        #[arg(short, long, value_enum)]
        mode: Option<FuzzyMode>,

        /// Maximum number of errors
        #[arg(short = 'k', long)]
        max_errors: Option<usize>,

        /// Print end offsets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a suffix array and look up several patterns
    Index {
        /// File to index
        file: PathBuf,

        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Fold ASCII case in text and patterns
        #[arg(short, long)]
        ignore_case: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score dictionary words that split into two other words
    Split {
        /// Word list, one word per line
        file: PathBuf,

        /// Print scores as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    algorithm: Algorithm,
    pattern: &'a str,
    offsets: Vec<usize>,
}

#[derive(Serialize)]
struct FuzzyReport<'a> {
    mode: FuzzyMode,
    max_errors: usize,
    pattern: &'a str,
    ends: Vec<usize>,
}

#[derive(Serialize)]
struct LookupReport<'a> {
    pattern: &'a str,
    offsets: Vec<usize>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    let color = ColorChoice::from(cli.color);

    match cli.command {
        Commands::Search {
            pattern,
            file,
            algorithm,
            all,
            ignore_case,
            json,
        } => {
            let text = loader::load_text(&file)?;
            let (needle, haystack) = fold_if(ignore_case, pattern.as_bytes(), &text);

            if all {
                return compare_algorithms(&needle, &haystack, &pattern, json);
            }

            let algorithm = algorithm.unwrap_or(config.algorithm);
            let offsets = algorithm.find_all(&needle, &haystack)?;
            tracing::debug!(%algorithm, matches = offsets.len(), "search finished");

            if json {
                let report = SearchReport {
                    algorithm,
                    pattern: &pattern,
                    offsets,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                let ranges: Vec<Range<usize>> =
                    offsets.iter().map(|&s| s..s + needle.len()).collect();
                output::print_matches(&text, &ranges, color)?;
            }
        }
        Commands::Fuzzy {
            pattern,
            file,
            mode,
            max_errors,
            json,
        } => {
            let text = loader::load_text(&file)?;
            let mode = mode.unwrap_or(config.fuzzy_mode);
            let max_errors = max_errors.unwrap_or(config.max_errors);
            let ends = mode.find_all(pattern.as_bytes(), &text, max_errors)?;

            if json {
                let report = FuzzyReport {
                    mode,
                    max_errors,
                    pattern: &pattern,
                    ends,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                let ranges: Vec<Range<usize>> = ends
                    .iter()
                    .map(|&end| mode.span(end, pattern.len(), max_errors, text.len()))
                    .collect();
                output::print_matches(&text, &ranges, color)?;
            }
        }
        Commands::Index {
            file,
            patterns,
            ignore_case,
            json,
        } => {
            let text = loader::load_text(&file)?;
            let mut sa_config = config.suffix_array.clone();
            sa_config.case_insensitive |= ignore_case;

            let started = Instant::now();
            let sa = SuffixArray::with_config(&text, sa_config);
            tracing::info!(
                suffixes = sa.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "index ready"
            );

            let results = sa.lookup_batch(&patterns);
            let mut reports = Vec::with_capacity(patterns.len());
            for (pattern, result) in patterns.iter().zip(results) {
                reports.push(LookupReport {
                    pattern,
                    offsets: result?,
                });
            }

            if json {
                println!("{}", serde_json::to_string(&reports)?);
            } else {
                for report in &reports {
                    println!("{}: {:?}", report.pattern, report.offsets);
                }
            }
        }
        Commands::Split { file, json } => {
            let words = loader::load_words(&file)?;
            let scores = wordsplit::score_words(&words);

            if json {
                println!("{}", serde_json::to_string(&scores)?);
            } else {
                for score in &scores {
                    println!("{} {}", score.points, score.word);
                }
            }
        }
    }

    Ok(())
}

/// Canonicalize pattern and text when case folding is requested
fn fold_if<'a>(fold: bool, pattern: &'a [u8], text: &'a [u8]) -> (Cow<'a, [u8]>, Cow<'a, [u8]>) {
    if fold {
        (
            Cow::Owned(canon::preprocess(pattern)),
            Cow::Owned(canon::preprocess(text)),
        )
    } else {
        (Cow::Borrowed(pattern), Cow::Borrowed(text))
    }
}

/// Run all exact algorithms, print per-algorithm timing, and fail on disagreement
fn compare_algorithms(pattern: &[u8], text: &[u8], label: &str, json: bool) -> Result<()> {
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        let started = Instant::now();
        let offsets = algorithm.find_all(pattern, text)?;
        let elapsed = started.elapsed();

        if !json {
            println!(
                "{:<18} {:>8} matches {:>10.3} ms",
                algorithm.name(),
                offsets.len(),
                elapsed.as_secs_f64() * 1000.0
            );
        }
        reports.push(SearchReport {
            algorithm,
            pattern: label,
            offsets,
        });
    }

    if let Some(bad) = reports.iter().find(|r| r.offsets != reports[0].offsets) {
        bail!(
            "{} disagrees with {}: {} vs {} matches",
            bad.algorithm,
            reports[0].algorithm,
            bad.offsets.len(),
            reports[0].offsets.len()
        );
    }

    if json {
        println!("{}", serde_json::to_string(&reports)?);
    }

    Ok(())
}
