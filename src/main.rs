//! Mauka Lexicon - command-line entrypoint.
//!
//! Loads configuration, initializes logging, loads the word list and runs
//! the requested subcommand against it.

use clap::{Parser, Subcommand};
use mauka_lexicon_lib::config::{self, ConfigLoader, LexiconConfig, LogConfig};
use mauka_lexicon_lib::data_structures::TrieStats;
use mauka_lexicon_lib::dictionary::Dictionary;
use mauka_lexicon_lib::error::{
    report_error, set_error_reporter, ErrorContext, LexiconError, LexiconResult,
    TracingErrorReporter,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Lexicon.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Lexicon", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load (overrides `dictionary.path`)
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look up words in the dictionary
    Check {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Print word count and trie statistics
    Stats {
        /// Emit JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Statistics printed by the `stats` subcommand.
#[derive(Debug, Serialize)]
struct StatsReport {
    source: String,
    words: u32,
    #[serde(flatten)]
    trie: TrieStats,
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LexiconResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LexiconError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configured (or overridden) word list.
fn load_dictionary(config: &LexiconConfig, path: Option<PathBuf>) -> LexiconResult<(Dictionary, PathBuf)> {
    let path = path.unwrap_or_else(|| config.dictionary.path.clone());
    let mut dictionary = Dictionary::with_config(config.dictionary.clone());
    dictionary.load(&path)?;
    Ok((dictionary, path))
}

fn run(args: Args, config: LexiconConfig) -> LexiconResult<ExitCode> {
    match args.command {
        Command::Check { words } => {
            let (dictionary, _) = load_dictionary(&config, args.dictionary)?;

            let mut missing = 0usize;
            for word in &words {
                if dictionary.check(word) {
                    println!("{word}: found");
                } else {
                    println!("{word}: missing");
                    missing += 1;
                }
            }

            info!(checked = words.len(), missing, "lookup finished");
            Ok(if missing == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Stats { json } => {
            let (dictionary, path) = load_dictionary(&config, args.dictionary)?;
            let report = StatsReport {
                source: path.display().to_string(),
                words: dictionary.size(),
                trie: dictionary.stats().unwrap_or_default(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("source:          {}", report.source);
                println!("words:           {}", report.words);
                println!("distinct words:  {}", report.trie.terminal_nodes);
                println!("nodes:           {}", report.trie.nodes);
                println!("max depth:       {}", report.trie.max_depth);
                println!("approx. bytes:   {}", report.trie.approx_bytes);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LexiconConfig::default())
                .map_err(|e| LexiconError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load();
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            return ExitCode::FAILURE;
        }
    };

    match run(args, config) {
        Ok(code) => code,
        Err(e) => {
            report_error(ErrorContext::new(e, "cli"));
            ExitCode::FAILURE
        }
    }
}
