//! Suffix index command-line driver.
//!
//! Loads a word list into a compressed suffix index and answers word and
//! suffix queries against it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use suffix_index_lib::config::{self, AppConfig, LogConfig};
use suffix_index_lib::corpus::load_words_from_path;
use suffix_index_lib::error::{AppError, AppResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the suffix index.
#[derive(Parser, Debug)]
#[clap(name = "suffix_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a word list and print index statistics
    Stats {
        /// Word list, one word per line
        words: PathBuf,

        /// Print statistics as JSON
        #[clap(long)]
        json: bool,
    },

    /// Check whether each query is a stored word or a stored suffix
    Query {
        /// Word list, one word per line
        words: PathBuf,

        /// Strings to look up
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Print every stored word in sorted order
    Words {
        /// Word list, one word per line
        words: PathBuf,
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

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| AppError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn main() -> AppResult<()> {
    let args = Args::parse();

    let loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let app_config = match loader.load() {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&app_config.log)?;

    match args.command {
        Command::Stats { words, json } => {
            let (index, report) = load_words_from_path(&words, &app_config.input)?;
            if json {
                let stats = serde_json::json!({
                    "size": index.size(),
                    "word_count": index.word_count(),
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("size\t{}", index.size());
                println!("word_count\t{}", index.word_count());
                println!("lines\t{}", report.lines);
                println!("inserted\t{}", report.inserted);
                println!("duplicates\t{}", report.duplicates);
                println!("empty\t{}", report.empty);
                println!("comments\t{}", report.comments);
                println!("too_long\t{}", report.too_long);
            }
            Ok(())
        }
        Command::Query { words, queries } => {
            let (index, _) = load_words_from_path(&words, &app_config.input)?;
            println!("query\tword\tsuffix");
            for query in &queries {
                println!("{query}\t{}\t{}", index.search(query), index.ends_with(query));
            }
            Ok(())
        }
        Command::Words { words } => {
            let (index, _) = load_words_from_path(&words, &app_config.input)?;
            for word in index.words() {
                println!("{word}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AppConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
