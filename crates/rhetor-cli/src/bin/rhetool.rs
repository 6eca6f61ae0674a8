use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use rhetor_cli::commands::{self, info_ops, search_ops, stats_ops, CliError};
use rhetor_engine::stats::FrequencyMethod;

#[derive(Parser)]
#[command(name = "rhetool", about = "Rhetor taxonomy and statistics diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search LAT names by query words (synonym-expanded, per-token union)
    Search {
        /// Path to the taxonomy JSON file
        taxonomy: PathBuf,
        /// Query words, whitespace-separated
        query: String,
        /// Path to a thesaurus JSON file (omit for literal tokens only)
        #[arg(long)]
        thesaurus: Option<PathBuf>,
        /// Path to an engine config TOML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search stored pattern bodies for free text (per-token intersection)
    Grep {
        /// Path to the taxonomy JSON file
        taxonomy: PathBuf,
        /// Query tokens, whitespace-separated
        query: String,
        /// Require full-token matches instead of substrings
        #[arg(long)]
        exact: bool,
        /// Path to an engine config TOML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the pattern text bound to a LAT
    Patterns {
        /// Path to the taxonomy JSON file
        taxonomy: PathBuf,
        /// LAT name (display or internal form)
        lat: String,
        /// Print the original body even when a revised one exists
        #[arg(long)]
        original: bool,
    },

    /// Show help text for a cluster or dimension
    Info {
        /// Path to the taxonomy JSON file
        taxonomy: PathBuf,
        /// Cluster or dimension name (display or internal form)
        name: String,
    },

    /// Aggregate tagged units into per-group statistics
    Stats {
        /// Path to the tagged-units JSON file
        units_file: PathBuf,
        /// Frequency metric
        #[arg(long, value_enum, default_value = "doc")]
        method: MethodArg,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    /// count / total word count
    Doc,
    /// log10(1 + count)
    Log,
}

impl From<MethodArg> for FrequencyMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Doc => FrequencyMethod::Document,
            MethodArg::Log => FrequencyMethod::Log,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(found) => {
            if !found {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn run(command: Command) -> Result<bool, CliError> {
    match command {
        Command::Search {
            taxonomy,
            query,
            thesaurus,
            config,
            json,
        } => {
            let config = commands::load_config(config.as_deref())?;
            let store = commands::load_store(&taxonomy)?;
            let expander = commands::load_expander(
                thesaurus.as_deref(),
                config.synonyms.similarity_threshold,
            )?;
            search_ops::by_name(&store, expander.as_ref(), &config.search, &query, json)
        }
        Command::Grep {
            taxonomy,
            query,
            exact,
            config,
            json,
        } => {
            let config = commands::load_config(config.as_deref())?;
            let store = commands::load_store(&taxonomy)?;
            let expander = commands::load_expander(None, config.synonyms.similarity_threshold)?;
            search_ops::by_pattern(&store, expander.as_ref(), &config.search, &query, exact, json)
        }
        Command::Patterns {
            taxonomy,
            lat,
            original,
        } => {
            let store = commands::load_store(&taxonomy)?;
            info_ops::patterns(&store, &lat, original)?;
            Ok(true)
        }
        Command::Info { taxonomy, name } => {
            let store = commands::load_store(&taxonomy)?;
            info_ops::info(&store, &name)?;
            Ok(true)
        }
        Command::Stats {
            units_file,
            method,
            json,
        } => {
            stats_ops::stats(&units_file, method.into(), json)?;
            Ok(true)
        }
    }
}
