use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::Config;
use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "genoguide")]
#[command(about = "Genome Guide - chromosome, gene and base-composition explorer")]
#[command(version)]
#[command(long_about = "
Genome Guide lays out a reference genome for display: primary chromosomes as
scaled karyotype bars, genes as markers on their chromosome, and base
composition statistics as percentage shares. Data is read from a snapshot
directory of genome data service payloads (chromosomes.json, genes.json,
statistics.json, optionally gzip-compressed).

Examples:
  genoguide karyotype --data snapshots/grch38
  genoguide gene BRCA1
  genoguide search tp5 --limit 5
  genoguide composition mitochondrial_base_composition --json
  genoguide summary --gene TP53 --chromosome chr17
  genoguide config --example --write genoguide.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot directory (overrides [data] dir)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Primary chromosomes in karyotype order, scaled to the longest
    Karyotype,

    /// Look up a gene by its exact symbol and place it on its chromosome
    Gene {
        /// Gene symbol (case-sensitive)
        symbol: String,
    },

    /// Find genes whose symbol starts with a prefix (case-insensitive)
    Search {
        /// Symbol prefix
        query: String,

        /// Maximum number of results (defaults to [search] limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Base composition of a named statistic; lists statistic names when none is given
    Composition {
        /// Statistic name, e.g. mitochondrial_base_composition
        stat_name: Option<String>,

        /// Count bases of a plain or FASTA sequence file instead
        #[arg(long, conflicts_with = "stat_name")]
        sequence: Option<PathBuf>,
    },

    /// Genome summary with optional selections
    Summary {
        /// Selected gene symbol
        #[arg(long)]
        gene: Option<String>,

        /// Selected chromosome name
        #[arg(long)]
        chromosome: Option<String>,

        /// Search query
        #[arg(long)]
        query: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print the default configuration instead
        #[arg(long)]
        example: bool,

        /// Write the configuration to a file instead of printing it
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.data, cli.json);
    log::debug!(
        "Snapshot directory: {}, output: {}",
        config.data.dir.display(),
        config.output.format
    );

    match cli.command {
        Commands::Karyotype => commands::karyotype::execute(&config)?,

        Commands::Gene { symbol } => commands::gene::execute(&config, symbol)?,

        Commands::Search { query, limit } => commands::search::execute(&config, query, limit)?,

        Commands::Composition { stat_name, sequence } => {
            commands::composition::execute(&config, stat_name, sequence)?
        }

        Commands::Summary { gene, chromosome, query } => {
            commands::summary::execute(&config, gene, chromosome, query)?
        }

        Commands::Config { example, write } => {
            commands::config::execute(&config, example, write)?
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
