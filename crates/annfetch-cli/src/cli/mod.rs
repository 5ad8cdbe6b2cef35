//! CLI for annfetch.

mod commands;

use annfetch_core::config::{self, FetchBackend};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use commands::{run_fetch, run_list, FetchOverrides};

/// Top-level CLI for annfetch.
#[derive(Debug, Parser)]
#[command(name = "annfetch")]
#[command(about = "annfetch: download and unpack ANN benchmark datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--backend` values; mirrors `fetch_backend` in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Curl,
    Wget,
}

impl From<BackendArg> for FetchBackend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::Curl => FetchBackend::Curl,
            BackendArg::Wget => FetchBackend::Wget,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download (if absent) and unpack a dataset.
    Fetch {
        /// Dataset name (see `annfetch list`).
        #[arg(default_value = "sift1m")]
        dataset: String,

        /// Directory for downloaded archives (overrides config).
        #[arg(long, value_name = "DIR")]
        downloads_dir: Option<PathBuf>,

        /// Directory to unpack into (default: the dataset's name).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Transfer backend (overrides config).
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// List known datasets.
    List,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Fetch {
                dataset,
                downloads_dir,
                output_dir,
                backend,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let overrides = FetchOverrides {
                    downloads_dir,
                    output_dir,
                    backend: backend.map(FetchBackend::from),
                };
                run_fetch(&cfg, &dataset, overrides)?;
            }
            CliCommand::List => run_list(),
        }

        Ok(())
    }
}
