mod completions;
mod generate;
mod inspect;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use crudgen_core::{RunConfig, RunConfigFile};
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

use crate::ops;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crudgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for crudgen_core::ConfigResult<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate a CRUD slice from a C# entity class")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the CRUD slice of an entity class
    Generate(GenerateCommand),

    /// Show what would be extracted from an entity class
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where the entity class and the optional config file come from.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Entity class to read (overrides `input_path` in the config file)
    pub input: Option<PathBuf>,

    /// Path to a config file (defaults to ./crudgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the run configuration, layering `overrides` over the config file.
    pub fn resolve(&self, mut overrides: RunConfigFile) -> RunConfig {
        overrides.input_path = self.input.clone();
        ops::load_config(self.config.as_deref(), overrides).unwrap_or_exit()
    }
}
