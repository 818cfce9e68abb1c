use std::path::PathBuf;

use clap::Args;
use crudgen_core::{NamespaceOverrides, RunConfigFile};
use crudgen_schema::ModelFile;
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output root (defaults to ./GeneratedOutput)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root namespace of the API project
    #[arg(long, value_name = "NS")]
    pub api_namespace: Option<String>,

    /// Root namespace of the core project
    #[arg(long, value_name = "NS")]
    pub core_namespace: Option<String>,

    /// Extension of generated files
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.input.resolve(RunConfigFile {
            input_path: None,
            output_root: self.output.clone(),
            extension: self.extension.clone(),
            namespaces: NamespaceOverrides {
                api: self.api_namespace.clone(),
                core: self.core_namespace.clone(),
            },
        });

        // Read before anything touches the output root.
        let model_file = ModelFile::open(&config.input_path).unwrap_or_exit();

        let report = ops::generate(
            model_file.extraction(),
            &config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
