use clap::Args;
use crudgen_core::RunConfigFile;
use crudgen_schema::ModelFile;
use eyre::{Context, Result};

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the extracted model as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.input.resolve(RunConfigFile::default());
        let model_file = ModelFile::open(&config.input_path).unwrap_or_exit();

        let report = ops::inspect(&model_file);
        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize model")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
