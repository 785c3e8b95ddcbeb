use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, spec_args::SpecArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub spec: SpecArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let spec = self.spec.load().unwrap_or_exit();

        let report = ops::check(&spec);
        report.result.clone().unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
