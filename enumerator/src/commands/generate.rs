use std::path::PathBuf;

use clap::Args;
use enumerator_core::Destination;
use eyre::Result;

use super::{UnwrapOrExit, invocation, spec_args::SpecArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub destination: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let spec = self.spec.load().unwrap_or_exit().with_invocation(invocation());
        spec.validate().unwrap_or_exit();

        let destination = Destination::from_path(self.destination.as_ref());
        let report = ops::generate(&spec, &destination)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
