use std::io::Write;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Clone, Debug, PartialEq, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: crate::command::Command,
}

impl Args {
    pub(super) fn execute(self, out: &mut dyn Write) -> Result<()> {
        self.command.execute(&self.common, out)
    }
}

#[derive(Clone, Debug, PartialEq, Parser)]
pub struct CommonArgs {
    /// Output format of printed mappings
    #[arg(
        long,
        global = true,
        env = "DICTLITE_FORMAT",
        value_enum,
        default_value_t = Format::default(),
    )]
    pub format: Format,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
