pub mod demo;
pub mod get;
pub mod merge;

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::args::CommonArgs;

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    Demo(self::demo::DemoArgs),
    Get(self::get::GetArgs),
    Merge(self::merge::MergeArgs),
}

impl Command {
    pub(super) fn execute(self, common: &CommonArgs, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::Demo(args) => args.execute(out),
            Self::Get(args) => args.execute(common, out),
            Self::Merge(args) => args.execute(common, out),
        }
    }
}
