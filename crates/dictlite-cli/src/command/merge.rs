use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{instrument, Level};

use crate::{args::CommonArgs, input};

/// Merge JSON objects left to right and print the result
///
#[derive(Clone, Debug, PartialEq, Parser)]
pub struct MergeArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl MergeArgs {
    #[instrument(skip_all, err(level = Level::ERROR))]
    pub(super) fn execute(self, common: &CommonArgs, out: &mut dyn Write) -> Result<()> {
        let merged = input::load_merged(&self.files)?;
        input::write_dict(out, &merged, common.format)
    }
}
