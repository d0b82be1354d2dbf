use std::{io::Write, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{instrument, Level};

use crate::{args::CommonArgs, input};

/// Print the value of a key after merging the given JSON objects
///
#[derive(Clone, Debug, PartialEq, Parser)]
pub struct GetArgs {
    #[arg(long, short)]
    pub key: String,

    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

impl GetArgs {
    #[instrument(skip_all, fields(key = %self.key), err(level = Level::ERROR))]
    pub(super) fn execute(self, common: &CommonArgs, out: &mut dyn Write) -> Result<()> {
        let merged = input::load_merged(&self.files)?;
        let value = merged
            .get(&self.key)
            .ok_or_else(|| anyhow!("key not found: {}", self.key))?;
        input::write_value(out, value, common.format)
    }
}
