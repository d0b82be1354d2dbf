use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use dictlite::Dictlite;
use serde_json::Value;
use tracing::{debug, info, instrument, Level};

use crate::args::Format;

pub type JsonDict = Dictlite<String, Value>;

#[instrument(skip_all, fields(path = %path.display()), err(level = Level::ERROR))]
pub fn load(path: &Path) -> Result<JsonDict> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let dict: JsonDict = ::serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {} as a JSON object", path.display()))?;
    debug!("Loaded {} mappings", dict.len());
    Ok(dict)
}

/// Loads every file in turn, later files overriding earlier ones.
///
pub fn load_merged(paths: &[PathBuf]) -> Result<JsonDict> {
    let mut merged = JsonDict::new();
    for path in paths {
        merged.merge(load(path)?);
    }
    info!("Merged {} files into {} mappings", paths.len(), merged.len());
    Ok(merged)
}

pub fn write_dict(out: &mut dyn Write, dict: &JsonDict, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            ::serde_json::to_writer_pretty(&mut *out, dict)?;
            writeln!(out)?;
        }
        Format::Text => {
            writeln!(out, "dictlite[{}] {{", dict.len())?;
            for (key, value) in dict {
                writeln!(out, "  {key:?}: {value},")?;
            }
            writeln!(out, "}}")?;
        }
    }
    Ok(())
}

pub fn write_value(out: &mut dyn Write, value: &Value, format: Format) -> Result<()> {
    match format {
        Format::Json => ::serde_json::to_writer_pretty(&mut *out, value)?,
        Format::Text => write!(out, "{value}")?,
    }
    writeln!(out).map_err(Into::into)
}
