//! Encode command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hts_types::SettingsRecord;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::config::{Config, PreferenceOverrides, resolve_record};
use crate::format::{FormatOptions, format_record};
use crate::util::{parse_hex_bytes, write_output};

/// Arguments for the encode command.
#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    pub overrides: PreferenceOverrides,
    /// Existing record to modify, as hex.
    pub base: Option<String>,
    pub format: OutputFormat,
}

pub fn cmd_encode(
    args: EncodeArgs,
    config: &Config,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let base = match args.base.as_deref() {
        Some(hex) => {
            let bytes = parse_hex_bytes(hex)?;
            SettingsRecord::from_bytes(&bytes)
                .with_context(|| format!("Invalid base record '{}'", hex))?
        }
        None => SettingsRecord::default(),
    };

    let record = resolve_record(args.overrides, config, base);
    debug!("Encoding {}", record);

    // Only a base record can carry out-of-range bytes; they are written as given.
    if let Err(e) = record.validate() {
        warn!("Encoding record with out-of-range field: {}", e);
    }

    let content = format_record(&record, args.format, opts)?;
    write_output(output, &content)?;
    Ok(())
}
