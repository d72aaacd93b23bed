//! Decode command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use hts_types::SettingsRecord;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::format::{FormatOptions, format_record};
use crate::util::{parse_hex_bytes, write_output};

/// Arguments for the decode command.
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    /// Record bytes as hex.
    pub bytes: String,
    pub strict: bool,
    pub format: OutputFormat,
}

/// Decode a hex string into a record, validating fields when `strict`.
pub fn decode_hex(hex: &str, strict: bool) -> Result<SettingsRecord> {
    let bytes = parse_hex_bytes(hex)?;
    let record = if strict {
        SettingsRecord::from_bytes_strict(&bytes)
    } else {
        SettingsRecord::from_bytes(&bytes)
    };
    record.with_context(|| format!("Failed to decode settings record '{}'", hex))
}

pub fn cmd_decode(args: DecodeArgs, output: Option<&PathBuf>, opts: &FormatOptions) -> Result<()> {
    let record = decode_hex(&args.bytes, args.strict)?;
    debug!("Decoded {} (strict: {})", record, args.strict);

    let content = format_record(&record, args.format, opts)?;
    write_output(output, &content)?;
    Ok(())
}
