//! Output formatting for text, JSON, CSV, and hex output.

use anyhow::Result;
use hts_types::{
    INTENSITY_LEVEL_FIELD, IntensityLevel, PAIR_BUTTON_ORIENTATION_FIELD, PairButtonOrientation,
    SettingsRecord, WRIST_ORIENTATION_FIELD, WristOrientation,
};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            ..Self::default()
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize to JSON, respecting the compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

/// JSON view of a record: raw bytes plus the typed value of each field.
///
/// Typed values are `null` for bytes outside their enumeration.
#[derive(Debug, Serialize)]
pub struct RecordReport {
    pub hex: String,
    #[serde(flatten)]
    pub record: SettingsRecord,
    pub wrist: Option<WristOrientation>,
    pub pair_button: Option<PairButtonOrientation>,
    pub intensity: Option<IntensityLevel>,
    pub valid: bool,
}

impl From<&SettingsRecord> for RecordReport {
    fn from(record: &SettingsRecord) -> Self {
        Self {
            hex: hex::encode(record.to_bytes()),
            record: *record,
            wrist: record.wrist().ok(),
            pair_button: record.pair_button().ok(),
            intensity: record.intensity().ok(),
            valid: record.is_valid(),
        }
    }
}

/// Render a record in the requested format.
pub fn format_record(
    record: &SettingsRecord,
    format: OutputFormat,
    opts: &FormatOptions,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format_record_text(record, opts),
        OutputFormat::Json => opts.as_json(&RecordReport::from(record))?,
        OutputFormat::Csv => format_record_csv(record, opts),
        OutputFormat::Hex => format!("{}\n", hex::encode(record.to_bytes())),
    })
}

/// Label for a field value; unknown bytes are flagged in red.
fn field_label(name: Option<&'static str>, raw: u8, no_color: bool) -> String {
    match name {
        Some(name) => name.to_string(),
        None if no_color => format!("unknown ({})", raw),
        None => format!("{}", format!("unknown ({})", raw).red()),
    }
}

#[must_use]
pub fn format_record_text(record: &SettingsRecord, opts: &FormatOptions) -> String {
    use tabled::builder::Builder;
    use tabled::settings::Style;

    let rows = [
        (
            WRIST_ORIENTATION_FIELD,
            record.wrist_orientation,
            record.wrist().ok().map(|v| v.as_str()),
        ),
        (
            PAIR_BUTTON_ORIENTATION_FIELD,
            record.pair_button_orientation,
            record.pair_button().ok().map(|v| v.as_str()),
        ),
        (
            INTENSITY_LEVEL_FIELD,
            record.intensity_level,
            record.intensity().ok().map(|v| v.as_str()),
        ),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Field", "Byte", "Value"]);
    for (field, raw, name) in rows {
        builder.push_record([
            field.to_string(),
            format!("0x{:02x}", raw),
            field_label(name, raw, opts.no_color),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    let title = if opts.no_color {
        "HTS Settings".to_string()
    } else {
        format!("{}", "HTS Settings".bold())
    };

    format!("{} [{}]\n{}\n", title, hex::encode(record.to_bytes()), table)
}

#[must_use]
pub fn format_record_csv(record: &SettingsRecord, opts: &FormatOptions) -> String {
    let row = format!(
        "{},{},{},{}\n",
        hex::encode(record.to_bytes()),
        record.wrist_orientation,
        record.pair_button_orientation,
        record.intensity_level
    );
    if opts.no_header {
        row
    } else {
        format!(
            "hex,{},{},{}\n{}",
            WRIST_ORIENTATION_FIELD, PAIR_BUTTON_ORIENTATION_FIELD, INTENSITY_LEVEL_FIELD, row
        )
    }
}
