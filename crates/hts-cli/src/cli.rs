//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use hts_types::{IntensityLevel, PairButtonOrientation, WristOrientation};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    /// Lowercase hex of the wire bytes
    Hex,
}

#[derive(Parser)]
#[command(name = "hts")]
#[command(
    author,
    version,
    about = "Encode and decode Haptic Timeline Service settings records",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output (any non-empty NO_COLOR other than 0/false/no/off)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Path to the configuration file
    #[arg(long, global = true, env = "HTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the wire bytes for a settings record
    Encode {
        /// Wrist the device is worn on (left, right)
        #[arg(short, long)]
        wrist: Option<WristOrientation>,

        /// Side of the pair button (left, right)
        #[arg(short, long)]
        pair_button: Option<PairButtonOrientation>,

        /// Haptic intensity (low, medium, high)
        #[arg(short, long)]
        intensity: Option<IntensityLevel>,

        /// Start from an existing record (hex bytes) instead of the defaults
        #[arg(short, long)]
        base: Option<String>,

        /// Output format (default: hex)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Decode wire bytes into a settings record
    Decode {
        /// Record bytes as hex, e.g. "010102" or "01:01:02"
        bytes: String,

        /// Reject fields outside their documented values
        #[arg(short, long)]
        strict: bool,

        /// Output format (default: text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit header row in CSV output (useful for appending)
        #[arg(long)]
        no_header: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse boolean argument with flexible input
pub fn parse_bool_arg(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "enable" | "enabled" => Ok(true),
        "false" | "no" | "off" | "0" | "disable" | "disabled" => Ok(false),
        _ => Err(format!(
            "Invalid boolean value '{}'. Use: true/false, yes/no, on/off, 1/0",
            s
        )),
    }
}

/// Configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Default output format
    Format,
    /// Disable colored output
    NoColor,
    /// Reject out-of-range fields when decoding
    Strict,
    /// Default wrist orientation for encode
    Wrist,
    /// Default pair button orientation for encode
    PairButton,
    /// Default intensity level for encode
    Intensity,
}

impl ConfigKey {
    /// Key name as typed on the command line, e.g. `pair-button`.
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_else(|| format!("{:?}", self))
    }
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Configuration value
        value: String,
    },

    /// Unset (remove) a configuration value
    Unset {
        /// Configuration key to remove
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}
