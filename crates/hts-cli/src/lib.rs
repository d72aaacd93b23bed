//! Command-line tool for Haptic Timeline Service settings records.
//!
//! The HTS Settings characteristic stores the wearer's preferences in a
//! 3-byte record. This tool builds the bytes to write to the characteristic
//! and decodes bytes read back from it. It does not talk to a BLE stack.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `encode` | Build the wire bytes from preference selections |
//! | `decode` | Decode wire bytes into a readable record |
//! | `config` | Manage CLI configuration |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/hts/config.toml` (or platform
//! equivalent). `--config` or `HTS_CONFIG` point it elsewhere.
//!
//! - `format`: Default output format (text, json, csv, hex)
//! - `no_color`: Disable colored output
//! - `strict`: Reject out-of-range fields when decoding
//! - `[defaults]`: `wrist`, `pair_button`, `intensity` used by `encode`
//!
//! # Examples
//!
//! ```bash
//! hts encode --wrist right --pair-button left --intensity high
//! hts decode 01:00:02 --format json
//! hts config set intensity medium
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod util;

pub use hts_types;
