//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use hts_types::{IntensityLevel, PairButtonOrientation, SettingsRecord, WristOrientation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::{ConfigKey, OutputFormat, parse_bool_arg};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Reject out-of-range fields when decoding
    #[serde(default)]
    pub strict: bool,

    /// Default preferences used by `encode`
    #[serde(default)]
    pub defaults: PreferenceDefaults,
}

/// Preferences applied to any field not given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrist: Option<WristOrientation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_button: Option<PairButtonOrientation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<IntensityLevel>,
}

impl Config {
    /// Get the default config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hts")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found or unreadable
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from file, failing if it exists but cannot be read or parsed.
    ///
    /// A missing file yields the default config.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Read a single key as display text. `None` means unset.
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::Format => self.format.clone(),
            ConfigKey::NoColor => Some(self.no_color.to_string()),
            ConfigKey::Strict => Some(self.strict.to_string()),
            ConfigKey::Wrist => self.defaults.wrist.map(|v| v.to_string()),
            ConfigKey::PairButton => self.defaults.pair_button.map(|v| v.to_string()),
            ConfigKey::Intensity => self.defaults.intensity.map(|v| v.to_string()),
        }
    }

    /// Validate and store a value for `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::Format => {
                let format = OutputFormat::from_str(value, true).map_err(|_| {
                    anyhow::anyhow!("Invalid format '{}'. Use: text, json, csv, hex", value)
                })?;
                self.format = format.to_possible_value().map(|v| v.get_name().to_string());
            }
            ConfigKey::NoColor => {
                self.no_color = parse_bool_arg(value).map_err(anyhow::Error::msg)?;
            }
            ConfigKey::Strict => {
                self.strict = parse_bool_arg(value).map_err(anyhow::Error::msg)?;
            }
            ConfigKey::Wrist => self.defaults.wrist = Some(value.parse()?),
            ConfigKey::PairButton => self.defaults.pair_button = Some(value.parse()?),
            ConfigKey::Intensity => self.defaults.intensity = Some(value.parse()?),
        }
        Ok(())
    }

    /// Reset `key` to its default.
    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Format => self.format = None,
            ConfigKey::NoColor => self.no_color = false,
            ConfigKey::Strict => self.strict = false,
            ConfigKey::Wrist => self.defaults.wrist = None,
            ConfigKey::PairButton => self.defaults.pair_button = None,
            ConfigKey::Intensity => self.defaults.intensity = None,
        }
    }
}

/// Resolve the output format: `--json`, then the command flag, then config,
/// then the command's own default.
pub fn resolve_format(
    json: bool,
    arg: Option<OutputFormat>,
    config: &Config,
    default: OutputFormat,
) -> OutputFormat {
    if json {
        return OutputFormat::Json;
    }
    if let Some(format) = arg {
        return format;
    }
    match config.format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true).unwrap_or_else(|_| {
            warn!("Ignoring unknown format '{}' in config", name);
            default
        }),
        None => default,
    }
}

/// Field values given on the command line for `encode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceOverrides {
    pub wrist: Option<WristOrientation>,
    pub pair_button: Option<PairButtonOrientation>,
    pub intensity: Option<IntensityLevel>,
}

/// Build the record to encode.
///
/// Each field comes from the command line, then the configured defaults,
/// then `base`. Fields of `base` are kept as raw bytes.
pub fn resolve_record(
    overrides: PreferenceOverrides,
    config: &Config,
    base: SettingsRecord,
) -> SettingsRecord {
    let defaults = &config.defaults;
    let mut record = base;
    if let Some(wrist) = overrides.wrist.or(defaults.wrist) {
        record.wrist_orientation = wrist.into();
    }
    if let Some(pair_button) = overrides.pair_button.or(defaults.pair_button) {
        record.pair_button_orientation = pair_button.into();
    }
    if let Some(intensity) = overrides.intensity.or(defaults.intensity) {
        record.intensity_level = intensity.into();
    }
    record
}

/// Write a default config to `path`, refusing to overwrite an existing file.
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config already exists: {}", path.display());
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_try_load_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"json\"\n[defaults]\nintensity = \"loud\"\n").unwrap();

        let err = Config::try_load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config"));
    }

    #[test]
    fn test_try_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::try_load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            format: Some("json".to_string()),
            strict: true,
            defaults: PreferenceDefaults {
                wrist: Some(WristOrientation::Right),
                pair_button: None,
                intensity: Some(IntensityLevel::High),
            },
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("wrist = \"right\""));
        assert!(content.contains("intensity = \"high\""));
        assert!(!content.contains("pair_button"));

        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_parse_defaults_section() {
        let config: Config = toml::from_str(
            r#"
            format = "hex"

            [defaults]
            wrist = "left"
            pair_button = "right"
            intensity = "medium"
            "#,
        )
        .unwrap();

        assert_eq!(config.format.as_deref(), Some("hex"));
        assert!(!config.strict);
        assert_eq!(config.defaults.wrist, Some(WristOrientation::Left));
        assert_eq!(
            config.defaults.pair_button,
            Some(PairButtonOrientation::Right)
        );
        assert_eq!(config.defaults.intensity, Some(IntensityLevel::Medium));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path).unwrap();
        assert!(path.exists());
        assert!(init_config(&path).is_err());
    }

    // ========================================================================
    // get/set/unset tests
    // ========================================================================

    #[test]
    fn test_set_and_get_keys() {
        let mut config = Config::default();

        config.set(ConfigKey::Format, "JSON").unwrap();
        config.set(ConfigKey::Strict, "yes").unwrap();
        config.set(ConfigKey::Intensity, "2").unwrap();
        config.set(ConfigKey::Wrist, "Right").unwrap();

        assert_eq!(config.get(ConfigKey::Format).as_deref(), Some("json"));
        assert_eq!(config.get(ConfigKey::Strict).as_deref(), Some("true"));
        assert_eq!(config.get(ConfigKey::Intensity).as_deref(), Some("high"));
        assert_eq!(config.get(ConfigKey::Wrist).as_deref(), Some("right"));
        assert_eq!(config.get(ConfigKey::PairButton), None);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();

        assert!(config.set(ConfigKey::Format, "xml").is_err());
        assert!(config.set(ConfigKey::NoColor, "sometimes").is_err());
        assert!(config.set(ConfigKey::PairButton, "up").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset_restores_defaults() {
        let mut config = Config::default();
        config.set(ConfigKey::Intensity, "low").unwrap();
        config.set(ConfigKey::NoColor, "true").unwrap();

        config.unset(ConfigKey::Intensity);
        config.unset(ConfigKey::NoColor);

        assert_eq!(config, Config::default());
    }

    // ========================================================================
    // resolve_format tests
    // ========================================================================

    #[test]
    fn test_resolve_format_json_flag_wins() {
        let config = Config {
            format: Some("csv".to_string()),
            ..Default::default()
        };
        let result = resolve_format(true, Some(OutputFormat::Hex), &config, OutputFormat::Text);
        assert_eq!(result, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_format_prefers_arg_over_config() {
        let config = Config {
            format: Some("csv".to_string()),
            ..Default::default()
        };
        let result = resolve_format(false, Some(OutputFormat::Hex), &config, OutputFormat::Text);
        assert_eq!(result, OutputFormat::Hex);
    }

    #[test]
    fn test_resolve_format_falls_back_to_config_then_default() {
        let config = Config {
            format: Some("csv".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_format(false, None, &config, OutputFormat::Text),
            OutputFormat::Csv
        );

        let bad = Config {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_format(false, None, &bad, OutputFormat::Hex),
            OutputFormat::Hex
        );
    }

    // ========================================================================
    // resolve_record tests
    // ========================================================================

    #[test]
    fn test_resolve_record_prefers_overrides() {
        let config = Config {
            defaults: PreferenceDefaults {
                wrist: Some(WristOrientation::Left),
                pair_button: Some(PairButtonOrientation::Right),
                intensity: Some(IntensityLevel::Low),
            },
            ..Default::default()
        };
        let overrides = PreferenceOverrides {
            wrist: Some(WristOrientation::Right),
            intensity: Some(IntensityLevel::High),
            ..Default::default()
        };

        let record = resolve_record(overrides, &config, SettingsRecord::default());
        assert_eq!(record.to_bytes(), [1, 1, 2]);
    }

    #[test]
    fn test_resolve_record_keeps_base_fields() {
        let base = SettingsRecord::from([1, 7, 0]);
        let overrides = PreferenceOverrides {
            intensity: Some(IntensityLevel::Medium),
            ..Default::default()
        };

        let record = resolve_record(overrides, &Config::default(), base);
        assert_eq!(record.to_bytes(), [1, 7, 1]);
    }
}
