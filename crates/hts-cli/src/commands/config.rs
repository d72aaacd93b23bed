//! Config command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ConfigAction;
use crate::config::{Config, init_config};

/// Load the config for modification. A file that fails to parse is never
/// replaced, so valid settings in it are not lost.
fn load_for_update(path: &Path) -> Result<Config> {
    Config::try_load_from(path).with_context(|| {
        format!(
            "Refusing to modify {}; fix or remove the file first",
            path.display()
        )
    })
}

pub fn cmd_config(action: ConfigAction, path: &Path, quiet: bool) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_from(path);
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            if !quiet {
                println!("# {}", path.display());
            }
            print!("{}", content);
        }
        ConfigAction::Get { key } => match Config::load_from(path).get(key) {
            Some(value) => println!("{}", value),
            None => println!("(not set)"),
        },
        ConfigAction::Set { key, value } => {
            let mut config = load_for_update(path)?;
            config.set(key, &value)?;
            config.save_to(path)?;
            info!("Set {} = {} in {}", key.name(), value, path.display());
            if !quiet {
                println!("Set {} = {}", key.name(), value);
            }
        }
        ConfigAction::Unset { key } => {
            let mut config = load_for_update(path)?;
            config.unset(key);
            config.save_to(path)?;
            info!("Unset {} in {}", key.name(), path.display());
            if !quiet {
                println!("Unset {}", key.name());
            }
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => {
            init_config(path)?;
            if !quiet {
                println!("Created config at {}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigKey;

    const BROKEN_CONFIG: &str = r#"format = "json"
strict = true

[defaults]
wrist = "right"
intensity = "loud"
"#;

    #[test]
    fn test_set_refuses_to_overwrite_unparsable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BROKEN_CONFIG).unwrap();

        let action = ConfigAction::Set {
            key: ConfigKey::NoColor,
            value: "true".to_string(),
        };
        let err = cmd_config(action, &path, true).unwrap_err();

        assert!(format!("{:#}", err).contains("Refusing to modify"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BROKEN_CONFIG);
    }

    #[test]
    fn test_unset_refuses_to_overwrite_unparsable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BROKEN_CONFIG).unwrap();

        let action = ConfigAction::Unset {
            key: ConfigKey::Strict,
        };
        assert!(cmd_config(action, &path, true).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BROKEN_CONFIG);
    }

    #[test]
    fn test_set_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strict = true\n[defaults]\nwrist = \"right\"\n").unwrap();

        let action = ConfigAction::Set {
            key: ConfigKey::NoColor,
            value: "true".to_string(),
        };
        cmd_config(action, &path, true).unwrap();

        let config = Config::try_load_from(&path).unwrap();
        assert!(config.no_color);
        assert!(config.strict);
        assert_eq!(config.get(ConfigKey::Wrist).as_deref(), Some("right"));
    }
}
