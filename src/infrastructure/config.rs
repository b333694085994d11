//! Configuration management

use crate::error::{DetagError, Result};
use crate::infrastructure::i18n::{parse_locale, Locale};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file name, looked up in the note store root
pub const CONFIG_FILE: &str = ".detag.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language for user-facing notifications
    pub locale: Locale,
    /// File extensions treated as notes, without the leading dot
    pub extensions: Vec<String>,
    /// Descend into subdirectories when clearing every note
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::En,
            extensions: vec!["md".to_string()],
            recursive: false,
        }
    }
}

impl Config {
    /// Load config from `.detag.toml` in the given directory, or defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(DetagError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(DetagError::Config(
                "extensions must list at least one file extension".to_string(),
            ));
        }

        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']))
        {
            return Err(DetagError::Config(format!(
                "Invalid extension '{}': use a bare extension such as \"md\"",
                bad
            )));
        }

        Ok(())
    }

    /// Get the locale, checking the DETAG_LOCALE environment variable first
    pub fn get_locale(&self) -> Result<Locale> {
        match std::env::var("DETAG_LOCALE") {
            Ok(value) if !value.trim().is_empty() => parse_locale(value.trim()),
            _ => Ok(self.locale),
        }
    }
}
