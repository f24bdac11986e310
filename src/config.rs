use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".plocrc.json";

/// Tool configuration.
///
/// Every field has a default matching the conventional layout of a project
/// with a Go backend (`locales/`) and a frontend under `ui/src/`, so the
/// tool works in such a checkout without any config file at all.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source-language gotext catalog read by the backend transformer.
    #[serde(default = "default_backend_source")]
    pub backend_source: String,
    /// Target-language gotext catalog written by the backend transformer.
    #[serde(default = "default_backend_target")]
    pub backend_target: String,
    /// Flat list of dot-path keys consumed by the frontend transformer.
    #[serde(default = "default_frontend_keys")]
    pub frontend_keys: String,
    /// Source-language locale tree, merged in place.
    #[serde(default = "default_frontend_source")]
    pub frontend_source: String,
    /// Target-language locale tree, rebuilt on every run.
    #[serde(default = "default_frontend_target")]
    pub frontend_target: String,
    /// Locale code stamped into the catalog and used for the tag prefix.
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
}

fn default_backend_source() -> String {
    "locales/en/out.gotext.json".to_string()
}

fn default_backend_target() -> String {
    "locales/de/messages.gotext.json".to_string()
}

fn default_frontend_keys() -> String {
    "ui/src/locales/keys_found.txt".to_string()
}

fn default_frontend_source() -> String {
    "ui/src/locales/en.json".to_string()
}

fn default_frontend_target() -> String {
    "ui/src/locales/de.json".to_string()
}

fn default_target_locale() -> String {
    "de".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_source: default_backend_source(),
            backend_target: default_backend_target(),
            frontend_keys: default_frontend_keys(),
            frontend_source: default_frontend_source(),
            frontend_target: default_frontend_target(),
            target_locale: default_target_locale(),
        }
    }
}

impl Config {
    /// The marker prefix prepended to every copied source string,
    /// e.g. `"[DE] "` for target locale `de`.
    pub fn tag(&self) -> String {
        format!("[{}] ", self.target_locale.to_uppercase())
    }

    /// Fold command-line flag values over the loaded configuration.
    pub fn apply_overrides(&mut self, target_locale: Option<&str>) {
        if let Some(locale) = target_locale {
            self.target_locale = locale.to_string();
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.target_locale.trim().is_empty() {
            bail!("'targetLocale' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
