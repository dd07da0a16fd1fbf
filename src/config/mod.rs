mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_mode: Default::default(),
            rules: Default::default(),
            label: default_label(),
            date_format: default_date_format(),
            max_cycles: default_max_cycles(),
            report_dir: default_report_dir(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Zero spacing would let a due date equal its anchor or predecessor
        let rules = &self.rules;
        for (field, value) in [
            ("initial_first_offset", rules.initial_first_offset),
            ("initial_step", rules.initial_step),
            ("renewal_first_offset", rules.renewal_first_offset),
            ("renewal_interval", rules.renewal_interval),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroSpacing(field));
            }
        }

        if self.max_cycles == 0 {
            return Err(ConfigError::NoCycles);
        }

        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::DateFormat(self.date_format.clone()));
        }

        Ok(())
    }
}
