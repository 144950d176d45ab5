use crate::data::persistence::Persistable;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Share of working days to spend in the office, 0-100.
    pub target_percent: f64,
    /// Office days already completed this year.
    pub days_present: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            target_percent: 65.0,
            days_present: 88,
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        let settings = SettingsWrapper::load()?.settings;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let settings = SettingsWrapper::load_from(dir)?.settings;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.wrapped().save()
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        self.wrapped().save_to(dir)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.target_percent) {
            bail!(
                "target_percent must be between 0 and 100, got {}",
                self.target_percent
            );
        }
        Ok(())
    }

    /// The target as a fraction in [0.0, 1.0].
    pub fn target_fraction(&self) -> f64 {
        self.target_percent / 100.0
    }

    fn wrapped(&self) -> SettingsWrapper {
        SettingsWrapper {
            settings: self.clone(),
        }
    }
}

/// Parses a percentage in [0, 100]. Used for command line and form input.
pub fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s.trim()))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("percentage must be between 0 and 100, got {}", value));
    }
    Ok(value)
}
