use crate::data::AppSettings;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    run_in_dir(&dir)?;
    println!("Config initialized in {}", dir.display());
    Ok(())
}

/// Writes the default config.yaml into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    info!(dir = %dir.display(), "default config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_creates_config() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(tmp.path().join("config.yaml").exists(), "config.yaml missing");
    }

    #[test]
    fn test_config_yaml_contains_settings() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let content = fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
        assert!(content.contains("settings"));
        assert!(content.contains("target_percent"));
        assert!(content.contains("days_present"));
    }

    #[test]
    fn test_config_yaml_is_parseable_as_settings() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let loaded = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_run_in_dir_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("fresh");
        run_in_dir(&nested).unwrap();
        assert!(nested.join("config.yaml").exists());
    }
}
