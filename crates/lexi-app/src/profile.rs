use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lexi_config::Config;

/// Optional config shipped next to the vocabulary
pub const CONFIG_FILE: &str = "config.json";

/// Load config from a JSON file, falling back to defaults when it is missing.
/// Environment overrides win over both.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::new());
    }

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut config: Config = serde_json::from_reader(reader)?;
    config.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config.languages.len(), 3);
        assert_eq!(config.language_hint(), "en/ru/ka");
    }

    #[test]
    fn test_config_file_overrides_languages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{"languages": [{"code": "en", "name": "English"}, {"code": "ka", "name": "Georgian"}]}"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.language_hint(), "en/ka");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_config(&path).is_err());
    }
}
