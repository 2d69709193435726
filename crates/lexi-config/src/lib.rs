use std::env;

use serde::{Deserialize, Serialize};

use self::language::LanguageConfig;
use self::vocabulary::VocabularyConfig;

pub mod language;
pub mod vocabulary;

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig::new("en", "English"),
        LanguageConfig::new("ru", "Russian"),
        LanguageConfig::new("ka", "Georgian"),
    ]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    /// Languages advertised in the banner and prompts. Other codes are still accepted.
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageConfig>,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `VOCABULARY_PATH`
    pub fn apply_env(&mut self) {
        if let Some(path) = env::var("VOCABULARY_PATH").ok().filter(|p| !p.is_empty()) {
            self.vocabulary.path = path;
        }
    }

    /// Codes joined for prompt hints, e.g. `en/ru/ka`
    pub fn language_hint(&self) -> String {
        self.languages
            .iter()
            .map(|l| l.code.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig::default(),
            languages: default_languages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.vocabulary.path, "vocabulary.txt");
        assert_eq!(config.language_hint(), "en/ru/ka");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"vocabulary": {"path": "words.txt"}}"#).unwrap();
        assert_eq!(config.vocabulary.path, "words.txt");
        assert_eq!(config.languages.len(), 3);
    }
}
