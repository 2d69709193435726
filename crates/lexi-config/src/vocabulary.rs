use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "vocabulary.txt".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Vocabulary file, relative to the working directory unless absolute
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
