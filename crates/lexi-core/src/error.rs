use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write vocabulary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
