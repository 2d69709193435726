pub type LanguageCode = String;

/// Translation provider interface
pub trait Translator {
    /// Translate a single word from one language to another
    fn translate(
        &self,
        word: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("Word '{word}' not found for language {lang}")]
    NotFound { word: String, lang: LanguageCode },
}
