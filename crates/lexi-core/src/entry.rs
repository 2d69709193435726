use std::fmt;

/// One line of the vocabulary file: `sourceLang:sourceWord=targetLang:targetWord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source_lang: String,
    pub source_word: String,
    pub target_lang: String,
    pub target_word: String,
}

impl Entry {
    pub fn new(
        source_lang: impl Into<String>,
        source_word: impl Into<String>,
        target_lang: impl Into<String>,
        target_word: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            source_word: source_word.into(),
            target_lang: target_lang.into(),
            target_word: target_word.into(),
        }
    }

    /// Parse a single line. Returns `None` unless the line splits into exactly
    /// two `=` parts, each holding exactly two `:` parts.
    pub fn parse(line: &str) -> Option<Self> {
        let (source, target) = split_exact(line, '=')?;
        let (source_lang, source_word) = split_exact(source, ':')?;
        let (target_lang, target_word) = split_exact(target, ':')?;

        Some(Self::new(source_lang, source_word, target_lang, target_word))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}={}:{}",
            self.source_lang, self.source_word, self.target_lang, self.target_word
        )
    }
}

fn split_exact(text: &str, separator: char) -> Option<(&str, &str)> {
    let mut parts = text.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Some((left, right)),
        _ => None,
    }
}
