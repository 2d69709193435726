use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::entry::Entry;
use crate::error::VocabularyError;
use crate::translator::{TranslateError, Translation, Translator};

/// The other side of a directional entry
#[derive(Debug, Clone, PartialEq, Eq)]
struct Paired {
    lang: String,
    word: String,
}

/// In-memory bidirectional word mapping, keyed by language code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    languages: BTreeMap<String, BTreeMap<String, Paired>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a vocabulary file. A missing file yields an empty vocabulary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        tracing::debug!("Loading vocabulary from {}", path.display());

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No vocabulary file at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(VocabularyError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!("{} is not valid UTF-8, invalid bytes were replaced", path.display());
        }

        let vocabulary = Self::from_lines(&content);
        tracing::info!(
            "Loaded {} entries in {} languages from {}",
            vocabulary.len(),
            vocabulary.languages().count(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Build a vocabulary from file contents, skipping malformed lines
    pub fn from_lines(content: &str) -> Self {
        let mut vocabulary = Self::new();

        for (number, line) in content.lines().enumerate() {
            match Entry::parse(line) {
                Some(entry) => vocabulary.insert_entry(entry),
                None => tracing::debug!("Skipping malformed line {}: {:?}", number + 1, line),
            }
        }

        vocabulary
    }

    /// Store both directions of a word pair. Existing translations are replaced.
    pub fn insert(
        &mut self,
        source_lang: &str,
        source_word: &str,
        target_lang: &str,
        target_word: &str,
    ) {
        self.languages
            .entry(source_lang.to_string())
            .or_default()
            .insert(
                source_word.to_string(),
                Paired {
                    lang: target_lang.to_string(),
                    word: target_word.to_string(),
                },
            );

        self.languages
            .entry(target_lang.to_string())
            .or_default()
            .insert(
                target_word.to_string(),
                Paired {
                    lang: source_lang.to_string(),
                    word: source_word.to_string(),
                },
            );
    }

    pub fn insert_entry(&mut self, entry: Entry) {
        self.insert(
            &entry.source_lang,
            &entry.source_word,
            &entry.target_lang,
            &entry.target_word,
        );
    }

    /// Translation of `word` under `lang`, if known
    pub fn lookup(&self, lang: &str, word: &str) -> Option<&str> {
        self.languages
            .get(lang)
            .and_then(|words| words.get(word))
            .map(|paired| paired.word.as_str())
    }

    /// Overwrite `path` with one line per directional entry.
    ///
    /// Entries whose pair no longer points back at them are written first, so
    /// that replaying the file on load ends with the current pairs.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), VocabularyError> {
        let path = path.as_ref();
        let write_error = |source| VocabularyError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        let (current, stale): (Vec<Entry>, Vec<Entry>) =
            self.entries().partition(|entry| self.is_current(entry));
        for entry in stale.iter().chain(&current) {
            writeln!(writer, "{entry}").map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        tracing::info!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Every directional entry, ordered by language then word
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.languages.iter().flat_map(|(lang, words)| {
            words
                .iter()
                .map(move |(word, paired)| Entry::new(lang, word, &paired.lang, &paired.word))
        })
    }

    /// Whether the paired side of `entry` still translates back to it
    fn is_current(&self, entry: &Entry) -> bool {
        self.languages
            .get(&entry.target_lang)
            .and_then(|words| words.get(&entry.target_word))
            .is_some_and(|back| back.lang == entry.source_lang && back.word == entry.source_word)
    }

    /// Language codes with at least one submapping
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of directional entries
    pub fn len(&self) -> usize {
        self.languages.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Translator for Vocabulary {
    // The target language does not narrow the lookup; any stored
    // translation of `word` under `from` is returned.
    fn translate(&self, word: &str, from: &str, to: &str) -> Result<Translation, TranslateError> {
        self.lookup(from, word)
            .map(|text| Translation {
                text: text.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })
            .ok_or_else(|| TranslateError::NotFound {
                word: word.to_string(),
                lang: from.to_string(),
            })
    }
}
