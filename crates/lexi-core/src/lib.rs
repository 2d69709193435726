pub mod entry;
pub mod error;
pub mod translator;
pub mod vocabulary;

pub use entry::Entry;
pub use error::VocabularyError;
pub use translator::{LanguageCode, TranslateError, Translation, Translator};
pub use vocabulary::Vocabulary;
