use std::io::{BufRead, Write};
use std::path::PathBuf;

use lexi_config::Config;
use lexi_config::language::LanguageConfig;
use lexi_core::{TranslateError, Translator, Vocabulary};

/// Typing this at any of the three query prompts ends the session
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    SourceLanguage,
    TargetLanguage {
        source: String,
    },
    Word {
        source: String,
        target: String,
    },
    Dispatch {
        source: String,
        target: String,
        word: String,
    },
    Terminate,
}

/// Interactive prompt loop over injectable input and output streams
pub struct Session<R, W> {
    vocabulary: Vocabulary,
    vocabulary_path: PathBuf,
    languages: Vec<LanguageConfig>,
    language_hint: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(vocabulary: Vocabulary, config: &Config, input: R, output: W) -> Self {
        Self {
            vocabulary,
            vocabulary_path: PathBuf::from(&config.vocabulary.path),
            languages: config.languages.clone(),
            language_hint: config.language_hint(),
            input,
            output,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Run until `exit` is typed or input ends
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.greet()?;

        let mut state = State::SourceLanguage;
        loop {
            state = match state {
                State::SourceLanguage => {
                    let prompt = format!("\nEnter source language ({}): ", self.language_hint);
                    match self.prompt_command(&prompt)? {
                        Some(source) => State::TargetLanguage { source },
                        None => State::Terminate,
                    }
                }
                State::TargetLanguage { source } => {
                    let prompt = format!("Enter target language ({}): ", self.language_hint);
                    match self.prompt_command(&prompt)? {
                        Some(target) => State::Word { source, target },
                        None => State::Terminate,
                    }
                }
                State::Word { source, target } => {
                    match self.prompt_command("Enter a word to translate: ")? {
                        Some(word) => State::Dispatch {
                            source,
                            target,
                            word,
                        },
                        None => State::Terminate,
                    }
                }
                State::Dispatch {
                    source,
                    target,
                    word,
                } => {
                    self.dispatch(&source, &target, &word)?;
                    State::SourceLanguage
                }
                State::Terminate => break,
            };
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    fn greet(&mut self) -> anyhow::Result<()> {
        let supported = self
            .languages
            .iter()
            .map(|l| format!("{} ({})", l.code, l.name))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(self.output, "Welcome to the translator!")?;
        writeln!(self.output, "Supported languages: {supported}")?;
        writeln!(self.output, "Type '{EXIT_COMMAND}' to quit.")?;
        Ok(())
    }

    fn dispatch(&mut self, source: &str, target: &str, word: &str) -> anyhow::Result<()> {
        tracing::debug!("Dispatching '{}' ({} -> {})", word, source, target);
        writeln!(
            self.output,
            "\nTranslating '{word}' from {source} to {target}..."
        )?;

        match self.vocabulary.translate(word, source, target) {
            Ok(translation) => {
                writeln!(self.output, "Translation: {}", translation.text)?;
            }
            Err(TranslateError::NotFound { .. }) => {
                writeln!(self.output, "Word '{word}' was not found in the vocabulary.")?;
                self.add_word(source, target, word)?;
            }
        }

        Ok(())
    }

    /// Ask for a translation of an unknown word, store it and persist the vocabulary
    fn add_word(&mut self, source: &str, target: &str, word: &str) -> anyhow::Result<()> {
        let prompt = format!("Enter the translation of '{word}' in {target}: ");
        let Some(translation) = self.prompt(&prompt)? else {
            tracing::warn!("Input closed before a translation for '{}' was given", word);
            return Ok(());
        };

        self.vocabulary.insert(source, word, target, &translation);
        self.vocabulary.save(&self.vocabulary_path)?;

        writeln!(
            self.output,
            "'{word}' was added to the vocabulary as '{translation}'."
        )?;
        Ok(())
    }

    /// Like `prompt`, but `exit` also ends the session
    fn prompt_command(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.prompt(prompt)?.filter(|line| line != EXIT_COMMAND))
    }

    /// Print a prompt and read one line. `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // one terminator only, `\n` or `\r\n`
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}
