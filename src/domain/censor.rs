// src/domain/censor.rs

/// Replacement written over every banned word.
pub const REDACTION_MARKER: &str = "***";

/// Words redacted when no list is configured.
pub const DEFAULT_BANNED_WORDS: [&str; 3] = ["слово1", "слово2", "слово3"];

/// Redacts a fixed list of words from text.
///
/// Matching is exact and case-sensitive with no regard for word boundaries. Words are applied
/// one after another, each pass working on the output of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfanityFilter {
    words: Vec<String>,
}

impl ProfanityFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn censor(&self, text: &str) -> String {
        self.words
            .iter()
            .fold(text.to_owned(), |acc, word| acc.replace(word.as_str(), REDACTION_MARKER))
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}
