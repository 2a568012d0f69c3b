use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{DictionaryError, Result};

/// Word list loaded once at startup and read-only afterwards.
///
/// Entries are kept as they appear in the source file, one per
/// `\n`-separated line, including the empty entry left by a trailing newline.
/// A `\r` ending a line is treated as part of the line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn load(dictionary_path: impl AsRef<Path>) -> Result<Self> {
        let path = dictionary_path.as_ref();

        info!("Loading dictionary from {}", path.display());

        let contents = fs::read_to_string(path).map_err(DictionaryError::LoadError)?;
        // CRLF files keep their line boundaries, nothing else is trimmed
        let words: Vec<String> = contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect();

        let dictionary = Self { words };

        info!(
            "Loaded {} entries ({} words) from dictionary",
            dictionary.len(),
            dictionary.word_count()
        );

        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Fails when there is nothing to search, so startup can abort early
    pub fn ensure_usable(&self) -> Result<()> {
        if self.word_count() == 0 {
            warn!("Dictionary has no usable entries");
            return Err(DictionaryError::EmptyDictionary.into());
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of entries, blank lines included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of non-blank entries
    pub fn word_count(&self) -> usize {
        self.words.iter().filter(|w| !w.is_empty()).count()
    }
}
