//! Word lists and phrase collections shared by documents.
//!
//! A [`Lexicon`] is built once, wrapped in an [`Arc`](std::sync::Arc), and
//! handed to every [`Document`](crate::Document). Documents never mutate it.

use std::fs;

use camino::Utf8Path;

use crate::config::ResourcePaths;
use crate::dictionaries::common_words::STOP_WORDS;
use crate::dictionaries::default_phrases::{CITATION_PHRASES, COPYRIGHT_PHRASES};
use crate::error::{IndexError, IndexResult};
use crate::phrases::PhraseCollection;
use crate::word_list::WordList;

/// Read-only resources used while indexing.
///
/// Every list held here is sorted, so lookups are always reliable.
#[derive(Debug, Clone)]
pub struct Lexicon {
    known_words: WordList,
    custom_words: WordList,
    proper_nouns: WordList,
    personal_names: WordList,
    stop_words: WordList,
    wordy_phrases: PhraseCollection,
    copyright_phrases: PhraseCollection,
    citation_phrases: PhraseCollection,
    excluded_phrases: PhraseCollection,
}

impl Default for Lexicon {
    /// Built-in stop words and copyright/citation phrases; no dictionary.
    fn default() -> Self {
        let mut copyright_phrases = PhraseCollection::new();
        copyright_phrases.load_phrases(COPYRIGHT_PHRASES, true);
        let mut citation_phrases = PhraseCollection::new();
        citation_phrases.load_phrases(CITATION_PHRASES, true);
        Self {
            known_words: WordList::new(),
            custom_words: WordList::new(),
            proper_nouns: WordList::new(),
            personal_names: WordList::new(),
            stop_words: WordList::from_words(STOP_WORDS),
            wordy_phrases: PhraseCollection::new(),
            copyright_phrases,
            citation_phrases,
            excluded_phrases: PhraseCollection::new(),
        }
    }
}

fn sorted(mut list: WordList) -> WordList {
    if !list.is_sorted() {
        list.sort();
    }
    list
}

fn sorted_phrases(mut phrases: PhraseCollection) -> PhraseCollection {
    if !phrases.is_sorted() {
        phrases.sort();
    }
    phrases
}

fn read_resource(path: &Utf8Path) -> IndexResult<String> {
    fs::read_to_string(path).map_err(|source| IndexError::ResourceRead {
        path: path.to_owned(),
        source,
    })
}

impl Lexicon {
    /// Built-in defaults (same as [`Default`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the files named in `paths` on top of the built-in defaults.
    ///
    /// A stop-word file replaces the built-in stop words; copyright and
    /// citation files extend the built-in phrases.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ResourceRead`] for the first file that cannot
    /// be read.
    #[tracing::instrument(skip_all)]
    pub fn load(paths: &ResourcePaths) -> IndexResult<Self> {
        let mut lexicon = Self::default();

        let word_lists = [
            (&paths.known_words, &mut lexicon.known_words),
            (&paths.custom_words, &mut lexicon.custom_words),
            (&paths.proper_nouns, &mut lexicon.proper_nouns),
            (&paths.personal_names, &mut lexicon.personal_names),
        ];
        for (path, list) in word_lists {
            if let Some(path) = path {
                list.load_words(&read_resource(path)?, true);
            }
        }
        if let Some(path) = &paths.stop_words {
            let mut stop_words = WordList::new();
            stop_words.load_words(&read_resource(path)?, true);
            lexicon.stop_words = stop_words;
        }

        let phrase_lists = [
            (&paths.wordy_phrases, &mut lexicon.wordy_phrases),
            (&paths.copyright_phrases, &mut lexicon.copyright_phrases),
            (&paths.citation_phrases, &mut lexicon.citation_phrases),
            (&paths.excluded_phrases, &mut lexicon.excluded_phrases),
        ];
        for (path, phrases) in phrase_lists {
            if let Some(path) = path {
                phrases.load_phrases(&read_resource(path)?, true);
            }
        }

        tracing::debug!(
            known_words = lexicon.known_words.len(),
            wordy_phrases = lexicon.wordy_phrases.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Replace the dictionary of correctly spelled words.
    #[must_use]
    pub fn with_known_words(mut self, words: WordList) -> Self {
        self.known_words = sorted(words);
        self
    }

    /// Replace the user dictionary.
    #[must_use]
    pub fn with_custom_words(mut self, words: WordList) -> Self {
        self.custom_words = sorted(words);
        self
    }

    /// Replace the proper-noun list.
    #[must_use]
    pub fn with_proper_nouns(mut self, words: WordList) -> Self {
        self.proper_nouns = sorted(words);
        self
    }

    /// Replace the personal-name list.
    #[must_use]
    pub fn with_personal_names(mut self, words: WordList) -> Self {
        self.personal_names = sorted(words);
        self
    }

    /// Replace the stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: WordList) -> Self {
        self.stop_words = sorted(words);
        self
    }

    /// Replace the wordy-phrase collection.
    #[must_use]
    pub fn with_wordy_phrases(mut self, phrases: PhraseCollection) -> Self {
        self.wordy_phrases = sorted_phrases(phrases);
        self
    }

    /// Replace the copyright phrases.
    #[must_use]
    pub fn with_copyright_phrases(mut self, phrases: PhraseCollection) -> Self {
        self.copyright_phrases = sorted_phrases(phrases);
        self
    }

    /// Replace the citation-header phrases.
    #[must_use]
    pub fn with_citation_phrases(mut self, phrases: PhraseCollection) -> Self {
        self.citation_phrases = sorted_phrases(phrases);
        self
    }

    /// Replace the excluded phrases.
    #[must_use]
    pub fn with_excluded_phrases(mut self, phrases: PhraseCollection) -> Self {
        self.excluded_phrases = sorted_phrases(phrases);
        self
    }

    /// Correctly spelled words.
    pub const fn known_words(&self) -> &WordList {
        &self.known_words
    }

    /// User additions to the dictionary.
    pub const fn custom_words(&self) -> &WordList {
        &self.custom_words
    }

    /// Words that are always proper nouns.
    pub const fn proper_nouns(&self) -> &WordList {
        &self.proper_nouns
    }

    /// First and last names.
    pub const fn personal_names(&self) -> &WordList {
        &self.personal_names
    }

    /// Glue words skipped by n-gram and overused-word detection.
    pub const fn stop_words(&self) -> &WordList {
        &self.stop_words
    }

    /// Wordy or misused phrases.
    pub const fn wordy_phrases(&self) -> &PhraseCollection {
        &self.wordy_phrases
    }

    /// Phrases that mark a copyright notice.
    pub const fn copyright_phrases(&self) -> &PhraseCollection {
        &self.copyright_phrases
    }

    /// Headers that open a citation section.
    pub const fn citation_phrases(&self) -> &PhraseCollection {
        &self.citation_phrases
    }

    /// Phrases whose words are excluded.
    pub const fn excluded_phrases(&self) -> &PhraseCollection {
        &self.excluded_phrases
    }

    /// Whether the spelling pass has a dictionary to check against.
    pub fn has_dictionary(&self) -> bool {
        !self.known_words.is_empty() || !self.custom_words.is_empty()
    }

    /// Whether a folded word is in the known or custom dictionary.
    pub fn is_known_word(&self, folded: &str) -> bool {
        self.known_words.contains_folded(folded) || self.custom_words.contains_folded(folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_has_builtin_resources() {
        let lexicon = Lexicon::default();
        assert!(lexicon.stop_words().contains("the"));
        assert!(!lexicon.copyright_phrases().is_empty());
        assert!(!lexicon.citation_phrases().is_empty());
        assert!(!lexicon.has_dictionary());
    }

    #[test]
    fn load_reads_configured_files() {
        let dir = TempDir::new().unwrap();
        let paths = ResourcePaths {
            known_words: Some(write(&dir, "words.txt", "zebra apple\nmango")),
            stop_words: Some(write(&dir, "stop.txt", "foo bar")),
            wordy_phrases: Some(write(&dir, "wordy.txt", "in order to\tto\n")),
            copyright_phrases: Some(write(&dir, "legal.txt", "proprietary and confidential\n")),
            ..ResourcePaths::default()
        };

        let lexicon = Lexicon::load(&paths).unwrap();
        assert!(lexicon.is_known_word("mango"));
        assert!(lexicon.known_words().is_sorted());
        assert!(lexicon.stop_words().contains("foo"));
        assert!(!lexicon.stop_words().contains("the"));
        assert_eq!(lexicon.wordy_phrases().len(), 1);
        let legal = lexicon.copyright_phrases();
        assert!(legal.iter().any(|p| p.text() == "proprietary and confidential"));
        assert!(legal.iter().any(|p| p.text() == "all rights reserved"));
    }

    #[test]
    fn missing_file_reports_path() {
        let paths = ResourcePaths {
            proper_nouns: Some(Utf8PathBuf::from("/nonexistent/readindex/names.txt")),
            ..ResourcePaths::default()
        };
        let err = Lexicon::load(&paths).unwrap_err();
        let IndexError::ResourceRead { path, .. } = &err;
        assert_eq!(path.as_str(), "/nonexistent/readindex/names.txt");
        assert!(err.to_string().contains("names.txt"));
    }

    #[test]
    fn builders_sort_lists() {
        let mut words = WordList::new();
        words.load_words("pear apple", false);
        let lexicon = Lexicon::new().with_custom_words(words);
        assert!(lexicon.custom_words().is_sorted());
        assert!(lexicon.is_known_word("apple"));
    }
}
