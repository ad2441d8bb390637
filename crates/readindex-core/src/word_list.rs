//! Sorted word lists with binary-search lookup.

use crate::characters::fold;

/// A case-folded list of words.
///
/// Lookups use binary search, so [`contains`](Self::contains) is only
/// reliable once the list is sorted. Loading with `sort_after_load` (or
/// calling [`sort`](Self::sort)) is the caller's job; [`is_sorted`] reports
/// the current state.
///
/// [`is_sorted`]: Self::is_sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    sorted: bool,
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            sorted: true,
        }
    }
}

impl WordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sorted list from `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.add_word(word.as_ref());
        }
        list.sort();
        list
    }

    /// Append the whitespace-delimited words in `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), sort_after_load))]
    pub fn load_words(&mut self, text: &str, sort_after_load: bool) {
        let before = self.words.len();
        for word in text.split_whitespace() {
            self.add_word(word);
        }
        if sort_after_load {
            self.sort();
        }
        tracing::debug!(added = self.words.len().saturating_sub(before), "loaded words");
    }

    /// Append one word (case-folded).
    pub fn add_word(&mut self, word: &str) {
        let word = fold(word);
        if word.is_empty() {
            return;
        }
        if self.words.last().is_some_and(|last| *last > word) {
            self.sorted = false;
        }
        self.words.push(word);
    }

    /// Whether the list is sorted and lookups are reliable.
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sort the list and drop duplicates.
    pub fn sort(&mut self) {
        self.words.sort_unstable();
        self.words.dedup();
        self.sorted = true;
    }

    /// Binary-search for `word` (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.contains_folded(&fold(word))
    }

    /// Binary-search for an already case-folded word.
    pub fn contains_folded(&self, folded: &str) -> bool {
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(folded))
            .is_ok()
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
