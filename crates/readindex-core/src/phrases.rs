//! Phrase collections and longest-match phrase search.
//!
//! # File format
//!
//! One phrase per line, tab-delimited:
//!
//! ```text
//! phrase<TAB>replacement<TAB>severity<TAB>exception<TAB>exception...
//! ```
//!
//! Only the phrase is required. Severity `1` marks an error; anything else
//! is a style suggestion. Exceptions are words that, when they immediately
//! follow the phrase, veto the match ("in order" is wordy, "in order
//! *of*" is not). Blank lines and lines starting with `#` are skipped.

use serde::{Deserialize, Serialize};

use crate::characters::fold;

/// How serious a phrase match is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseType {
    /// A style suggestion (wordy or overused phrasing).
    #[default]
    Suggestion,
    /// A hard error (wrong word usage).
    Error,
}

/// A multi-word phrase with its suggested replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Phrase {
    words: Vec<String>,
    replacement: String,
    phrase_type: PhraseType,
    trailing_exceptions: Vec<String>,
}

impl Phrase {
    /// Create a phrase from its text. Words are case-folded.
    pub fn new(text: &str, replacement: &str, phrase_type: PhraseType) -> Self {
        Self {
            words: text.split_whitespace().map(fold).collect(),
            replacement: replacement.to_owned(),
            phrase_type,
            trailing_exceptions: Vec::new(),
        }
    }

    /// Add words that veto the phrase when they follow it.
    #[must_use]
    pub fn with_trailing_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trailing_exceptions
            .extend(exceptions.into_iter().map(|e| fold(e.as_ref())));
        self
    }

    /// The case-folded words of the phrase.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The phrase as a single space-separated string.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Suggested replacement (may be empty).
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Suggestion or error.
    pub const fn phrase_type(&self) -> PhraseType {
        self.phrase_type
    }

    /// Words that veto a match when they follow the phrase.
    pub fn trailing_exceptions(&self) -> &[String] {
        &self.trailing_exceptions
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the phrase has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn matches_at<S: AsRef<str>>(&self, words: &[S], position: usize) -> bool {
        let end = position + self.words.len();
        if end > words.len() {
            return false;
        }
        let body_matches = words[position..end]
            .iter()
            .zip(&self.words)
            .all(|(w, p)| w.as_ref() == p);
        let vetoed = words
            .get(end)
            .is_some_and(|next| self.trailing_exceptions.iter().any(|e| e == next.as_ref()));
        body_matches && !vetoed
    }
}

/// A phrase found in a word sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Index of the phrase in its collection.
    pub phrase: usize,
    /// Index of the first matched word.
    pub start: usize,
    /// Number of matched words.
    pub length: usize,
}

impl PhraseMatch {
    /// One past the last matched word.
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// An ordered collection of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCollection {
    phrases: Vec<Phrase>,
    sorted: bool,
}

impl Default for PhraseCollection {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            sorted: true,
        }
    }
}

impl PhraseCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse phrases from `text` (see the module docs for the format) and
    /// append them.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), sort_after_load))]
    pub fn load_phrases(&mut self, text: &str, sort_after_load: bool) {
        let before = self.phrases.len();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let phrase_text = fields.next().unwrap_or_default();
            let replacement = fields.next().unwrap_or_default().trim();
            let phrase_type = match fields.next().map(str::trim) {
                Some("1") => PhraseType::Error,
                _ => PhraseType::Suggestion,
            };
            let exceptions = fields.map(str::trim).filter(|e| !e.is_empty());
            let phrase = Phrase::new(phrase_text, replacement, phrase_type)
                .with_trailing_exceptions(exceptions);
            self.push(phrase);
        }
        if sort_after_load {
            self.sort();
        }
        tracing::debug!(added = self.phrases.len() - before, "loaded phrases");
    }

    /// Append one phrase. Empty phrases are ignored.
    pub fn push(&mut self, phrase: Phrase) {
        if phrase.is_empty() {
            return;
        }
        if self.phrases.last().is_some_and(|last| last.words > phrase.words) {
            self.sorted = false;
        }
        self.phrases.push(phrase);
    }

    /// Whether the collection is sorted by words.
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sort by words, keeping the first of any duplicates.
    pub fn sort(&mut self) {
        self.phrases.sort_by(|a, b| a.words.cmp(&b.words));
        self.phrases.dedup_by(|a, b| a.words == b.words);
        self.sorted = true;
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The phrase at `index`.
    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    /// Iterate over the phrases.
    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    /// Indices of the phrases whose first word is `first`.
    fn candidates(&self, first: &str) -> std::ops::Range<usize> {
        if !self.sorted {
            return 0..self.phrases.len();
        }
        let lo = self
            .phrases
            .partition_point(|p| p.words[0].as_str() < first);
        let hi = self
            .phrases
            .partition_point(|p| p.words[0].as_str() <= first);
        lo..hi
    }

    /// Find the longest phrase starting at `words[position]`.
    ///
    /// `words` must already be case-folded.
    pub fn find<S: AsRef<str>>(&self, words: &[S], position: usize) -> Option<PhraseMatch> {
        let first = words.get(position)?.as_ref();
        self.candidates(first)
            .filter(|&i| self.phrases[i].matches_at(words, position))
            .max_by_key(|&i| (self.phrases[i].len(), std::cmp::Reverse(i)))
            .map(|i| PhraseMatch {
                phrase: i,
                start: position,
                length: self.phrases[i].len(),
            })
    }

    /// Scan `words` for non-overlapping phrase matches.
    ///
    /// `breaks` lists word indices preceded by a punctuation break, in
    /// ascending order; a match never spans one. When a longer match starts
    /// inside the current one, it replaces the current match.
    pub fn scan<S: AsRef<str>>(&self, words: &[S], breaks: &[usize]) -> Vec<PhraseMatch> {
        let mut matches = Vec::new();
        if self.is_empty() {
            return matches;
        }
        let mut current: Option<PhraseMatch> = None;
        for position in 0..words.len() {
            let next_break = breaks.partition_point(|&b| b <= position);
            let limit = breaks
                .get(next_break)
                .copied()
                .unwrap_or(words.len())
                .min(words.len());
            let Some(found) = self.find(&words[..limit], position) else {
                continue;
            };
            match current {
                Some(cur) if position < cur.end() => {
                    if found.length > cur.length && found.end() > cur.end() {
                        current = Some(found);
                    }
                }
                _ => {
                    matches.extend(current.replace(found));
                }
            }
        }
        matches.extend(current);
        matches
    }
}
