//! Word, sentence, paragraph and punctuation records.
//!
//! Records refer to each other by index into the document's vectors, never
//! by reference, so derived index lists stay valid after scanning.

use serde::Serialize;

/// Classification shared by sentences and paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentenceType {
    /// Ends with terminal punctuation (or is long enough to count as such).
    Complete,
    /// A fragment.
    #[default]
    Incomplete,
    /// A short standalone line without terminal punctuation.
    Header,
    /// A line introduced by a bullet or list numeral.
    ListItem,
}

/// One token of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Surface text as it appeared.
    pub text: String,
    /// Case-folded text used for lookups.
    pub folded: String,
    /// Case-folded, stemmed text.
    pub stem: String,
    /// Index of the owning sentence.
    pub sentence: usize,
    /// 0-based offset within the owning sentence.
    pub sentence_position: usize,
    /// Index of the owning paragraph.
    pub paragraph: usize,
    /// Syllables according to the document's syllabizer.
    pub syllable_count: usize,
    /// Participates in readability statistics.
    pub is_valid: bool,
    /// Inside an exclusion region (tag block, copyright notice, citation
    /// section, excluded phrase).
    pub is_excluded: bool,
    /// Proper noun.
    pub is_proper_noun: bool,
    /// Found in the personal-names list.
    pub is_personal_name: bool,
    /// All-uppercase abbreviation such as `NASA`.
    pub is_acronym: bool,
    /// At least half digits.
    pub is_numeric: bool,
    /// Belongs to a sentence ending in `!`.
    pub is_exclamatory: bool,
    /// Has an internal apostrophe (`don't`, `it's`).
    pub is_contraction: bool,
    /// First letter is uppercase.
    pub is_capitalized: bool,
    /// URL, e-mail address or file path.
    pub is_file_address: bool,
    /// Contains a hyphen.
    pub is_hyphenated: bool,
    /// Hashtag or @mention.
    pub is_social_media_tag: bool,
}

/// A sentence: an inclusive range of words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// First word index.
    pub first_word: usize,
    /// Last word index (inclusive).
    pub last_word: usize,
    /// Index of the owning paragraph.
    pub paragraph: usize,
    /// Classification.
    pub sentence_type: SentenceType,
    /// Independent clauses (split by colons, semicolons and dashes).
    pub unit_count: usize,
    /// The terminator that ended the sentence, if any.
    pub ending_punctuation: Option<char>,
    /// Participates in readability statistics.
    pub is_valid: bool,
    /// Number of valid words.
    pub valid_word_count: usize,
}

impl Sentence {
    /// Number of words.
    pub const fn word_count(&self) -> usize {
        self.last_word - self.first_word + 1
    }

    /// Word indices of this sentence.
    pub const fn words(&self) -> std::ops::RangeInclusive<usize> {
        self.first_word..=self.last_word
    }
}

/// A paragraph: an inclusive range of sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// First sentence index.
    pub first_sentence: usize,
    /// Last sentence index (inclusive).
    pub last_sentence: usize,
    /// Classification.
    pub paragraph_type: SentenceType,
    /// Participates in readability statistics.
    pub is_valid: bool,
    /// Inside an exclusion region.
    pub is_excluded: bool,
    /// Number of words.
    pub word_count: usize,
    /// Number of valid words.
    pub valid_word_count: usize,
    #[serde(skip)]
    pub(crate) is_list: bool,
}

impl Paragraph {
    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.last_sentence - self.first_sentence + 1
    }

    /// Sentence indices of this paragraph.
    pub const fn sentences(&self) -> std::ops::RangeInclusive<usize> {
        self.first_sentence..=self.last_sentence
    }
}

/// A punctuation character that is not part of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PunctuationMark {
    /// The character.
    pub character: char,
    /// Index of the word that follows the mark (the number of words before it).
    pub word_position: usize,
    /// No whitespace between the previous word and the mark.
    pub connected_to_previous_word: bool,
    #[serde(skip)]
    pub(crate) paragraph: usize,
}

/// A run of consecutive words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WordSpan {
    /// First word index.
    pub start: usize,
    /// Number of words.
    pub length: usize,
}

impl WordSpan {
    /// Create a span.
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last word.
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A known-phrase match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhraseSpan {
    /// Matched words.
    pub span: WordSpan,
    /// Index into the lexicon's wordy-phrase collection.
    pub phrase: usize,
}

/// Words repeated within one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceOverusedWords {
    /// Sentence index.
    pub sentence: usize,
    /// Indices of the repeated words, ascending.
    pub words: Vec<usize>,
}
