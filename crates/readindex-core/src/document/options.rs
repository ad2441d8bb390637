//! Options that control how a document is split and indexed.

use serde::{Deserialize, Serialize};

/// How line breaks map to paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ParagraphParse {
    /// Every non-blank line is its own paragraph.
    EachNewLine,
    /// Lines are joined until one ends a sentence (default).
    #[default]
    OnlySentenceTerminated,
}

/// Words the misspelling pass never flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpellingOptions {
    /// Skip proper nouns.
    pub ignore_proper_nouns: bool,
    /// Skip all-uppercase words.
    pub ignore_uppercased: bool,
    /// Skip words containing digits.
    pub ignore_numerals: bool,
    /// Skip URLs, e-mail addresses and file paths.
    pub ignore_file_addresses: bool,
    /// Skip identifiers such as `camelCase`, `snake_case` and `C++`.
    pub ignore_programmer_code: bool,
    /// Accept colloquial spellings (`runnin'`, `sooo`).
    pub allow_colloquialisms: bool,
    /// Skip hashtags and @mentions.
    pub ignore_social_media_tags: bool,
}

impl Default for SpellingOptions {
    fn default() -> Self {
        Self {
            ignore_proper_nouns: true,
            ignore_uppercased: true,
            ignore_numerals: true,
            ignore_file_addresses: true,
            ignore_programmer_code: true,
            allow_colloquialisms: true,
            ignore_social_media_tags: true,
        }
    }
}

/// Indexing options held by a [`Document`](crate::Document).
///
/// Changing options takes effect on the next
/// [`load_document`](crate::Document::load_document).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexingOptions {
    /// How lines group into paragraphs.
    pub paragraph_parse: ParagraphParse,
    /// Keep joining lines across a blank line when the previous line did
    /// not end a sentence.
    pub ignore_blank_lines_for_paragraphs: bool,
    /// Do not start a new paragraph when a line is indented deeper.
    pub ignore_indenting_for_paragraphs: bool,
    /// Copyright exclusion runs to the end of the document.
    pub aggressive_exclusion: bool,
    /// Unterminated sentences longer than this are treated as complete.
    pub allowable_incomplete_sentence_size: usize,
    /// Headers, list items and fragments are invalid for readability.
    pub exclude_incomplete_sentences: bool,
    /// Collect runs of proper nouns ("New York City").
    pub search_for_proper_phrases: bool,
    /// Collect negated phrases ("not unlike").
    pub search_for_negated_phrases: bool,
    /// N-gram sizes to collect (each at least 2).
    pub n_gram_sizes: Vec<usize>,
    /// Two-character open/close tag pairs (`^^`, `[]`) whose content is
    /// excluded.
    pub exclusion_block_tags: Vec<String>,
    /// Exclude copyright notices.
    pub ignore_copyright_notices: bool,
    /// Exclude everything from a citation header to the end.
    pub ignore_citation_sections: bool,
    /// Numerals are invalid words.
    pub exclude_numerals: bool,
    /// URLs and file paths are invalid words.
    pub exclude_file_addresses: bool,
    /// Run the ligature/diacritic normalizer before scanning.
    pub normalize_characters: bool,
    /// Misspelling exemptions.
    pub spelling: SpellingOptions,
}

impl Default for IndexingOptions {
    fn default() -> Self {
        Self {
            paragraph_parse: ParagraphParse::default(),
            ignore_blank_lines_for_paragraphs: false,
            ignore_indenting_for_paragraphs: false,
            aggressive_exclusion: false,
            allowable_incomplete_sentence_size: 15,
            exclude_incomplete_sentences: true,
            search_for_proper_phrases: true,
            search_for_negated_phrases: true,
            n_gram_sizes: vec![2, 3],
            exclusion_block_tags: Vec::new(),
            ignore_copyright_notices: true,
            ignore_citation_sections: true,
            exclude_numerals: false,
            exclude_file_addresses: false,
            normalize_characters: true,
            spelling: SpellingOptions::default(),
        }
    }
}

impl IndexingOptions {
    /// The exclusion tag pairs as `(open, close)` characters.
    ///
    /// Entries that are not exactly two characters are ignored.
    pub fn tag_pairs(&self) -> Vec<(char, char)> {
        self.exclusion_block_tags
            .iter()
            .filter_map(|tag| {
                let mut chars = tag.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(open), Some(close), None) => Some((open, close)),
                    _ => None,
                }
            })
            .collect()
    }

    /// N-gram sizes, deduplicated and sorted, ignoring sizes below 2.
    pub fn n_gram_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .n_gram_sizes
            .iter()
            .copied()
            .filter(|&n| n >= 2)
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
