//! The document indexer.
//!
//! A [`Document`] splits text into words, sentences and paragraphs, decides
//! which of them count for readability statistics, and collects index lists
//! of grammar and style findings. Everything is recomputed by
//! [`Document::load_document`]; nothing is updated incrementally.
//!
//! ```
//! use std::sync::Arc;
//! use readindex_core::{Document, Lexicon};
//!
//! let mut document = Document::new(Arc::new(Lexicon::default()));
//! document.load_document("Document ave. (right pane) blah?");
//!
//! assert_eq!(document.sentence_count(), 1);
//! assert_eq!(document.punctuation().len(), 2);
//! ```

mod classify;
mod exclusion;
mod grammar;
pub mod model;
mod options;
mod phrasing;
mod scanner;
mod spelling;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

pub use grammar::{ArticleMismatchFn, english_article_mismatch, no_article_mismatch};
pub use model::{
    Paragraph, PhraseSpan, PunctuationMark, Sentence, SentenceOverusedWords, SentenceType, Word,
    WordSpan,
};
pub use options::{IndexingOptions, ParagraphParse, SpellingOptions};

use crate::config::Config;
use crate::diacritics;
use crate::lexicon::Lexicon;
use crate::stemming::{NoOpStemmer, Stemmer};
use crate::syllables::{CountSyllables, Language, NumeralSyllabication, Syllabizer};

/// An indexed document.
///
/// The lexicon is shared read-only between documents; the syllabizer,
/// stemmer and article checker are chosen once at construction.
pub struct Document {
    lexicon: Arc<Lexicon>,
    options: IndexingOptions,
    syllabizer: Syllabizer,
    stemmer: Box<dyn Stemmer>,
    article_checker: ArticleMismatchFn,

    words: Vec<Word>,
    sentences: Vec<Sentence>,
    paragraphs: Vec<Paragraph>,
    punctuation: Vec<PunctuationMark>,
    /// Word indices preceded by a punctuation mark or a sentence start.
    /// Phrase and repetition searches never cross these.
    breaks: Vec<usize>,

    duplicate_words: Vec<usize>,
    misspelled_words: Vec<usize>,
    incorrect_articles: Vec<usize>,
    passive_voice: Vec<WordSpan>,
    proper_phrases: Vec<WordSpan>,
    n_grams: Vec<WordSpan>,
    negated_phrases: Vec<WordSpan>,
    overused_words_by_sentence: Vec<SentenceOverusedWords>,
    lowercase_sentence_starts: Vec<usize>,
    conjunction_sentence_starts: Vec<usize>,
    known_phrases: Vec<PhraseSpan>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("language", &self.syllabizer.language())
            .field("options", &self.options)
            .field("words", &self.words.len())
            .field("sentences", &self.sentences.len())
            .field("paragraphs", &self.paragraphs.len())
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::default()))
    }
}

impl Document {
    /// An English document with default options and no stemming.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::for_language(lexicon, Language::English)
    }

    /// A document for `language` with default options.
    ///
    /// German documents skip the a/an article check.
    pub fn for_language(lexicon: Arc<Lexicon>, language: Language) -> Self {
        let article_checker: ArticleMismatchFn = match language {
            Language::English => english_article_mismatch,
            Language::German => no_article_mismatch,
        };
        Self {
            lexicon,
            options: IndexingOptions::default(),
            syllabizer: Syllabizer::new(language, NumeralSyllabication::default()),
            stemmer: Box::new(NoOpStemmer),
            article_checker,
            words: Vec::new(),
            sentences: Vec::new(),
            paragraphs: Vec::new(),
            punctuation: Vec::new(),
            breaks: Vec::new(),
            duplicate_words: Vec::new(),
            misspelled_words: Vec::new(),
            incorrect_articles: Vec::new(),
            passive_voice: Vec::new(),
            proper_phrases: Vec::new(),
            n_grams: Vec::new(),
            negated_phrases: Vec::new(),
            overused_words_by_sentence: Vec::new(),
            lowercase_sentence_starts: Vec::new(),
            conjunction_sentence_starts: Vec::new(),
            known_phrases: Vec::new(),
        }
    }

    /// A document configured from a loaded [`Config`].
    pub fn from_config(lexicon: Arc<Lexicon>, config: &Config) -> Self {
        Self::for_language(lexicon, config.language)
            .with_options(config.indexing.clone())
            .with_syllabizer(Syllabizer::new(config.language, config.numerals))
            .with_stemmer(config.stemmer.build())
    }

    /// Replace the indexing options.
    #[must_use]
    pub fn with_options(mut self, options: IndexingOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the syllabizer.
    #[must_use]
    pub fn with_syllabizer(mut self, syllabizer: Syllabizer) -> Self {
        self.syllabizer = syllabizer;
        self
    }

    /// Replace the stemmer.
    #[must_use]
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Replace the article agreement check.
    #[must_use]
    pub fn with_article_checker(mut self, checker: ArticleMismatchFn) -> Self {
        self.article_checker = checker;
        self
    }

    /// Change the options used by the next [`load_document`](Self::load_document).
    pub fn set_options(&mut self, options: IndexingOptions) {
        self.options = options;
    }

    /// Current indexing options.
    pub const fn options(&self) -> &IndexingOptions {
        &self.options
    }

    /// The shared lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Language of the syllabizer.
    pub const fn language(&self) -> Language {
        self.syllabizer.language()
    }

    /// Index `text`, replacing everything from a previous load.
    ///
    /// Never fails: text that cannot be classified falls back to
    /// conservative defaults.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), language = %self.language()))]
    pub fn load_document(&mut self, text: &str) {
        self.reset();

        let text = if self.options.normalize_characters {
            diacritics::normalize(text)
        } else {
            Cow::Borrowed(text)
        };

        let scanned = scanner::scan(&text, &self.options);
        self.words = scanned.words;
        self.sentences = scanned.sentences;
        self.paragraphs = scanned.paragraphs;
        self.punctuation = scanned.punctuation;
        let contexts = scanned.contexts;

        self.breaks = self
            .punctuation
            .iter()
            .map(|m| m.word_position)
            .chain(self.sentences.iter().map(|s| s.first_word))
            .collect();
        self.breaks.sort_unstable();
        self.breaks.dedup();

        self.classify_types();
        self.annotate_words(&contexts);
        for word in &mut self.words {
            word.stem = self.stemmer.stem(&word.folded);
            word.syllable_count = self.syllabizer.count_syllables(&word.text);
        }
        self.mark_exclusions(&contexts);
        self.propagate_validity();

        self.find_duplicate_words();
        self.find_misspellings();
        self.find_incorrect_articles(&contexts);
        self.find_passive_voice();
        self.find_known_phrases();
        if self.options.search_for_proper_phrases {
            self.find_proper_phrases();
        }
        if self.options.search_for_negated_phrases {
            self.find_negated_phrases();
        }
        self.find_n_grams();
        self.find_overused_words();
        self.find_sentence_starts();

        tracing::debug!(
            words = self.words.len(),
            valid_words = self.valid_word_count(),
            sentences = self.sentences.len(),
            paragraphs = self.paragraphs.len(),
            "indexed document"
        );
    }

    fn reset(&mut self) {
        self.words.clear();
        self.sentences.clear();
        self.paragraphs.clear();
        self.punctuation.clear();
        self.breaks.clear();
        self.duplicate_words.clear();
        self.misspelled_words.clear();
        self.incorrect_articles.clear();
        self.passive_voice.clear();
        self.proper_phrases.clear();
        self.n_grams.clear();
        self.negated_phrases.clear();
        self.overused_words_by_sentence.clear();
        self.lowercase_sentence_starts.clear();
        self.conjunction_sentence_starts.clear();
        self.known_phrases.clear();
    }

    pub(super) fn has_break_before(&self, index: usize) -> bool {
        self.breaks.binary_search(&index).is_ok()
    }

    pub(super) fn folded_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.folded.clone()).collect()
    }

    /// All words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All sentences.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All paragraphs.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Punctuation marks in document order.
    pub fn punctuation(&self) -> &[PunctuationMark] {
        &self.punctuation
    }

    /// Second words of repeated pairs ("the the").
    pub fn duplicate_words(&self) -> &[usize] {
        &self.duplicate_words
    }

    /// Words not found in the lexicon's dictionary. Empty without one.
    pub fn misspelled_words(&self) -> &[usize] {
        &self.misspelled_words
    }

    /// Articles that disagree with the following word.
    pub fn incorrect_articles(&self) -> &[usize] {
        &self.incorrect_articles
    }

    /// Auxiliary plus past participle spans.
    pub fn passive_voice(&self) -> &[WordSpan] {
        &self.passive_voice
    }

    /// Runs of proper nouns.
    pub fn proper_phrases(&self) -> &[WordSpan] {
        &self.proper_phrases
    }

    /// Repeated word windows.
    pub fn n_grams(&self) -> &[WordSpan] {
        &self.n_grams
    }

    /// Negation plus governed word.
    pub fn negated_phrases(&self) -> &[WordSpan] {
        &self.negated_phrases
    }

    /// Content words repeated within a sentence.
    pub fn overused_words_by_sentence(&self) -> &[SentenceOverusedWords] {
        &self.overused_words_by_sentence
    }

    /// First words of complete sentences that start lowercase.
    pub fn lowercase_sentence_starts(&self) -> &[usize] {
        &self.lowercase_sentence_starts
    }

    /// First words of sentences that start with a conjunction.
    pub fn conjunction_sentence_starts(&self) -> &[usize] {
        &self.conjunction_sentence_starts
    }

    /// Matches from the lexicon's wordy-phrase collection.
    pub fn known_phrases(&self) -> &[PhraseSpan] {
        &self.known_phrases
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of words that count for readability.
    pub fn valid_word_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_valid).count()
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of sentences that count for readability.
    pub fn valid_sentence_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_valid).count()
    }

    /// Number of sentences classified as complete.
    pub fn complete_sentence_count(&self) -> usize {
        self.sentences
            .iter()
            .filter(|s| s.sentence_type == SentenceType::Complete)
            .count()
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of paragraphs that count for readability.
    pub fn valid_paragraph_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.is_valid).count()
    }

    /// Surface text of a span, words separated by single spaces.
    pub fn span_text(&self, span: WordSpan) -> String {
        let end = span.end().min(self.words.len());
        let start = span.start.min(end);
        self.words[start..end]
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Summary counts for the loaded document.
    pub fn statistics(&self) -> DocumentStatistics {
        let valid: Vec<&Word> = self.words.iter().filter(|w| w.is_valid).collect();
        DocumentStatistics {
            word_count: self.word_count(),
            valid_word_count: valid.len(),
            sentence_count: self.sentence_count(),
            valid_sentence_count: self.valid_sentence_count(),
            complete_sentence_count: self.complete_sentence_count(),
            paragraph_count: self.paragraph_count(),
            valid_paragraph_count: self.valid_paragraph_count(),
            unit_count: self
                .sentences
                .iter()
                .filter(|s| s.is_valid)
                .map(|s| s.unit_count)
                .sum(),
            punctuation_count: self.punctuation.len(),
            syllable_count: self.words.iter().map(|w| w.syllable_count).sum(),
            valid_syllable_count: valid.iter().map(|w| w.syllable_count).sum(),
            monosyllabic_word_count: valid.iter().filter(|w| w.syllable_count == 1).count(),
            polysyllabic_word_count: valid.iter().filter(|w| w.syllable_count >= 3).count(),
            character_count: valid
                .iter()
                .map(|w| w.text.chars().filter(|c| c.is_alphabetic()).count())
                .sum(),
            numeral_count: valid.iter().filter(|w| w.is_numeric).count(),
            proper_noun_count: valid.iter().filter(|w| w.is_proper_noun).count(),
            duplicate_word_count: self.duplicate_words.len(),
            misspelled_word_count: self.misspelled_words.len(),
            incorrect_article_count: self.incorrect_articles.len(),
            passive_voice_count: self.passive_voice.len(),
            proper_phrase_count: self.proper_phrases.len(),
            n_gram_count: self.n_grams.len(),
            negated_phrase_count: self.negated_phrases.len(),
            overused_word_sentence_count: self.overused_words_by_sentence.len(),
            lowercase_sentence_start_count: self.lowercase_sentence_starts.len(),
            conjunction_sentence_start_count: self.conjunction_sentence_starts.len(),
            known_phrase_count: self.known_phrases.len(),
        }
    }
}

/// Summary counts produced by [`Document::statistics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct DocumentStatistics {
    pub word_count: usize,
    pub valid_word_count: usize,
    pub sentence_count: usize,
    pub valid_sentence_count: usize,
    pub complete_sentence_count: usize,
    pub paragraph_count: usize,
    pub valid_paragraph_count: usize,
    /// Independent clauses across valid sentences.
    pub unit_count: usize,
    pub punctuation_count: usize,
    pub syllable_count: usize,
    pub valid_syllable_count: usize,
    pub monosyllabic_word_count: usize,
    /// Valid words with three or more syllables.
    pub polysyllabic_word_count: usize,
    /// Letters in valid words.
    pub character_count: usize,
    pub numeral_count: usize,
    pub proper_noun_count: usize,
    pub duplicate_word_count: usize,
    pub misspelled_word_count: usize,
    pub incorrect_article_count: usize,
    pub passive_voice_count: usize,
    pub proper_phrase_count: usize,
    pub n_gram_count: usize,
    pub negated_phrase_count: usize,
    pub overused_word_sentence_count: usize,
    pub lowercase_sentence_start_count: usize,
    pub conjunction_sentence_start_count: usize,
    pub known_phrase_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::PhraseCollection;
    use crate::word_list::WordList;

    fn load(text: &str) -> Document {
        let mut document = Document::default();
        document.load_document(text);
        document
    }

    fn load_with(lexicon: Lexicon, text: &str) -> Document {
        let mut document = Document::new(Arc::new(lexicon));
        document.load_document(text);
        document
    }

    fn texts(document: &Document, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| document.words()[i].text.clone())
            .collect()
    }

    fn strictly_increasing(indices: impl IntoIterator<Item = usize>) -> bool {
        let indices: Vec<usize> = indices.into_iter().collect();
        indices.windows(2).all(|pair| pair[0] < pair[1])
    }

    const MIXED: &str = "Introduction\n\n\
        The ball was thrown by the boy. She ate a apple and an banana. \
        It is not very good, and the the cat sat on New York City's mat.\n\n\
        - first item\n\
        - second item\n\n\
        Copyright 2024 Acme Corp. All rights reserved.";

    #[test]
    fn abbreviation_does_not_split_sentence() {
        let document = load("Document ave. (right pane) blah?");
        assert_eq!(document.sentence_count(), 1);
        assert_eq!(document.complete_sentence_count(), 1);
        assert_eq!(document.punctuation().len(), 2);
        assert_eq!(document.sentences()[0].ending_punctuation, Some('?'));
    }

    #[test]
    fn copyright_paragraph_is_excluded() {
        let document = load(
            "The report covers the annual results in detail.\n\n\
             Copyright 2024 Acme Corp. All rights reserved.",
        );
        assert_eq!(document.paragraph_count(), 2);
        assert_eq!(document.valid_paragraph_count(), 1);
        let notice = document.paragraph_words(1);
        assert!(document.words()[notice].iter().all(|w| !w.is_valid));
        assert_eq!(document.valid_word_count(), 8);
    }

    #[test]
    fn copyright_exclusion_reach() {
        const TEXT: &str = "Copyright 2024 Acme Corp. All rights reserved.\n\n\
                            Appendix Notes\n\n\
                            The body text resumes here with a full sentence.\n\n\
                            More text follows in this paragraph.";
        let excluded = |document: &Document| -> Vec<bool> {
            document.paragraphs().iter().map(|p| p.is_excluded).collect()
        };

        let document = load(TEXT);
        assert_eq!(document.paragraph_count(), 4);
        assert_eq!(excluded(&document), [true, true, false, false]);
        assert_eq!(document.valid_paragraph_count(), 2);

        let mut document = Document::default().with_options(IndexingOptions {
            aggressive_exclusion: true,
            ..IndexingOptions::default()
        });
        document.load_document(TEXT);
        assert_eq!(excluded(&document), [true, true, true, true]);
        assert_eq!(document.valid_paragraph_count(), 0);
        assert_eq!(document.valid_word_count(), 0);
    }

    #[test]
    fn tagged_block_spans_paragraphs() {
        let mut document = Document::default().with_options(IndexingOptions {
            exclusion_block_tags: vec!["^^".to_owned()],
            ..IndexingOptions::default()
        });
        document.load_document(
            "Intro text is here.\n\n^Hidden paragraph one.\n\nHidden paragraph two.^\n\nFinal words stay.",
        );
        assert_eq!(document.word_count(), 13);
        assert_eq!(document.valid_word_count(), 7);
        assert_eq!(document.sentence_count(), 4);
        assert_eq!(document.valid_sentence_count(), 2);
        assert_eq!(document.paragraph_count(), 4);
        assert_eq!(document.valid_paragraph_count(), 2);
        let counts: Vec<usize> = document
            .paragraphs()
            .iter()
            .map(|p| p.valid_word_count)
            .collect();
        assert_eq!(counts, [4, 0, 0, 3]);
    }

    #[test]
    fn tagged_words_inside_sentence() {
        let mut document = Document::default().with_options(IndexingOptions {
            exclusion_block_tags: vec!["^^".to_owned()],
            ..IndexingOptions::default()
        });
        document.load_document("The first ^secret words here^ are hidden. Visible sentence here.");
        assert_eq!(document.word_count(), 10);
        assert_eq!(document.valid_word_count(), 7);
        assert_eq!(document.valid_sentence_count(), 2);
        assert_eq!(document.paragraphs()[0].valid_word_count, 7);
    }

    #[test]
    fn comma_blocks_duplicate() {
        assert!(load("Ay, ay captain.").duplicate_words().is_empty());
        let document = load("The the cat sat. He had had enough.");
        assert_eq!(document.duplicate_words(), [1]);
    }

    #[test]
    fn single_letter_duplicates() {
        assert_eq!(load("She saw a a cat in the yard.").duplicate_words(), [3]);
        assert_eq!(load("Then I I went home.").duplicate_words(), [2]);
        assert!(load("Then J. J. Abrams spoke.").duplicate_words().is_empty());
    }

    #[test]
    fn reload_is_idempotent() {
        let mut document = Document::default();
        document.load_document(MIXED);
        let words = document.words().to_vec();
        let sentences = document.sentences().to_vec();
        let paragraphs = document.paragraphs().to_vec();
        let punctuation = document.punctuation().to_vec();
        let statistics = document.statistics();
        let passive = document.passive_voice().to_vec();
        let overused = document.overused_words_by_sentence().to_vec();

        document.load_document(MIXED);
        assert_eq!(document.words(), words);
        assert_eq!(document.sentences(), sentences);
        assert_eq!(document.paragraphs(), paragraphs);
        assert_eq!(document.punctuation(), punctuation);
        assert_eq!(document.statistics(), statistics);
        assert_eq!(document.passive_voice(), passive);
        assert_eq!(document.overused_words_by_sentence(), overused);
    }

    #[test]
    fn index_lists_are_in_range_and_increasing() {
        let document = load(MIXED);
        let words = document.word_count();
        assert!(document.valid_word_count() <= words);
        assert!(document.valid_paragraph_count() <= document.paragraph_count());

        for list in [
            document.duplicate_words(),
            document.misspelled_words(),
            document.incorrect_articles(),
            document.lowercase_sentence_starts(),
            document.conjunction_sentence_starts(),
        ] {
            assert!(list.iter().all(|&i| i < words));
            assert!(strictly_increasing(list.iter().copied()));
        }
        for spans in [
            document.passive_voice(),
            document.proper_phrases(),
            document.negated_phrases(),
        ] {
            assert!(spans.iter().all(|s| s.end() <= words));
            assert!(strictly_increasing(spans.iter().map(|s| s.start)));
        }
        assert!(document.n_grams().iter().all(|s| s.end() <= words));
        for overused in document.overused_words_by_sentence() {
            assert!(overused.sentence < document.sentence_count());
            assert!(strictly_increasing(overused.words.iter().copied()));
        }
        assert!(strictly_increasing(
            document.overused_words_by_sentence().iter().map(|o| o.sentence)
        ));
    }

    #[test]
    fn empty_input_has_zero_counts() {
        for text in ["", "   \n\n\t", "...!?"] {
            let document = load(text);
            assert_eq!(document.word_count(), 0, "{text:?}");
            assert_eq!(document.sentence_count(), 0, "{text:?}");
            assert_eq!(document.paragraph_count(), 0, "{text:?}");
            assert_eq!(document.valid_word_count(), 0, "{text:?}");
        }
    }

    #[test]
    fn headers_and_list_items() {
        let document =
            load("Introduction\n\nThis is the body.\n\n- first item\n- second item");
        let types: Vec<SentenceType> = document
            .paragraphs()
            .iter()
            .map(|p| p.paragraph_type)
            .collect();
        assert_eq!(
            types,
            [
                SentenceType::Header,
                SentenceType::Complete,
                SentenceType::ListItem,
                SentenceType::ListItem,
            ]
        );
        assert_eq!(document.valid_paragraph_count(), 1);

        let mut document = Document::default().with_options(IndexingOptions {
            exclude_incomplete_sentences: false,
            ..IndexingOptions::default()
        });
        document.load_document("Introduction\n\nThis is the body.\n\n- first item\n- second item");
        assert_eq!(document.valid_paragraph_count(), 4);
    }

    #[test]
    fn long_unterminated_sentence_is_complete() {
        let document = load(
            "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen",
        );
        assert_eq!(document.word_count(), 16);
        assert_eq!(document.sentences()[0].sentence_type, SentenceType::Complete);
    }

    #[test]
    fn trailing_comma_makes_fragment() {
        let mut document = Document::default().with_options(IndexingOptions {
            paragraph_parse: ParagraphParse::EachNewLine,
            ..IndexingOptions::default()
        });
        document.load_document("A fragment ending here,");
        assert_eq!(document.sentences()[0].sentence_type, SentenceType::Incomplete);
    }

    #[test]
    fn passive_voice_spans() {
        let document = load("The ball was thrown by the boy. The cake was quickly eaten.");
        assert_eq!(
            document.passive_voice(),
            [WordSpan::new(2, 2), WordSpan::new(9, 3)]
        );
        assert_eq!(document.span_text(document.passive_voice()[1]), "was quickly eaten");
    }

    #[test]
    fn proper_phrases() {
        let document = load("Yesterday I visited New York City with John Smith.");
        assert_eq!(
            document.proper_phrases(),
            [WordSpan::new(3, 3), WordSpan::new(7, 2)]
        );

        let document = load("We met at the Bank of America today.");
        assert_eq!(document.proper_phrases(), [WordSpan::new(4, 3)]);

        let document = load("The United Nations met today.");
        assert_eq!(document.proper_phrases(), [WordSpan::new(0, 3)]);
    }

    #[test]
    fn proper_phrase_search_can_be_disabled() {
        let mut document = Document::default().with_options(IndexingOptions {
            search_for_proper_phrases: false,
            search_for_negated_phrases: false,
            ..IndexingOptions::default()
        });
        document.load_document("It is not very good in New York City.");
        assert!(document.proper_phrases().is_empty());
        assert!(document.negated_phrases().is_empty());
    }

    #[test]
    fn negated_phrases() {
        let document = load("It is not very good.");
        assert_eq!(document.negated_phrases(), [WordSpan::new(2, 3)]);
    }

    #[test]
    fn repeated_n_grams() {
        let document = load("The red car stopped. The red car left.");
        assert_eq!(
            document.n_grams(),
            [
                WordSpan::new(0, 2),
                WordSpan::new(0, 3),
                WordSpan::new(1, 2),
                WordSpan::new(4, 2),
                WordSpan::new(4, 3),
                WordSpan::new(5, 2),
            ]
        );
    }

    #[test]
    fn overused_words() {
        let document = load("The plan was a good plan for planning.");
        assert_eq!(
            document.overused_words_by_sentence(),
            [SentenceOverusedWords {
                sentence: 0,
                words: vec![1, 5],
            }]
        );
    }

    #[test]
    fn stemmer_feeds_overused_words() {
        let mut document = Document::default().with_stemmer(crate::stemming::StemmerKind::Plural.build());
        document.load_document("Cities grow while each city shrinks.");
        assert_eq!(document.words()[0].stem, "city");
        assert_eq!(document.overused_words_by_sentence()[0].words, [0, 4]);
    }

    #[test]
    fn incorrect_articles() {
        let document = load("She ate a apple and an banana.");
        assert_eq!(texts(&document, document.incorrect_articles()), ["a", "an"]);
        assert!(load("Vitamin A is good.").incorrect_articles().is_empty());

        let mut german = Document::for_language(Arc::new(Lexicon::default()), Language::German);
        german.load_document("She ate a apple.");
        assert!(german.incorrect_articles().is_empty());
    }

    #[test]
    fn misspellings_need_a_dictionary() {
        assert!(load("The cat sat on teh mat.").misspelled_words().is_empty());

        let lexicon = Lexicon::default()
            .with_known_words(WordList::from_words(["the", "cat", "sat", "on", "mat"]));
        let document = load_with(lexicon, "The cat sat on teh mat.");
        assert_eq!(document.misspelled_words(), [4]);
    }

    #[test]
    fn sentence_starts() {
        let document = load("and then it ended. But it was fine.");
        assert_eq!(document.lowercase_sentence_starts(), [0]);
        assert_eq!(document.conjunction_sentence_starts(), [0, 4]);
    }

    #[test]
    fn citation_section_runs_to_end() {
        let document = load("Body text is here.\n\nReferences\n\nSmith, J. A study. 2020.");
        assert_eq!(document.paragraph_count(), 3);
        assert_eq!(document.valid_paragraph_count(), 1);
        assert!(document.paragraphs()[1].is_excluded);
        assert!(document.paragraphs()[2].is_excluded);

        let mut document = Document::default().with_options(IndexingOptions {
            ignore_citation_sections: false,
            ..IndexingOptions::default()
        });
        document.load_document("Body text is here.\n\nReferences\n\nSmith, J. A study. 2020.");
        assert!(!document.paragraphs()[2].is_excluded);
    }

    #[test]
    fn excluded_phrases_and_numerals() {
        let mut phrases = PhraseCollection::new();
        phrases.load_phrases("lorem ipsum", true);
        let lexicon = Lexicon::default().with_excluded_phrases(phrases);
        let document = load_with(lexicon, "Lorem ipsum dolor sit amet.");
        assert_eq!(document.valid_word_count(), 3);

        let mut document = Document::default().with_options(IndexingOptions {
            exclude_numerals: true,
            ..IndexingOptions::default()
        });
        document.load_document("There were 42 cats.");
        assert_eq!(document.valid_word_count(), 3);
        assert!(!document.words()[2].is_valid);
    }

    #[test]
    fn known_phrases() {
        let mut phrases = PhraseCollection::new();
        phrases.load_phrases("in order to\tto", true);
        let lexicon = Lexicon::default().with_wordy_phrases(phrases);
        let document = load_with(lexicon, "We left in order to eat.");
        assert_eq!(
            document.known_phrases(),
            [PhraseSpan {
                span: WordSpan::new(2, 3),
                phrase: 0,
            }]
        );
    }

    #[test]
    fn ligatures_are_normalized_before_scanning() {
        let document = load("The \u{FB02}oat sank.");
        assert_eq!(document.words()[1].text, "float");

        let mut document = Document::default().with_options(IndexingOptions {
            normalize_characters: false,
            ..IndexingOptions::default()
        });
        document.load_document("The \u{FB02}oat sank.");
        assert_eq!(document.words()[1].text, "\u{FB02}oat");
    }

    #[test]
    fn german_syllables() {
        let mut document = Document::for_language(Arc::new(Lexicon::default()), Language::German);
        document.load_document("Mein Freund isst Fisole.");
        let counts: Vec<usize> = document.words().iter().map(|w| w.syllable_count).collect();
        assert_eq!(counts[1], 1);
        assert_eq!(counts[3], 3);
    }

    #[test]
    fn statistics_summary() {
        let statistics = load("Document ave. (right pane) blah?").statistics();
        assert_eq!(statistics.word_count, 5);
        assert_eq!(statistics.valid_word_count, 5);
        assert_eq!(statistics.sentence_count, 1);
        assert_eq!(statistics.complete_sentence_count, 1);
        assert_eq!(statistics.punctuation_count, 2);
        assert_eq!(statistics.paragraph_count, 1);
        assert!(statistics.syllable_count >= statistics.word_count);
    }

    #[test]
    fn statistics_serialize_flat() {
        let json = serde_json::to_value(load("One short sentence.").statistics()).unwrap();
        assert_eq!(json["word_count"], 3);
        assert_eq!(json["sentence_count"], 1);
    }

    #[test]
    fn options_take_effect_on_reload() {
        let mut document = Document::default();
        document.load_document("Introduction\n\nThis is the body.");
        assert_eq!(document.valid_paragraph_count(), 1);

        document.set_options(IndexingOptions {
            exclude_incomplete_sentences: false,
            ..IndexingOptions::default()
        });
        document.load_document("Introduction\n\nThis is the body.");
        assert_eq!(document.valid_paragraph_count(), 2);
    }
}
