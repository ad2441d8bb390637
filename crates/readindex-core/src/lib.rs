//! Core library for readindex.
//!
//! This crate splits prose into words, sentences and paragraphs, counts
//! syllables, and annotates the result with the grammatical and statistical
//! properties that readability formulas and style checks need. The
//! `readindex` CLI is a thin shell around it.
//!
//! # Modules
//!
//! - [`document`] - The indexer: tokenization, classification, exclusion
//!   regions and grammar/style passes
//! - [`syllables`] - English and German syllable counting
//! - [`diacritics`] - Ligature and combining-diacritic normalization
//! - [`lexicon`] - Shared word lists and phrase collections
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use readindex_core::{Document, Lexicon};
//!
//! let lexicon = Arc::new(Lexicon::default());
//! let mut document = Document::new(lexicon);
//! document.load_document("The the cat sat on the mat. It was not happy.");
//!
//! let stats = document.statistics();
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(document.duplicate_words(), [1]);
//! ```
#![deny(unsafe_code)]

pub mod characters;
pub mod config;
pub mod diacritics;
pub mod dictionaries;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod phrases;
pub mod stemming;
pub mod syllables;
pub mod word_list;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, ResourcePaths};
pub use document::{
    ArticleMismatchFn, Document, DocumentStatistics, IndexingOptions, ParagraphParse,
    SentenceType, SpellingOptions, WordSpan,
};
pub use error::{ConfigError, ConfigResult, IndexError, IndexResult};
pub use lexicon::Lexicon;
pub use phrases::{Phrase, PhraseCollection, PhraseType};
pub use stemming::{NoOpStemmer, PluralStemmer, Stemmer, StemmerKind};
pub use syllables::{CountSyllables, Language, NumeralSyllabication, Syllabizer};
pub use word_list::WordList;

/// Input size limit applied by the CLI when the config does not set one.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
