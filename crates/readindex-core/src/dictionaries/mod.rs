//! Dictionaries for text indexing.
//!
//! Provides curated word sets used by sentence splitting, proper noun and
//! acronym detection, passive voice detection, and the grammar passes.

pub mod abbreviations;
pub mod common_words;
pub mod default_phrases;
pub mod irregular_verbs;
