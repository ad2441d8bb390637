//! Stemmer plug-in interface.
//!
//! A [`Document`](crate::Document) stems every word once after scanning.
//! Stems feed n-gram keys and overused-word detection, so a real stemmer
//! makes "cities" and "city" count as the same word.

use serde::{Deserialize, Serialize};

/// Reduces a case-folded word to its stem.
pub trait Stemmer: Send + Sync {
    /// Return the stem of `word`. The input is already case-folded.
    fn stem(&self, word: &str) -> String;
}

/// Returns words unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStemmer;

impl Stemmer for NoOpStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }
}

/// Strips English plural and possessive endings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluralStemmer;

impl Stemmer for PluralStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word
            .strip_suffix("'s")
            .or_else(|| word.strip_suffix('\''))
            .unwrap_or(word);

        if word.len() > 4
            && let Some(base) = word.strip_suffix("ies")
        {
            return format!("{base}y");
        }
        if let Some(base) = word.strip_suffix("sses") {
            return format!("{base}ss");
        }
        for suffix in ["xes", "ches", "shes", "zes"] {
            if word.len() > suffix.len() + 1
                && let Some(base) = word.strip_suffix(suffix)
            {
                return format!("{base}{}", &suffix[..suffix.len() - 2]);
            }
        }
        if word.len() > 3
            && word.ends_with('s')
            && !["ss", "us", "is"].iter().any(|keep| word.ends_with(keep))
        {
            return word[..word.len() - 1].to_owned();
        }
        word.to_owned()
    }
}

/// Built-in stemmer selection for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StemmerKind {
    /// [`NoOpStemmer`].
    #[default]
    None,
    /// [`PluralStemmer`].
    Plural,
}

impl StemmerKind {
    /// Instantiate the selected stemmer.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            Self::None => Box::new(NoOpStemmer),
            Self::Plural => Box::new(PluralStemmer),
        }
    }
}
