//! Function words and small closed word classes.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Built-in English stop words: glue words that carry little content.
///
/// Used as the default stop list of a [`Lexicon`](crate::Lexicon) and for
/// n-gram and overused-word filtering.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "before", "being", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "each", "either", "for", "from", "had", "has", "have", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "may", "me", "might",
    "more", "most", "must", "my", "neither", "no", "nor", "not", "of", "on", "one", "only", "or",
    "other", "our", "ours", "over", "shall", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "us", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "whose", "why", "will", "with", "would",
    "yet", "you", "your", "yours",
];

/// Coordinating conjunctions that are flagged when they start a sentence.
pub static CONJUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["and", "but", "or", "so", "yet", "for", "nor", "und", "aber", "oder"]
        .into_iter()
        .collect()
});

/// Capitalized words that are not proper nouns even mid-sentence.
pub static NON_PROPER_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["i", "i'm", "i've", "i'll", "i'd", "ok", "okay", "o", "oh"]
        .into_iter()
        .collect()
});

/// All-caps words that are not acronyms.
pub static NON_ACRONYMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "a", "ok", "am", "pm", "ii", "iii", "iv", "vi", "vii", "viii", "ix", "xi", "xii",
    ]
    .into_iter()
    .collect()
});

/// Words that open a negated phrase.
pub static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "cannot",
        "can't", "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't", "couldn't",
        "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "mustn't",
    ]
    .into_iter()
    .collect()
});

/// Lowercase connectors allowed inside a proper phrase ("Bank of America",
/// "Leonardo da Vinci").
pub static PROPER_PHRASE_CONNECTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "of", "the", "de", "du", "da", "del", "della", "di", "van", "von", "der", "den", "la", "le",
    ]
    .into_iter()
    .collect()
});

/// Pronoun contractions with `'s` (as opposed to possessives).
pub static PRONOUN_CONTRACTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "it's", "he's", "she's", "that's", "what's", "who's", "there's", "here's", "where's",
        "let's", "how's", "when's", "why's",
    ]
    .into_iter()
    .collect()
});

/// Repeated words that are grammatical ("had had", "that that").
pub static ALLOWED_DUPLICATES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["had", "that"].into_iter().collect());

/// Check if a word is a coordinating conjunction.
pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(word.to_lowercase().as_str())
}

/// Check if a word opens a negated phrase.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(crate::characters::fold(word).as_str())
}
