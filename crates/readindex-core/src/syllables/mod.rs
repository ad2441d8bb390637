//! Syllable counting.
//!
//! Both languages share one algorithm skeleton (see [`syllabize`]):
//!
//! 1. numerals are delegated to the numeral sub-syllabizer,
//! 2. dotted, hyphenated, or slashed compounds are split and summed,
//! 3. a language prefix (or the German `ge-` participle marker) is stripped,
//! 4. vowel blocks are resolved through an ordered rule table,
//! 5. symbols inside the word add their spoken syllables.
//!
//! The language-specific parts live behind the crate-private
//! [`LanguageRules`] trait; callers select a variant once through
//! [`Syllabizer::new`].

mod english;
mod german;
mod numerals;

use serde::{Deserialize, Serialize};

pub use english::EnglishSyllabizer;
pub use german::GermanSyllabizer;

use crate::characters::{is_apostrophe, is_dash, is_hyphen};

/// Capability to count the syllables in a single word.
pub trait CountSyllables {
    /// Count syllables in `word`.
    ///
    /// Returns at least 1 for any non-empty word and 0 for an empty one.
    fn count_syllables(&self, word: &str) -> usize;
}

/// Document language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// German.
    German,
}

impl Language {
    /// Returns the language as a lowercase tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How numerals are syllabized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum NumeralSyllabication {
    /// A whole numeral counts as one syllable.
    #[default]
    WholeNumeralIsOneSyllable,
    /// Each digit is sounded out ("42" is "four two").
    SoundOutEachDigit,
}

/// The syllabizer selected for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syllabizer {
    /// English rules.
    English(EnglishSyllabizer),
    /// German rules.
    German(GermanSyllabizer),
}

impl Syllabizer {
    /// Create the syllabizer for `language`.
    pub const fn new(language: Language, numerals: NumeralSyllabication) -> Self {
        match language {
            Language::English => Self::English(EnglishSyllabizer::new(numerals)),
            Language::German => Self::German(GermanSyllabizer::new(numerals)),
        }
    }

    /// The language this syllabizer implements.
    pub const fn language(&self) -> Language {
        match self {
            Self::English(_) => Language::English,
            Self::German(_) => Language::German,
        }
    }
}

impl Default for Syllabizer {
    fn default() -> Self {
        Self::new(Language::English, NumeralSyllabication::default())
    }
}

impl CountSyllables for Syllabizer {
    fn count_syllables(&self, word: &str) -> usize {
        match self {
            Self::English(s) => s.count_syllables(word),
            Self::German(s) => s.count_syllables(word),
        }
    }
}

/// Where a vowel block must sit in the word for a rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Any,
    First,
    NotFirst,
}

/// One entry of an ordered vowel-block table.
///
/// Empty constraint fields match anything. The first rule whose block text
/// and constraints all match decides the syllable count, so more specific
/// rules must come before general ones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlockRule {
    block: &'static str,
    after: &'static [char],
    followed_by: &'static str,
    ends_word: &'static str,
    position: Position,
    syllables: usize,
}

pub(crate) const fn rule(block: &'static str, syllables: usize) -> BlockRule {
    BlockRule {
        block,
        after: &[],
        followed_by: "",
        ends_word: "",
        position: Position::Any,
        syllables,
    }
}

impl BlockRule {
    /// Block must be preceded by one of `letters`.
    pub(crate) const fn after(mut self, letters: &'static [char]) -> Self {
        self.after = letters;
        self
    }

    /// Block must be immediately followed by `text`.
    pub(crate) const fn followed_by(mut self, text: &'static str) -> Self {
        self.followed_by = text;
        self
    }

    /// The word, read from the block's first vowel, must be exactly `tail`.
    pub(crate) const fn ends_word(mut self, tail: &'static str) -> Self {
        self.ends_word = tail;
        self
    }

    pub(crate) const fn first(mut self) -> Self {
        self.position = Position::First;
        self
    }

    pub(crate) const fn not_first(mut self) -> Self {
        self.position = Position::NotFirst;
        self
    }

    fn matches(&self, block: &VowelBlock<'_>) -> bool {
        let text = &block.letters[block.start..block.end];
        if !text.iter().copied().eq(self.block.chars()) {
            return false;
        }
        if !self.after.is_empty() {
            let Some(prev) = block.start.checked_sub(1).map(|i| block.letters[i]) else {
                return false;
            };
            if !self.after.contains(&prev) {
                return false;
            }
        }
        if !self.followed_by.is_empty() {
            let rest = &block.letters[block.end..];
            let mut it = rest.iter();
            if !self.followed_by.chars().all(|c| it.next() == Some(&c)) {
                return false;
            }
        }
        if !self.ends_word.is_empty()
            && !block.letters[block.start..]
                .iter()
                .copied()
                .eq(self.ends_word.chars())
        {
            return false;
        }
        match self.position {
            Position::Any => true,
            Position::First => block.is_first,
            Position::NotFirst => !block.is_first,
        }
    }
}

/// A maximal run of vowels inside a (lowercased, letters-only) word.
///
/// `letters` is always the whole word, so positional rules see the original
/// length even after a prefix was stripped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VowelBlock<'a> {
    letters: &'a [char],
    start: usize,
    end: usize,
    is_first: bool,
}

/// The language-specific half of the syllabizer.
pub(crate) trait LanguageRules {
    /// Whether `letters[i]` acts as a vowel in context.
    fn is_vowel_at(&self, letters: &[char], i: usize) -> bool;

    /// Syllables spoken for a digit.
    fn digit_syllables(&self, digit: u32) -> usize;

    /// Syllables spoken for a separator between digits (decimal point).
    fn separator_syllables(&self, c: char) -> usize;

    /// Syllables spoken for a symbol such as `%` or `$`.
    fn symbol_syllables(&self, c: char) -> usize;

    /// Known counts for words the rules get wrong.
    fn exception(&self, _word: &str) -> Option<usize> {
        None
    }

    /// Returns `(letters consumed, syllables of the prefix)`.
    fn strip_prefix(&self, letters: &[char]) -> (usize, usize);

    /// Ordered vowel-block rules.
    fn block_rules(&self) -> &'static [BlockRule];

    /// Fallback for two-vowel blocks with no matching rule.
    fn two_vowel_default(&self) -> usize;

    /// Whole-word corrections applied after the vowel-block count.
    fn adjust(&self, _letters: &[char], _raw: &[char], count: usize) -> usize {
        count
    }
}

/// Count syllables in `word` using `rules`.
pub(crate) fn syllabize<R: LanguageRules>(
    rules: &R,
    numerals: NumeralSyllabication,
    word: &str,
) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let span = trim_span(rules, &chars);
    if span.is_empty() {
        // Nothing pronounceable but the word was not empty.
        return usize::from(!chars.is_empty());
    }
    count_span(rules, numerals, span)
}

/// Drop surrounding punctuation that carries no sound (quotes, brackets,
/// sentence periods), keeping symbols that are read aloud.
fn trim_span<'a, R: LanguageRules>(rules: &R, chars: &'a [char]) -> &'a [char] {
    let keep = |c: char| c.is_alphanumeric() || rules.symbol_syllables(c) > 0;
    let start = chars.iter().position(|&c| keep(c)).unwrap_or(chars.len());
    let end = chars.iter().rposition(|&c| keep(c)).map_or(start, |i| i + 1);
    &chars[start..end]
}

fn count_span<R: LanguageRules>(
    rules: &R,
    numerals: NumeralSyllabication,
    chars: &[char],
) -> usize {
    if chars.is_empty() {
        return 0;
    }
    if numerals::is_numeral(chars) {
        return numerals::count(rules, numerals, chars);
    }

    let segments: Vec<&[char]> = chars
        .split(|&c| is_compound_joint(c))
        .filter(|segment| segment.iter().any(|c| c.is_alphanumeric()))
        .collect();
    if segments.len() > 1 {
        let total: usize = segments
            .iter()
            .map(|segment| count_span(rules, numerals, trim_span(rules, segment)))
            .sum();
        return total.max(1);
    }

    count_word(rules, chars)
}

fn is_compound_joint(c: char) -> bool {
    matches!(c, '.' | '/' | '\\' | '_' | '@' | ':') || is_hyphen(c) || is_dash(c)
}

fn count_word<R: LanguageRules>(rules: &R, chars: &[char]) -> usize {
    let raw: Vec<char> = chars
        .iter()
        .map(|&c| if is_apostrophe(c) { '\'' } else { c })
        .flat_map(char::to_lowercase)
        .collect();

    let raw_word: String = raw.iter().collect();
    if let Some(count) = rules.exception(&raw_word) {
        return count;
    }

    let symbols: usize = raw
        .iter()
        .filter(|c| !c.is_alphanumeric() && **c != '\'')
        .map(|&c| rules.symbol_syllables(c))
        .sum();
    let letters: Vec<char> = raw.iter().copied().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return symbols.max(1);
    }

    let (start, prefix_syllables) = rules.strip_prefix(&letters);
    let first_vowel = (0..letters.len()).find(|&i| rules.is_vowel_at(&letters, i));

    let mut count = 0;
    let mut i = start;
    while i < letters.len() {
        if !rules.is_vowel_at(&letters, i) {
            i += 1;
            continue;
        }
        let block_start = i;
        while i < letters.len() && rules.is_vowel_at(&letters, i) {
            i += 1;
        }
        let block = VowelBlock {
            letters: &letters,
            start: block_start,
            end: i,
            is_first: first_vowel == Some(block_start),
        };
        count += if i - block_start == 1 {
            1
        } else {
            resolve_block(rules, &block)
        };
    }

    let count = rules.adjust(&letters, &raw, count);
    (prefix_syllables + count + symbols).max(1)
}

fn resolve_block<R: LanguageRules>(rules: &R, block: &VowelBlock<'_>) -> usize {
    if let Some(rule) = rules.block_rules().iter().find(|r| r.matches(block)) {
        return rule.syllables;
    }
    let size = block.end - block.start;
    let text = &block.letters[block.start..block.end];
    match size {
        2 => rules.two_vowel_default(),
        3 => 1,
        4 if text.iter().copied().eq("eoau".chars()) => 3,
        _ => 2,
    }
}
