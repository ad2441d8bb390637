//! German syllabizer.

use super::{BlockRule, CountSyllables, LanguageRules, NumeralSyllabication, rule, syllabize};
use crate::characters::{is_vowel, is_y};

/// Words starting with `ge` + vowel that are not past participles.
const GE_GUARDS: &[&str] = &["geist", "geis", "geil", "geig", "geier", "geiz", "geiß", "geo"];

/// Separable and inseparable prefixes, longest first: `(prefix, syllables)`.
const PREFIXES: &[(&str, usize)] = &[
    ("zusammen", 3),
    ("wieder", 2),
    ("hinein", 2),
    ("heraus", 2),
    ("herein", 2),
    ("hinaus", 2),
    ("voraus", 2),
    ("vorbei", 2),
    ("herbei", 2),
    ("zurück", 2),
    ("durch", 1),
    ("über", 2),
    ("unter", 2),
    ("nach", 1),
    ("auf", 1),
    ("aus", 1),
    ("ein", 1),
    ("mit", 1),
    ("vor", 1),
    ("weg", 1),
    ("ab", 1),
    ("an", 1),
    ("be", 1),
    ("zu", 1),
];

/// Words that start with a prefix's letters without carrying the prefix.
const PREFIX_GUARDS: &[&str] = &["bei", "beer", "beet", "beug", "beul", "beut", "unterst"];

const BLOCK_RULES: &[BlockRule] = &[
    rule("eoau", 3),
    rule("eau", 1),
    rule("aue", 2),
    rule("eue", 2),
    rule("äue", 2),
    rule("iee", 2),
    rule("eie", 2),
    rule("oie", 2),
    rule("ie", 2).ends_word("ien").not_first(),
    rule("ie", 1),
    rule("io", 2),
    rule("ia", 2),
    rule("iu", 2),
    rule("ii", 2),
    rule("eo", 2),
    rule("ea", 2),
    rule("oa", 2),
    rule("ao", 2),
    rule("ue", 1).after(&['q']),
    rule("ue", 2).followed_by("ll"),
    rule("ue", 1),
    rule("ua", 1).after(&['q']),
    rule("ua", 2),
    rule("ui", 1).after(&['q']),
    rule("ui", 2),
    rule("uo", 1).after(&['q']),
    rule("uo", 2),
    rule("oe", 1),
    rule("ae", 1),
    rule("oi", 1),
    rule("ou", 1),
    rule("ei", 1),
    rule("ai", 1),
    rule("au", 1),
    rule("eu", 1),
    rule("äu", 1),
    rule("ey", 1),
    rule("ay", 1),
    rule("ee", 1),
    rule("aa", 1),
    rule("oo", 1),
];

/// German syllable counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GermanSyllabizer {
    numerals: NumeralSyllabication,
}

impl GermanSyllabizer {
    /// Create a German syllabizer.
    pub const fn new(numerals: NumeralSyllabication) -> Self {
        Self { numerals }
    }
}

impl CountSyllables for GermanSyllabizer {
    fn count_syllables(&self, word: &str) -> usize {
        syllabize(self, self.numerals, word)
    }
}

fn starts_with(letters: &[char], prefix: &str) -> bool {
    let mut it = letters.iter();
    prefix.chars().all(|p| it.next() == Some(&p))
}

impl LanguageRules for GermanSyllabizer {
    /// `y` is a vowel except as an initial consonant (Yacht, Yoga).
    fn is_vowel_at(&self, letters: &[char], i: usize) -> bool {
        let c = letters[i];
        if is_vowel(c) {
            return true;
        }
        is_y(c) && !(i == 0 && letters.get(1).is_some_and(|&next| is_vowel(next)))
    }

    fn digit_syllables(&self, d: u32) -> usize {
        // "sieben" is the only two-syllable digit.
        if d == 7 { 2 } else { 1 }
    }

    fn separator_syllables(&self, c: char) -> usize {
        // "Komma"
        if c == ',' { 2 } else { 0 }
    }

    fn symbol_syllables(&self, c: char) -> usize {
        match c {
            '%' | '$' | '€' | '#' => 2,
            '£' | '¥' | '&' | '+' | '=' | '@' | '°' | '×' => 1,
            _ => 0,
        }
    }

    fn strip_prefix(&self, letters: &[char]) -> (usize, usize) {
        // Past participle "ge-" before a vowel: geehrt, geöffnet.
        if letters.len() >= 5
            && starts_with(letters, "ge")
            && is_vowel(letters[2])
            && !GE_GUARDS.iter().any(|g| starts_with(letters, g))
        {
            return (2, 1);
        }
        if PREFIX_GUARDS.iter().any(|g| starts_with(letters, g)) {
            return (0, 0);
        }
        PREFIXES
            .iter()
            .find(|(prefix, _)| {
                let len = prefix.chars().count();
                letters.len() >= len + 3 && starts_with(letters, prefix)
            })
            .map_or((0, 0), |&(prefix, syllables)| (prefix.chars().count(), syllables))
    }

    fn block_rules(&self) -> &'static [BlockRule] {
        BLOCK_RULES
    }

    fn two_vowel_default(&self) -> usize {
        2
    }
}
