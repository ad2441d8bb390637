//! English syllabizer.

use super::{BlockRule, CountSyllables, LanguageRules, NumeralSyllabication, rule, syllabize};
use crate::characters::{is_vowel, is_y};

/// Words whose spelling misleads the vowel-block rules.
const EXCEPTIONS: &[(&str, usize)] = &[
    ("acne", 2),
    ("apostrophe", 4),
    ("argue", 2),
    ("business", 2),
    ("catastrophe", 4),
    ("coyote", 3),
    ("create", 2),
    ("created", 3),
    ("element", 3),
    ("every", 3),
    ("fluid", 2),
    ("hyperbole", 4),
    ("idea", 3),
    ("ideas", 3),
    ("karate", 3),
    ("maybe", 2),
    ("people", 2),
    ("poem", 2),
    ("poet", 2),
    ("quiet", 2),
    ("recipe", 3),
    ("ruin", 2),
    ("science", 2),
    ("simile", 3),
    ("somewhere", 2),
    ("wednesday", 2),
];

/// Prefixes stripped before counting: `(pattern, letters consumed,
/// syllables, guard words)`.
///
/// The pattern may look one letter past the prefix (`reo` consumes only
/// `re`). A prefix is stripped only when at least three letters remain and
/// the word does not start with one of its guards.
const PREFIXES: &[(&str, usize, usize, &[&str])] = &[
    ("there", 5, 1, &[]),
    ("where", 5, 1, &[]),
    ("some", 4, 1, &[]),
    ("more", 4, 1, &["morel"]),
    ("home", 4, 1, &["homeo"]),
    ("fire", 4, 1, &[]),
    ("life", 4, 1, &[]),
    ("safe", 4, 1, &[]),
    ("pree", 3, 1, &["preen"]),
    ("preo", 3, 1, &[]),
    ("ree", 2, 1, &["reed", "reef", "reek", "reel"]),
    ("reo", 2, 1, &[]),
    ("coe", 2, 1, &[]),
    ("coo", 2, 1, &["cook", "cool", "coon", "coot"]),
    ("dee", 2, 1, &["deep", "deem", "deer"]),
    ("deo", 2, 1, &[]),
];

/// Ordered vowel-block rules. Earlier, more specific rules win.
const BLOCK_RULES: &[BlockRule] = &[
    // "-tion", "-sion", "-cion", "-xion" and "-llion" collapse.
    rule("io", 1).after(&['t', 's', 'c', 'x']).followed_by("n"),
    rule("io", 1).after(&['l']).followed_by("n").not_first(),
    rule("io", 1).after(&['n']).followed_by("n").not_first(),
    rule("io", 2),
    rule("ia", 1).after(&['c', 't']).followed_by("l"),
    rule("ia", 1).after(&['c', 't']).followed_by("n"),
    rule("ia", 2),
    rule("ie", 2).ends_word("ier").not_first(),
    rule("ie", 2).ends_word("iest").not_first(),
    rule("ie", 2).ends_word("ies").after(&['r']).first(),
    rule("ie", 1).after(&['t', 'c']).followed_by("nt"),
    rule("ie", 2).followed_by("nt"),
    rule("ie", 2).followed_by("t"),
    rule("ea", 2).ends_word("ea").not_first(),
    rule("eo", 1).after(&['g']),
    rule("eo", 2),
    rule("ua", 1).after(&['q', 'g']),
    rule("ua", 2),
    rule("ue", 0).after(&['q', 'g']).ends_word("ue"),
    rule("ue", 0).after(&['q', 'g']).ends_word("ues"),
    rule("ue", 1).after(&['q', 'g']),
    rule("ue", 1).ends_word("ue"),
    rule("ue", 1).ends_word("ues"),
    rule("ue", 1).ends_word("ued"),
    rule("ue", 2),
    rule("ui", 1).after(&['q', 'g']),
    rule("ui", 2).followed_by("ng"),
    rule("uo", 1).after(&['q']),
    rule("uo", 2),
    rule("oi", 2).followed_by("ng"),
    rule("ei", 2).followed_by("ng"),
    rule("ii", 2),
    rule("iu", 2),
    rule("ao", 2),
    rule("eau", 1),
    rule("iou", 1).after(&['c', 't', 's', 'x', 'g']),
    rule("iou", 2),
    rule("eou", 1).after(&['g', 'c']),
    rule("eou", 2),
    rule("uou", 2),
    rule("uie", 2).after(&['q']),
    rule("eei", 2).followed_by("ng"),
    rule("ueue", 1).after(&['q']),
];

/// Digits read aloud: "zero" and "seven" take two syllables.
const fn digit(d: u32) -> usize {
    match d {
        0 | 7 => 2,
        _ => 1,
    }
}

/// English syllable counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishSyllabizer {
    numerals: NumeralSyllabication,
}

impl EnglishSyllabizer {
    /// Create an English syllabizer.
    pub const fn new(numerals: NumeralSyllabication) -> Self {
        Self { numerals }
    }
}

impl CountSyllables for EnglishSyllabizer {
    fn count_syllables(&self, word: &str) -> usize {
        syllabize(self, self.numerals, word)
    }
}

fn ends_with(letters: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    letters.len() >= n && letters[letters.len() - n..].iter().copied().eq(suffix.chars())
}

fn starts_with(letters: &[char], prefix: &str) -> bool {
    let n = prefix.chars().count();
    letters.len() >= n && letters[..n].iter().copied().eq(prefix.chars())
}

impl EnglishSyllabizer {
    fn consonant_at(&self, letters: &[char], i: usize) -> bool {
        letters.get(i).is_some() && !self.is_vowel_at(letters, i)
    }
}

impl LanguageRules for EnglishSyllabizer {
    /// `y` is a vowel unless it starts the word or precedes a vowel.
    fn is_vowel_at(&self, letters: &[char], i: usize) -> bool {
        let c = letters[i];
        if is_vowel(c) {
            return true;
        }
        is_y(c) && i > 0 && !letters.get(i + 1).is_some_and(|&next| is_vowel(next))
    }

    fn digit_syllables(&self, d: u32) -> usize {
        digit(d)
    }

    fn separator_syllables(&self, c: char) -> usize {
        // "point"; thousands separators are silent.
        usize::from(c == '.')
    }

    fn symbol_syllables(&self, c: char) -> usize {
        match c {
            '%' | '$' | '€' | '=' | '#' | '°' => 2,
            '£' | '¥' | '&' | '+' | '@' | '×' => 1,
            _ => 0,
        }
    }

    fn exception(&self, word: &str) -> Option<usize> {
        EXCEPTIONS
            .iter()
            .find_map(|&(w, count)| (w == word).then_some(count))
    }

    fn strip_prefix(&self, letters: &[char]) -> (usize, usize) {
        for &(prefix, consumed, syllables, guards) in PREFIXES {
            if letters.len() >= consumed + 3
                && starts_with(letters, prefix)
                && !guards.iter().any(|g| starts_with(letters, g))
            {
                return (consumed, syllables);
            }
        }
        (0, 0)
    }

    fn block_rules(&self) -> &'static [BlockRule] {
        BLOCK_RULES
    }

    fn two_vowel_default(&self) -> usize {
        1
    }

    fn adjust(&self, letters: &[char], raw: &[char], count: usize) -> usize {
        let n = letters.len();
        let mut count = count;

        if count > 1 && n >= 3 && letters[n - 1] == 'e' && self.consonant_at(letters, n - 2) {
            // Final "-le"/"-re" after a consonant is voiced (table, centre).
            let voiced = (ends_with(letters, "le") || ends_with(letters, "re"))
                && self.consonant_at(letters, n - 3);
            if !voiced {
                count -= 1;
            }
        } else if count > 1 && n >= 4 && ends_with(letters, "es") && self.consonant_at(letters, n - 3)
        {
            let before = letters[n - 3];
            let voiced = matches!(before, 's' | 'x' | 'z' | 'c' | 'g')
                || ends_with(letters, "ches")
                || ends_with(letters, "shes")
                || (matches!(before, 'l' | 'r') && self.consonant_at(letters, n - 4));
            if !voiced {
                count -= 1;
            }
        } else if count > 1 && n >= 4 && ends_with(letters, "ed") && self.consonant_at(letters, n - 3)
        {
            let before = letters[n - 3];
            let voiced = matches!(before, 't' | 'd')
                || (before == 'l' && self.consonant_at(letters, n - 4));
            if !voiced {
                count -= 1;
            }
        }

        // Silent e before a suffix: lovely, careful, hopeless, movement.
        for suffix in ["ly", "ful", "ness", "less", "ment"] {
            let len = suffix.len();
            if count > 1 && n >= len + 3 && ends_with(letters, suffix) {
                let e = n - len - 1;
                if letters[e] == 'e'
                    && self.consonant_at(letters, e - 1)
                    && self.is_vowel_at(letters, e - 2)
                {
                    count -= 1;
                }
                break;
            }
        }

        // "-ism" adds a syllable the vowel count misses.
        if n >= 3 && ends_with(letters, "sm") && self.is_vowel_at(letters, n - 3) {
            count += 1;
        }

        // didn't, couldn't: the "n't" is its own syllable after a consonant.
        if raw.len() >= 4 && ends_with(raw, "n't") && self.consonant_at(raw, raw.len() - 4) {
            count += 1;
        }

        count
    }
}
