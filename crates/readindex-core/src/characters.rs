//! Character classification.
//!
//! Locale-aware predicates shared by the scanner, the syllabizers, and the
//! grammar passes. Everything here is a pure function of a `char` (or a
//! short slice of them) so the scanner can call it in tight loops.

/// Whether `c` is a vowel in any of the supported languages.
///
/// Covers the base Latin vowels and their accented forms. `y` is not
/// included because whether it acts as a vowel depends on its neighbors;
/// the syllabizers decide that themselves.
pub fn is_vowel(c: char) -> bool {
    matches!(
        c.to_lowercase().next().unwrap_or(c),
        'a' | 'e'
            | 'i'
            | 'o'
            | 'u'
            | 'à'
            | 'á'
            | 'â'
            | 'ã'
            | 'ä'
            | 'å'
            | 'æ'
            | 'è'
            | 'é'
            | 'ê'
            | 'ë'
            | 'ì'
            | 'í'
            | 'î'
            | 'ï'
            | 'ò'
            | 'ó'
            | 'ô'
            | 'õ'
            | 'ö'
            | 'ø'
            | 'œ'
            | 'ù'
            | 'ú'
            | 'û'
            | 'ü'
    )
}

/// Whether `c` is a `y` (either case, or the accented forms).
pub fn is_y(c: char) -> bool {
    matches!(c, 'y' | 'Y' | 'ý' | 'Ý' | 'ÿ' | 'Ÿ')
}

/// Whether `c` is a decimal digit, including full-width digits.
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// The value of a digit character (ASCII or full-width).
pub fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else if ('\u{FF10}'..='\u{FF19}').contains(&c) {
        Some(c as u32 - 0xFF10)
    } else {
        None
    }
}

/// Whether `c` is a combining diacritical mark (U+0300..U+036F).
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Whether `c` may appear inside the core of a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c) || c == '_'
}

/// Apostrophes, including the typographic right single quote.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}

/// Hyphens that join words (not dashes).
pub fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}' | '\u{00AD}')
}

/// Dashes that separate clauses.
pub fn is_dash(c: char) -> bool {
    matches!(c, '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}')
}

/// Terminal punctuation that can end a sentence.
pub const fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{203D}' | '\u{FF01}' | '\u{FF1F}')
}

/// The horizontal ellipsis character.
pub const fn is_ellipsis(c: char) -> bool {
    c == '\u{2026}'
}

/// Quotation marks of any direction.
pub fn is_quote(c: char) -> bool {
    matches!(
        c,
        '"' | '\''
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201A}'
            | '\u{201C}'
            | '\u{201D}'
            | '\u{201E}'
            | '\u{00AB}'
            | '\u{00BB}'
            | '\u{2039}'
            | '\u{203A}'
    )
}

/// Quotation marks that can only open a quote.
pub fn is_opening_quote(c: char) -> bool {
    matches!(c, '\u{2018}' | '\u{201A}' | '\u{201C}' | '\u{201E}' | '\u{00AB}' | '\u{2039}')
}

/// Quotation marks that can only close a quote.
pub fn is_closing_quote(c: char) -> bool {
    matches!(c, '\u{2019}' | '\u{201D}' | '\u{00BB}' | '\u{203A}')
}

/// Quotation marks that toggle (the direction comes from context).
pub fn is_straight_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Opening parentheses and brackets.
pub fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{' | '\u{FF08}')
}

/// Closing parentheses and brackets.
pub fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '\u{FF09}')
}

/// Bullet characters that introduce list items.
pub fn is_bullet(c: char) -> bool {
    matches!(
        c,
        '\u{2022}'
            | '\u{2023}'
            | '\u{2043}'
            | '\u{25E6}'
            | '\u{25AA}'
            | '\u{25AB}'
            | '\u{25CF}'
            | '\u{25CB}'
            | '\u{25A0}'
            | '\u{25A1}'
            | '\u{25BA}'
            | '\u{00B7}'
            | '\u{2219}'
            | '\u{27A2}'
            | '\u{2713}'
    )
}

/// Whitespace characters that end lines (and therefore may end paragraphs).
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{000C}' | '\u{2028}' | '\u{2029}' | '\u{0085}')
}

/// Case-insensitive character comparison.
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive string comparison.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-fold a word for dictionary lookups.
///
/// Typographic apostrophes are folded to the ASCII apostrophe so that
/// `don’t` and `don't` compare equal.
pub fn fold(word: &str) -> String {
    word.chars()
        .map(|c| if is_apostrophe(c) { '\'' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `chars[..]` starts with `prefix`, ignoring case.
pub fn starts_with_ignore_case(chars: &[char], prefix: &str) -> bool {
    let mut it = chars.iter();
    prefix
        .chars()
        .all(|p| it.next().is_some_and(|&c| chars_eq_ignore_case(c, p)))
}

/// Whether `chars[..]` ends with `suffix`, ignoring case.
pub fn ends_with_ignore_case(chars: &[char], suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    chars.len() >= suffix.len()
        && chars[chars.len() - suffix.len()..]
            .iter()
            .zip(&suffix)
            .all(|(&c, &s)| chars_eq_ignore_case(c, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_include_accented_forms() {
        assert!(is_vowel('a'));
        assert!(is_vowel('E'));
        assert!(is_vowel('ü'));
        assert!(is_vowel('É'));
        assert!(!is_vowel('y'));
        assert!(!is_vowel('b'));
    }

    #[test]
    fn full_width_digits_are_numeric() {
        assert!(is_numeric('7'));
        assert!(is_numeric('\u{FF17}'));
        assert_eq!(digit_value('\u{FF17}'), Some(7));
        assert!(!is_numeric('x'));
    }

    #[test]
    fn case_insensitive_equality() {
        assert!(eq_ignore_case("Ärger", "äRGER"));
        assert!(eq_ignore_case("Hello", "hELLO"));
        assert!(!eq_ignore_case("Hello", "Help"));
        assert!(chars_eq_ignore_case('Ö', 'ö'));
    }

    #[test]
    fn fold_normalizes_apostrophes() {
        assert_eq!(fold("Don\u{2019}t"), "don't");
    }

    #[test]
    fn prefix_and_suffix_checks() {
        let word: Vec<char> = "Geist".chars().collect();
        assert!(starts_with_ignore_case(&word, "gei"));
        assert!(ends_with_ignore_case(&word, "IST"));
        assert!(!ends_with_ignore_case(&word, "longer than word"));
    }
}
