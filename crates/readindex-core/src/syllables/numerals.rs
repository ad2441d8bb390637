//! Numeral syllabication.

use super::{LanguageRules, NumeralSyllabication};
use crate::characters::{digit_value, is_numeric};

const CURRENCY_AND_SIGNS: &[char] = &['$', '€', '£', '¥', '+', '-', '#', '±'];

/// Whether `chars` should be read as a numeral.
///
/// A numeral starts with a digit (after any currency sign) or is at least
/// half digits: `1990s`, `$5`, `3rd`, `A4`.
pub(super) fn is_numeral(chars: &[char]) -> bool {
    let body: &[char] = {
        let skip = chars
            .iter()
            .take_while(|c| CURRENCY_AND_SIGNS.contains(c))
            .count();
        &chars[skip..]
    };
    if body.first().is_some_and(|&c| is_numeric(c)) {
        return true;
    }
    let alphanumeric = body.iter().filter(|c| c.is_alphanumeric()).count();
    let digits = body.iter().filter(|&&c| is_numeric(c)).count();
    digits > 0 && digits * 2 >= alphanumeric
}

/// Count the syllables in a numeral.
///
/// Symbols (currency, percent, degrees) are always sounded. Letters in
/// ordinals or decade suffixes are treated as part of the number.
pub(super) fn count<R: LanguageRules>(
    rules: &R,
    mode: NumeralSyllabication,
    chars: &[char],
) -> usize {
    let symbols: usize = chars
        .iter()
        .filter(|c| !c.is_alphanumeric())
        .map(|&c| rules.symbol_syllables(c))
        .sum();

    let spoken = match mode {
        NumeralSyllabication::WholeNumeralIsOneSyllable => 1,
        NumeralSyllabication::SoundOutEachDigit => chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if let Some(d) = digit_value(c) {
                    rules.digit_syllables(d)
                } else if between_digits(chars, i) {
                    rules.separator_syllables(c)
                } else {
                    0
                }
            })
            .sum(),
    };

    (spoken + symbols).max(1)
}

fn between_digits(chars: &[char], i: usize) -> bool {
    i > 0
        && is_numeric(chars[i - 1])
        && chars.get(i + 1).is_some_and(|&c| is_numeric(c))
}
