//! Dictionary-based misspelling detection.

use super::Document;
use super::classify::{is_uppercased, strip_possessive};
use super::model::Word;
use super::options::SpellingOptions;
use crate::characters::{is_hyphen, is_numeric};
use crate::dictionaries::abbreviations::is_abbreviation;
use crate::lexicon::Lexicon;

/// `camelCase`, `snake_case`, `C++` and friends.
fn is_programmer_code(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let camel = chars
        .windows(2)
        .any(|pair| pair[0].is_lowercase() && pair[1].is_uppercase());
    camel || text.contains('_') || text.ends_with("++") || (chars.len() > 1 && text.ends_with('#'))
}

fn is_exempt(word: &Word, spelling: &SpellingOptions) -> bool {
    !word.text.chars().any(char::is_alphabetic)
        || (spelling.ignore_proper_nouns && word.is_proper_noun)
        || (spelling.ignore_uppercased && is_uppercased(&word.text))
        || (spelling.ignore_numerals && word.text.chars().any(is_numeric))
        || (spelling.ignore_file_addresses && word.is_file_address)
        || (spelling.ignore_programmer_code && is_programmer_code(&word.text))
        || (spelling.ignore_social_media_tags && word.is_social_media_tag)
}

/// Collapse runs of three or more identical letters down to `keep`.
fn squeeze(word: &str, keep: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        let run = chars[i..].iter().take_while(|&&c| c == chars[i]).count();
        let emit = if run >= 3 { keep } else { run };
        out.extend(std::iter::repeat_n(chars[i], emit));
        i += run;
    }
    out
}

fn is_correctly_spelled(lexicon: &Lexicon, folded: &str, allow_colloquialisms: bool) -> bool {
    let base = strip_possessive(folded);
    if lexicon.is_known_word(folded) || lexicon.is_known_word(base) {
        return true;
    }
    if let Some(trimmed) = base.strip_suffix('.')
        && (lexicon.is_known_word(trimmed) || is_abbreviation(trimmed))
    {
        return true;
    }
    if base.chars().any(is_hyphen) {
        let mut parts = base.split(is_hyphen).filter(|part| !part.is_empty()).peekable();
        if parts.peek().is_some() && parts.all(|part| lexicon.is_known_word(part)) {
            return true;
        }
    }
    if allow_colloquialisms {
        if let Some(stem) = base.strip_suffix("in'")
            && lexicon.is_known_word(&format!("{stem}ing"))
        {
            return true;
        }
        for keep in [2, 1] {
            let squeezed = squeeze(base, keep);
            if squeezed != base && lexicon.is_known_word(&squeezed) {
                return true;
            }
        }
    }
    false
}

impl Document {
    pub(super) fn find_misspellings(&mut self) {
        if !self.lexicon.has_dictionary() {
            return;
        }
        let spelling = &self.options.spelling;
        let lexicon = &self.lexicon;
        self.misspelled_words = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| {
                word.is_valid
                    && !is_exempt(word, spelling)
                    && !is_correctly_spelled(lexicon, &word.folded, spelling.allow_colloquialisms)
            })
            .map(|(index, _)| index)
            .collect();
    }
}
