//! Sentence/paragraph typing, per-word flags, and validity.

use std::sync::LazyLock;

use regex::Regex;

use super::Document;
use super::model::{SentenceType, Word};
use super::scanner::WordContext;
use crate::characters::{is_hyphen, is_numeric};
use crate::dictionaries::common_words::{NON_ACRONYMS, NON_PROPER_NOUNS, PRONOUN_CONTRACTIONS};

/// E-mail addresses, bare domains, paths and file names.
static FILE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+",
        r"|(?:[\w-]+\.)+(?:com|org|net|edu|gov|mil|io|info|biz|de|at|ch|uk|fr|ca|au)",
        r"|[\w.-]+(?:[/\\][\w.-]+){2,}",
        r"|[\w.-]+[/\\][\w-]+\.\w{1,4}",
        r"|[\w-]+\.(?:txt|docx?|pdf|html?|xml|json|ya?ml|toml|csv|exe|dll|rs|py|js|cpp|hpp|md|png|jpe?g|gif|zip)",
        r")$"
    ))
    .expect("valid regex")
});

/// Drop a possessive `'s` or plural-possessive `'` from a folded word.
pub(crate) fn strip_possessive(folded: &str) -> &str {
    if let Some(base) = folded.strip_suffix("'s") {
        return base;
    }
    match folded.strip_suffix('\'') {
        Some(base) if base.ends_with('s') => base,
        _ => folded,
    }
}

fn is_contraction(folded: &str) -> bool {
    let chars: Vec<char> = folded.chars().collect();
    let internal = chars.len() > 2 && chars[1..chars.len() - 1].contains(&'\'');
    if !internal {
        return false;
    }
    if folded.ends_with("'s") {
        return PRONOUN_CONTRACTIONS.contains(folded);
    }
    true
}

fn letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| c.is_alphabetic())
}

/// At least two letters and none lowercase.
pub(crate) fn is_uppercased(text: &str) -> bool {
    letters(text).count() >= 2 && !letters(text).any(char::is_lowercase)
}

impl Document {
    /// Assign sentence and paragraph types.
    pub(super) fn classify_types(&mut self) {
        let allowable = self.options.allowable_incomplete_sentence_size;
        for index in 0..self.sentences.len() {
            let sentence = &self.sentences[index];
            let paragraph = &self.paragraphs[sentence.paragraph];
            let after_last = sentence.last_word + 1;
            let end = self
                .punctuation
                .partition_point(|m| m.word_position <= after_last);
            let trailing = self.punctuation[..end]
                .iter()
                .rev()
                .take_while(|m| m.word_position == after_last)
                .find(|m| m.paragraph == sentence.paragraph)
                .map(|m| m.character);

            let sentence_type =
                if sentence.ending_punctuation.is_some() || sentence.word_count() > allowable {
                    SentenceType::Complete
                } else if matches!(trailing, Some(',' | ':' | ';')) {
                    SentenceType::Incomplete
                } else if paragraph.is_list {
                    SentenceType::ListItem
                } else if paragraph.sentence_count() == 1 {
                    SentenceType::Header
                } else {
                    SentenceType::Incomplete
                };
            self.sentences[index].sentence_type = sentence_type;
        }

        for paragraph in &mut self.paragraphs {
            let types = &self.sentences[paragraph.sentences()];
            paragraph.paragraph_type = if types
                .iter()
                .any(|s| s.sentence_type == SentenceType::Complete)
            {
                SentenceType::Complete
            } else if paragraph.is_list {
                SentenceType::ListItem
            } else if types.len() == 1 && types[0].sentence_type == SentenceType::Header {
                SentenceType::Header
            } else {
                SentenceType::Incomplete
            };
        }
    }

    /// Set the per-word flags that depend on text, sentence and lexicon.
    pub(super) fn annotate_words(&mut self, contexts: &[WordContext]) {
        let lexicon = &self.lexicon;
        for sentence in &self.sentences {
            let words = &self.words[sentence.words()];
            let with_letters: Vec<&Word> = words
                .iter()
                .filter(|w| w.text.chars().any(char::is_alphabetic))
                .collect();
            let all_caps = with_letters.len() >= 2
                && with_letters
                    .iter()
                    .all(|w| !letters(&w.text).any(char::is_lowercase));
            let title_case_header = sentence.sentence_type == SentenceType::Header
                && with_letters.len() >= 2
                && with_letters.iter().all(|w| {
                    letters(&w.text).next().is_some_and(char::is_uppercase)
                        || lexicon.stop_words().contains_folded(&w.folded)
                });
            let exclamatory = sentence.ending_punctuation == Some('!');

            for index in sentence.words() {
                let word = &mut self.words[index];
                let context = contexts.get(index).copied().unwrap_or_default();
                annotate_word(word, all_caps, exclamatory);

                let base = strip_possessive(&word.folded);
                word.is_personal_name = lexicon.personal_names().contains_folded(base);
                let listed = word.is_personal_name || lexicon.proper_nouns().contains_folded(base);
                // Title-case headers capitalize everything; only listed names count there.
                let by_capitalization = !title_case_header
                    && !all_caps
                    && word.is_capitalized
                    && !context.sentence_initial
                    && !word.is_numeric
                    && !word.is_file_address
                    && !word.is_social_media_tag
                    && !NON_PROPER_NOUNS.contains(base);
                word.is_proper_noun = listed || by_capitalization;
            }
        }
    }

    /// Derive sentence, paragraph and word validity plus the valid counts.
    pub(super) fn propagate_validity(&mut self) {
        let exclude_incomplete = self.options.exclude_incomplete_sentences;
        for sentence in &mut self.sentences {
            let paragraph_excluded = self.paragraphs[sentence.paragraph].is_excluded;
            let has_included = self.words[sentence.words()].iter().any(|w| !w.is_excluded);
            let complete_enough =
                sentence.sentence_type == SentenceType::Complete || !exclude_incomplete;
            sentence.is_valid = !paragraph_excluded && has_included && complete_enough;

            let mut valid_words = 0;
            for word in &mut self.words[sentence.words()] {
                word.is_valid = sentence.is_valid && !word.is_excluded;
                valid_words += usize::from(word.is_valid);
            }
            sentence.valid_word_count = valid_words;
        }

        for paragraph in &mut self.paragraphs {
            let sentences = &self.sentences[paragraph.sentences()];
            paragraph.word_count = sentences.iter().map(|s| s.word_count()).sum();
            paragraph.valid_word_count = sentences.iter().map(|s| s.valid_word_count).sum();
            paragraph.is_valid = !paragraph.is_excluded && sentences.iter().any(|s| s.is_valid);
        }
    }
}

fn annotate_word(word: &mut Word, all_caps: bool, exclamatory: bool) {
    let text = word.text.as_str();
    let digits = text.chars().filter(|&c| is_numeric(c)).count();
    let alphanumerics = text.chars().filter(|c| c.is_alphanumeric()).count();
    let letter_count = letters(text).count();

    word.is_numeric = digits > 0 && digits * 2 >= alphanumerics;
    word.is_capitalized = letters(text).next().is_some_and(char::is_uppercase);
    word.is_hyphenated = text.chars().any(is_hyphen);
    word.is_social_media_tag = {
        let mut chars = text.chars();
        matches!(chars.next(), Some('#' | '@')) && chars.next().is_some_and(char::is_alphabetic)
    };
    word.is_file_address = word.is_file_address || FILE_ADDRESS.is_match(text);
    word.is_contraction = is_contraction(&word.folded);
    word.is_exclamatory = exclamatory;

    let letters_folded: String = letters(&word.folded).collect();
    word.is_acronym = letter_count >= 2
        && is_uppercased(text)
        && !word.is_numeric
        && !word.is_file_address
        && !all_caps
        && !NON_ACRONYMS.contains(letters_folded.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn possessives() {
        assert_eq!(strip_possessive("john's"), "john");
        assert_eq!(strip_possessive("dogs'"), "dogs");
        assert_eq!(strip_possessive("runnin'"), "runnin'");
        assert_eq!(strip_possessive("cat"), "cat");
    }

    #[test]
    fn contractions() {
        assert!(is_contraction("don't"));
        assert!(is_contraction("it's"));
        assert!(!is_contraction("john's"));
        assert!(!is_contraction("dogs'"));
        assert!(!is_contraction("'tis"));
    }

    #[test]
    fn file_addresses() {
        for text in [
            "john@example.com",
            "example.org",
            "src/document/mod.rs",
            "docs/readme.md",
            "report.pdf",
        ] {
            assert!(FILE_ADDRESS.is_match(text), "{text}");
        }
        for text in ["and/or", "km/h", "3.14", "U.S.A"] {
            assert!(!FILE_ADDRESS.is_match(text), "{text}");
        }
    }

    #[test]
    fn uppercased() {
        assert!(is_uppercased("NASA"));
        assert!(is_uppercased("U.S.A."));
        assert!(!is_uppercased("I"));
        assert!(!is_uppercased("Nasa"));
    }
}
