//! Grammar passes: repeated words, article agreement, passive voice and
//! sentence openings.

use super::Document;
use super::model::{SentenceType, WordSpan};
use super::scanner::WordContext;
use crate::characters::{fold, is_vowel};
use crate::dictionaries::common_words::{ALLOWED_DUPLICATES, is_conjunction};
use crate::dictionaries::irregular_verbs::{
    is_intervening_adverb, is_passive_auxiliary, is_past_participle,
};

/// Decides whether `article` disagrees with the word that follows it.
///
/// Receives surface text. Returning `true` flags the article.
pub type ArticleMismatchFn = fn(article: &str, following: &str) -> bool;

/// Never flags anything. Used for languages without an a/an rule.
pub const fn no_article_mismatch(_article: &str, _following: &str) -> bool {
    false
}

/// English `a`/`an` agreement, decided by the sound the next word starts with.
pub fn english_article_mismatch(article: &str, following: &str) -> bool {
    let wants_vowel = match fold(article).as_str() {
        "a" => false,
        "an" => true,
        _ => return false,
    };
    starts_with_vowel_sound(following).is_some_and(|vowel| vowel != wants_vowel)
}

/// Letters whose spoken name starts with a vowel sound ("an F", "an MRI").
const VOWEL_LETTER_NAMES: &str = "aefhilmnorsx";
const SILENT_H: &[&str] = &["hour", "honest", "honor", "honour", "heir", "herb"];
const YOU_SOUND: &[&str] = &[
    "uni", "use", "usu", "uti", "uto", "ura", "ure", "uri", "uro", "ubiq", "ukr", "ukul", "eu",
    "ewe",
];
const UN_PREFIXES: &[&str] = &["unin", "unim", "unid"];

fn starts_with_vowel_sound(word: &str) -> Option<bool> {
    let trimmed = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let first = trimmed.chars().next()?;

    if first.is_ascii_digit() {
        let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
        let eleven_or_eighteen =
            digits.len() % 3 == 2 && (digits.starts_with("11") || digits.starts_with("18"));
        return Some(digits.starts_with('8') || eleven_or_eighteen);
    }

    let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
    let spelled_out = match letters.as_slice() {
        [_] => trimmed.chars().count() == 1,
        [a, b, ..] => {
            letters.iter().all(|c| c.is_uppercase()) && !is_vowel(*a) && !is_vowel(*b)
        }
        [] => false,
    };
    if spelled_out {
        let name = first.to_lowercase().next().unwrap_or(first);
        return Some(VOWEL_LETTER_NAMES.contains(name));
    }

    let lower = fold(trimmed);
    if SILENT_H.iter().any(|p| lower.starts_with(p)) {
        return Some(true);
    }
    let you_sound = YOU_SOUND.iter().any(|p| lower.starts_with(p))
        && !UN_PREFIXES.iter().any(|p| lower.starts_with(p));
    if you_sound || lower == "one" || lower == "once" || lower.starts_with("one-") {
        return Some(false);
    }
    Some(lower.chars().next().is_some_and(is_vowel))
}

/// A single capital used as an initial: `J.`, or `J` other than `I`/`A`.
fn is_initial(text: &str) -> bool {
    let (body, dotted) = match text.strip_suffix('.') {
        Some(body) => (body, true),
        None => (text, false),
    };
    let mut chars = body.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_uppercase() && (dotted || !matches!(c, 'I' | 'A'))
    )
}

impl Document {
    pub(super) fn find_duplicate_words(&mut self) {
        let words = &self.words;
        self.duplicate_words = (1..words.len())
            .filter(|&i| {
                let (previous, word) = (&words[i - 1], &words[i]);
                previous.sentence == word.sentence
                    && !self.has_break_before(i)
                    && !previous.is_excluded
                    && !word.is_excluded
                    && previous.folded == word.folded
                    && !word.is_numeric
                    && !(is_initial(&previous.text) && is_initial(&word.text))
                    && !ALLOWED_DUPLICATES.contains(word.folded.as_str())
            })
            .collect();
    }

    pub(super) fn find_incorrect_articles(&mut self, contexts: &[WordContext]) {
        let words = &self.words;
        let checker = self.article_checker;
        self.incorrect_articles = (0..words.len().saturating_sub(1))
            .filter(|&i| {
                let (article, next) = (&words[i], &words[i + 1]);
                let (here, there) = (contexts[i], contexts[i + 1]);
                // "Vitamin A is" names a letter rather than using an article.
                let letter_name = article.text == "A" && article.sentence_position > 0;
                article.sentence == next.sentence
                    && !self.has_break_before(i + 1)
                    && !article.is_excluded
                    && !next.is_excluded
                    && here.in_quotes == there.in_quotes
                    && here.in_parentheses == there.in_parentheses
                    && !letter_name
                    && checker(&article.text, &next.text)
            })
            .collect();
    }

    pub(super) fn find_passive_voice(&mut self) {
        let words = &self.words;
        let same_clause = |start: usize, j: usize| {
            j < words.len() && words[j].sentence == words[start].sentence && !self.has_break_before(j)
        };

        let mut spans = Vec::new();
        let mut i = 0;
        while i < words.len() {
            if !is_passive_auxiliary(&words[i].folded) {
                i += 1;
                continue;
            }
            let mut j = i + 1;
            if same_clause(i, j)
                && is_intervening_adverb(&words[j].folded)
                && same_clause(i, j + 1)
            {
                j += 1;
            }
            if same_clause(i, j) && is_past_participle(&words[j].folded) {
                spans.push(WordSpan::new(i, j - i + 1));
                i = j + 1;
            } else {
                i += 1;
            }
        }
        self.passive_voice = spans;
    }

    pub(super) fn find_sentence_starts(&mut self) {
        for sentence in &self.sentences {
            let first = &self.words[sentence.first_word];
            let starts_lowercase = first
                .text
                .chars()
                .next()
                .is_some_and(char::is_lowercase);
            if sentence.sentence_type == SentenceType::Complete
                && starts_lowercase
                && !first.is_file_address
            {
                self.lowercase_sentence_starts.push(sentence.first_word);
            }
            if is_conjunction(&first.folded) {
                self.conjunction_sentence_starts.push(sentence.first_word);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_agreement() {
        assert!(english_article_mismatch("a", "apple"));
        assert!(english_article_mismatch("an", "banana"));
        assert!(english_article_mismatch("A", "elephant"));
        assert!(!english_article_mismatch("an", "hour"));
        assert!(!english_article_mismatch("a", "university"));
        assert!(!english_article_mismatch("an", "unimportant"));
        assert!(!english_article_mismatch("a", "one-time"));
        assert!(!english_article_mismatch("a", "European"));
        assert!(!english_article_mismatch("the", "apple"));
    }

    #[test]
    fn numbers_and_letters() {
        assert!(!english_article_mismatch("an", "8"));
        assert!(!english_article_mismatch("an", "11"));
        assert!(!english_article_mismatch("an", "18th"));
        assert!(english_article_mismatch("an", "7"));
        assert!(!english_article_mismatch("a", "100"));
        assert!(!english_article_mismatch("an", "FBI"));
        assert!(!english_article_mismatch("a", "NASA"));
        assert!(!english_article_mismatch("an", "X"));
        assert!(english_article_mismatch("an", "B"));
    }

    #[test]
    fn quotes_are_skipped() {
        assert!(!english_article_mismatch("a", "\"word"));
        assert!(english_article_mismatch("a", "\"apple"));
    }

    #[test]
    fn initials() {
        assert!(is_initial("J."));
        assert!(is_initial("J"));
        assert!(is_initial("A."));
        assert!(!is_initial("A"));
        assert!(!is_initial("I"));
        assert!(!is_initial("a"));
        assert!(!is_initial("Jo."));
    }

    #[test]
    fn no_checker_never_flags() {
        assert!(!no_article_mismatch("a", "apple"));
    }
}
