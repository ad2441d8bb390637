//! Multi-word passes: known phrases, proper phrases, negated phrases,
//! n-grams and overused words.

use std::collections::HashMap;

use super::Document;
use super::model::{PhraseSpan, SentenceOverusedWords, WordSpan};
use crate::dictionaries::common_words::{PROPER_PHRASE_CONNECTORS, is_negation};

/// Negated phrases are at most this many words long.
const MAX_NEGATED_PHRASE: usize = 4;

/// Overused-word detection ignores words with this many letters or fewer.
const SHORT_WORD_LETTERS: usize = 3;

impl Document {
    pub(super) fn find_known_phrases(&mut self) {
        let folded = self.folded_words();
        self.known_phrases = self
            .lexicon
            .wordy_phrases()
            .scan(&folded, &self.breaks)
            .into_iter()
            .map(|found| PhraseSpan {
                span: WordSpan::new(found.start, found.length),
                phrase: found.phrase,
            })
            .collect();
    }

    /// Runs of proper nouns, joined by lowercase connectors and absorbing a
    /// leading "The".
    pub(super) fn find_proper_phrases(&mut self) {
        let words = &self.words;
        let mut spans = Vec::new();
        for sentence in &self.sentences {
            let last = sentence.last_word;
            let continues = |j: usize| j <= last && !self.has_break_before(j);
            let mut i = sentence.first_word;
            while i <= last {
                let leading_the =
                    words[i].text == "The" && continues(i + 1) && words[i + 1].is_proper_noun;
                if !words[i].is_proper_noun && !leading_the {
                    i += 1;
                    continue;
                }

                let start = i;
                let mut proper = usize::from(words[i].is_proper_noun);
                let mut end = i;
                let mut j = i + 1;
                while continues(j) {
                    if words[j].is_proper_noun {
                        proper += 1;
                        end = j;
                        j += 1;
                    } else if PROPER_PHRASE_CONNECTORS.contains(words[j].text.as_str())
                        && continues(j + 1)
                        && words[j + 1].is_proper_noun
                    {
                        proper += 1;
                        end = j + 1;
                        j += 2;
                    } else {
                        break;
                    }
                }

                if proper >= 2 {
                    spans.push(WordSpan::new(start, end - start + 1));
                }
                i = end + 1;
            }
        }
        self.proper_phrases = spans;
    }

    /// A negation plus the first content word after it.
    pub(super) fn find_negated_phrases(&mut self) {
        let words = &self.words;
        let stop_words = self.lexicon.stop_words();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < words.len() {
            if !is_negation(&words[i].folded) {
                i += 1;
                continue;
            }
            let limit = (i + MAX_NEGATED_PHRASE).min(words.len());
            let mut governed = None;
            for j in i + 1..limit {
                if words[j].sentence != words[i].sentence
                    || self.has_break_before(j)
                    || is_negation(&words[j].folded)
                {
                    break;
                }
                if !stop_words.contains_folded(&words[j].folded) {
                    governed = Some(j);
                    break;
                }
            }
            match governed {
                Some(end) => {
                    spans.push(WordSpan::new(i, end - i + 1));
                    i = end + 1;
                }
                None => i += 1,
            }
        }
        self.negated_phrases = spans;
    }

    /// Word windows whose stems repeat at least twice in the document.
    pub(super) fn find_n_grams(&mut self) {
        let stop_words = self.lexicon.stop_words();
        let mut spans = Vec::new();
        for size in self.options.n_gram_sizes() {
            let mut occurrences: HashMap<String, Vec<usize>> = HashMap::new();
            for sentence in &self.sentences {
                if sentence.word_count() < size {
                    continue;
                }
                for start in sentence.first_word..=sentence.last_word + 1 - size {
                    let window = &self.words[start..start + size];
                    let broken = (start + 1..start + size).any(|j| self.has_break_before(j));
                    let ends_in_stop_word = window
                        .last()
                        .is_some_and(|w| stop_words.contains_folded(&w.folded));
                    if broken || ends_in_stop_word || window.iter().any(|w| w.is_excluded) {
                        continue;
                    }
                    let key = window
                        .iter()
                        .map(|w| w.stem.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    occurrences.entry(key).or_default().push(start);
                }
            }
            spans.extend(
                occurrences
                    .into_values()
                    .filter(|starts| starts.len() >= 2)
                    .flatten()
                    .map(|start| WordSpan::new(start, size)),
            );
        }
        spans.sort_unstable();
        self.n_grams = spans;
    }

    /// Content words whose stem appears more than once in a sentence.
    pub(super) fn find_overused_words(&mut self) {
        let stop_words = self.lexicon.stop_words();
        let mut overused = Vec::new();
        for (index, sentence) in self.sentences.iter().enumerate() {
            let mut by_stem: HashMap<&str, Vec<usize>> = HashMap::new();
            for i in sentence.words() {
                let word = &self.words[i];
                let letters = word.folded.chars().filter(|c| c.is_alphabetic()).count();
                if word.is_excluded
                    || word.is_numeric
                    || letters <= SHORT_WORD_LETTERS
                    || stop_words.contains_folded(&word.folded)
                {
                    continue;
                }
                by_stem.entry(word.stem.as_str()).or_default().push(i);
            }
            let mut repeated: Vec<usize> = by_stem
                .into_values()
                .filter(|indices| indices.len() >= 2)
                .flatten()
                .collect();
            if !repeated.is_empty() {
                repeated.sort_unstable();
                overused.push(SentenceOverusedWords {
                    sentence: index,
                    words: repeated,
                });
            }
        }
        self.overused_words_by_sentence = overused;
    }
}
