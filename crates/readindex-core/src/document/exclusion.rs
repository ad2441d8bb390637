//! Exclusion regions: tag blocks, excluded phrases, copyright notices and
//! citation sections.

use std::ops::RangeInclusive;

use super::Document;
use super::model::SentenceType;
use super::scanner::WordContext;

const COPYRIGHT_SIGN: char = '\u{00A9}';

impl Document {
    /// Mark excluded words and paragraphs.
    pub(super) fn mark_exclusions(&mut self, contexts: &[WordContext]) {
        let exclude_numerals = self.options.exclude_numerals;
        let exclude_file_addresses = self.options.exclude_file_addresses;
        for (word, context) in self.words.iter_mut().zip(contexts) {
            word.is_excluded = context.excluded_by_tag
                || (exclude_numerals && word.is_numeric)
                || (exclude_file_addresses && word.is_file_address);
        }

        let folded = self.folded_words();
        let matches = self.lexicon.excluded_phrases().scan(&folded, &self.breaks);
        for found in matches {
            for word in &mut self.words[found.start..found.end()] {
                word.is_excluded = true;
            }
        }

        if self.options.ignore_copyright_notices {
            self.exclude_copyright_notices(&folded);
        }
        if self.options.ignore_citation_sections {
            self.exclude_citation_section(&folded);
        }
    }

    pub(super) fn paragraph_words(&self, paragraph: usize) -> RangeInclusive<usize> {
        let paragraph = &self.paragraphs[paragraph];
        self.sentences[paragraph.first_sentence].first_word
            ..=self.sentences[paragraph.last_sentence].last_word
    }

    fn exclude_paragraph(&mut self, paragraph: usize) {
        let words = self.paragraph_words(paragraph);
        self.paragraphs[paragraph].is_excluded = true;
        for word in &mut self.words[words] {
            word.is_excluded = true;
        }
    }

    fn is_copyright_notice(&self, paragraph: usize, folded: &[String]) -> bool {
        let words = self.paragraph_words(paragraph);
        let phrases = self.lexicon.copyright_phrases();
        let scope = &folded[..=*words.end()];
        words.clone().any(|i| phrases.find(scope, i).is_some())
            || self.words[words].iter().any(|w| w.text.contains(COPYRIGHT_SIGN))
    }

    fn exclude_copyright_notices(&mut self, folded: &[String]) {
        let count = self.paragraphs.len();
        let mut signed = vec![false; count];
        for mark in &self.punctuation {
            if mark.character == COPYRIGHT_SIGN
                && let Some(flag) = signed.get_mut(mark.paragraph)
            {
                *flag = true;
            }
        }
        let notices: Vec<bool> = (0..count)
            .map(|p| signed[p] || self.is_copyright_notice(p, folded))
            .collect();
        let Some(first) = notices.iter().position(|&n| n) else {
            return;
        };

        let mut excluded = vec![false; count];
        if self.options.aggressive_exclusion {
            excluded[first..].fill(true);
        } else {
            let mut open = false;
            for (paragraph, &notice) in notices.iter().enumerate() {
                if notice {
                    open = true;
                } else if self.paragraphs[paragraph].paragraph_type == SentenceType::Complete {
                    open = false;
                }
                excluded[paragraph] = open;
            }
        }

        tracing::debug!(
            notices = notices.iter().filter(|&&n| n).count(),
            "excluding copyright notices"
        );
        for (paragraph, _) in excluded.iter().enumerate().filter(|(_, e)| **e) {
            self.exclude_paragraph(paragraph);
        }
    }

    /// A paragraph that consists of exactly one citation header phrase.
    fn is_citation_header(&self, paragraph: usize, folded: &[String]) -> bool {
        if self.paragraphs[paragraph].sentence_count() != 1 {
            return false;
        }
        let words = self.paragraph_words(paragraph);
        let header = &folded[words.clone()];
        self.lexicon
            .citation_phrases()
            .find(header, 0)
            .is_some_and(|found| found.length == header.len())
    }

    fn exclude_citation_section(&mut self, folded: &[String]) {
        let count = self.paragraphs.len();
        let Some(start) = (0..count).find(|&p| self.is_citation_header(p, folded)) else {
            return;
        };
        tracing::debug!(paragraph = start, "excluding citation section");
        for paragraph in start..count {
            self.exclude_paragraph(paragraph);
        }
    }
}
