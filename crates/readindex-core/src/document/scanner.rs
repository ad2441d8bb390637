//! Line grouping and tokenization.
//!
//! Text is split into lines, lines are grouped into paragraph blocks, and
//! each block is scanned character by character into words, punctuation
//! marks and sentences. Classification happens afterwards; the scanner only
//! records what it saw.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{Paragraph, PunctuationMark, Sentence, Word};
use super::options::{IndexingOptions, ParagraphParse};
use crate::characters::{
    ends_with_ignore_case, eq_ignore_case, fold, is_apostrophe, is_bullet, is_close_bracket,
    is_closing_quote, is_dash, is_ellipsis, is_hyphen, is_line_break, is_numeric,
    is_open_bracket, is_opening_quote, is_sentence_terminator, is_straight_quote, is_word_char,
    starts_with_ignore_case,
};
use crate::dictionaries::abbreviations::{can_end_sentence, is_abbreviation};

/// A table-of-contents line: leader dots followed by a page number.
static LEADER_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\.{3,}|\u{2026})\s*\d+$").expect("valid regex"));

const URL_PREFIXES: &[&str] = &["http://", "https://", "ftp://", "file://", "www.", "mailto:"];

/// What the scanner knew about a word's surroundings when it emitted it.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WordContext {
    /// Inside an exclusion tag block.
    pub excluded_by_tag: bool,
    /// First in its sentence, or right after an opening quote, bracket or colon.
    pub sentence_initial: bool,
    pub in_quotes: bool,
    pub in_parentheses: bool,
}

/// Raw scan result, before classification.
#[derive(Debug, Default)]
pub(crate) struct ScanOutput {
    pub words: Vec<Word>,
    pub contexts: Vec<WordContext>,
    pub sentences: Vec<Sentence>,
    pub paragraphs: Vec<Paragraph>,
    pub punctuation: Vec<PunctuationMark>,
}

/// A paragraph's worth of joined lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
    pub text: String,
    pub is_list: bool,
}

/// Tokenize `text` into words, sentences, paragraphs and punctuation.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub(crate) fn scan(text: &str, options: &IndexingOptions) -> ScanOutput {
    let mut scanner = Scanner::new(options);
    for block in group_blocks(text, options) {
        scanner.scan_block(&block);
    }
    scanner.out
}

/// Split on every line terminator, treating `\r\n` as one.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn indentation(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Whether a trimmed line ends a sentence.
fn line_is_terminated(line: &str) -> bool {
    if LEADER_DOTS.is_match(line) {
        return true;
    }
    line.trim_end_matches(|c: char| {
        is_close_bracket(c) || is_closing_quote(c) || is_straight_quote(c)
    })
    .chars()
    .next_back()
    .is_some_and(|c| is_sentence_terminator(c) || is_ellipsis(c))
}

/// Length of a leading list marker plus the whitespace after it.
pub(crate) fn list_marker_len(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    let marker_end = if is_bullet(first) || matches!(first, '-' | '*' | '+') {
        1
    } else if first == '(' {
        let close = chars.iter().take(6).position(|&c| c == ')')?;
        if close < 2 || !chars[1..close].iter().all(|c| c.is_alphanumeric()) {
            return None;
        }
        close + 1
    } else if first.is_ascii_digit() {
        let digits = chars.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits > 3 || !matches!(chars.get(digits), Some('.' | ')')) {
            return None;
        }
        digits + 1
    } else if first.is_alphabetic() && chars.get(1) == Some(&')') {
        2
    } else {
        return None;
    };

    match chars.get(marker_end) {
        Some(c) if c.is_whitespace() => Some(
            marker_end
                + chars[marker_end..]
                    .iter()
                    .take_while(|c| c.is_whitespace())
                    .count(),
        ),
        Some(_) if is_bullet(first) => Some(marker_end),
        _ => None,
    }
}

fn join_line(block: &mut String, line: &str) {
    let mut tail = block.chars().rev();
    let hyphenated = matches!(
        (tail.next(), tail.next()),
        (Some(h), Some(letter)) if is_hyphen(h) && letter.is_alphabetic()
    );
    if hyphenated && line.chars().next().is_some_and(char::is_lowercase) {
        block.pop();
    } else {
        block.push(' ');
    }
    block.push_str(line);
}

/// Group lines into paragraph blocks.
pub(crate) fn group_blocks(text: &str, options: &IndexingOptions) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;
    let mut previous_terminated = true;
    let mut previous_indent = 0;
    let mut blank_since = false;

    for line in split_lines(text) {
        let content = line.trim();
        if content.is_empty() {
            blank_since = true;
            continue;
        }
        let indent = indentation(line);
        let chars: Vec<char> = content.chars().collect();
        let is_list = list_marker_len(&chars).is_some();

        let start_new = match options.paragraph_parse {
            ParagraphParse::EachNewLine => true,
            ParagraphParse::OnlySentenceTerminated => {
                current.is_none()
                    || previous_terminated
                    || is_list
                    || (blank_since && !options.ignore_blank_lines_for_paragraphs)
                    || (!options.ignore_indenting_for_paragraphs && indent > previous_indent)
            }
        };

        match current.as_mut() {
            Some(block) if !start_new => join_line(&mut block.text, content),
            _ => {
                blocks.extend(current.replace(Block {
                    text: content.to_owned(),
                    is_list,
                }));
            }
        }

        previous_terminated = line_is_terminated(content);
        previous_indent = indent;
        blank_since = false;
    }
    blocks.extend(current);
    blocks
}

/// Length of a URL or file path starting at `chars[i]`.
fn url_len(chars: &[char], i: usize) -> Option<usize> {
    let rest = &chars[i..];
    let prefixed = URL_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(rest, prefix));
    let drive = matches!(rest, [d, ':', '\\' | '/', ..] if d.is_ascii_alphabetic());
    let unc = matches!(rest, ['\\', '\\', c, ..] if is_word_char(*c));
    if !(prefixed || drive || unc) {
        return None;
    }

    let mut end = rest
        .iter()
        .position(|c| c.is_whitespace())
        .unwrap_or(rest.len());
    let opens = rest[..end].iter().filter(|&&c| c == '(').count();
    let closes = rest[..end].iter().filter(|&&c| c == ')').count();
    while end > 1 {
        let c = rest[end - 1];
        let trailing = is_sentence_terminator(c)
            || matches!(c, ',' | ';' | ':')
            || is_closing_quote(c)
            || is_straight_quote(c)
            || (c == ')' && closes > opens);
        if !trailing {
            break;
        }
        end -= 1;
    }
    Some(end)
}

/// Whether the rest of a line after a leader-dot run is a page number; if so,
/// the index just past it.
fn page_number_end(chars: &[char], from: usize) -> Option<usize> {
    let start = from + chars[from..].iter().take_while(|c| c.is_whitespace()).count();
    let digits = chars[start..].iter().take_while(|&&c| is_numeric(c)).count();
    if digits == 0 {
        return None;
    }
    let end = start + digits;
    match chars.get(end) {
        None => Some(end),
        Some(c) if c.is_whitespace() => Some(end),
        _ => None,
    }
}

fn is_initialism(chars: &[char]) -> bool {
    match chars {
        [c] => c.is_uppercase() && !matches!(c, 'I' | 'A'),
        _ => {
            chars.contains(&'.')
                && chars
                    .split(|&c| c == '.')
                    .all(|segment| matches!(segment, [c] if c.is_alphabetic()))
        }
    }
}

/// Single quotes double as apostrophes, so an unclosed one is not trusted to
/// hold a sentence open.
const fn is_single_quote(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{201A}' | '\u{2039}')
}

const fn is_double_quote(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00AB}' | '\u{00BB}')
}

/// Positions of brackets and double quotes in `chars[from..]` that open but
/// are never closed within the block. They do not hold sentences open.
fn unbalanced_openers(chars: &[char], from: usize, tag_pairs: &[(char, char)]) -> Vec<usize> {
    let mut open = Vec::new();
    let mut quote = None;
    for (i, &c) in chars.iter().enumerate().skip(from) {
        if tag_pairs.iter().any(|&(start, end)| c == start || c == end) {
            continue;
        }
        if is_open_bracket(c) {
            open.push(i);
        } else if is_close_bracket(c) {
            open.pop();
        } else if is_double_quote(c) {
            let opens = is_opening_quote(c) || (is_straight_quote(c) && quote.is_none());
            quote = opens.then_some(i);
        }
    }
    open.extend(quote);
    open.sort_unstable();
    open
}

struct Scanner {
    tag_pairs: Vec<(char, char)>,
    /// Expected closing characters of the open tag blocks, innermost last.
    tag_stack: Vec<char>,
    out: ScanOutput,
    sentence_start: usize,
    paragraph_start: usize,
    block_words: usize,
    unit_count: usize,
    pending_unit: bool,
    paren_depth: usize,
    quote: Option<char>,
    initial_like: bool,
}

impl Scanner {
    fn new(options: &IndexingOptions) -> Self {
        Self {
            tag_pairs: options.tag_pairs(),
            tag_stack: Vec::new(),
            out: ScanOutput::default(),
            sentence_start: 0,
            paragraph_start: 0,
            block_words: 0,
            unit_count: 1,
            pending_unit: false,
            paren_depth: 0,
            quote: None,
            initial_like: false,
        }
    }

    fn scan_block(&mut self, block: &Block) {
        let chars: Vec<char> = block.text.chars().collect();
        let mut i = if block.is_list {
            list_marker_len(&chars).unwrap_or(0)
        } else {
            0
        };
        let unbalanced = unbalanced_openers(&chars, i, &self.tag_pairs);

        while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                i += 1;
            } else if self.toggle_tag(c) {
                i += 1;
            } else if let Some(len) = self.url_at(&chars, i) {
                self.push_word(chars[i..i + len].iter().collect(), true);
                i += len;
            } else if starts_word(&chars, i) {
                i = self.scan_word(&chars, i);
            } else if is_sentence_terminator(c) || is_ellipsis(c) {
                i = self.scan_terminators(&chars, i);
            } else {
                let unmatched = unbalanced.binary_search(&i).is_ok();
                self.scan_punctuation(&chars, i, unmatched);
                i += 1;
            }
        }

        self.close_sentence(None);
        self.close_paragraph(block.is_list);
    }

    /// Close the most recent open tag block that `c` ends, wherever it sits
    /// in the stack.
    fn close_tag(&mut self, c: char) -> bool {
        match self.tag_stack.iter().rposition(|&close| close == c) {
            Some(pos) => {
                self.tag_stack.remove(pos);
                true
            }
            None => false,
        }
    }

    fn toggle_tag(&mut self, c: char) -> bool {
        if self.close_tag(c) {
            return true;
        }
        if let Some(&(_, close)) = self.tag_pairs.iter().find(|(open, _)| *open == c) {
            self.tag_stack.push(close);
            return true;
        }
        false
    }

    fn url_at(&self, chars: &[char], i: usize) -> Option<usize> {
        let at_word_start = i == 0
            || chars[i - 1].is_whitespace()
            || is_open_bracket(chars[i - 1])
            || is_opening_quote(chars[i - 1])
            || is_straight_quote(chars[i - 1])
            || self.tag_pairs.iter().any(|&(open, _)| open == chars[i - 1]);
        if at_word_start { url_len(chars, i) } else { None }
    }

    fn push_word(&mut self, text: String, is_file_address: bool) {
        let index = self.out.words.len();
        if self.pending_unit && index > self.sentence_start {
            self.unit_count += 1;
        }
        self.pending_unit = false;

        self.out.contexts.push(WordContext {
            excluded_by_tag: !self.tag_stack.is_empty(),
            sentence_initial: index == self.sentence_start || self.initial_like,
            in_quotes: self.quote.is_some(),
            in_parentheses: self.paren_depth > 0,
        });
        self.initial_like = false;

        self.out.words.push(Word {
            folded: fold(&text),
            text,
            sentence: self.out.sentences.len(),
            sentence_position: index - self.sentence_start,
            paragraph: self.out.paragraphs.len(),
            is_file_address,
            ..Word::default()
        });
        self.block_words += 1;
    }

    fn push_mark(&mut self, character: char, connected_to_previous_word: bool) {
        self.out.punctuation.push(PunctuationMark {
            character,
            word_position: self.out.words.len(),
            connected_to_previous_word,
            paragraph: self.out.paragraphs.len(),
        });
    }

    fn is_connected(&self, chars: &[char], i: usize) -> bool {
        self.block_words > 0 && i > 0 && !chars[i - 1].is_whitespace()
    }

    /// Scan a word starting at `start`; returns the index just past it.
    fn scan_word(&mut self, chars: &[char], start: usize) -> usize {
        let n = chars.len();
        let mut j = start;
        if !is_word_char(chars[j]) {
            j += 1;
        }
        loop {
            while j < n && is_word_char(chars[j]) {
                j += 1;
            }
            let Some(&c) = chars.get(j) else { break };
            let prev = chars[j - 1];
            let joins = match chars.get(j + 1) {
                Some(&next) if is_word_char(next) => {
                    is_hyphen(c)
                        || is_apostrophe(c)
                        || matches!(c, '.' | '/' | '\\' | '@')
                        || (matches!(c, ',' | ':') && is_numeric(prev) && is_numeric(next))
                        || (c == '&' && prev.is_uppercase() && next.is_uppercase())
                }
                _ => false,
            };
            if !joins {
                break;
            }
            j += 1;
        }

        let single_capital = j - start == 1 && chars[start].is_uppercase();
        match chars.get(j) {
            Some('%' | '\u{00B0}') if is_numeric(chars[j - 1]) => j += 1,
            Some('+') if single_capital && chars.get(j + 1) == Some(&'+') => j += 2,
            Some('#') if single_capital => j += 1,
            Some(&c) if is_apostrophe(c) && !chars.get(j + 1).is_some_and(|&n| is_word_char(n)) => {
                let body = &chars[start..j];
                let possessive = matches!(body.last(), Some('s' | 'S'));
                let colloquial = ends_with_ignore_case(body, "in");
                let quoting = self.quote.is_some_and(is_single_quote);
                if (possessive || colloquial) && !quoting {
                    j += 1;
                }
            }
            _ => {}
        }

        let mut ends_sentence = false;
        if chars.get(j) == Some(&'.') && chars.get(j + 1) != Some(&'.') {
            let body: String = chars[start..j].iter().collect();
            let next_visible = chars[j + 1..].iter().copied().find(|c| !c.is_whitespace());
            let absorb = if eq_ignore_case(&body, "no") {
                next_visible.is_some_and(is_numeric)
            } else {
                is_initialism(&chars[start..j]) || is_abbreviation(&body)
            };
            if absorb {
                j += 1;
                ends_sentence = match next_visible {
                    None => true,
                    Some(next) => can_end_sentence(&body) && next.is_uppercase(),
                };
            }
        }

        self.push_word(chars[start..j].iter().collect(), false);
        if ends_sentence {
            self.close_sentence(Some('.'));
        }
        j
    }

    /// Scan a run of terminators and the closers after it.
    fn scan_terminators(&mut self, chars: &[char], start: usize) -> usize {
        let n = chars.len();
        let mut j = start;
        while j < n && (is_sentence_terminator(chars[j]) || is_ellipsis(chars[j])) {
            j += 1;
        }
        let run = &chars[start..j];
        let dots: usize = run
            .iter()
            .map(|&c| match c {
                '.' => 1,
                c if is_ellipsis(c) => 3,
                _ => 0,
            })
            .sum();
        let ellipsis = dots >= 3 && run.iter().all(|&c| c == '.' || is_ellipsis(c));
        if ellipsis && let Some(end) = page_number_end(chars, j) {
            return end;
        }

        let mut closers = Vec::new();
        let mut k = j;
        while let Some(&c) = chars.get(k) {
            let closes = self.close_tag(c)
                || if is_close_bracket(c) && self.paren_depth > 0 {
                    self.paren_depth -= 1;
                    closers.push(c);
                    true
                } else if is_closing_quote(c) || (is_straight_quote(c) && self.quote.is_some()) {
                    self.quote = None;
                    closers.push(c);
                    true
                } else {
                    false
                };
            if !closes {
                break;
            }
            k += 1;
        }

        let followed_by_dash = chars.get(k).is_some_and(|&c| is_hyphen(c) || is_dash(c));
        let quoted = self.quote.is_some_and(|q| !is_single_quote(q));
        let block_end = chars[k..].iter().all(|c| c.is_whitespace());
        let boundary = block_end
            || (self.paren_depth == 0
                && !quoted
                && !followed_by_dash
                && self.plausible_start(chars, k, ellipsis));

        let connected = self.is_connected(chars, start);
        if !boundary {
            for (offset, &c) in run.iter().enumerate() {
                self.push_mark(c, connected || offset > 0);
            }
        }
        for c in closers {
            self.push_mark(c, connected);
        }
        if boundary {
            self.close_sentence(run.last().copied());
        }
        k
    }

    fn plausible_start(&self, chars: &[char], from: usize, after_ellipsis: bool) -> bool {
        let mut m = from;
        while m < chars.len() && chars[m].is_whitespace() {
            m += 1;
        }
        while let Some(&c) = chars.get(m) {
            let opener = is_opening_quote(c)
                || is_straight_quote(c)
                || is_open_bracket(c)
                || self.tag_pairs.iter().any(|&(open, _)| open == c);
            if !opener {
                break;
            }
            m += 1;
        }
        match chars.get(m) {
            None => true,
            Some(&c) if c.is_uppercase() || is_bullet(c) => true,
            Some(&c) if is_numeric(c) => !after_ellipsis,
            Some(_) => false,
        }
    }

    fn scan_punctuation(&mut self, chars: &[char], i: usize, unmatched: bool) {
        let c = chars[i];
        let connected = self.is_connected(chars, i);
        if is_open_bracket(c) {
            if !unmatched {
                self.paren_depth += 1;
            }
            self.initial_like = true;
        } else if is_close_bracket(c) {
            self.paren_depth = self.paren_depth.saturating_sub(1);
        } else if is_opening_quote(c) || (is_straight_quote(c) && self.quote.is_none()) {
            if !unmatched {
                self.quote = Some(c);
            }
            self.initial_like = true;
        } else if is_closing_quote(c) || is_straight_quote(c) {
            self.quote = None;
        } else if c == ':' {
            self.initial_like = true;
            self.pending_unit = true;
        } else if c == ';' || is_dash(c) || is_hyphen(c) {
            self.pending_unit = true;
        }
        self.push_mark(c, connected);
    }

    fn close_sentence(&mut self, ending: Option<char>) {
        let end = self.out.words.len();
        if end > self.sentence_start {
            self.out.sentences.push(Sentence {
                first_word: self.sentence_start,
                last_word: end - 1,
                paragraph: self.out.paragraphs.len(),
                unit_count: self.unit_count,
                ending_punctuation: ending,
                ..Sentence::default()
            });
        }
        self.sentence_start = end;
        self.unit_count = 1;
        self.pending_unit = false;
        self.paren_depth = 0;
        self.quote = None;
        self.initial_like = false;
    }

    fn close_paragraph(&mut self, is_list: bool) {
        let end = self.out.sentences.len();
        if end > self.paragraph_start {
            self.out.paragraphs.push(Paragraph {
                first_sentence: self.paragraph_start,
                last_sentence: end - 1,
                is_list,
                ..Paragraph::default()
            });
        }
        self.paragraph_start = end;
        self.block_words = 0;
    }
}

fn starts_word(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if is_word_char(c) {
        return true;
    }
    let next = chars.get(i + 1).copied();
    match c {
        '$' | '\u{20AC}' | '\u{00A3}' | '\u{00A5}' | '#' | '@' => next.is_some_and(is_word_char),
        '-' | '+' => {
            next.is_some_and(is_numeric) && (i == 0 || chars[i - 1].is_whitespace())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        scan(text, &IndexingOptions::default())
            .words
            .into_iter()
            .map(|w| w.text)
            .collect()
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn splits_every_line_terminator() {
        assert_eq!(split_lines("a\nb\r\nc\rd\u{000C}e\u{2029}f"), ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(split_lines("a\n\nb"), ["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn unterminated_lines_join() {
        let blocks = group_blocks("This line\ncontinues here.\nNext one.", &IndexingOptions::default());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "This line continues here.");
    }

    #[test]
    fn blank_line_splits_unless_ignored() {
        let text = "A heading line\n\nbody text.";
        assert_eq!(group_blocks(text, &IndexingOptions::default()).len(), 2);
        let options = IndexingOptions {
            ignore_blank_lines_for_paragraphs: true,
            ..IndexingOptions::default()
        };
        assert_eq!(group_blocks(text, &options).len(), 1);
    }

    #[test]
    fn deeper_indent_and_list_markers_split() {
        let text = "Intro line\n    indented more\n- first item\n- second item";
        let blocks = group_blocks(text, &IndexingOptions::default());
        assert_eq!(blocks.len(), 4);
        assert!(blocks[2].is_list && blocks[3].is_list);

        let options = IndexingOptions {
            ignore_indenting_for_paragraphs: true,
            ..IndexingOptions::default()
        };
        assert_eq!(group_blocks(text, &options).len(), 3);
    }

    #[test]
    fn each_new_line_mode() {
        let options = IndexingOptions {
            paragraph_parse: ParagraphParse::EachNewLine,
            ..IndexingOptions::default()
        };
        assert_eq!(group_blocks("one\ntwo\n\nthree", &options).len(), 3);
    }

    #[test]
    fn hyphenated_line_end_rejoins() {
        let blocks = group_blocks("an inter-\nesting idea", &IndexingOptions::default());
        assert_eq!(blocks[0].text, "an interesting idea");
        let blocks = group_blocks("an X-\nRay", &IndexingOptions::default());
        assert_eq!(blocks[0].text, "an X- Ray");
    }

    #[test]
    fn list_markers() {
        assert_eq!(list_marker_len(&chars("1. Item")), Some(3));
        assert_eq!(list_marker_len(&chars("12) Item")), Some(4));
        assert_eq!(list_marker_len(&chars("(iv) Item")), Some(5));
        assert_eq!(list_marker_len(&chars("b) Item")), Some(3));
        assert_eq!(list_marker_len(&chars("\u{2022}Item")), Some(1));
        assert_eq!(list_marker_len(&chars("-  Item")), Some(3));
        assert_eq!(list_marker_len(&chars("1.5 million")), None);
        assert_eq!(list_marker_len(&chars("-5 degrees")), None);
        assert_eq!(list_marker_len(&chars("Item")), None);
    }

    #[test]
    fn urls_stop_before_trailing_punctuation() {
        assert_eq!(url_len(&chars("https://example.com/a."), 0), Some(21));
        assert_eq!(url_len(&chars("www.example.com, then"), 0), Some(15));
        assert_eq!(url_len(&chars("C:\\temp\\file.txt"), 0), Some(16));
        assert_eq!(url_len(&chars("plain words"), 0), None);
    }

    #[test]
    fn word_connectors() {
        assert_eq!(
            words("well-known don't 3.14 1,000 10:30 and/or AT&T john@example.com"),
            ["well-known", "don't", "3.14", "1,000", "10:30", "and/or", "AT&T", "john@example.com"]
        );
    }

    #[test]
    fn symbols_and_suffixes() {
        assert_eq!(
            words("$5 50% #rust @rustlang C++ C# -3 degrees"),
            ["$5", "50%", "#rust", "@rustlang", "C++", "C#", "-3", "degrees"]
        );
    }

    #[test]
    fn trailing_apostrophes() {
        assert_eq!(words("the dogs' bowl"), ["the", "dogs'", "bowl"]);
        assert_eq!(words("runnin' fast"), ["runnin'", "fast"]);
    }

    #[test]
    fn abbreviations_absorb_period() {
        assert_eq!(words("Dr. Smith met J. Doe"), ["Dr.", "Smith", "met", "J.", "Doe"]);
        assert_eq!(words("No. 5 and no. Then"), ["No.", "5", "and", "no", "Then"]);
        assert_eq!(words("e.g. this"), ["e.g.", "this"]);
    }

    #[test]
    fn sentence_final_abbreviation_closes_sentence() {
        let out = scan("We met at Acme Inc. The meeting ran long.", &IndexingOptions::default());
        assert_eq!(out.sentences.len(), 2);
        assert_eq!(out.sentences[0].ending_punctuation, Some('.'));
        assert_eq!(out.words[4].text, "Inc.");
    }

    #[test]
    fn boundary_rules() {
        let count = |text: &str| scan(text, &IndexingOptions::default()).sentences.len();
        assert_eq!(count("One here. Two here! Three here?"), 3);
        assert_eq!(count("Wait... what happened"), 1);
        assert_eq!(count("Wait\u{2026} Then it came."), 2);
        assert_eq!(count("(See the note. It helps.) Next one."), 2);
        assert_eq!(count("He said \"Go home.\" Then he left."), 2);
        assert_eq!(count("\"Stop!\" he said."), 1);
        assert_eq!(count("Hello.--The author."), 1);
        assert_eq!(count("It ended. the next"), 1);
        assert_eq!(count("Version 2. 3 more follow."), 2);
    }

    #[test]
    fn leader_dots_drop_page_numbers() {
        let out = scan("Welcome....5\nIntroduction....7", &IndexingOptions::default());
        assert_eq!(out.words.len(), 2);
        assert_eq!(out.paragraphs.len(), 2);
        assert!(out.punctuation.is_empty());
    }

    #[test]
    fn units_split_on_colons_semicolons_and_dashes() {
        let out = scan("First part; second part: third part \u{2014} fourth.", &IndexingOptions::default());
        assert_eq!(out.sentences[0].unit_count, 4);
    }

    #[test]
    fn marks_record_position_and_adjacency() {
        let out = scan("Document ave. (right pane) blah?", &IndexingOptions::default());
        assert_eq!(out.sentences.len(), 1);
        assert_eq!(out.sentences[0].ending_punctuation, Some('?'));
        let marks: Vec<_> = out
            .punctuation
            .iter()
            .map(|m| (m.character, m.word_position, m.connected_to_previous_word))
            .collect();
        assert_eq!(marks, [('(', 2, false), (')', 4, true)]);
        assert!(out.contexts[2].in_parentheses && out.contexts[2].sentence_initial);
    }

    #[test]
    fn tags_exclude_across_blocks() {
        let options = IndexingOptions {
            exclusion_block_tags: vec!["^^".into()],
            ..IndexingOptions::default()
        };
        let out = scan("Keep this. ^Drop\n\nthis too.^ Keep again.", &options);
        let excluded: Vec<_> = out
            .words
            .iter()
            .zip(&out.contexts)
            .filter(|(_, c)| c.excluded_by_tag)
            .map(|(w, _)| w.text.as_str())
            .collect();
        assert_eq!(excluded, ["Drop", "this", "too"]);
        assert!(out.punctuation.iter().all(|m| m.character != '^'));
    }

    #[test]
    fn overlapping_tag_pairs_close_independently() {
        let options = IndexingOptions {
            exclusion_block_tags: vec!["[]".into(), "^^".into()],
            ..IndexingOptions::default()
        };
        let out = scan("One [two ^three] four^ five six.", &options);
        let excluded: Vec<_> = out
            .words
            .iter()
            .zip(&out.contexts)
            .filter(|(_, c)| c.excluded_by_tag)
            .map(|(w, _)| w.text.as_str())
            .collect();
        assert_eq!(excluded, ["two", "three", "four"]);
        assert!(out.punctuation.is_empty());
        assert_eq!(out.sentences[0].ending_punctuation, Some('.'));
    }

    #[test]
    fn unclosed_quote_or_bracket_does_not_hold_sentence() {
        let out = scan(
            "\"Unclosed quote here. Next one starts. And more text.",
            &IndexingOptions::default(),
        );
        assert_eq!(out.sentences.len(), 3);
        assert!(out.sentences.iter().all(|s| s.ending_punctuation == Some('.')));
        assert!(!out.contexts[0].in_quotes);

        let out = scan(
            "Prices rose (see table 2. It shows growth. Then it fell.",
            &IndexingOptions::default(),
        );
        assert_eq!(out.sentences.len(), 3);
    }

    #[test]
    fn terminator_at_block_end_closes_sentence() {
        let out = scan("He said (twice. \"Really.", &IndexingOptions::default());
        assert_eq!(out.sentences.len(), 2);
        assert_eq!(out.sentences[1].ending_punctuation, Some('.'));
        assert!(out.punctuation.iter().all(|m| m.character != '.'));
    }

    #[test]
    fn unbalanced_openers_ignore_matched_pairs() {
        let chars = chars("(a) \"b\" (c \"d");
        assert_eq!(unbalanced_openers(&chars, 0, &[]), [8, 11]);
        assert!(unbalanced_openers(&self::chars("[x]"), 0, &[('[', ']')]).is_empty());
    }

    #[test]
    fn list_items_skip_their_marker() {
        let out = scan("1. Buy milk\n2. Buy eggs", &IndexingOptions::default());
        assert_eq!(out.paragraphs.len(), 2);
        assert!(out.paragraphs[0].is_list);
        assert_eq!(out.words[0].text, "Buy");
        assert!(out.punctuation.is_empty());
    }

    #[test]
    fn indices_are_consistent() {
        let out = scan("One two. Three four five.\n\nSix.", &IndexingOptions::default());
        assert_eq!(out.paragraphs.len(), 2);
        assert_eq!((out.sentences[1].first_word, out.sentences[1].last_word), (2, 4));
        assert_eq!(out.words[3].sentence_position, 1);
        assert_eq!(out.words[5].paragraph, 1);
        assert_eq!(out.words[5].sentence, 2);
    }
}
