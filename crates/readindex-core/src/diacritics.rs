//! Ligature and combining-diacritic normalization.
//!
//! Text extracted from PDFs and word processors often carries typographic
//! ligatures (`ﬄ`) or decomposed accents (`e` followed by U+0301). Both break
//! dictionary lookups and syllable counting, so the document scanner can run
//! this pass first.

use std::borrow::Cow;

/// Ligatures and their plain-letter expansions.
const LIGATURES: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
    ('\u{0132}', "IJ"),
    ('\u{0133}', "ij"),
    ('\u{0152}', "OE"),
    ('\u{0153}', "oe"),
    ('\u{00C6}', "AE"),
    ('\u{00E6}', "ae"),
];

/// Combining marks that compose canonically with their base letter.
const COMPOSABLE_MARKS: &[char] = &[
    '\u{0300}', // grave
    '\u{0301}', // acute
    '\u{0302}', // circumflex
    '\u{0303}', // tilde
    '\u{0307}', // dot above
    '\u{0308}', // diaeresis
    '\u{030A}', // ring above
    '\u{030C}', // caron
    '\u{0327}', // cedilla
    '\u{0328}', // ogonek
];

/// Pairs without a canonical composition: solidus overlays and the
/// retroflex hook.
const OVERLAY_PAIRS: &[(char, char, char)] = &[
    ('o', '\u{0337}', 'ø'),
    ('O', '\u{0337}', 'Ø'),
    ('o', '\u{0338}', 'ø'),
    ('O', '\u{0338}', 'Ø'),
    ('l', '\u{0337}', 'ł'),
    ('L', '\u{0337}', 'Ł'),
    ('l', '\u{0338}', 'ł'),
    ('L', '\u{0338}', 'Ł'),
    ('d', '\u{0335}', 'đ'),
    ('D', '\u{0335}', 'Đ'),
    ('d', '\u{0337}', 'đ'),
    ('D', '\u{0337}', 'Đ'),
    ('d', '\u{0322}', 'ɖ'),
    ('l', '\u{0322}', 'ɭ'),
    ('n', '\u{0322}', 'ɳ'),
    ('r', '\u{0322}', 'ɽ'),
    ('s', '\u{0322}', 'ʂ'),
    ('t', '\u{0322}', 'ʈ'),
    ('z', '\u{0322}', 'ʐ'),
];

fn ligature_expansion(c: char) -> Option<&'static str> {
    LIGATURES
        .iter()
        .find_map(|&(lig, expansion)| (lig == c).then_some(expansion))
}

fn compose_pair(base: char, mark: char) -> Option<char> {
    if !base.is_alphabetic() {
        return None;
    }
    if COMPOSABLE_MARKS.contains(&mark)
        && let Some(composed) = unicode_normalization::char::compose(base, mark)
    {
        return Some(composed);
    }
    OVERLAY_PAIRS
        .iter()
        .find_map(|&(b, m, out)| (b == base && m == mark).then_some(out))
}

/// Converts ligatures and base-plus-combining-mark pairs.
///
/// The converter keeps its output buffer between calls so a caller can
/// reuse the allocation. [`convert`](Self::convert) reports whether anything
/// changed; when it returns `false` the buffer is empty and the caller should
/// keep using its original text.
#[derive(Debug, Default, Clone)]
pub struct DiacriticConverter {
    buffer: String,
}

impl DiacriticConverter {
    /// Create a converter with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `text`, returning `true` if any ligature or diacritic pair was
    /// replaced.
    pub fn convert(&mut self, text: &str) -> bool {
        self.buffer.clear();
        if text.is_empty() {
            return false;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut flushed_up_to = 0;
        let mut converted = false;
        let mut i = 0;

        while i < chars.len() {
            if let Some(expansion) = ligature_expansion(chars[i]) {
                self.buffer.extend(&chars[flushed_up_to..i]);
                self.buffer.push_str(expansion);
                i += 1;
                flushed_up_to = i;
                converted = true;
                continue;
            }
            if let Some(&next) = chars.get(i + 1)
                && let Some(composed) = compose_pair(chars[i], next)
            {
                self.buffer.extend(&chars[flushed_up_to..i]);
                self.buffer.push(composed);
                i += 2;
                flushed_up_to = i;
                converted = true;
                continue;
            }
            i += 1;
        }

        if converted {
            self.buffer.extend(&chars[flushed_up_to..]);
        }
        converted
    }

    /// The converted text from the last successful [`convert`](Self::convert).
    pub fn converted_text(&self) -> &str {
        &self.buffer
    }

    /// Take ownership of the converted buffer, leaving it empty.
    pub fn into_converted_text(self) -> String {
        self.buffer
    }
}

/// Normalize ligatures and combining diacritics, borrowing when nothing
/// needs to change.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn normalize(text: &str) -> Cow<'_, str> {
    let mut converter = DiacriticConverter::new();
    if converter.convert(text) {
        tracing::debug!("converted ligatures or combining diacritics");
        Cow::Owned(converter.into_converted_text())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_convert_leaves_buffer_empty() {
        let mut converter = DiacriticConverter::new();
        assert!(!converter.convert("plain text"));
        assert!(converter.converted_text().is_empty());
        assert!(!converter.convert(""));
        assert!(converter.converted_text().is_empty());
    }

    #[test]
    fn combining_acute_composes() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("e\u{0301}clair"));
        assert_eq!(converter.converted_text(), "éclair");
    }

    #[test]
    fn ligature_expands() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("\u{FB04}oat"));
        assert_eq!(converter.converted_text(), "ffloat");
    }

    #[test]
    fn latin_ligatures_expand() {
        assert_eq!(normalize("\u{0153}uvre"), "oeuvre");
        assert_eq!(normalize("\u{0152}dipus"), "OEdipus");
        assert_eq!(normalize("encyclop\u{00E6}dia"), "encyclopaedia");
        assert_eq!(normalize("\u{00C6}sop"), "AEsop");
    }

    #[test]
    fn remainder_after_last_match_is_kept() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("nai\u{0308}ve and co\u{0327}a"));
        assert_eq!(converter.converted_text(), "naïve and coça");
    }

    #[test]
    fn solidus_overlay_has_explicit_mapping() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("Bjo\u{0338}rn"));
        assert_eq!(converter.converted_text(), "Bjørn");
    }

    #[test]
    fn ligature_wins_over_following_mark() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("\u{FB01}\u{0301}"));
        assert_eq!(converter.converted_text(), "fi\u{0301}");
    }

    #[test]
    fn buffer_resets_between_calls() {
        let mut converter = DiacriticConverter::new();
        assert!(converter.convert("\u{FB00}"));
        assert!(!converter.convert("abc"));
        assert!(converter.converted_text().is_empty());
    }

    #[test]
    fn normalize_borrows_unchanged_text() {
        assert!(matches!(normalize("plain"), Cow::Borrowed("plain")));
        assert_eq!(normalize("U\u{0308}ber"), "Über");
    }
}
