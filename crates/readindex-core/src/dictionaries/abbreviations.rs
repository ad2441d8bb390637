//! Abbreviation dictionary for sentence boundary detection.
//!
//! The scanner absorbs the period after any of these abbreviations into the
//! word. Entries that collide with ordinary words (`in`, `no`, `sun`, `wed`,
//! `est`, `min`) are left out; `no` is handled separately because it is only
//! an abbreviation in front of a number.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations whose trailing period is not a sentence break.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr", "hon",
        "esq", "phd", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen",
        "rep", "gov", "pres", "st",
    ]);

    // Academic degrees
    set.extend([
        "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m", "d.d.s",
        "d.v.m", "ed.d", "psy.d",
    ]);

    // Common abbreviations
    set.extend([
        "etc", "vs", "e.g", "i.e", "al", "cf", "viz", "ibid", "n.b", "p.s", "r.s.v.p",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec", "tue", "tues", "thu", "thur", "thurs", "fri",
    ]);

    // Locations and geography
    set.extend([
        "ave", "blvd", "rd", "ln", "apt", "ste", "bldg", "dept", "u.s", "u.k", "u.s.a", "e.u",
        "n.y", "calif", "fla", "penn", "mt", "ft",
    ]);

    // Business and organizations
    set.extend(["inc", "corp", "ltd", "llc", "co", "bros", "assn", "mfg", "intl"]);

    // Units of measurement
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "yd", "mi", "sq", "mph", "kph",
        "rpm", "hp",
    ]);

    // Technical and scientific
    set.extend([
        "vol", "nos", "pp", "fig", "eq", "approx", "avg", "misc", "nr", "refs", "eds", "supp",
        "encl", "ca", "cca", "resp",
    ]);

    // German
    set.extend(["bzw", "usw", "z.b", "d.h", "u.a", "s.o", "vgl", "ggf", "evtl", "nr", "str"]);

    set
});

/// Abbreviations that commonly end a sentence. When one of these is followed
/// by a capitalized word, its period also closes the sentence.
pub static SENTENCE_FINAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "etc", "inc", "ltd", "llc", "co", "corp", "jr", "sr", "a.m", "p.m", "al", "esq", "usw",
        "bros", "b.c", "a.d",
    ]
    .into_iter()
    .collect()
});

fn key(word: &str) -> String {
    word.to_lowercase().trim_end_matches('.').to_owned()
}

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(key(word).as_str())
}

/// Check if an abbreviation can also close a sentence.
pub fn can_end_sentence(word: &str) -> bool {
    SENTENCE_FINAL.contains(key(word).as_str())
}
