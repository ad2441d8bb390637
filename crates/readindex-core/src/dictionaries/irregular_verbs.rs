//! Verb dictionaries for passive voice detection.
//!
//! A passive construction is a form of "to be" (or "to get") followed by a
//! past participle. Regular participles end in `-ed`; the irregular ones are
//! listed here, along with `-ed` words that usually act as adjectives.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Irregular past participles (200+ verbs).
pub static IRREGULAR_PAST_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Most common irregular verbs
    set.extend([
        "been",
        "done",
        "gone",
        "seen",
        "known",
        "given",
        "taken",
        "made",
        "come",
        "become",
        "written",
        "spoken",
        "broken",
        "chosen",
        "driven",
        "eaten",
        "fallen",
        "forgotten",
        "forgiven",
        "frozen",
        "gotten",
        "hidden",
        "ridden",
        "risen",
        "shaken",
        "shown",
        "stolen",
        "sworn",
        "torn",
        "thrown",
        "worn",
        "beaten",
        "bitten",
        "blown",
        "drawn",
        "flown",
        "grown",
        "withdrawn",
    ]);

    // Additional irregular forms
    set.extend([
        "begun", "drunk", "rung", "shrunk", "sunk", "sprung", "stunk", "sung", "swum", "spun",
        "won", "hung", "struck", "stuck", "swung", "slung", "clung", "flung", "stung", "strung",
        "wrung",
    ]);

    // Verbs with -en endings
    set.extend([
        "arisen",
        "awoken",
        "borne",
        "begotten",
        "bidden",
        "forbidden",
        "forsaken",
        "hewn",
        "lain",
        "laden",
        "mistaken",
        "proven",
        "stricken",
        "stridden",
        "striven",
        "thriven",
        "trodden",
        "waken",
        "waxen",
        "woven",
    ]);

    // Common -ed irregular forms
    set.extend([
        "said", "paid", "laid", "heard", "sold", "told", "held", "left", "kept", "slept", "wept",
        "swept", "felt", "dealt", "meant", "sent", "spent", "bent", "lent", "built", "burnt",
        "learnt", "spelt", "spoilt", "dwelt",
    ]);

    // Less common but important
    set.extend([
        "abode",
        "awoke",
        "bore",
        "bound",
        "bred",
        "brought",
        "burst",
        "bought",
        "cast",
        "caught",
        "crept",
        "dug",
        "fed",
        "fought",
        "found",
        "fled",
        "forbade",
        "forecast",
        "forgot",
        "forsook",
        "froze",
        "got",
        "ground",
        "grew",
        "hid",
        "hit",
        "hurt",
        "knelt",
        "knew",
        "led",
        "let",
        "lit",
        "lost",
        "met",
        "overcome",
        "overthrown",
        "put",
        "quit",
        "read",
        "rid",
        "rang",
        "ran",
        "saw",
        "sought",
        "set",
        "sewed",
        "shed",
        "shone",
        "shot",
        "shut",
        "slain",
        "slid",
        "slit",
        "sown",
        "sped",
        "split",
        "spread",
        "stood",
        "strewn",
        "strode",
        "strove",
        "taught",
        "thought",
        "threw",
        "thrust",
        "took",
        "tore",
        "underwent",
        "understood",
        "undone",
        "upset",
        "woken",
        "wore",
        "wound",
        "wove",
        "wrought",
    ]);

    set
});

/// Words ending in -ed/-en that are typically adjectives, not passive voice.
pub static ADJECTIVE_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "tired",
        "excited",
        "interested",
        "bored",
        "confused",
        "worried",
        "scared",
        "frightened",
        "amazed",
        "surprised",
        "shocked",
        "pleased",
        "satisfied",
        "disappointed",
        "frustrated",
        "embarrassed",
        "ashamed",
        "annoyed",
        "delighted",
        "thrilled",
        "stunned",
        "overwhelmed",
        "talented",
        "gifted",
        "blessed",
        "cursed",
        "aged",
        "beloved",
        "learned",
        "skilled",
        "experienced",
        "advanced",
        "supposed",
        "alleged",
        "concerned",
        "determined",
        "devoted",
        "distinguished",
        "educated",
        "enlightened",
        "equipped",
        "established",
        "esteemed",
        "extended",
        "informed",
        "inspired",
        "involved",
        "limited",
        "marked",
        "mixed",
        "organized",
        "packed",
        "prepared",
        "pronounced",
        "qualified",
        "refined",
        "relaxed",
        "relieved",
        "renowned",
        "reserved",
        "respected",
        "retired",
        "sophisticated",
        "trained",
        "troubled",
        "united",
        "unmarried",
        "used",
        "varied",
        "wasted",
        "wicked",
        "wounded",
    ]
    .into_iter()
    .collect()
});

/// Auxiliaries that introduce a passive construction.
pub static PASSIVE_AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "get", "gets", "got", "gotten",
        "getting", "isn't", "aren't", "wasn't", "weren't",
    ]
    .into_iter()
    .collect()
});

/// Adverbs allowed between the auxiliary and the participle ("was not seen",
/// "is always given"). Any `-ly` adverb is also allowed.
pub static INTERVENING_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["not", "never", "also", "always", "just", "already", "often", "still", "even"]
        .into_iter()
        .collect()
});

/// Check if a word is an irregular past participle.
pub fn is_irregular_past_participle(word: &str) -> bool {
    IRREGULAR_PAST_PARTICIPLES.contains(word.to_lowercase().as_str())
}

/// Check if a word is likely an adjective exception.
pub fn is_adjective_exception(word: &str) -> bool {
    ADJECTIVE_EXCEPTIONS.contains(word.to_lowercase().as_str())
}

/// Check if a word is a passive auxiliary.
pub fn is_passive_auxiliary(word: &str) -> bool {
    PASSIVE_AUXILIARIES.contains(word.to_lowercase().as_str())
}

/// Check if a word is a past participle: irregular, or a regular `-ed` form
/// that is not usually an adjective.
pub fn is_past_participle(word: &str) -> bool {
    if is_irregular_past_participle(word) {
        return true;
    }
    let lower = word.to_lowercase();
    lower.len() > 4
        && lower.ends_with("ed")
        && lower.chars().all(char::is_alphabetic)
        && !is_adjective_exception(&lower)
}

/// Check if a word may sit between an auxiliary and its participle.
pub fn is_intervening_adverb(word: &str) -> bool {
    let lower = word.to_lowercase();
    INTERVENING_ADVERBS.contains(lower.as_str()) || (lower.len() > 4 && lower.ends_with("ly"))
}
