//! Abbreviations that end in a period without ending a sentence.
//!
//! Entries are lowercase and carry no trailing period. Dotted forms keep
//! their inner periods (`e.g`, `ph.d`).

use std::collections::HashSet;
use std::sync::LazyLock;

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "messrs", "mme", "mlle", "dr", "prof", "rev", "fr", "sr", "jr", "st",
    "esq", "capt", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "gov", "sen", "pres", "supt",
];

const DEGREES: &[&str] = &[
    "b.a", "b.sc", "b.s", "m.a", "m.sc", "m.s", "m.b.a", "ph.d", "m.d", "j.d", "ll.b", "ll.m",
    "d.d.s", "ed.d",
];

const LATIN_AND_REFERENCE: &[&str] = &[
    "e.g", "i.e", "etc", "cf", "viz", "vs", "ibid", "approx", "ca", "n.b", "p.s", "vol", "vols",
    "nos", "p", "pp", "ch",
];

const CALENDAR: &[&str] = &[
    "a.m", "p.m", "b.c", "a.d", "b.c.e", "c.e", "feb", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "mon", "tue", "tues", "thu", "thur", "thurs", "fri",
];

const PLACES_AND_ORGS: &[&str] = &[
    "ave", "blvd", "rd", "ln", "mt", "dept", "u.s", "u.k", "u.s.a", "u.n", "e.u", "inc", "ltd",
    "corp", "assn", "intl",
];

const UNITS: &[&str] = &[
    "lb", "lbs", "kg", "mg", "ml", "cm", "km", "yd", "sq", "hr", "hrs", "mph",
];

/// Abbreviations spelled like ordinary English words (`no`, `in`, `sat`).
const WORD_LIKE: &[&str] = &[
    "no", "in", "min", "max", "mi", "ft", "oz", "mm", "apt", "co", "ed", "eds", "sec", "trans",
    "ref", "refs", "fig", "figs", "chap", "al", "gen", "col", "rep", "hon", "bros", "jan",
    "mar", "wed", "sat", "sun",
];

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [TITLES, DEGREES, LATIN_AND_REFERENCE, CALENDAR, PLACES_AND_ORGS, UNITS]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

static WORD_LIKE_ABBREVIATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| WORD_LIKE.iter().copied().collect());

/// Check if a word (with or without its trailing period) is a known abbreviation
/// that is never an ordinary word.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}

/// Check if a word is an abbreviation that is also an ordinary word.
///
/// A period after one of these only continues the sentence when the next
/// token starts lowercase or with a digit (`No. 5`, `Sat. morning`).
pub fn is_word_like_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    WORD_LIKE_ABBREVIATIONS.contains(lower.trim_matches('.'))
}
