//! Lexical predicates shared by every inference stage
//!
//! This module holds the static stop tables and the structural tests used to
//! decide whether a word or a short phrase could be part of a person's name.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Phrases that mark a line or chunk as describing something other than a performer
pub static STOP_PHRASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "doors open",
        "general admission",
        "improv jam",
        "open mic",
        "musical guest",
        "guest team",
        "on tech",
        "improv from",
        "vs",
        "vs.",
        "team",
    ]
    .into_iter()
    .collect()
});

/// Capitalized words that look like names but never are one
pub static STOP_SINGLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Show",
        "Jam",
        "Night",
        "The",
        "Team",
        "House",
        "Doors",
        "Open",
        "Admission",
        "Free",
        "Improv",
        "Guest",
        "Guests",
        "Special",
        "Musical",
        "Featuring",
    ]
    .into_iter()
    .collect()
});

/// Characters that open an aside ("Jane Doe (understudy)") in a cue segment
const ASIDE_MARKERS: [char; 4] = ['(', '[', '{', '-'];

/// Quote characters stripped from the edges of segments and words
pub(crate) const QUOTES: [char; 6] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

const MAX_NAME_TOKENS: usize = 3;

/// Returns true if the exact word is a known non-name capitalized word
pub fn is_stop_single(word: &str) -> bool {
    STOP_SINGLES.contains(word)
}

/// Returns true if the line mentions any stop phrase anywhere (case-insensitive)
pub fn contains_stop_context(line: &str) -> bool {
    let lowered = line.to_lowercase();
    STOP_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

/// Checks whether a title-case chunk is really a stop phrase.
///
/// A chunk is rejected if its normalized form is a stop phrase, or if it has
/// exactly two words and either word (title-cased) is a stop single.
pub fn is_stop_phrase(chunk: &str) -> bool {
    let lowered = chunk.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if STOP_PHRASES.contains(words.join(" ").as_str()) {
        return true;
    }
    words.len() == 2 && words.iter().any(|w| is_stop_single(&title_case(w)))
}

/// Case-insensitive membership in either stop table
pub fn is_stop_entry(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    STOP_PHRASES.contains(lowered.as_str())
        || STOP_SINGLES.iter().any(|single| single.to_lowercase() == lowered)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Initials such as "J.", "JR" or "D'A"
fn is_initial(token: &str) -> bool {
    token.chars().count() <= 3
        && token.chars().any(char::is_alphabetic)
        && token.chars().all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '\u{2019}'))
        && token.to_uppercase() == token
}

/// Structural test for a single word that could belong to a person's name.
///
/// Accepts short all-uppercase initials and any word whose first character is
/// an uppercase letter, which covers accented and apostrophe names like
/// "Renée" or "O'Nay".
pub fn looks_like_name_token(token: &str) -> bool {
    let Some(first) = token.chars().next() else {
        return false;
    };
    is_initial(token) || first.is_uppercase()
}

/// Cleans a raw cue-line segment into a candidate name.
///
/// Drops anything after an aside marker, strips surrounding quotes and
/// collapses whitespace. Returns `None` unless the result has one to three
/// tokens that all look like name tokens.
pub fn clean_name(segment: &str) -> Option<String> {
    let mut cleaned = segment.trim();
    if let Some(idx) = cleaned.find(&ASIDE_MARKERS[..]) {
        cleaned = cleaned[..idx].trim();
    }
    let cleaned = cleaned.trim_matches(QUOTES.as_slice());

    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > MAX_NAME_TOKENS {
        return None;
    }
    if tokens.iter().all(|t| looks_like_name_token(t)) {
        Some(tokens.join(" "))
    } else {
        None
    }
}
