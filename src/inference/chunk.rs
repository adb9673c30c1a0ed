//! Title-case chunking for descriptions without cue lines

use super::lexicon::{is_stop_single, looks_like_name_token, QUOTES};

/// Punctuation that separates words, on top of whitespace
const DELIMITERS: &str = ",;:!?.()[]{}|/\\+-\u{2013}\u{2014}";

const MAX_CHUNK_WORDS: usize = 3;

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(c)
}

/// A single uppercase letter, optionally behind an opening quote
fn is_bare_initial(word: &str) -> bool {
    let mut chars = word.trim_start_matches(QUOTES.as_slice()).chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Splits text into quote-trimmed words.
///
/// A period directly after a single capital letter stays attached so that
/// initials like "J." survive as one word.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let word = current.trim_matches(QUOTES.as_slice());
        if !word.is_empty() {
            words.push(word.to_string());
        }
        current.clear();
    };

    for c in text.chars() {
        if !is_delimiter(c) {
            current.push(c);
            continue;
        }
        if c == '.' && is_bare_initial(&current) {
            current.push(c);
        }
        flush(&mut current);
    }
    flush(&mut current);
    words
}

fn qualifies(word: &str) -> bool {
    looks_like_name_token(word) && !is_stop_single(word)
}

/// Collects maximal runs of name-like words, fullest chunks first.
///
/// Runs longer than three words are dropped. Ordering among chunks with the
/// same word count follows their position in the text.
pub fn title_case_chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<Vec<String>> = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for word in split_words(text) {
        if qualifies(&word) {
            run.push(word);
            continue;
        }
        if (1..=MAX_CHUNK_WORDS).contains(&run.len()) {
            chunks.push(std::mem::take(&mut run));
        }
        run.clear();
    }
    if (1..=MAX_CHUNK_WORDS).contains(&run.len()) {
        chunks.push(run);
    }

    chunks.sort_by(|a, b| b.len().cmp(&a.len()));
    chunks.into_iter().map(|words| words.join(" ")).collect()
}

/// Every individual name-like word, in text order
pub fn single_title_tokens(text: &str) -> Vec<String> {
    split_words(text).into_iter().filter(|w| qualifies(w)).collect()
}
