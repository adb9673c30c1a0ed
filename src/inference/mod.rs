//! Player name inference for free-text event descriptions
//!
//! Stages run in order and later ones only engage when earlier ones found
//! nothing:
//!
//! 1. cue lines ("Cast: Jane Doe, John Smith")
//! 2. title-case chunks filtered through the name dictionary
//! 3. single known first names
//!
//! Whatever is found is normalized and deduplicated before being returned.
//! Inference is a pure function of its inputs and is safe to call from many
//! threads against one shared dictionary.

pub mod chunk;
pub mod cue;
pub mod dictionary;
pub mod lexicon;
pub mod normalize;

pub use dictionary::{DictionaryError, NameDictionary};
pub use normalize::normalize_and_dedup;

use log::debug;

/// Infers the performer names mentioned in an event description.
///
/// Returns a sorted, deduplicated list; an empty list means nothing
/// name-like was found.
///
/// # Examples
///
/// ```
/// use playbill::inference::{infer_names, NameDictionary};
///
/// let names = infer_names("Cast: Jane Doe, John Smith", &NameDictionary::empty());
/// assert_eq!(names, vec!["Jane Doe", "John Smith"]);
/// ```
pub fn infer_names(description: &str, dictionary: &NameDictionary) -> Vec<String> {
    let text = description.replace("\r\n", "\n");
    let scan = cue::scan_cue_lines(&text);
    let mut candidates = scan.names;

    if candidates.is_empty() {
        candidates = chunk::title_case_chunks(&scan.remainder)
            .into_iter()
            .filter(|c| !lexicon::is_stop_phrase(c) && dictionary.accepts(c))
            .collect();
        debug!("Title-case chunking produced {} candidate(s)", candidates.len());
    }

    if candidates.is_empty() && dictionary.has_first_names() {
        candidates = chunk::single_title_tokens(&scan.remainder)
            .into_iter()
            .filter(|t| dictionary.is_first_name(t))
            .collect();
        debug!("First-name fallback produced {} candidate(s)", candidates.len());
    }

    normalize_and_dedup(candidates)
}
