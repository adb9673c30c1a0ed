//! Normalization and deduplication of accepted candidates

use super::lexicon::is_stop_entry;
use std::collections::{HashMap, HashSet};

/// Collapses whitespace, keeps the longest candidate per first word and
/// returns the survivors sorted.
///
/// Candidates sharing a first word (case-insensitive) are treated as the same
/// person; the longest spelling wins, with the first one seen kept on ties.
/// Applying this to its own output returns the same list.
pub fn normalize_and_dedup<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: HashMap<String, String> = HashMap::new();

    for candidate in candidates {
        let words: Vec<&str> = candidate.as_ref().split_whitespace().collect();
        let Some(first) = words.first() else {
            continue;
        };
        let normalized = words.join(" ");
        if is_stop_entry(&normalized) {
            continue;
        }
        let key = first.to_lowercase();
        let keep_current = best
            .get(&key)
            .is_some_and(|current| current.chars().count() >= normalized.chars().count());
        if !keep_current {
            best.insert(key, normalized);
        }
    }

    let mut seen = HashSet::new();
    let mut names: Vec<String> =
        best.into_values().filter(|name| seen.insert(name.to_lowercase())).collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_longest_per_first_word() {
        let names = normalize_and_dedup(["Sam", "sam  Okafor", "Sam O.", "Jo Li"]);
        assert_eq!(names, vec!["Jo Li", "sam Okafor"]);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let names = normalize_and_dedup(["Ana Ruiz", "Ana Roan", "ana ruiz"]);
        assert_eq!(names, vec!["Ana Ruiz"]);
    }

    #[test]
    fn test_blank_and_stop_entries_dropped() {
        let names = normalize_and_dedup(["", "   ", "SHOW", "Open Mic", "Kai"]);
        assert_eq!(names, vec!["Kai"]);
    }

    #[test]
    fn test_sorted_and_idempotent() {
        let once = normalize_and_dedup(["Zed Q", "Amy  B", "Mo"]);
        assert_eq!(once, vec!["Amy B", "Mo", "Zed Q"]);
        assert_eq!(normalize_and_dedup(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_and_dedup(Vec::<String>::new()).is_empty());
    }
}
