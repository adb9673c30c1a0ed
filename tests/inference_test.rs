use playbill::inference::lexicon::{STOP_PHRASES, STOP_SINGLES};
use playbill::inference::{infer_names, normalize_and_dedup, NameDictionary};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use test_case::test_case;

fn empty() -> NameDictionary {
    NameDictionary::empty()
}

#[test_case("Cast: Jane Doe, John Smith", &["Jane Doe", "John Smith"] ; "cast line")]
#[test_case("Hosted by: Alex Lee", &[] ; "hosts excluded")]
#[test_case("Musical Guest: The Band", &[] ; "musical guest excluded")]
#[test_case("Featuring Sam Okafor and J. Rivera", &["J. Rivera", "Sam Okafor"] ; "featuring without colon")]
#[test_case("Improv Jam tonight", &[] ; "improv jam")]
#[test_case("", &[] ; "empty description")]
#[test_case("!!! ... ---", &[] ; "punctuation only")]
#[test_case("Lineup - Renée O'Nay & Bo Li (replacing Cy)", &["Bo Li", "Renée O'Nay"] ; "unicode names")]
#[test_case("Cast: Jane Doe\nCast: Jane Doe-Smith, Jane Doe Smith", &["Jane Doe Smith"] ; "longest kept")]
#[test_case("Cast: Jane Doe, Doors open at 7", &["Jane Doe"] ; "stop context line still chunked")]
#[test_case("\u{2018}Sam Okafor\u{2019} performs", &["Sam Okafor"] ; "curly single quotes")]
#[test_case("\u{201C}Sam Okafor\u{201D} performs", &["Sam Okafor"] ; "curly double quotes")]
fn test_without_dictionary(description: &str, expected: &[&str]) {
    assert_eq!(infer_names(description, &empty()), expected);
}

#[test]
fn test_first_name_fallback() {
    let dict = NameDictionary::empty().with_first_names(["sam"]);
    assert_eq!(infer_names("Join Sam for a great show!", &dict), vec!["Sam"]);
}

#[test]
fn test_fallback_ignores_stop_singles() {
    let dict = NameDictionary::empty().with_first_names(["show", "free"]);
    assert!(infer_names("Free Show at noon", &dict).is_empty());
}

#[test]
fn test_full_name_match_on_chunk() {
    let dict = NameDictionary::empty().with_full_names(["kai ng"]);
    assert_eq!(infer_names("An evening with Kai Ng", &dict), vec!["Kai Ng"]);
}

#[test]
fn test_two_word_last_name_hit_is_accepted() {
    // Either a first or a last name hit is enough
    let dict = NameDictionary::empty().with_last_names(["park"]);
    assert_eq!(infer_names("Picnic at Central Park", &dict), vec!["Central Park"]);
}

#[test]
fn test_output_invariants() {
    let descriptions = [
        "Cast: Jane Doe, JANE DOE, John Smith (u/s), The Show",
        "Players: Show\nWith: Free",
        "Join the House Team for Open Mic Night with Ana Ruiz, Bo Li and Cy Young",
        "Special guests: Mo Diaz + Kai Ng\nDoors open 7pm",
        "GENERAL ADMISSION\nSHOW NIGHT with Ana",
    ];
    let dict = NameDictionary::empty().with_first_names(["ana", "show", "night"]);
    for description in descriptions {
        for dictionary in [&empty(), &dict] {
            let names = infer_names(description, dictionary);
            assert_eq!(infer_names(description, dictionary), names, "deterministic");

            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(sorted, names, "sorted");

            let lowered: HashSet<String> = names.iter().map(|n| n.to_lowercase()).collect();
            assert_eq!(lowered.len(), names.len(), "unique ignoring case");

            for name in &names {
                let words = name.split_whitespace().count();
                assert!((1..=3).contains(&words), "{name}");
                assert_eq!(name.trim(), name.as_str());
                assert!(!name.contains("  "));
                let lowered = name.to_lowercase();
                assert!(!STOP_PHRASES.contains(lowered.as_str()), "{name}");
                assert!(!STOP_SINGLES.iter().any(|s| s.to_lowercase() == lowered), "{name}");
            }

            assert_eq!(normalize_and_dedup(&names), names, "normalization is a fixed point");
        }
    }
}

#[test]
fn test_shared_dictionary_across_threads() {
    let dict = Arc::new(NameDictionary::empty().with_first_names(["sam", "ana"]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dict = Arc::clone(&dict);
            thread::spawn(move || {
                let description = format!("Show {}: Ana Ruiz with Sam", i);
                infer_names(&description, &dict)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["Ana Ruiz", "Sam"]);
    }
}
