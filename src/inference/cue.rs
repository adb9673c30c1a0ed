//! Cue-line scanning
//!
//! Finds lines that start with a role label ("Cast:", "Hosted by -") and
//! splits the rest of the line into candidate names.

use super::lexicon::{clean_name, contains_stop_context};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static CUE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(players?|cast|featuring|with|lineup|performers?|host(?:ed)?\s*by|guests?|special\s+guests?|musical\s+guest)\s*[:\-]\s*(.+)$",
    )
    .expect("cue line pattern is valid")
});

static SEGMENT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:,|&| and |;|\+)\s*").expect("separator pattern is valid"));

/// Outcome of scanning a description for cue lines
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CueScan {
    /// Cleaned names taken from player cue lines
    pub names: Vec<String>,
    /// The description with every cue line removed, for the fallback stages
    pub remainder: String,
}

/// Roles that appear after a cue label but are not players
fn is_excluded_role(role: &str) -> bool {
    let role = role.to_lowercase();
    role.contains("host") || role.contains("musical")
}

/// Scans a LF-normalized description for cue lines.
///
/// Host and musical guest lines are consumed so those names never resurface
/// through the fallback stages. A player line with stop context yields no
/// names here, but the text after its label stays in the remainder for
/// chunking.
pub fn scan_cue_lines(text: &str) -> CueScan {
    let mut scan = CueScan::default();
    let mut remainder = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = CUE_LINE.captures(line) else {
            remainder.push(line);
            continue;
        };

        let role = caps[1].trim();
        if is_excluded_role(role) {
            debug!("Skipping non-player cue line: {}", line);
            continue;
        }
        if contains_stop_context(line) {
            debug!("Cue line has stop context, leaving it to chunking: {}", line);
            remainder.push(caps.get(2).map_or(line, |m| m.as_str()));
            continue;
        }

        let before = scan.names.len();
        scan.names.extend(SEGMENT_SEPARATOR.split(&caps[2]).filter_map(clean_name));
        debug!("Cue line '{}' yielded {} name(s)", role, scan.names.len() - before);
    }

    scan.remainder = remainder.join("\n");
    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cast_line_is_split() {
        let scan = scan_cue_lines("Cast: Jane Doe, John Smith & Ana Ruiz and Bo Li; Cy Young + Di Fox");
        assert_eq!(
            scan.names,
            vec!["Jane Doe", "John Smith", "Ana Ruiz", "Bo Li", "Cy Young", "Di Fox"]
        );
        assert!(scan.remainder.is_empty());
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let scan = scan_cue_lines("SPECIAL GUESTS - Mo Diaz\nlineup:Kai Ng");
        assert_eq!(scan.names, vec!["Mo Diaz", "Kai Ng"]);
    }

    #[test]
    fn test_hosts_and_musical_guests_are_consumed() {
        let scan = scan_cue_lines("Hosted by: Alex Lee\nHost by: Pat Kim\nMusical Guest: The Band\nTonight only");
        assert!(scan.names.is_empty());
        assert_eq!(scan.remainder, "Tonight only");
    }

    #[test]
    fn test_stop_context_line_is_left_for_chunking() {
        let scan = scan_cue_lines("With: Jane Doe, Doors open at 7");
        assert!(scan.names.is_empty());
        assert_eq!(scan.remainder, "Jane Doe, Doors open at 7");
    }

    #[test]
    fn test_label_needs_separator() {
        let scan = scan_cue_lines("Featuring Sam Okafor");
        assert!(scan.names.is_empty());
        assert_eq!(scan.remainder, "Featuring Sam Okafor");
    }

    #[test]
    fn test_unclean_segments_are_dropped() {
        let scan = scan_cue_lines("Players: Jane Doe, a cast of thousands, Rob (TBC)");
        assert_eq!(scan.names, vec!["Jane Doe", "Rob"]);
    }
}
