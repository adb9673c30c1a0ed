//! Name dictionary used to disambiguate title-case chunks
//
// The dictionary is built once per run and shared read-only by every
// inference call.

use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Errors raised while loading a name dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to open name dictionary '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed name dictionary: {0}")]
    Csv(#[from] csv::Error),
}

/// Known first, last and full names, all lower-cased
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameDictionary {
    first: HashSet<String>,
    last: HashSet<String>,
    full: HashSet<String>,
}

fn normalize_entry(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

fn collect_entries<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().filter_map(|v| normalize_entry(v.as_ref())).collect()
}

impl NameDictionary {
    /// An empty dictionary; chunks are then judged on structure alone
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_first_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.first.extend(collect_entries(names));
        self
    }

    pub fn with_last_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.last.extend(collect_entries(names));
        self
    }

    pub fn with_full_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.full.extend(collect_entries(names));
        self
    }

    /// Load from a CSV file, or return the empty dictionary when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, DictionaryError> {
        let Some(path) = path else {
            return Ok(Self::empty());
        };
        let file = File::open(path)
            .map_err(|source| DictionaryError::Open { path: path.to_path_buf(), source })?;
        let dict = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded name dictionary from {}: {} first, {} last, {} full",
            path.display(),
            dict.first.len(),
            dict.last.len(),
            dict.full.len()
        );
        Ok(dict)
    }

    /// Parse headerless CSV rows of `first,last,full`; any field may be blank
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut dict = Self::empty();
        for record in csv_reader.records() {
            let record = record?;
            let sets = [&mut dict.first, &mut dict.last, &mut dict.full];
            for (set, field) in sets.into_iter().zip(record.iter()) {
                if let Some(entry) = normalize_entry(field) {
                    set.insert(entry);
                }
            }
        }
        Ok(dict)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty() && self.full.is_empty()
    }

    pub fn has_first_names(&self) -> bool {
        !self.first.is_empty()
    }

    pub fn is_first_name(&self, word: &str) -> bool {
        self.first.contains(&word.to_lowercase())
    }

    pub fn is_last_name(&self, word: &str) -> bool {
        self.last.contains(&word.to_lowercase())
    }

    pub fn is_full_name(&self, name: &str) -> bool {
        self.full.contains(&name.to_lowercase())
    }

    /// Decides whether a title-case chunk names a person.
    ///
    /// Without dictionary data only multi-word chunks pass. Otherwise a full
    /// name match wins outright; two- and three-word chunks need a known first
    /// word or a known final word.
    pub fn accepts(&self, chunk: &str) -> bool {
        let words: Vec<&str> = chunk.split_whitespace().collect();
        if self.is_empty() {
            return words.len() >= 2;
        }
        if self.is_full_name(&words.join(" ")) {
            return true;
        }
        match words.as_slice() {
            [first] => self.is_first_name(first),
            [first, last] | [first, _, last] => self.is_first_name(first) || self.is_last_name(last),
            _ => false,
        }
    }
}
