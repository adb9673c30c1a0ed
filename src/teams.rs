//! Team roster matching
//
// A roster is a plain list of team names, one per line. Teams are matched by
// exact substring against an event description.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Names this short or shorter are too generic to match reliably
pub const DEFAULT_MIN_NAME_LEN: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum TeamsError {
    #[error("Failed to read team roster '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    teams: Vec<String>,
    min_name_len: usize,
}

impl TeamRoster {
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let teams = teams
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { teams, min_name_len: DEFAULT_MIN_NAME_LEN }
    }

    pub fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = min_name_len;
        self
    }

    /// Load a newline-separated roster file
    pub fn load(path: &Path) -> Result<Self, TeamsError> {
        let content = fs::read_to_string(path)
            .map_err(|source| TeamsError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::new(content.lines()))
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Teams whose name appears verbatim in the text, in roster order
    pub fn find_in(&self, text: &str) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|team| team.chars().count() > self.min_name_len)
            .filter(|team| text.contains(team.as_str()))
            .inspect(|team| debug!("Matched team: {}", team))
            .map(String::as_str)
            .collect()
    }
}
