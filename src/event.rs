//! Event records handed over by the calendar importer
//!
//! Events arrive as JSON with a free-text description; this module attaches
//! the inferred players and matched teams to them.

use crate::inference::{infer_names, NameDictionary};
use crate::teams::TeamRoster;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub url: String,
    pub organizer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub all_day: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

impl Event {
    /// Replace `players` with the names inferred from the description
    pub fn infer_players(&mut self, dictionary: &NameDictionary) {
        self.players = infer_names(&self.description, dictionary);
        debug!("Event '{}' players: {:?}", self.summary, self.players);
    }

    /// Replace `teams` with the roster teams mentioned in the description
    pub fn match_teams(&mut self, roster: &TeamRoster) {
        self.teams = roster.find_in(&self.description).into_iter().map(str::to_string).collect();
        if self.teams.is_empty() {
            info!("Event {} matches no teams.", self.summary);
        }
    }
}

/// Fill in players (and teams when a roster is given) for every event
pub fn annotate_events(events: &mut [Event], dictionary: &NameDictionary, roster: Option<&TeamRoster>) {
    for event in events.iter_mut() {
        event.infer_players(dictionary);
        if let Some(roster) = roster {
            event.match_teams(roster);
        }
    }
}

/// Read a JSON array of events
pub fn read_events<R: Read>(reader: R) -> serde_json::Result<Vec<Event>> {
    serde_json::from_reader(reader)
}

/// Pretty-printed JSON for a list of events
pub fn events_to_json(events: &[Event]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}
