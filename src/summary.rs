//! Plain-text event summaries

use crate::event::Event;
use std::io::{self, Write};

const PREVIEW_CHARS: usize = 50;

/// Shortened description for display
pub fn description_preview(description: &str) -> String {
    if description.trim().is_empty() {
        return "(none)".to_string();
    }
    if description.chars().count() > PREVIEW_CHARS {
        let head: String = description.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

pub fn write_summary<W: Write>(out: &mut W, events: &[Event]) -> io::Result<()> {
    if events.is_empty() {
        writeln!(out, "No events found.")?;
        return Ok(());
    }
    for event in events {
        writeln!(out, "UID:         {}", event.uid)?;
        writeln!(out, "Summary:     {}", event.summary)?;
        writeln!(out, "URL:         {}", event.url)?;
        if let Some(start) = &event.start {
            writeln!(out, "Start:       {}", start.to_rfc3339())?;
        }
        writeln!(out, "Description:\n{}", description_preview(&event.description))?;
        writeln!(out, "Players:     {}", join_or_dash(&event.players))?;
        writeln!(out, "Teams:       {}", join_or_dash(&event.teams))?;
        writeln!(out, "{}", "-".repeat(60))?;
    }
    Ok(())
}
