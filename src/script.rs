//! Timed touch scripts, for replaying a session without a screen.
//!
//! A script is a JSON array such as
//! ```json
//! [
//!   { "type": "touch", "atMs": 0, "x": 10, "y": 0 },
//!   { "type": "speed", "atMs": 50, "value": 0.2 },
//!   { "type": "touch", "atMs": 60, "x": 10, "y": 10 },
//!   { "type": "clear", "atMs": 2000 }
//! ]
//! ```
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::systems::Systems;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptEvent {
    #[serde(rename_all = "camelCase")]
    Touch { at_ms: u64, x: f32, y: f32 },
    #[serde(rename_all = "camelCase")]
    Speed { at_ms: u64, value: f32 },
    #[serde(rename_all = "camelCase")]
    Clear { at_ms: u64 },
}

impl ScriptEvent {
    pub fn at_ms(&self) -> u64 {
        match self {
            ScriptEvent::Touch { at_ms, .. }
            | ScriptEvent::Speed { at_ms, .. }
            | ScriptEvent::Clear { at_ms } => *at_ms,
        }
    }

    /// Deliver this event into the systems, as the UI layer would
    pub fn dispatch(&self, systems: &mut Systems) {
        match *self {
            ScriptEvent::Touch { x, y, .. } => systems.handle_touch_ended((x, y)),
            ScriptEvent::Speed { value, .. } => systems.handle_speed_changed(value),
            ScriptEvent::Clear { .. } => systems.handle_clear_requested(),
        }
    }
}

/// Parse a script; events come back sorted by time (stable, so events
/// sharing a timestamp keep their written order).
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>> {
    let mut events: Vec<ScriptEvent> =
        serde_json::from_str(text).context("failed to parse touch script")?;
    events.sort_by_key(ScriptEvent::at_ms);
    Ok(events)
}

pub fn load_script_from_file(script_file_path: &str) -> Result<Vec<ScriptEvent>> {
    let text = std::fs::read_to_string(script_file_path)
        .with_context(|| format!("failed to read touch script \"{}\"", script_file_path))?;
    let events = parse_script(&text)?;
    info!(
        "Loaded {} script events from \"{}\"",
        events.len(),
        script_file_path
    );
    Ok(events)
}
