//! Line-delimited JSON detection events.
//!
//! One event per line: `{"camera": "a", "markers": {"green": [u, v], ...}}`.
//! Markers that were not detected are `null` or simply left out.

use std::io::BufRead;

use arm_vision_core::{CameraId, DetectionSet};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    pub camera: CameraId,
    #[serde(default)]
    pub markers: DetectionSet,
}

/// Parse one event line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_event_line(line: &str) -> Result<Option<DetectionEvent>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Iterate events from a reader, logging and skipping malformed lines.
pub fn read_events<R: BufRead>(reader: R) -> impl Iterator<Item = DetectionEvent> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::warn!("line {}: unreadable input, skipped: {err}", idx + 1);
                    return None;
                }
            };
            match parse_event_line(&line) {
                Ok(event) => event,
                Err(err) => {
                    log::warn!("line {}: malformed event, skipped: {err}", idx + 1);
                    None
                }
            }
        })
}
