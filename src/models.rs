//! Data models for the R/a/dio now-playing API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Envelope around the `main` payload returned by the API
#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: Snapshot,
}

/// One successful decode of the now-playing endpoint
///
/// A snapshot is immutable and replaced wholesale by the next successful
/// refresh. A failed fetch or parse leaves the previous snapshot untouched;
/// there is no incremental merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Title of the currently playing track
    #[serde(rename = "np")]
    pub now_playing: String,

    /// Current listener count
    pub listeners: u64,

    /// Server-reported "now" in Unix seconds
    ///
    /// Display derivations use this rather than the client wall clock to
    /// avoid skew between the server and the rendering device.
    #[serde(rename = "current")]
    pub current_time: i64,

    /// Start of the current track's playback window, Unix seconds
    pub start_time: i64,

    /// End of the current track's playback window, Unix seconds
    pub end_time: i64,

    /// Current on-air DJ
    pub dj: Dj,

    /// Upcoming tracks in play order
    pub queue: Vec<TrackEntry>,

    /// Recently played tracks, most recent first
    #[serde(rename = "lp")]
    pub history: Vec<TrackEntry>,

    /// Additional fields (`tags`, stream metadata, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Snapshot {
    /// Seconds into the current track, measured against the server clock
    ///
    /// Clamped to zero if the server reports a time before `start_time`.
    pub fn elapsed(&self) -> i64 {
        (self.current_time - self.start_time).max(0)
    }

    /// Total length of the current track's playback window in seconds
    pub fn total_duration(&self) -> i64 {
        (self.end_time - self.start_time).max(0)
    }
}

/// Current on-air presenter metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dj {
    /// Display name
    #[serde(rename = "djname")]
    pub name: String,

    /// Image path, relative to the DJ image base URL
    #[serde(rename = "djimage")]
    pub image: String,

    /// Additional metadata
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A queued or recently played track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackEntry {
    /// Display label ("Artist - Title")
    pub meta: String,

    /// Unix seconds: scheduled play time for queue entries, time it was
    /// played for history entries
    pub timestamp: i64,

    /// Additional metadata
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TrackEntry {
    /// Seconds until this entry plays, clamped to zero once overdue
    pub fn seconds_until(&self, now: i64) -> i64 {
        (self.timestamp - now).max(0)
    }

    /// Seconds since this entry played, clamped to zero for future entries
    pub fn seconds_since(&self, now: i64) -> i64 {
        (now - self.timestamp).max(0)
    }
}

/// Decode one API response body into a [`Snapshot`]
///
/// Parsing is all-or-nothing: a missing `main` object, a missing required
/// field or a mistyped value fails the whole snapshot rather than producing
/// a partially populated one. An empty body (for instance from an aborted
/// transfer) is a parse failure, not an empty snapshot.
pub fn parse_snapshot(raw: &str) -> Result<Snapshot> {
    if raw.trim().is_empty() {
        return Err(Error::EmptyBody);
    }

    let response: ApiResponse = serde_json::from_str(raw)?;
    Ok(response.main)
}
