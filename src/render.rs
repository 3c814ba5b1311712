//! Presentation formatting for now-playing snapshots
//!
//! Derives display-ready strings from a [`Snapshot`] and a reference time.
//! Derivation is pure: no I/O, no mutation, and repeated calls with the same
//! inputs produce identical output, so it is safe to call on every render
//! tick to animate a countdown between fetches.

use crate::models::Snapshot;

/// Format a span of seconds as zero-padded `MM:SS`
///
/// Negative spans (a track reported past its window, or a queue entry whose
/// scheduled time has already passed) clamp to `00:00`.
///
/// # Example
///
/// ```
/// use rdio::render::format_mm_ss;
///
/// assert_eq!(format_mm_ss(125), "02:05");
/// assert_eq!(format_mm_ss(0), "00:00");
/// ```
pub fn format_mm_ss(seconds: i64) -> String {
    let secs = seconds.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Display-ready strings derived from one [`Snapshot`]
///
/// Recomputed on every refresh tick, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Current track title
    pub now_playing: String,

    /// Listener count
    pub listeners: u64,

    /// Time into the current track, `MM:SS`
    pub elapsed: String,

    /// Total length of the current track, `MM:SS`
    pub total: String,

    /// Combined progress line, `"MM:SS / MM:SS"`
    pub progress: String,

    /// On-air DJ name
    pub dj_name: String,

    /// One line per upcoming track: `"{meta} - in MM:SS"`
    pub queue: Vec<String>,

    /// One line per recently played track: `"{meta} - MM:SS ago"`
    pub history: Vec<String>,
}

impl RenderModel {
    /// Derive a model using the server-reported `current` as reference time
    ///
    /// The server clock is used rather than the client wall clock so the
    /// displayed elapsed time cannot drift with device clock skew.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::at(snapshot, snapshot.current_time)
    }

    /// Derive a model against an arbitrary reference time
    ///
    /// Callers animating a countdown between fetches advance `now` from
    /// `snapshot.current_time` by the seconds elapsed since the fetch.
    pub fn at(snapshot: &Snapshot, now: i64) -> Self {
        let elapsed = format_mm_ss(now - snapshot.start_time);
        let total = format_mm_ss(snapshot.end_time - snapshot.start_time);
        let progress = format!("{} / {}", elapsed, total);

        let queue = snapshot
            .queue
            .iter()
            .map(|entry| format!("{} - in {}", entry.meta, format_mm_ss(entry.timestamp - now)))
            .collect();

        let history = snapshot
            .history
            .iter()
            .map(|entry| format!("{} - {} ago", entry.meta, format_mm_ss(now - entry.timestamp)))
            .collect();

        Self {
            now_playing: snapshot.now_playing.clone(),
            listeners: snapshot.listeners,
            elapsed,
            total,
            progress,
            dj_name: snapshot.dj.name.clone(),
            queue,
            history,
        }
    }
}
