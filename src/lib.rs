//! # rdio - R/a/dio Now-Playing Client for Rust
//!
//! `rdio` is an idiomatic Rust client for the R/a/dio now-playing API. It
//! covers the full refresh pipeline: fetch the endpoint, decode the JSON
//! payload into a typed [`Snapshot`], and derive display-ready strings for
//! a UI layer.
//!
//! ## Features
//!
//! - **Metadata Access**: Current track, DJ, listener count, upcoming queue
//!   and last-played history in one snapshot
//! - **Presentation Formatting**: Zero-padded `MM:SS` elapsed/total strings
//!   and relative `"in MM:SS"` / `"MM:SS ago"` lines, pure and deterministic
//! - **Background Polling**: [`NowPlayingMonitor`] refreshes on an interval,
//!   keeps the last good snapshot across failed cycles and shuts down
//!   explicitly
//! - **Async/Await**: Built on tokio and reqwest
//! - **Type-Safe**: Strongly typed models with all-or-nothing parsing
//!
//! ## Quick Start
//!
//! ```no_run
//! use rdio::{RadioClient, RenderModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadioClient::new().await?;
//!
//!     let snapshot = client.now_playing().await?;
//!     let model = RenderModel::from_snapshot(&snapshot);
//!
//!     println!("{} [{}]", model.now_playing, model.progress);
//!     println!("DJ: {}", model.dj_name);
//!     for line in &model.queue {
//!         println!("up next: {}", line);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Polling
//!
//! A refresh cycle is strictly fetch-whole-replace-whole: a successful
//! fetch replaces the snapshot wholesale, a failed fetch or parse leaves
//! the previous one in place. The monitor publishes snapshots through a
//! `tokio::sync::watch` channel, so any number of consumers can observe
//! the latest value without extra locking.
//!
//! ```no_run
//! use rdio::{NowPlayingMonitor, RadioClient, RenderModel};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RadioClient::new().await?;
//!     let monitor = NowPlayingMonitor::spawn(client, Duration::from_secs(10));
//!
//!     let mut updates = monitor.subscribe();
//!     while updates.changed().await.is_ok() {
//!         if let Some(snapshot) = updates.borrow_and_update().clone() {
//!             let model = RenderModel::from_snapshot(&snapshot);
//!             println!("{} [{}]", model.now_playing, model.progress);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, Error>`. Transport failures (connection,
//! timeout, non-2xx status) and parse failures (malformed JSON, missing or
//! mistyped field, empty body) are distinct variants; both are terminal for
//! that refresh cycle only.
//!
//! ```no_run
//! use rdio::{Error, RadioClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = RadioClient::new().await.unwrap();
//!
//!     match client.now_playing().await {
//!         Ok(snapshot) => println!("Now playing: {}", snapshot.now_playing),
//!         Err(Error::Http(e)) => eprintln!("Network error: {}", e),
//!         Err(Error::Json(e)) => eprintln!("Parse error: {}", e),
//!         Err(e) => eprintln!("Other error: {}", e),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`client`]: HTTP client for the now-playing endpoint
//! - [`models`]: Snapshot, DJ and track-entry data structures
//! - [`render`]: Presentation formatting ([`RenderModel`])
//! - [`monitor`]: Background polling with keep-last-good semantics
//! - [`error`]: Error types and result alias

pub mod client;
pub mod error;
pub mod models;
pub mod monitor;
pub mod render;

// Re-exports for convenience
pub use client::{ClientBuilder, RadioClient};
pub use error::{Error, Result};
pub use models::{parse_snapshot, Dj, Snapshot, TrackEntry};
pub use monitor::NowPlayingMonitor;
pub use render::{format_mm_ss, RenderModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
