//! Example: Poll the now-playing endpoint and animate a countdown
//!
//! This example demonstrates:
//! - Spawning a NowPlayingMonitor
//! - Observing snapshot updates through the watch channel
//! - Re-rendering between fetches with an advanced reference time
//!
//! Run with: cargo run --example watch

use chrono::Utc;
use rdio::{NowPlayingMonitor, RadioClient, RenderModel, Snapshot};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = RadioClient::new().await?;
    let monitor = NowPlayingMonitor::spawn(client, Duration::from_secs(10));

    let mut updates = monitor.subscribe();
    let mut current: Option<Snapshot> = None;
    let mut fetched_at = Utc::now().timestamp();

    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    // Render once a second for half a minute, re-fetching every ten seconds
    for _ in 0..30 {
        tokio::select! {
            changed = updates.changed() => {
                changed?;
                current = updates.borrow_and_update().clone();
                fetched_at = Utc::now().timestamp();
            }
            _ = ticker.tick() => {}
        }

        match &current {
            Some(snapshot) => {
                // Advance the server-reported clock by the local seconds
                // elapsed since the fetch
                let now = snapshot.current_time + (Utc::now().timestamp() - fetched_at);
                let model = RenderModel::at(snapshot, now);
                println!(
                    "{} [{}] - DJ {} - {} listeners",
                    model.now_playing, model.progress, model.dj_name, model.listeners
                );
            }
            None => println!("Loading..."),
        }
    }

    monitor.shutdown().await?;
    Ok(())
}
