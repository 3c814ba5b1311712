//! Background polling for now-playing snapshots
//!
//! The monitor owns a [`RadioClient`], polls the API on a fixed interval and
//! publishes each successful snapshot through a watch channel. A failed
//! refresh logs and leaves the previously published snapshot in place, so
//! consumers never observe partial or corrupted data.

use crate::client::RadioClient;
use crate::error::{Error, Result};
use crate::models::Snapshot;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Default interval between polls
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Commands sent to the polling task
#[derive(Debug)]
enum MonitorCommand {
    Refresh,
    Shutdown,
}

/// Handle to a spawned now-playing poller
///
/// Refreshes are serialized: the task awaits each request to completion
/// before handling the next tick or command, so at most one fetch is in
/// flight at any time and every request produces exactly one terminal
/// event. The first refresh happens immediately on spawn.
///
/// # Example
///
/// ```no_run
/// use rdio::{NowPlayingMonitor, RadioClient};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RadioClient::new().await?;
///     let monitor = NowPlayingMonitor::spawn(client, Duration::from_secs(10));
///
///     let mut updates = monitor.subscribe();
///     updates.changed().await?;
///     if let Some(snapshot) = updates.borrow().as_ref() {
///         println!("Now playing: {}", snapshot.now_playing);
///     }
///
///     monitor.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct NowPlayingMonitor {
    command_tx: mpsc::Sender<MonitorCommand>,
    snapshot_rx: watch::Receiver<Option<Snapshot>>,
    join_handle: JoinHandle<()>,
}

impl NowPlayingMonitor {
    /// Spawn a poller around `client` refreshing every `interval`
    pub fn spawn(client: RadioClient, interval: Duration) -> Self {
        let (command_tx, mut command_rx) = mpsc::channel(8);
        let (snapshot_tx, snapshot_rx) = watch::channel(None);

        let join_handle = tokio::spawn(async move {
            info!("Starting now-playing monitor");

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        refresh_once(&client, &snapshot_tx).await;
                    }
                    cmd = command_rx.recv() => match cmd {
                        Some(MonitorCommand::Refresh) => {
                            refresh_once(&client, &snapshot_tx).await;
                        }
                        Some(MonitorCommand::Shutdown) | None => break,
                    },
                }
            }

            info!("Now-playing monitor stopped");
        });

        Self {
            command_tx,
            snapshot_rx,
            join_handle,
        }
    }

    /// Spawn a poller with the default interval
    pub fn spawn_default(client: RadioClient) -> Self {
        Self::spawn(client, Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS))
    }

    /// Subscribe to published snapshots
    ///
    /// The receiver holds `None` until the first successful refresh, then
    /// always the last good snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.snapshot_rx.clone()
    }

    /// Last good snapshot, if any refresh has succeeded yet
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot_rx.borrow().clone()
    }

    /// Request an immediate refresh ahead of the next tick
    pub async fn refresh_now(&self) -> Result<()> {
        self.command_tx
            .send(MonitorCommand::Refresh)
            .await
            .map_err(|_| Error::other("monitor task has stopped"))
    }

    /// Stop the poller and wait for its task to finish
    ///
    /// An in-flight refresh completes before the command is handled; once
    /// this returns, the task has exited and nothing further is published.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.command_tx.send(MonitorCommand::Shutdown).await;

        self.join_handle
            .await
            .map_err(|e| Error::other(format!("monitor join error: {}", e)))
    }
}

async fn refresh_once(client: &RadioClient, snapshot_tx: &watch::Sender<Option<Snapshot>>) {
    match client.now_playing().await {
        Ok(snapshot) => {
            debug!(track = %snapshot.now_playing, "Refreshed snapshot");
            snapshot_tx.send_replace(Some(snapshot));
        }
        Err(err) => {
            // Last good snapshot stays published
            warn!("Refresh failed: {}", err);
        }
    }
}
