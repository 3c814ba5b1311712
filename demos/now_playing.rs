//! Example: Display the current R/a/dio track, DJ, queue and history
//!
//! This example demonstrates:
//! - Creating a client
//! - Fetching one snapshot
//! - Deriving display strings with RenderModel
//! - Building the DJ image URL
//!
//! Run with: cargo run --example now_playing

use rdio::{RadioClient, RenderModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("R/a/dio - Now Playing");
    println!("=====================\n");

    let client = RadioClient::new().await?;
    let snapshot = client.now_playing().await?;
    let model = RenderModel::from_snapshot(&snapshot);

    println!("Now Playing: {}", model.now_playing);
    println!("  Progress:  {}", model.progress);
    println!("  Listeners: {}", model.listeners);
    println!();

    println!("DJ: {}", model.dj_name);
    println!("  Image: {}", client.dj_image_url(&snapshot.dj));
    println!();

    if !model.queue.is_empty() {
        println!("Up Next:");
        for line in &model.queue {
            println!("  {}", line);
        }
        println!();
    }

    if !model.history.is_empty() {
        println!("Last Played:");
        for line in &model.history {
            println!("  {}", line);
        }
    }

    Ok(())
}
