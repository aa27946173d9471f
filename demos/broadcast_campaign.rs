//! Broadcast Campaign Example
//!
//! Labels a user, estimates the reach of the label and broadcasts a message
//! creative to it.
//!
//! Run with:
//! ```bash
//! MESSENGER_PAGE_TOKEN=... cargo run --example broadcast_campaign -- <psid> <message_creative_id>
//! ```

use messenger_graph::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let psid = args.next().ok_or("usage: broadcast_campaign <psid> <message_creative_id>")?;
    let creative_id = args.next().ok_or("missing message_creative_id")?;

    let client = MessengerClient::from_env()?;
    let labels = client.custom_labels();
    let broadcast = client.broadcast();

    println!("🏷️  Creating label");
    let label = labels.create_custom_label("spring_campaign").await?;
    let label_id = label["id"]
        .as_str()
        .map(GraphId::from)
        .ok_or("label id missing from response")?;
    println!("   id: {label_id}");

    labels.add_psid_to_custom_label(psid.as_str(), &label_id).await?;
    println!("   added {psid}");

    println!("📏 Estimating reach");
    let estimation = broadcast
        .start_broadcast_reach_estimation(Some(label_id.clone()))
        .await?;
    if let Some(id) = estimation["reach_estimation_id"].as_str() {
        let status = broadcast.get_broadcast_reach_estimation(id).await?;
        println!("   {status}");
    }

    println!("📣 Sending broadcast");
    match broadcast
        .send_broadcast(creative_id.as_str(), Some(label_id))
        .await
    {
        Ok(res) => println!("   {res}"),
        Err(e) if e.is_validation() => println!("   ⚠️  rejected locally: {e}"),
        Err(e) => println!("   ❌ Graph error: {e}"),
    }

    Ok(())
}
