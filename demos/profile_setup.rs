//! Messenger Profile Example
//!
//! Sets a greeting and a get-started button, reads them back, adds a
//! persona and cleans up.
//!
//! Run with:
//! ```bash
//! MESSENGER_PAGE_TOKEN=... cargo run --example profile_setup
//! ```

use messenger_graph::prelude::*;
use serde_json::json;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let client = MessengerBuilder::from_env()?
        .timeout(Duration::from_secs(15))
        .build()?;
    let profile = client.messenger_profile();

    println!("👋 Setting profile");
    profile
        .set_messenger_profile(json!({
            "greeting": [{"locale": "default", "text": "Hello {{user_first_name}}!"}],
            "get_started": {"payload": "GET_STARTED"}
        }))
        .await?;

    let current = profile
        .get_messenger_profile(Some(&["greeting", "get_started"][..]))
        .await?;
    println!("   {current}");

    println!("🧑 Creating persona");
    let personas = client.personas();
    let persona = personas
        .create_persona("Support Agent", "https://example.com/avatar.png")
        .await?;
    if let Some(id) = persona["id"].as_str() {
        println!("   {}", personas.get_persona(id).await?);
        personas.delete_persona(id).await?;
    }

    println!("🧹 Cleaning up");
    profile
        .delete_messenger_profile(&["greeting", "get_started"])
        .await?;

    Ok(())
}
