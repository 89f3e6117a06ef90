//! Webhook notifications for completed extractions.
//!
//! Delivery targets are configured through environment variables; a missing
//! variable disables that target. Delivery failures are logged and never
//! fail the command.

use serde_json::json;
use tracing::{debug, info, warn};

const DISCORD_WEBHOOK_ENV: &str = "WATTSCAN_DISCORD_WEBHOOK_URL";
const SLACK_WEBHOOK_ENV: &str = "WATTSCAN_SLACK_WEBHOOK_URL";

/// Send the message to every configured webhook target.
pub async fn send_all(message: &str) {
    send_discord(message).await;
    send_slack(message).await;
}

async fn send_discord(message: &str) {
    let Ok(url) = std::env::var(DISCORD_WEBHOOK_ENV) else {
        debug!("Discord webhook URL not configured");
        return;
    };

    let payload = json!({
        "content": message,
        "username": "wattscan",
    });
    post(&url, &payload, "Discord").await;
}

async fn send_slack(message: &str) {
    let Ok(url) = std::env::var(SLACK_WEBHOOK_ENV) else {
        debug!("Slack webhook URL not configured");
        return;
    };

    let payload = json!({ "text": message });
    post(&url, &payload, "Slack").await;
}

async fn post(url: &str, payload: &serde_json::Value, target: &str) {
    let client = reqwest::Client::new();
    match client.post(url).json(payload).send().await {
        Ok(response) if response.status().is_success() => {
            info!("{target} notification sent");
        }
        Ok(response) => {
            warn!("{target} notification rejected: HTTP {}", response.status());
        }
        Err(e) => {
            warn!("failed to send {target} notification: {e}");
        }
    }
}
