use crate::errors::ServerError;
use crate::slack::Message;
use std::env;
use std::time::Duration;

/// Posts a message to the configured incoming webhook. The payload goes
/// as a form with a single `payload` field holding the JSON string,
/// which is the format the webhook endpoint expects.
///
/// Callers treat failure as log-and-continue; nothing retries.
pub fn post_webhook(message: &Message) -> Result<(), ServerError> {
    let url = env::var("SLACK_WEBHOOK_URL").map_err(|_| {
        ServerError::Config("SLACK_WEBHOOK_URL environment variable not set".into())
    })?;

    let payload =
        serde_json::to_string(message).map_err(|e| ServerError::WebhookError(e.to_string()))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| ServerError::WebhookError(e.to_string()))?;

    let resp = client
        .post(&url)
        .form(&[("payload", payload.as_str())])
        .send()
        .map_err(|e| ServerError::WebhookError(format!("Failed to post to Slack: {e}")))?;

    let status = resp.status();
    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());

    if status.is_success() {
        println!("{} --- {}", status.as_u16(), body);
        Ok(())
    } else {
        Err(ServerError::WebhookError(format!(
            "Slack webhook error: {} - {}",
            status, body
        )))
    }
}
