//! Telegram Bot channel — message sending via Bot API.

use async_trait::async_trait;
use revizor_core::error::{Error, Result};
use revizor_core::traits::Notifier;
use serde::Deserialize;

/// Telegram Bot channel bound to a single chat.
pub struct TelegramChannel {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramChannel {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    /// Send a plain-text message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| Error::NotificationSend(format!("sendMessage failed: {e}")))?;

        let result: TelegramApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| Error::NotificationSend(format!("invalid send response: {e}")))?;

        if !result.ok {
            return Err(Error::NotificationSend(format!(
                "Telegram API error: {}",
                result.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Startup connectivity check — resolves and logs the bot identity.
    pub async fn connect(&self) -> Result<()> {
        let me = self.get_me().await?;
        tracing::info!(
            "Telegram bot: @{} ({})",
            me.username.as_deref().unwrap_or("unknown"),
            me.first_name
        );
        Ok(())
    }

    /// Get bot info.
    pub async fn get_me(&self) -> Result<TelegramUser> {
        let response = self
            .client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map_err(|e| Error::NotificationSend(format!("getMe failed: {e}")))?;
        let body: TelegramApiResponse<TelegramUser> = response
            .json()
            .await
            .map_err(|e| Error::NotificationSend(format!("invalid getMe response: {e}")))?;
        body.result
            .ok_or_else(|| Error::NotificationSend("no bot info".into()))
    }
}

#[async_trait]
impl Notifier for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, text: &str) -> Result<()> {
        tracing::info!("sending notification to chat {}", self.chat_id);
        self.send_message(text).await
    }
}

// --- Telegram API Types ---

#[derive(Debug, Deserialize)]
pub struct TelegramApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let channel = TelegramChannel::new("123:abc", "42");
        assert_eq!(
            channel.api_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_api_response_parses_error_shape() {
        let body: TelegramApiResponse<serde_json::Value> = serde_json::from_str(
            r#"{"ok": false, "description": "Unauthorized"}"#,
        )
        .unwrap();
        assert!(!body.ok);
        assert_eq!(body.description.as_deref(), Some("Unauthorized"));
    }
}
