use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::MessageId, Bot};
use tokio::sync::Mutex;

use crate::commands::ui;
use crate::entity::AppError;
use crate::feed::badge;
use crate::swap::SwapSession;
use crate::utils::format_price;

#[async_trait]
pub trait CatalogView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_catalog(&self, session: &SwapSession) -> Result<()>;
    async fn display_fetch_error(&self, error_message: &str, has_catalog: bool) -> Result<()>;
    async fn display_error(&self, error: &AppError) -> Result<()>;
}

/// Token listing with one line per token.
pub fn catalog_text(session: &SwapSession) -> String {
    let catalog = session.catalog();
    if catalog.is_empty() {
        return "No prices loaded. Use /refresh to load them.".to_string();
    }

    let mut text = format!("Available tokens ({}):\n", catalog.len());
    for token in catalog.tokens() {
        text.push_str(&format!(
            "[{}] {} - {}\n",
            badge(&token.symbol),
            token.symbol,
            format_price(token.price)
        ));
    }

    if let Some(error) = session.last_error() {
        text.push_str(&format!("\nLast refresh failed: {}", error));
    }

    text
}

pub struct TelegramCatalogView {
    bot: Bot,
    chat_id: ChatId,
    loading_message_id: Mutex<Option<MessageId>>,
}

impl TelegramCatalogView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            loading_message_id: Mutex::new(None),
        }
    }

    async fn replace_loading(
        &self,
        text: String,
        keyboard: teloxide::types::InlineKeyboardMarkup,
    ) -> Result<()> {
        if let Some(message_id) = self.loading_message_id.lock().await.take() {
            self.bot
                .edit_message_text(self.chat_id, message_id, text)
                .reply_markup(keyboard)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .reply_markup(keyboard)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CatalogView for TelegramCatalogView {
    async fn display_loading(&self) -> Result<()> {
        let message = self
            .bot
            .send_message(self.chat_id, "Loading currency data...")
            .await?;

        *self.loading_message_id.lock().await = Some(message.id);
        Ok(())
    }

    async fn display_catalog(&self, session: &SwapSession) -> Result<()> {
        self.replace_loading(catalog_text(session), ui::create_form_keyboard())
            .await
    }

    async fn display_fetch_error(&self, error_message: &str, has_catalog: bool) -> Result<()> {
        let text = if has_catalog {
            format!(
                "❌ Failed to refresh currency data: {}\nShowing the last loaded prices.",
                error_message
            )
        } else {
            format!("❌ Failed to load currency data: {}", error_message)
        };

        self.replace_loading(text, ui::create_retry_keyboard()).await
    }

    async fn display_error(&self, error: &AppError) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("❌ {}", error))
            .await?;

        Ok(())
    }
}
