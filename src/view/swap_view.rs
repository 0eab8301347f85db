use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::MessageId, Bot};
use tokio::sync::Mutex;

use crate::commands::ui;
use crate::entity::{AppError, Side, SwapOrder, Token};
use crate::swap::{format_rate, usd_total, FormPhase, SwapSession};
use crate::utils::{format_amount, format_price};

#[async_trait]
pub trait SwapView: Send + Sync {
    async fn display_form(&self, session: &SwapSession) -> Result<()>;
    async fn display_token_choices(&self, side: Side, tokens: &[Token]) -> Result<()>;
    async fn display_amount_prompt(&self) -> Result<()>;
    async fn display_rate(&self, session: &SwapSession) -> Result<()>;
    async fn display_processing(&self, order: &SwapOrder) -> Result<()>;
    async fn display_swap_success(
        &self,
        from_amount: f64,
        to_amount: f64,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<()>;
    async fn display_swap_failure(&self, reason: &str) -> Result<()>;
    async fn display_validation_error(&self, error: &AppError) -> Result<()>;
}

/// One-line exchange rate, e.g. "1 ETH = 0.50000000 USDC".
pub fn rate_text(session: &SwapSession) -> String {
    let from = session.selected(Side::From);
    let to = session.selected(Side::To);

    format!(
        "1 {} = {} {}",
        from.map_or("?", |t| t.symbol.as_str()),
        format_rate(from, to),
        to.map_or("?", |t| t.symbol.as_str())
    )
}

/// Full state of the swap form as a message.
pub fn form_text(session: &SwapSession) -> String {
    let request = session.request();
    let from = session.selected(Side::From);
    let to = session.selected(Side::To);

    let mut text = String::from("Currency Swap\n\n");

    text.push_str(&format!(
        "From: {} {}\n",
        request.from_amount.map_or("-".to_string(), format_amount),
        from.map_or("(select currency)", |t| t.symbol.as_str())
    ));
    if let Some(token) = from {
        text.push_str(&format!(
            "  {} per unit, total ${}\n",
            format_price(token.price),
            usd_total(token, request.from_amount)
        ));
    }

    text.push_str(&format!(
        "To: {} {}\n",
        format_amount(request.to_amount),
        to.map_or("(select currency)", |t| t.symbol.as_str())
    ));
    if let Some(token) = to {
        text.push_str(&format!("  {} per unit\n", format_price(token.price)));
    }

    text.push_str(&format!("\nExchange rate: {}\n", rate_text(session)));
    text.push_str("Network fee: Free");

    match session.phase() {
        FormPhase::Loading => text.push_str("\n\nLoading currency data..."),
        FormPhase::Submitting => text.push_str("\n\nSwapping..."),
        FormPhase::Idle if session.catalog().is_empty() => {
            text.push_str("\n\nNo prices loaded. Use /refresh to load them.")
        }
        _ => {}
    }

    text
}

pub struct TelegramSwapView {
    bot: Bot,
    chat_id: ChatId,
    processing_message_id: Mutex<Option<MessageId>>,
}

impl TelegramSwapView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            processing_message_id: Mutex::new(None),
        }
    }

    async fn finish_processing(&self, text: String) -> Result<()> {
        if let Some(message_id) = self.processing_message_id.lock().await.take() {
            self.bot
                .edit_message_text(self.chat_id, message_id, text)
                .reply_markup(ui::create_form_keyboard())
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .reply_markup(ui::create_form_keyboard())
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SwapView for TelegramSwapView {
    async fn display_form(&self, session: &SwapSession) -> Result<()> {
        self.bot
            .send_message(self.chat_id, form_text(session))
            .reply_markup(ui::create_form_keyboard())
            .await?;

        Ok(())
    }

    async fn display_token_choices(&self, side: Side, tokens: &[Token]) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("Select the currency to swap {}:", side.label()),
            )
            .reply_markup(ui::create_token_keyboard(side, tokens))
            .await?;

        Ok(())
    }

    async fn display_amount_prompt(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Enter the amount you want to swap:")
            .await?;

        Ok(())
    }

    async fn display_rate(&self, session: &SwapSession) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Exchange rate: {}", rate_text(session)))
            .await?;

        Ok(())
    }

    async fn display_processing(&self, order: &SwapOrder) -> Result<()> {
        let message = self
            .bot
            .send_message(
                self.chat_id,
                format!(
                    "Swapping {} {} for {} {}...",
                    format_amount(order.from_amount),
                    order.from.symbol,
                    format_amount(order.to_amount),
                    order.to.symbol
                ),
            )
            .await?;

        *self.processing_message_id.lock().await = Some(message.id);
        Ok(())
    }

    async fn display_swap_success(
        &self,
        from_amount: f64,
        to_amount: f64,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<()> {
        let text = format!(
            "✅ Swap Successful!\nSuccessfully swapped {} {} for {} {}!\n\nSelect currencies to start a new swap.",
            format_amount(from_amount),
            from_symbol,
            format_amount(to_amount),
            to_symbol
        );

        self.finish_processing(text).await
    }

    async fn display_swap_failure(&self, reason: &str) -> Result<()> {
        self.finish_processing(format!("❌ Swap Failed\n{}", reason))
            .await
    }

    async fn display_validation_error(&self, error: &AppError) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("❌ {}", error))
            .await?;

        Ok(())
    }
}
