use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{help, prices, start, sum, swap, ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{Side, State};
use crate::presenter::swap_presenter::SwapPresenter;

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let callback_data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };

    let chat_id = match q.message.as_ref().map(|m| m.chat().id) {
        Some(chat_id) => chat_id,
        None => return Ok(()),
    };

    info!("Received callback: {} in chat {}", callback_data, chat_id);

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    // Buttons abandon any pending free-text prompt unless they start a new one
    dialogue.update(State::Start).await?;
    let dialogue = Some(dialogue);

    if let Some((side, token_id)) = ui::parse_pick_callback(&callback_data) {
        return swap::swap_presenter(&bot, chat_id, &services)
            .select_token(chat_id.0, side, token_id)
            .await;
    }

    match callback_data.as_str() {
        "menu" => start::show_main_menu(&bot, chat_id).await,
        "help" => help::HelpCommand::execute(bot, chat_id, "", dialogue, services).await,
        "form" => swap::FormCommand::execute(bot, chat_id, "", dialogue, services).await,
        "prices" => prices::PricesCommand::execute(bot, chat_id, "", dialogue, services).await,
        "refresh" => prices::RefreshCommand::execute(bot, chat_id, "", dialogue, services).await,
        "choose_from" => choose_token(&bot, chat_id, Side::From, &services).await,
        "choose_to" => choose_token(&bot, chat_id, Side::To, &services).await,
        "flip" => swap::FlipCommand::execute(bot, chat_id, "", dialogue, services).await,
        "amount" => swap::AmountCommand::execute(bot, chat_id, "", dialogue, services).await,
        "swap" => swap::SwapCommand::execute(bot, chat_id, "", dialogue, services).await,
        "sum" => sum::SumCommand::execute(bot, chat_id, "", dialogue, services).await,
        other => {
            warn!("Unknown callback data: {}", other);
            bot.send_message(chat_id, "Unknown action").await?;
            Ok(())
        }
    }
}

async fn choose_token(
    bot: &Bot,
    chat_id: ChatId,
    side: Side,
    services: &ServiceContainer,
) -> Result<()> {
    swap::swap_presenter(bot, chat_id, services)
        .choose_token(chat_id.0, side)
        .await
}
