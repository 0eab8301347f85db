use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::{ui, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::presenter::catalog_presenter::CatalogPresenter;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot and show the main menu"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Start command received in chat {}", chat_id);

        bot.send_message(
            chat_id,
            "<b>Welcome to the Currency Swap bot!</b>\n\n\
            Pick two tokens, enter an amount and see what you would receive at the latest prices.",
        )
        .parse_mode(ParseMode::Html)
        .reply_markup(ui::create_main_menu_keyboard())
        .await?;

        // Load prices straight away so the form is ready when opened
        let presenter = super::prices::catalog_presenter(&bot, chat_id, &services);
        presenter.show_prices(chat_id.0).await
    }
}

/// Sends the main menu without reloading anything
pub async fn show_main_menu(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(chat_id, "What would you like to do?")
        .reply_markup(ui::create_main_menu_keyboard())
        .await?;

    Ok(())
}
