use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{Side, State};
use crate::interactor::swap_interactor::SwapInteractorImpl;
use crate::presenter::swap_presenter::{SwapPresenter, SwapPresenterImpl};
use crate::view::swap_view::TelegramSwapView;

pub(crate) fn swap_presenter(
    bot: &Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> SwapPresenterImpl<SwapInteractorImpl, TelegramSwapView> {
    let interactor = Arc::new(SwapInteractorImpl::new(
        services.swap_executor(),
        services.sessions(),
    ));
    let view = Arc::new(TelegramSwapView::new(bot.clone(), chat_id));

    SwapPresenterImpl::new(interactor, view)
}

pub struct FormCommand;

impl CommandHandler for FormCommand {
    fn command_name() -> &'static str {
        "form"
    }

    fn description() -> &'static str {
        "show the swap form"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        swap_presenter(&bot, chat_id, &services)
            .show_form(chat_id.0)
            .await
    }
}

pub struct FromCommand;

impl CommandHandler for FromCommand {
    fn command_name() -> &'static str {
        "from"
    }

    fn description() -> &'static str {
        "select the token to swap from"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("From token '{}' requested in chat {}", args, chat_id);

        swap_presenter(&bot, chat_id, &services)
            .select_token(chat_id.0, Side::From, args)
            .await
    }
}

pub struct ToCommand;

impl CommandHandler for ToCommand {
    fn command_name() -> &'static str {
        "to"
    }

    fn description() -> &'static str {
        "select the token to swap to"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("To token '{}' requested in chat {}", args, chat_id);

        swap_presenter(&bot, chat_id, &services)
            .select_token(chat_id.0, Side::To, args)
            .await
    }
}

pub struct AmountCommand;

impl CommandHandler for AmountCommand {
    fn command_name() -> &'static str {
        "amount"
    }

    fn description() -> &'static str {
        "set the amount to swap"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        args: &str,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let presenter = swap_presenter(&bot, chat_id, &services);

        if !args.trim().is_empty() {
            return presenter.set_amount(chat_id.0, args).await;
        }

        // No amount given, wait for it in the next message
        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingAmount).await?;
        }

        presenter.prompt_amount().await
    }
}

pub struct FlipCommand;

impl CommandHandler for FlipCommand {
    fn command_name() -> &'static str {
        "flip"
    }

    fn description() -> &'static str {
        "exchange the from and to tokens"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        swap_presenter(&bot, chat_id, &services)
            .swap_sides(chat_id.0)
            .await
    }
}

pub struct RateCommand;

impl CommandHandler for RateCommand {
    fn command_name() -> &'static str {
        "rate"
    }

    fn description() -> &'static str {
        "show the exchange rate"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        swap_presenter(&bot, chat_id, &services)
            .show_rate(chat_id.0)
            .await
    }
}

pub struct SwapCommand;

impl CommandHandler for SwapCommand {
    fn command_name() -> &'static str {
        "swap"
    }

    fn description() -> &'static str {
        "submit the swap"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Swap submitted in chat {}", chat_id);

        let presenter = swap_presenter(&bot, chat_id, &services);

        // The simulated swap takes a while; a second submit meanwhile is rejected
        tokio::spawn(async move {
            if let Err(e) = presenter.submit(chat_id.0).await {
                error!("Failed to submit swap for chat {}: {}", chat_id, e);
            }
        });

        Ok(())
    }
}

pub async fn receive_amount(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let presenter = swap_presenter(&bot, chat_id, &services);

    match msg.text() {
        Some(text) => {
            dialogue.update(State::Start).await?;
            presenter.set_amount(chat_id.0, text).await
        }
        None => presenter.prompt_amount().await,
    }
}
