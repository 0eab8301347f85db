use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::sum_interactor::SumInteractorImpl;
use crate::presenter::sum_presenter::{SumPresenter, SumPresenterImpl};
use crate::view::sum_view::TelegramSumView;

fn sum_presenter(
    bot: &Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> SumPresenterImpl<SumInteractorImpl, TelegramSumView> {
    let interactor = Arc::new(SumInteractorImpl::new(services.sum_limits()));
    let view = Arc::new(TelegramSumView::new(bot.clone(), chat_id));

    SumPresenterImpl::new(interactor, view)
}

pub struct SumCommand;

impl CommandHandler for SumCommand {
    fn command_name() -> &'static str {
        "sum"
    }

    fn description() -> &'static str {
        "sum 1..=n three ways"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        args: &str,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Sum requested in chat {} with '{}'", chat_id, args);

        if args.trim().is_empty() {
            if let Some(dialogue) = dialogue {
                dialogue.update(State::AwaitingSumInput).await?;
            }
        }

        sum_presenter(&bot, chat_id, &services).run(args).await
    }
}

pub async fn receive_sum_input(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let input = msg.text().unwrap_or("");

    if !input.trim().is_empty() {
        dialogue.update(State::Start).await?;
    }

    sum_presenter(&bot, chat_id, &services).run(input).await
}
