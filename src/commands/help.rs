use super::{register_commands, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(chat_id, help_text()).await?;

        Ok(())
    }
}

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");

    for (name, description) in register_commands() {
        text.push_str(&format!("/{} - {}\n", name, description));
    }

    text.push_str(
        "\nExamples:\n\
        /from ETH\n\
        /to USDC\n\
        /amount 1.5\n\
        /sum 100",
    );

    text
}
