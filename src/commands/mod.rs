use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};

use crate::di::ServiceContainer;
use crate::entity::State;
use teloxide::dispatching::dialogue::Dialogue;

pub mod callback;
pub mod help;
pub mod prices;
pub mod start;
pub mod sum;
pub mod swap;
pub mod ui;

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command with the text that followed it
    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        args: &str,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            swap::FormCommand::command_name(),
            swap::FormCommand::description(),
        ),
        (
            prices::PricesCommand::command_name(),
            prices::PricesCommand::description(),
        ),
        (
            prices::RefreshCommand::command_name(),
            prices::RefreshCommand::description(),
        ),
        (
            swap::FromCommand::command_name(),
            swap::FromCommand::description(),
        ),
        (
            swap::ToCommand::command_name(),
            swap::ToCommand::description(),
        ),
        (
            swap::AmountCommand::command_name(),
            swap::AmountCommand::description(),
        ),
        (
            swap::FlipCommand::command_name(),
            swap::FlipCommand::description(),
        ),
        (
            swap::RateCommand::command_name(),
            swap::RateCommand::description(),
        ),
        (
            swap::SwapCommand::command_name(),
            swap::SwapCommand::description(),
        ),
        (sum::SumCommand::command_name(), sum::SumCommand::description()),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot and show the main menu")]
    Start,
    #[command(description = "display this help message")]
    Help,
    #[command(description = "show the swap form")]
    Form,
    #[command(description = "list token prices")]
    Prices,
    #[command(description = "reload token prices")]
    Refresh,
    #[command(rename = "from", description = "select the token to swap from")]
    FromToken(String),
    #[command(rename = "to", description = "select the token to swap to")]
    ToToken(String),
    #[command(description = "set the amount to swap")]
    Amount(String),
    #[command(description = "exchange the from and to tokens")]
    Flip,
    #[command(description = "show the exchange rate")]
    Rate,
    #[command(description = "submit the swap")]
    Swap,
    #[command(description = "sum 1..=n three ways")]
    Sum(String),
}

/// Route a parsed command to its handler
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;
    info!("Command {:?} received in chat {}", cmd, chat_id);

    // A new command abandons any pending free-text prompt
    dialogue.update(State::Start).await?;
    let dialogue = Some(dialogue);

    match cmd {
        BotCommands::Start => {
            start::StartCommand::execute(bot, chat_id, "", dialogue, services).await
        }
        BotCommands::Help => help::HelpCommand::execute(bot, chat_id, "", dialogue, services).await,
        BotCommands::Form => swap::FormCommand::execute(bot, chat_id, "", dialogue, services).await,
        BotCommands::Prices => {
            prices::PricesCommand::execute(bot, chat_id, "", dialogue, services).await
        }
        BotCommands::Refresh => {
            prices::RefreshCommand::execute(bot, chat_id, "", dialogue, services).await
        }
        BotCommands::FromToken(symbol) => {
            swap::FromCommand::execute(bot, chat_id, &symbol, dialogue, services).await
        }
        BotCommands::ToToken(symbol) => {
            swap::ToCommand::execute(bot, chat_id, &symbol, dialogue, services).await
        }
        BotCommands::Amount(amount) => {
            swap::AmountCommand::execute(bot, chat_id, &amount, dialogue, services).await
        }
        BotCommands::Flip => swap::FlipCommand::execute(bot, chat_id, "", dialogue, services).await,
        BotCommands::Rate => swap::RateCommand::execute(bot, chat_id, "", dialogue, services).await,
        BotCommands::Swap => swap::SwapCommand::execute(bot, chat_id, "", dialogue, services).await,
        BotCommands::Sum(n) => sum::SumCommand::execute(bot, chat_id, &n, dialogue, services).await,
    }
}

