//! Currency Swap Bot for Telegram - Main executable
//!
//! Entry point for the Telegram bot that lists token prices, computes swap
//! amounts from them, simulates swap submission and runs the sum-to-n benchmark.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info};
use std::env;
use teloxide::types::BotCommand;
use teloxide::{dptree, prelude::*};
use token_swap_bot::commands::register_commands;
use token_swap_bot::config::AppConfig;
use token_swap_bot::Router;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Currency Swap Telegram Bot v{}", token_swap_bot::VERSION);

    let bot_token = env::var("TELEGRAM_BOT_TOKEN")
        .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

    let config = AppConfig::from_env();
    info!("Using price feed at {}", config.price_feed_url);

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    info!("Initializing bot application...");
    let (router, bot, service_container, storage) =
        token_swap_bot::create_application(bot, config);

    // Publish the command list shown in Telegram's menu
    let commands: Vec<BotCommand> = register_commands()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect();
    if let Err(e) = bot.set_my_commands(commands).await {
        error!("Failed to register bot commands: {}", e);
    }

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service_container, storage])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
