pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod feed;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod sum;
pub mod swap;
pub mod utils;
pub mod view;

use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, Bot};

use crate::config::AppConfig;
use crate::di::ServiceContainer;

// Re-export commonly used items
pub use commands::{BotCommands, MyDialogue};
pub use entity::*;
pub use router::{Router, TelegramRouter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wires the router, services and dialogue storage for a bot instance
pub fn create_application(
    bot: Bot,
    config: AppConfig,
) -> (
    TelegramRouter,
    Bot,
    Arc<ServiceContainer>,
    Arc<InMemStorage<State>>,
) {
    let services = Arc::new(ServiceContainer::new(config));
    let storage = InMemStorage::<State>::new();
    let router = TelegramRouter::new(services.clone());

    (router, bot, services, storage)
}
