use anyhow::Result;
use log::{error, info};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::interactor::catalog_interactor::CatalogInteractorImpl;
use crate::presenter::catalog_presenter::{CatalogPresenter, CatalogPresenterImpl};
use crate::view::catalog_view::TelegramCatalogView;

pub(crate) fn catalog_presenter(
    bot: &Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> CatalogPresenterImpl<CatalogInteractorImpl, TelegramCatalogView> {
    let interactor = Arc::new(CatalogInteractorImpl::new(
        services.price_feed(),
        services.sessions(),
    ));
    let view = Arc::new(TelegramCatalogView::new(bot.clone(), chat_id));

    CatalogPresenterImpl::new(interactor, view)
}

pub struct PricesCommand;

impl CommandHandler for PricesCommand {
    fn command_name() -> &'static str {
        "prices"
    }

    fn description() -> &'static str {
        "list token prices"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Prices requested in chat {}", chat_id);

        catalog_presenter(&bot, chat_id, &services)
            .show_prices(chat_id.0)
            .await
    }
}

pub struct RefreshCommand;

impl CommandHandler for RefreshCommand {
    fn command_name() -> &'static str {
        "refresh"
    }

    fn description() -> &'static str {
        "reload token prices"
    }

    async fn execute(
        bot: Bot,
        chat_id: ChatId,
        _args: &str,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Price refresh requested in chat {}", chat_id);

        let presenter = catalog_presenter(&bot, chat_id, &services);

        // Run in the background so the chat stays responsive while loading
        tokio::spawn(async move {
            if let Err(e) = presenter.refresh(chat_id.0).await {
                error!("Failed to refresh prices for chat {}: {}", chat_id, e);
            }
        });

        Ok(())
    }
}
