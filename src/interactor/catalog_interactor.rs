use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::entity::AppError;
use crate::feed::PriceFeed;
use crate::interactor::session_store::SessionStore;
use crate::swap::SwapSession;

#[async_trait]
pub trait CatalogInteractor: Send + Sync {
    /// Reloads prices for a chat. The session is updated either way.
    async fn refresh(&self, chat_id: i64) -> Result<SwapSession, AppError>;

    async fn session(&self, chat_id: i64) -> SwapSession;
}

pub struct CatalogInteractorImpl {
    price_feed: Arc<dyn PriceFeed + Send + Sync>,
    sessions: Arc<SessionStore>,
}

impl CatalogInteractorImpl {
    pub fn new(price_feed: Arc<dyn PriceFeed + Send + Sync>, sessions: Arc<SessionStore>) -> Self {
        Self {
            price_feed,
            sessions,
        }
    }
}

#[async_trait]
impl CatalogInteractor for CatalogInteractorImpl {
    async fn refresh(&self, chat_id: i64) -> Result<SwapSession, AppError> {
        self.sessions
            .update(chat_id, |session| session.begin_load())
            .await?;

        info!("Refreshing prices for chat {}", chat_id);
        let result = self.price_feed.load().await;
        let failure = result.as_ref().err().cloned();

        let session = self
            .sessions
            .update(chat_id, |session| {
                session.finish_load(result);
                session.clone()
            })
            .await;

        match failure {
            Some(e) => Err(e),
            None => Ok(session),
        }
    }

    async fn session(&self, chat_id: i64) -> SwapSession {
        self.sessions.snapshot(chat_id).await
    }
}
