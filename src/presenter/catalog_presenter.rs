use crate::entity::AppError;
use crate::interactor::catalog_interactor::CatalogInteractor;
use crate::view::catalog_view::CatalogView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CatalogPresenter: Send + Sync {
    /// Show the loaded tokens, loading them first if the chat has none.
    async fn show_prices(&self, chat_id: i64) -> Result<()>;
    async fn refresh(&self, chat_id: i64) -> Result<()>;
}

pub struct CatalogPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> CatalogPresenterImpl<I, V>
where
    I: CatalogInteractor,
    V: CatalogView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> CatalogPresenter for CatalogPresenterImpl<I, V>
where
    I: CatalogInteractor + Send + Sync,
    V: CatalogView + Send + Sync,
{
    async fn show_prices(&self, chat_id: i64) -> Result<()> {
        let session = self.interactor.session(chat_id).await;

        if session.catalog().is_empty() {
            return self.refresh(chat_id).await;
        }

        self.view.display_catalog(&session).await
    }

    async fn refresh(&self, chat_id: i64) -> Result<()> {
        self.view.display_loading().await?;

        match self.interactor.refresh(chat_id).await {
            Ok(session) => self.view.display_catalog(&session).await?,
            Err(AppError::Fetch(message)) => {
                let has_catalog = !self.interactor.session(chat_id).await.catalog().is_empty();
                self.view
                    .display_fetch_error(&message, has_catalog)
                    .await?;
            }
            Err(e) => self.view.display_error(&e).await?,
        }

        Ok(())
    }
}
