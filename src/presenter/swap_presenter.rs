use crate::entity::{AppError, Side, SwapOutcome, Token};
use crate::interactor::swap_interactor::SwapInteractor;
use crate::view::swap_view::SwapView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait SwapPresenter: Send + Sync {
    async fn show_form(&self, chat_id: i64) -> Result<()>;
    async fn choose_token(&self, chat_id: i64, side: Side) -> Result<()>;
    async fn select_token(&self, chat_id: i64, side: Side, query: &str) -> Result<()>;
    async fn set_amount(&self, chat_id: i64, input: &str) -> Result<()>;
    async fn prompt_amount(&self) -> Result<()>;
    async fn swap_sides(&self, chat_id: i64) -> Result<()>;
    async fn show_rate(&self, chat_id: i64) -> Result<()>;
    async fn submit(&self, chat_id: i64) -> Result<()>;
}

pub struct SwapPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SwapPresenterImpl<I, V>
where
    I: SwapInteractor,
    V: SwapView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SwapPresenter for SwapPresenterImpl<I, V>
where
    I: SwapInteractor + Send + Sync,
    V: SwapView + Send + Sync,
{
    async fn show_form(&self, chat_id: i64) -> Result<()> {
        let session = self.interactor.session(chat_id).await;
        self.view.display_form(&session).await
    }

    async fn choose_token(&self, chat_id: i64, side: Side) -> Result<()> {
        let session = self.interactor.session(chat_id).await;

        if session.catalog().is_empty() {
            return self
                .view
                .display_validation_error(&AppError::CatalogUnavailable)
                .await;
        }

        let candidates: Vec<Token> = session.candidates(side).into_iter().cloned().collect();
        self.view.display_token_choices(side, &candidates).await
    }

    async fn select_token(&self, chat_id: i64, side: Side, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return self.choose_token(chat_id, side).await;
        }

        match self.interactor.select_token(chat_id, side, query).await {
            Ok(session) => self.view.display_form(&session).await,
            Err(e) => self.view.display_validation_error(&e).await,
        }
    }

    async fn set_amount(&self, chat_id: i64, input: &str) -> Result<()> {
        match self.interactor.set_amount(chat_id, input).await {
            Ok(session) => self.view.display_form(&session).await,
            Err(e) => self.view.display_validation_error(&e).await,
        }
    }

    async fn prompt_amount(&self) -> Result<()> {
        self.view.display_amount_prompt().await
    }

    async fn swap_sides(&self, chat_id: i64) -> Result<()> {
        match self.interactor.swap_sides(chat_id).await {
            Ok(session) => self.view.display_form(&session).await,
            Err(e) => self.view.display_validation_error(&e).await,
        }
    }

    async fn show_rate(&self, chat_id: i64) -> Result<()> {
        let session = self.interactor.session(chat_id).await;
        self.view.display_rate(&session).await
    }

    async fn submit(&self, chat_id: i64) -> Result<()> {
        let order = match self.interactor.begin_swap(chat_id).await {
            Ok(order) => order,
            Err(e) => return self.view.display_validation_error(&e).await,
        };

        // The swap must still settle so the form leaves Submitting
        if let Err(e) = self.view.display_processing(&order).await {
            error!("Failed to show swap progress for chat {}: {}", chat_id, e);
        }

        match self.interactor.complete_swap(chat_id, &order).await {
            SwapOutcome::Success {
                from_amount,
                to_amount,
                from_symbol,
                to_symbol,
            } => {
                self.view
                    .display_swap_success(from_amount, to_amount, &from_symbol, &to_symbol)
                    .await
            }
            SwapOutcome::Failure { reason } => self.view.display_swap_failure(&reason).await,
        }
    }
}
