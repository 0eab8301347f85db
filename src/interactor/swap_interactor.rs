use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::entity::{AppError, Side, SwapOrder, SwapOutcome};
use crate::interactor::session_store::SessionStore;
use crate::swap::{SwapExecutor, SwapSession};

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    async fn select_token(
        &self,
        chat_id: i64,
        side: Side,
        query: &str,
    ) -> Result<SwapSession, AppError>;

    async fn set_amount(&self, chat_id: i64, input: &str) -> Result<SwapSession, AppError>;

    async fn swap_sides(&self, chat_id: i64) -> Result<SwapSession, AppError>;

    /// Validates the form and moves it into the submitting state.
    async fn begin_swap(&self, chat_id: i64) -> Result<SwapOrder, AppError>;

    /// Runs a swap started with `begin_swap` and settles the form.
    async fn complete_swap(&self, chat_id: i64, order: &SwapOrder) -> SwapOutcome;

    async fn session(&self, chat_id: i64) -> SwapSession;
}

pub struct SwapInteractorImpl {
    executor: Arc<dyn SwapExecutor + Send + Sync>,
    sessions: Arc<SessionStore>,
}

impl SwapInteractorImpl {
    pub fn new(executor: Arc<dyn SwapExecutor + Send + Sync>, sessions: Arc<SessionStore>) -> Self {
        Self { executor, sessions }
    }

    async fn edit(
        &self,
        chat_id: i64,
        f: impl FnOnce(&mut SwapSession) -> Result<(), AppError> + Send,
    ) -> Result<SwapSession, AppError> {
        self.sessions
            .update(chat_id, |session| {
                f(session)?;
                Ok(session.clone())
            })
            .await
    }
}

#[async_trait]
impl SwapInteractor for SwapInteractorImpl {
    async fn select_token(
        &self,
        chat_id: i64,
        side: Side,
        query: &str,
    ) -> Result<SwapSession, AppError> {
        self.edit(chat_id, |session| session.select(side, query))
            .await
    }

    async fn set_amount(&self, chat_id: i64, input: &str) -> Result<SwapSession, AppError> {
        self.edit(chat_id, |session| session.set_amount(input)).await
    }

    async fn swap_sides(&self, chat_id: i64) -> Result<SwapSession, AppError> {
        self.edit(chat_id, |session| session.swap_sides()).await
    }

    async fn begin_swap(&self, chat_id: i64) -> Result<SwapOrder, AppError> {
        let result = self
            .sessions
            .update(chat_id, |session| session.begin_submit())
            .await;

        if let Err(e) = &result {
            warn!("Swap rejected for chat {}: {}", chat_id, e);
        }

        result
    }

    async fn complete_swap(&self, chat_id: i64, order: &SwapOrder) -> SwapOutcome {
        let outcome = self.executor.execute(order).await;

        info!(
            "Swap for chat {} finished: {}",
            chat_id,
            if outcome.is_success() { "success" } else { "failure" }
        );

        self.sessions
            .update(chat_id, |session| session.finish_submit(&outcome))
            .await;

        outcome
    }

    async fn session(&self, chat_id: i64) -> SwapSession {
        self.sessions.snapshot(chat_id).await
    }
}
