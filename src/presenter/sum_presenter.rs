use crate::interactor::sum_interactor::SumInteractor;
use crate::view::sum_view::SumView;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SumPresenter: Send + Sync {
    async fn run(&self, input: &str) -> Result<()>;
}

pub struct SumPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SumPresenterImpl<I, V>
where
    I: SumInteractor,
    V: SumView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SumPresenter for SumPresenterImpl<I, V>
where
    I: SumInteractor + Send + Sync,
    V: SumView + Send + Sync,
{
    async fn run(&self, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return self.view.display_usage().await;
        }

        match self.interactor.run(input).await {
            Ok(report) => self.view.display_report(&report).await,
            Err(e) => self.view.display_error(&e).await,
        }
    }
}
