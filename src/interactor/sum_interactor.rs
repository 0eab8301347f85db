use async_trait::async_trait;
use log::{error, info};

use crate::entity::{AppError, SumReport};
use crate::sum::{parse_n, run_benchmark, SumLimits};

#[async_trait]
pub trait SumInteractor: Send + Sync {
    async fn run(&self, input: &str) -> Result<SumReport, AppError>;
}

pub struct SumInteractorImpl {
    limits: SumLimits,
}

impl SumInteractorImpl {
    pub fn new(limits: SumLimits) -> Self {
        Self { limits }
    }
}

#[async_trait]
impl SumInteractor for SumInteractorImpl {
    async fn run(&self, input: &str) -> Result<SumReport, AppError> {
        let n = parse_n(input, self.limits)?;
        let limits = self.limits;

        info!("Running sum benchmark for n = {}", n);

        // The loop and the recursion are CPU bound
        tokio::task::spawn_blocking(move || run_benchmark(n, limits))
            .await
            .map_err(benchmark_failed)
    }
}

fn benchmark_failed(e: tokio::task::JoinError) -> AppError {
    error!("Sum benchmark task failed: {}", e);
    AppError::Internal(format!("Benchmark failed: {}", e))
}
