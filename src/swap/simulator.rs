use async_trait::async_trait;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

use crate::config::AppConfig;
use crate::entity::{SwapOrder, SwapOutcome};

pub const FAILURE_REASON: &str = "Transaction failed. Please try again.";

/// Executes a prepared swap. Each call is attempted exactly once.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    async fn execute(&self, order: &SwapOrder) -> SwapOutcome;
}

/// Stand-in for a settlement network: waits a fixed delay, then succeeds
/// with the configured probability.
pub struct SimulatedSwapExecutor {
    delay: Duration,
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedSwapExecutor {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_rng(
            config.swap_delay(),
            config.swap_success_rate,
            StdRng::from_os_rng(),
        )
    }

    pub fn with_rng(delay: Duration, success_rate: f64, rng: StdRng) -> Self {
        Self {
            delay,
            success_rate: success_rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }

    /// Uniform draw in `[0, 1)` compared against the failure threshold.
    fn draw_success(&self) -> bool {
        let draw: f64 = match self.rng.lock() {
            Ok(mut rng) => rng.random(),
            Err(poisoned) => poisoned.into_inner().random(),
        };

        draw >= 1.0 - self.success_rate
    }
}

#[async_trait]
impl SwapExecutor for SimulatedSwapExecutor {
    async fn execute(&self, order: &SwapOrder) -> SwapOutcome {
        info!(
            "Simulating swap of {} {} to {} {}",
            order.from_amount, order.from.symbol, order.to_amount, order.to.symbol
        );

        tokio::time::sleep(self.delay).await;

        if self.draw_success() {
            SwapOutcome::Success {
                from_amount: order.from_amount,
                to_amount: order.to_amount,
                from_symbol: order.from.symbol.clone(),
                to_symbol: order.to.symbol.clone(),
            }
        } else {
            SwapOutcome::Failure {
                reason: FAILURE_REASON.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Token;

    fn order() -> SwapOrder {
        let token = |id: &str, price: f64| Token {
            id: id.to_string(),
            symbol: id.to_uppercase(),
            name: id.to_uppercase(),
            price: Some(price),
            icon_url: String::new(),
        };

        SwapOrder {
            from: token("eth", 2.0),
            to: token("usdc", 4.0),
            from_amount: 10.0,
            to_amount: 5.0,
        }
    }

    fn executor(success_rate: f64, seed: u64) -> SimulatedSwapExecutor {
        SimulatedSwapExecutor::with_rng(Duration::ZERO, success_rate, StdRng::seed_from_u64(seed))
    }

    #[tokio::test]
    async fn success_carries_order_amounts() {
        let outcome = executor(1.0, 7).execute(&order()).await;

        assert_eq!(
            outcome,
            SwapOutcome::Success {
                from_amount: 10.0,
                to_amount: 5.0,
                from_symbol: "ETH".to_string(),
                to_symbol: "USDC".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn zero_rate_always_fails() {
        let outcome = executor(0.0, 7).execute(&order()).await;

        assert_eq!(
            outcome,
            SwapOutcome::Failure {
                reason: FAILURE_REASON.to_string()
            }
        );
    }

    #[tokio::test]
    async fn success_frequency_tracks_configured_rate() {
        let executor = executor(0.8, 42);
        let order = order();
        let trials = 2_000;

        let mut successes = 0;
        for _ in 0..trials {
            if executor.execute(&order).await.is_success() {
                successes += 1;
            }
        }

        let observed = successes as f64 / trials as f64;
        assert!(
            (observed - 0.8).abs() < 0.05,
            "observed success rate {} too far from 0.8",
            observed
        );
    }

    #[tokio::test]
    async fn waits_for_configured_delay() {
        let executor = SimulatedSwapExecutor::with_rng(
            Duration::from_millis(50),
            1.0,
            StdRng::seed_from_u64(1),
        );
        let started = tokio::time::Instant::now();

        executor.execute(&order()).await;

        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
