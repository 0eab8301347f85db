use std::sync::Arc;

use crate::config::AppConfig;
use crate::feed::{HttpPriceFeed, PriceFeed};
use crate::interactor::SessionStore;
use crate::sum::SumLimits;
use crate::swap::{SimulatedSwapExecutor, SwapExecutor};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    price_feed: Arc<dyn PriceFeed + Send + Sync>,
    swap_executor: Arc<dyn SwapExecutor + Send + Sync>,
    sessions: Arc<SessionStore>,
    config: AppConfig,
}

impl ServiceContainer {
    /// Create a service container backed by the HTTP feed and the simulator
    pub fn new(config: AppConfig) -> Self {
        let price_feed = Arc::new(HttpPriceFeed::new(&config)) as Arc<dyn PriceFeed + Send + Sync>;
        let swap_executor =
            Arc::new(SimulatedSwapExecutor::new(&config)) as Arc<dyn SwapExecutor + Send + Sync>;

        Self::with_components(config, price_feed, swap_executor)
    }

    /// Create a service container from explicit components
    pub fn with_components(
        config: AppConfig,
        price_feed: Arc<dyn PriceFeed + Send + Sync>,
        swap_executor: Arc<dyn SwapExecutor + Send + Sync>,
    ) -> Self {
        Self {
            price_feed,
            swap_executor,
            sessions: Arc::new(SessionStore::new()),
            config,
        }
    }

    // Accessor methods

    pub fn price_feed(&self) -> Arc<dyn PriceFeed + Send + Sync> {
        self.price_feed.clone()
    }

    pub fn swap_executor(&self) -> Arc<dyn SwapExecutor + Send + Sync> {
        self.swap_executor.clone()
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    pub fn sum_limits(&self) -> SumLimits {
        SumLimits {
            max_n: self.config.sum_max_n,
            recursion_limit: self.config.sum_recursion_limit,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.clone()
    }
}
