use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;

use crate::config::AppConfig;
use crate::entity::{AppError, PriceRecord, Token};
use crate::feed::catalog::build_catalog;

/// Source of the token catalog
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the price list and reduce it to one token per currency
    async fn load(&self) -> Result<Vec<Token>, AppError>;
}

/// Price feed backed by a JSON price list served over HTTP
pub struct HttpPriceFeed {
    http_client: Client,
    url: String,
    icon_base_url: String,
}

impl HttpPriceFeed {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            url: config.price_feed_url.clone(),
            icon_base_url: config.icon_base_url.clone(),
        }
    }

    async fn fetch_records(&self) -> Result<Vec<PriceRecord>, AppError> {
        let response = self.http_client.get(&self.url).send().await.map_err(|e| {
            error!("Failed to fetch prices from {}: {}", self.url, e);
            AppError::Fetch(format!("Failed to fetch currency data: {}", e))
        })?;

        info!("Price feed response: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            error!("Price feed returned HTTP {}", status);
            return Err(AppError::Fetch(format!("HTTP error! status: {}", status)));
        }

        response.json::<Vec<PriceRecord>>().await.map_err(|e| {
            error!("Failed to parse price feed response: {}", e);
            AppError::Fetch(format!("Failed to parse currency data: {}", e))
        })
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    async fn load(&self) -> Result<Vec<Token>, AppError> {
        let records = self.fetch_records().await?;
        let record_count = records.len();
        let tokens = build_catalog(records, &self.icon_base_url);

        info!(
            "Loaded {} tokens from {} price records",
            tokens.len(),
            record_count
        );

        Ok(tokens)
    }
}
