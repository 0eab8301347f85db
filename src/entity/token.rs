use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub id: String,            // Lower-cased currency, unique within a catalog
    pub symbol: String,        // Currency as served by the feed (e.g. "ETH", "bNEO")
    pub name: String,          // Display name, same as symbol for feed tokens
    pub price: Option<f64>,    // Latest known USD price
    pub icon_url: String,      // Icon location by convention
}

impl Token {
    /// Price usable as a conversion factor.
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|price| price.is_finite() && *price > 0.0)
    }
}
