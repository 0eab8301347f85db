pub mod catalog;
pub mod icons;
pub mod price_feed;

pub use catalog::{build_catalog, Catalog};
pub use icons::{badge, icon_url};
pub use price_feed::{HttpPriceFeed, PriceFeed};
