use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a currency price as served by the price feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub currency: String,
    pub date: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl PriceRecord {
    pub fn new(currency: &str, date: &str, price: f64) -> Self {
        Self {
            currency: currency.to_string(),
            date: date.to_string(),
            price: Some(price),
        }
    }

    /// Parses `date` as RFC 3339, a naive date-time or a plain date (UTC).
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// True only when both dates parse and ours is strictly later.
    pub fn is_newer_than(&self, other: &PriceRecord) -> bool {
        match (self.timestamp(), other.timestamp()) {
            (Some(ours), Some(theirs)) => ours > theirs,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_timestamps_and_plain_dates() {
        let full = PriceRecord::new("BLUR", "2023-08-29T07:10:40.000Z", 0.2);
        let plain = PriceRecord::new("BLUR", "2023-08-29", 0.2);

        assert!(full.timestamp().is_some());
        assert!(plain.timestamp().is_some());
        assert!(full.is_newer_than(&plain));
        assert!(!plain.is_newer_than(&full));
    }

    #[test]
    fn unparseable_dates_never_compare_newer() {
        let broken = PriceRecord::new("ETH", "yesterday", 1.0);
        let valid = PriceRecord::new("ETH", "2024-01-01", 2.0);

        assert!(broken.timestamp().is_none());
        assert!(!broken.is_newer_than(&valid));
        assert!(!valid.is_newer_than(&broken));
    }

    #[test]
    fn missing_price_deserializes_as_none() {
        let record: PriceRecord =
            serde_json::from_str(r#"{"currency":"ATOM","date":"2024-01-01"}"#)
                .expect("record should parse");

        assert_eq!(record.price, None);
    }
}
