use log::debug;
use std::collections::HashMap;

use crate::entity::{PriceRecord, Token};
use crate::feed::icons::icon_url;

/// Reduces raw feed records to one token per lower-cased currency.
///
/// A record replaces the one kept so far only when its date is strictly later,
/// so ties keep the first record seen. Tokens come out in the order their
/// currency first appeared in the feed.
pub fn build_catalog(records: Vec<PriceRecord>, icon_base_url: &str) -> Vec<Token> {
    let mut latest: Vec<(String, PriceRecord)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.currency.to_lowercase();

        match positions.get(&key) {
            Some(&index) => {
                if record.is_newer_than(&latest[index].1) {
                    debug!(
                        "Replacing {} price from {} with {}",
                        key, latest[index].1.date, record.date
                    );
                    latest[index].1 = record;
                }
            }
            None => {
                positions.insert(key.clone(), latest.len());
                latest.push((key, record));
            }
        }
    }

    latest
        .into_iter()
        .map(|(id, record)| Token {
            icon_url: icon_url(icon_base_url, &record.currency),
            id,
            symbol: record.currency.clone(),
            name: record.currency,
            price: record.price,
        })
        .collect()
}

/// The deduplicated token list a chat is currently working with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tokens: Vec<Token>,
}

impl Catalog {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn get(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id == id)
    }

    /// Looks a token up by id or symbol, ignoring case.
    pub fn find(&self, query: &str) -> Option<&Token> {
        let needle = query.trim().to_lowercase();
        self.get(&needle)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: &str = "https://icons.example";

    #[test]
    fn keeps_latest_record_per_currency() {
        let records = vec![
            PriceRecord::new("A", "2024-01-01", 1.0),
            PriceRecord::new("A", "2024-01-02", 2.0),
        ];

        let tokens = build_catalog(records, ICONS);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].id, "a");
        assert_eq!(tokens[0].price, Some(2.0));
    }

    #[test]
    fn currency_case_collapses_to_one_token() {
        let records = vec![
            PriceRecord::new("BTC", "2024-01-01", 40_000.0),
            PriceRecord::new("btc", "2024-01-03", 42_000.0),
        ];

        let tokens = build_catalog(records, ICONS);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].id, "btc");
        assert_eq!(tokens[0].symbol, "btc");
        assert_eq!(tokens[0].price, Some(42_000.0));
    }

    #[test]
    fn equal_dates_keep_first_seen_record() {
        let records = vec![
            PriceRecord::new("USDC", "2024-01-01T00:00:00Z", 1.0),
            PriceRecord::new("USDC", "2024-01-01T00:00:00Z", 0.99),
        ];

        let tokens = build_catalog(records, ICONS);

        assert_eq!(tokens[0].price, Some(1.0));
    }

    #[test]
    fn older_record_does_not_replace_newer_one() {
        let records = vec![
            PriceRecord::new("ETH", "2024-01-05", 2_500.0),
            PriceRecord::new("ETH", "2024-01-01", 2_000.0),
        ];

        let tokens = build_catalog(records, ICONS);

        assert_eq!(tokens[0].price, Some(2_500.0));
    }

    #[test]
    fn first_appearance_order_is_preserved() {
        let records = vec![
            PriceRecord::new("ETH", "2024-01-01", 1.0),
            PriceRecord::new("ATOM", "2024-01-01", 2.0),
            PriceRecord::new("ETH", "2024-01-02", 3.0),
            PriceRecord::new("OSMO", "2024-01-01", 4.0),
        ];

        let ids: Vec<String> = build_catalog(records, ICONS)
            .into_iter()
            .map(|token| token.id)
            .collect();

        assert_eq!(ids, vec!["eth", "atom", "osmo"]);
    }

    #[test]
    fn tokens_carry_icon_url_for_served_symbol() {
        let tokens = build_catalog(vec![PriceRecord::new("bNEO", "2024-01-01", 7.0)], ICONS);

        assert_eq!(tokens[0].icon_url, "https://icons.example/bNEO.svg");
    }

    #[test]
    fn catalog_lookup_ignores_case() {
        let catalog = Catalog::new(build_catalog(
            vec![PriceRecord::new("ETH", "2024-01-01", 1.0)],
            ICONS,
        ));

        assert!(catalog.find("Eth").is_some());
        assert!(catalog.find("btc").is_none());
    }
}
