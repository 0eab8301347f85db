/// Icon location for a currency, templated on its symbol.
pub fn icon_url(base_url: &str, symbol: &str) -> String {
    format!("{}/{}.svg", base_url.trim_end_matches('/'), symbol)
}

/// Two-letter text badge shown when no icon can be displayed.
pub fn badge(symbol: &str) -> String {
    symbol.chars().take(2).collect::<String>().to_uppercase()
}
