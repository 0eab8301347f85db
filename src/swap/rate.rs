use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entity::Token;

/// Decimal places kept for converted amounts and displayed rates.
pub const AMOUNT_DECIMALS: u32 = 8;

/// Price ratio of `from` to `to`, if both prices can be used.
pub fn exchange_rate(from: &Token, to: &Token) -> Option<f64> {
    let from_price = from.usable_price()?;
    let to_price = to.usable_price()?;
    let rate = from_price / to_price;

    rate.is_finite().then_some(rate)
}

/// Amount of `to` received for `from_amount` of `from`, rounded to 8 decimals.
///
/// Zero when the amount is not a positive finite number or a price is missing.
pub fn compute_to_amount(from: &Token, to: &Token, from_amount: f64) -> f64 {
    if !from_amount.is_finite() || from_amount <= 0.0 {
        return 0.0;
    }

    match exchange_rate(from, to) {
        Some(rate) => round_amount(from_amount * rate),
        None => 0.0,
    }
}

/// Rate shown next to the form, `"0"` when it cannot be computed.
pub fn format_rate(from: Option<&Token>, to: Option<&Token>) -> String {
    match (from, to) {
        (Some(from), Some(to)) => match exchange_rate(from, to) {
            Some(rate) => format!("{:.*}", AMOUNT_DECIMALS as usize, rate),
            None => "0".to_string(),
        },
        _ => "0".to_string(),
    }
}

/// USD value of an amount at the token's price, with 2 decimals.
pub fn usd_total(token: &Token, amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    let price = token.price.filter(|p| p.is_finite()).unwrap_or(0.0);

    format!("{:.2}", amount * price)
}

fn round_amount(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    // Values outside Decimal's range are far beyond 8-decimal precision anyway.
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, price: Option<f64>) -> Token {
        Token {
            id: id.to_string(),
            symbol: id.to_uppercase(),
            name: id.to_uppercase(),
            price,
            icon_url: String::new(),
        }
    }

    #[test]
    fn converts_by_price_ratio() {
        let from = token("a", Some(2.0));
        let to = token("b", Some(4.0));

        assert_eq!(compute_to_amount(&from, &to, 10.0), 5.0);
    }

    #[test]
    fn rounds_to_eight_decimals() {
        let from = token("a", Some(1.0));
        let to = token("b", Some(3.0));

        assert_eq!(compute_to_amount(&from, &to, 1.0), 0.33333333);
        assert_eq!(compute_to_amount(&from, &to, 2.0), 0.66666667);
    }

    #[test]
    fn invalid_amounts_yield_zero() {
        let from = token("a", Some(2.0));
        let to = token("b", Some(4.0));

        assert_eq!(compute_to_amount(&from, &to, 0.0), 0.0);
        assert_eq!(compute_to_amount(&from, &to, f64::NAN), 0.0);
        assert_eq!(compute_to_amount(&from, &to, -3.0), 0.0);
        assert_eq!(compute_to_amount(&from, &to, f64::INFINITY), 0.0);
    }

    #[test]
    fn missing_or_zero_prices_yield_zero() {
        let priced = token("a", Some(2.0));

        assert_eq!(compute_to_amount(&priced, &token("b", Some(0.0)), 1.0), 0.0);
        assert_eq!(compute_to_amount(&priced, &token("b", None), 1.0), 0.0);
        assert_eq!(compute_to_amount(&token("b", None), &priced, 1.0), 0.0);
    }

    #[test]
    fn recomputation_is_stable() {
        let from = token("a", Some(1.2345));
        let to = token("b", Some(0.0321));

        let first = compute_to_amount(&from, &to, 7.5);
        let second = compute_to_amount(&from, &to, 7.5);

        assert_eq!(first, second);
    }

    #[test]
    fn formats_rate_with_eight_places() {
        let from = token("a", Some(2.0));
        let to = token("b", Some(4.0));

        assert_eq!(format_rate(Some(&from), Some(&to)), "0.50000000");
        assert_eq!(format_rate(Some(&from), None), "0");
        assert_eq!(format_rate(Some(&from), Some(&token("c", Some(0.0)))), "0");
    }

    #[test]
    fn usd_total_uses_two_decimals() {
        assert_eq!(usd_total(&token("a", Some(1.5)), Some(3.0)), "4.50");
        assert_eq!(usd_total(&token("a", None), Some(3.0)), "0.00");
        assert_eq!(usd_total(&token("a", Some(1.5)), None), "0.00");
    }
}
