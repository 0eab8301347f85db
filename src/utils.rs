use lazy_static::lazy_static;
use regex::Regex;

// Parse a decimal amount, allowing thousands separators ("1,250.5")
pub fn parse_amount(input: &str) -> Option<f64> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^[+-]?(\d{1,3}(,\d{3})+|\d+)?(\.\d+)?$").expect("amount pattern is valid");
    }

    let trimmed = input.trim();
    if trimmed.is_empty() || !RE.is_match(trimmed) {
        return None;
    }

    trimmed.replace(',', "").parse::<f64>().ok()
}

// Format amount without trailing zeros, up to 8 decimals
pub fn format_amount(amount: f64) -> String {
    let text = format!("{:.8}", amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

// Format USD price for display
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) if price >= 1.0 => format!("${:.2}", price),
        Some(price) => format!("${}", format_amount(price)),
        None => "n/a".to_string(),
    }
}
