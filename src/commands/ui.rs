use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::entity::{Side, Token};
use crate::feed::badge;

pub const PICK_FROM_PREFIX: &str = "pick_from:";
pub const PICK_TO_PREFIX: &str = "pick_to:";

const TOKENS_PER_ROW: usize = 3;

pub fn create_main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("Currency Swap", "form"),
            InlineKeyboardButton::callback("Prices", "prices"),
        ],
        vec![
            InlineKeyboardButton::callback("Sum to N", "sum"),
            InlineKeyboardButton::callback("Help", "help"),
        ],
    ])
}

pub fn create_form_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("From", "choose_from"),
            InlineKeyboardButton::callback("⇅ Flip", "flip"),
            InlineKeyboardButton::callback("To", "choose_to"),
        ],
        vec![
            InlineKeyboardButton::callback("Amount", "amount"),
            InlineKeyboardButton::callback("Swap Tokens", "swap"),
        ],
        vec![
            InlineKeyboardButton::callback("🔄 Refresh Prices", "refresh"),
            InlineKeyboardButton::callback("← Menu", "menu"),
        ],
    ])
}

pub fn create_retry_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("🔄 Retry", "refresh"),
        InlineKeyboardButton::callback("← Menu", "menu"),
    ]])
}

pub fn pick_callback(side: Side, token_id: &str) -> String {
    match side {
        Side::From => format!("{}{}", PICK_FROM_PREFIX, token_id),
        Side::To => format!("{}{}", PICK_TO_PREFIX, token_id),
    }
}

/// Parses a token-pick callback back into its side and token id.
pub fn parse_pick_callback(data: &str) -> Option<(Side, &str)> {
    if let Some(id) = data.strip_prefix(PICK_FROM_PREFIX) {
        Some((Side::From, id))
    } else {
        data.strip_prefix(PICK_TO_PREFIX).map(|id| (Side::To, id))
    }
}

pub fn create_token_keyboard(side: Side, tokens: &[Token]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = tokens
        .chunks(TOKENS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|token| {
                    InlineKeyboardButton::callback(
                        format!("{} {}", badge(&token.symbol), token.symbol),
                        pick_callback(side, &token.id),
                    )
                })
                .collect()
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback("← Back", "form")]);

    InlineKeyboardMarkup::new(rows)
}
