use serde::{Deserialize, Serialize};

/// One side of the swap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    From,
    To,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::From => Side::To,
            Side::To => Side::From,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::From => "from",
            Side::To => "to",
        }
    }
}

/// The user's in-progress swap intent. `to_amount` is always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub from_amount: Option<f64>,
    pub to_amount: f64,
}

impl Default for SwapRequest {
    fn default() -> Self {
        Self {
            from_token: None,
            to_token: None,
            from_amount: Some(1.0),
            to_amount: 0.0,
        }
    }
}

impl SwapRequest {
    /// State after a completed swap: nothing selected, no amount.
    pub fn cleared() -> Self {
        Self {
            from_token: None,
            to_token: None,
            from_amount: None,
            to_amount: 0.0,
        }
    }

    pub fn token(&self, side: Side) -> Option<&str> {
        match side {
            Side::From => self.from_token.as_deref(),
            Side::To => self.to_token.as_deref(),
        }
    }

    pub fn token_slot(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::From => &mut self.from_token,
            Side::To => &mut self.to_token,
        }
    }
}
