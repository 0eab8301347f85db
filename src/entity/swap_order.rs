use crate::entity::Token;

/// Validated snapshot of a swap request, handed to the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOrder {
    pub from: Token,
    pub to: Token,
    pub from_amount: f64,
    pub to_amount: f64,
}
