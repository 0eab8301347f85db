#[derive(Debug, Clone, PartialEq)]
pub enum SwapOutcome {
    Success {
        from_amount: f64,
        to_amount: f64,
        from_symbol: String,
        to_symbol: String,
    },
    Failure {
        reason: String,
    },
}

impl SwapOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SwapOutcome::Success { .. })
    }
}
