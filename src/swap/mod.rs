pub mod form;
pub mod rate;
pub mod simulator;

pub use form::{FormPhase, SwapSession};
pub use rate::{compute_to_amount, exchange_rate, format_rate, usd_total};
pub use simulator::{SimulatedSwapExecutor, SwapExecutor};
