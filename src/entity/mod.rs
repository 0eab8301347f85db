mod app_error;
mod price_record;
mod state;
mod sum_result;
mod swap_order;
mod swap_outcome;
mod swap_request;
mod token;

pub use app_error::AppError;
pub use price_record::PriceRecord;
pub use state::State;
pub use sum_result::{SumReport, SumResult};
pub use swap_order::SwapOrder;
pub use swap_outcome::SwapOutcome;
pub use swap_request::{Side, SwapRequest};
pub use token::Token;
