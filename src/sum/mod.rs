pub mod sum_to_n;

pub use sum_to_n::{parse_n, run_benchmark, SumLimits};
