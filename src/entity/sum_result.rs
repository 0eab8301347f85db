use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SumResult {
    pub method: &'static str,
    pub complexity: &'static str,
    pub description: &'static str,
    pub result: Option<u128>, // None when the method was skipped for this n
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SumReport {
    pub n: u64,
    pub results: Vec<SumResult>,
    pub warnings: Vec<String>,
}
