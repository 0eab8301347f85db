//! Three ways to sum the integers `1..=n`, timed against each other.

use std::time::Instant;

use crate::entity::{AppError, SumReport, SumResult};

/// Above this n the recursive method gets a performance warning.
pub const LARGE_N_WARNING: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumLimits {
    pub max_n: u64,
    pub recursion_limit: u64,
}

pub fn sum_to_n_iterative(n: u64) -> u128 {
    let mut sum: u128 = 0;
    for i in 1..=n {
        sum += i as u128;
    }
    sum
}

pub fn sum_to_n_formula(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

pub fn sum_to_n_recursive(n: u64) -> u128 {
    if n <= 1 {
        return n as u128;
    }
    n as u128 + sum_to_n_recursive(n - 1)
}

struct Method {
    name: &'static str,
    complexity: &'static str,
    description: &'static str,
    func: fn(u64) -> u128,
    recursive: bool,
}

const METHODS: [Method; 3] = [
    Method {
        name: "Iterative Loop",
        complexity: "O(n)",
        description: "Simple and readable",
        func: sum_to_n_iterative,
        recursive: false,
    },
    Method {
        name: "Math Formula (n * (n + 1) / 2)",
        complexity: "O(1)",
        description: "Most efficient",
        func: sum_to_n_formula,
        recursive: false,
    },
    Method {
        name: "Recursive",
        complexity: "O(n)",
        description: "Readable, but deep inputs exhaust the stack",
        func: sum_to_n_recursive,
        recursive: true,
    },
];

/// Parses user input into n, rejecting anything but a non-negative integer.
pub fn parse_n(input: &str, limits: SumLimits) -> Result<u64, AppError> {
    let n = input
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::validation("Please enter a valid positive integer"))?;

    if n > limits.max_n {
        return Err(AppError::validation(format!(
            "n must not exceed {}",
            limits.max_n
        )));
    }

    Ok(n)
}

/// Runs every method for `n` and times each one.
pub fn run_benchmark(n: u64, limits: SumLimits) -> SumReport {
    let mut warnings = Vec::new();
    if n > LARGE_N_WARNING {
        warnings.push(
            "Large numbers may cause performance issues with recursive approach".to_string(),
        );
    }
    if n > limits.recursion_limit {
        warnings.push(format!(
            "Recursive approach skipped above n = {}",
            limits.recursion_limit
        ));
    }

    let results = METHODS
        .iter()
        .map(|method| {
            if method.recursive && n > limits.recursion_limit {
                return SumResult {
                    method: method.name,
                    complexity: method.complexity,
                    description: method.description,
                    result: None,
                    elapsed: Default::default(),
                };
            }

            let started = Instant::now();
            let result = (method.func)(n);
            let elapsed = started.elapsed();

            SumResult {
                method: method.name,
                complexity: method.complexity,
                description: method.description,
                result: Some(result),
                elapsed,
            }
        })
        .collect();

    SumReport {
        n,
        results,
        warnings,
    }
}
