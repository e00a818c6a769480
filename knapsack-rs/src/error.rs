use thiserror::Error;

/// Reasons an instance can be rejected or a solver can refuse to run.
///
/// Degenerate input (no items, or zero capacity) is not an error: every solver returns the empty solution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KnapsackError {
    #[error("values ({values}) and weights ({weights}) differ in length")]
    LengthMismatch { values: usize, weights: usize },

    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    #[error("item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("capacity {0} is negative")]
    NegativeCapacity(i64),

    #[error("price {price} of record {index} cannot be converted to an integral weight")]
    InvalidPrice { index: usize, price: f64 },

    #[error("budget {0} cannot be converted to an integral capacity")]
    InvalidBudget(f64),

    #[error("{0} overflows a 64-bit integer")]
    Overflow(&'static str),

    #[error("dynamic programming table needs {cells} cells, limit is {limit}")]
    TableTooLarge { cells: u128, limit: usize },
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
