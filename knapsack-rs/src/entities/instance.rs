use crate::error::{KnapsackError, Result};
use crate::util::assertions;
use itertools::Itertools;

/// Instance of the 0-1 Knapsack Problem: a set of items, each with a value and a weight, and a single capacity.
/// Items are referred to by their index in `values` and `weights`.
///
/// Can only be created through the validating constructors, and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KPInstance {
    values: Vec<u64>,
    weights: Vec<u64>,
    capacity: u64,
}

impl KPInstance {
    /// Creates a new instance.
    /// Fails if `values` and `weights` differ in length, or if the sum of either overflows a `u64`.
    pub fn new(values: Vec<u64>, weights: Vec<u64>, capacity: u64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        // guarantees that no subset sum computed by a solver can overflow
        checked_total(&values).ok_or(KnapsackError::Overflow("total value"))?;
        checked_total(&weights).ok_or(KnapsackError::Overflow("total weight"))?;

        let instance = Self {
            values,
            weights,
            capacity,
        };
        debug_assert!(assertions::instance_is_consistent(&instance));
        Ok(instance)
    }

    /// Creates a new instance from signed input, rejecting any negative value, weight or capacity.
    pub fn from_signed(values: &[i64], weights: &[i64], capacity: i64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let values = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u64::try_from(value).map_err(|_| KnapsackError::NegativeValue { index, value })
            })
            .collect::<Result<Vec<u64>>>()?;
        let weights = weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| {
                u64::try_from(weight).map_err(|_| KnapsackError::NegativeWeight { index, weight })
            })
            .collect::<Result<Vec<u64>>>()?;
        let capacity =
            u64::try_from(capacity).map_err(|_| KnapsackError::NegativeCapacity(capacity))?;

        Self::new(values, weights, capacity)
    }

    pub fn n_items(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> u64 {
        self.values[index]
    }

    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// No items, or no capacity to put them in.
    pub fn is_degenerate(&self) -> bool {
        self.values.is_empty() || self.capacity == 0
    }

    /// Sum of the values of the items at `indices`.
    pub fn value_of(&self, indices: &[usize]) -> u64 {
        indices.iter().map(|&i| self.values[i]).sum()
    }

    /// Sum of the weights of the items at `indices`.
    pub fn weight_of(&self, indices: &[usize]) -> u64 {
        indices.iter().map(|&i| self.weights[i]).sum()
    }

    /// Iterator over `(index, value, weight)` of all items.
    pub fn items(&self) -> impl Iterator<Item = (usize, u64, u64)> + '_ {
        self.values
            .iter()
            .zip_eq(self.weights.iter())
            .enumerate()
            .map(|(i, (&v, &w))| (i, v, w))
    }
}

fn checked_total(xs: &[u64]) -> Option<u64> {
    xs.iter().try_fold(0u64, |acc, &x| acc.checked_add(x))
}
