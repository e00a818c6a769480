use crate::entities::{KPInstance, KPSolution};
use crate::error::Result;
use crate::solvers::Solver;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, trace};
use std::cmp::{Ordering, Reverse};

/// Value per unit of weight of an item, compared exactly (no floating point).
///
/// An item without weight but with a positive value has an [`Density::Unbounded`] density and ranks
/// above every item with a positive weight. An item with neither weight nor value has a density of zero.
#[derive(Debug, Clone, Copy)]
pub enum Density {
    Ratio { value: u64, weight: u64 },
    Unbounded,
}

impl Density {
    pub fn of(value: u64, weight: u64) -> Self {
        match (value, weight) {
            (0, 0) => Density::Ratio {
                value: 0,
                weight: 1,
            },
            (_, 0) => Density::Unbounded,
            (value, weight) => Density::Ratio { value, weight },
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Density::Ratio { value, weight } => *value as f64 / *weight as f64,
            Density::Unbounded => f64::INFINITY,
        }
    }
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Density::Unbounded, Density::Unbounded) => Ordering::Equal,
            (Density::Unbounded, Density::Ratio { .. }) => Ordering::Greater,
            (Density::Ratio { .. }, Density::Unbounded) => Ordering::Less,
            (
                Density::Ratio {
                    value: va,
                    weight: wa,
                },
                Density::Ratio {
                    value: vb,
                    weight: wb,
                },
            ) => (*va as u128 * *wb as u128).cmp(&(*vb as u128 * *wa as u128)),
        }
    }
}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

/// Heuristic: admits items by decreasing density as long as they fit. Not guaranteed to be optimal.
///
/// Items with equal density keep their original relative order.
/// Skipped items are never reconsidered.
/// The chosen indices are returned in admission order, not in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Indices of all items, sorted by decreasing density (stable).
    pub fn density_order(instance: &KPInstance) -> Vec<usize> {
        instance
            .items()
            .sorted_by_key(|&(_, v, w)| Reverse(Density::of(v, w)))
            .map(|(i, _, _)| i)
            .collect()
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution> {
        let capacity = instance.capacity();
        let mut solution = KPSolution::empty();

        for i in Self::density_order(instance) {
            let weight = instance.weight(i);
            // cannot overflow, the total weight of the instance fits in a u64
            if solution.total_weight + weight <= capacity {
                trace!("[GRD] admitting item {i} (w: {weight}, v: {})", instance.value(i));
                solution.total_weight += weight;
                solution.total_value += instance.value(i);
                solution.chosen.push(i);
            }
        }

        debug!(
            "[GRD] admitted {}/{} items, value {}",
            solution.n_chosen(),
            instance.n_items(),
            solution.total_value
        );
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        Ok(solution)
    }

    fn is_exact(&self) -> bool {
        false
    }
}
