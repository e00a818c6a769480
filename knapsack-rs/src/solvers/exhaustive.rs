use crate::entities::{KPInstance, KPSolution};
use crate::error::Result;
use crate::solvers::Solver;
use crate::util::assertions;
use itertools::Itertools;
use log::debug;

/// Enumerates every subset of items and keeps the most valuable feasible one.
///
/// Subsets are visited by increasing size, and in lexicographic order within a size.
/// Only a strictly better value replaces the incumbent, so among equally valuable subsets
/// the first one visited is returned.
///
/// Runs in `O(2^n * n)`. There is no limit on `n`, callers are expected to keep it small (roughly 25 or less).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution> {
        let n = instance.n_items();
        let capacity = instance.capacity();

        // the empty subset (value 0) is the initial incumbent
        let mut best = KPSolution::empty();
        let mut n_feasible = 0u64;

        for size in 1..=n {
            for subset in (0..n).combinations(size) {
                let weight = instance.weight_of(&subset);
                if weight > capacity {
                    continue;
                }
                n_feasible += 1;
                let value = instance.value_of(&subset);
                if value > best.total_value {
                    best = KPSolution {
                        total_value: value,
                        total_weight: weight,
                        chosen: subset,
                    };
                }
            }
        }

        debug!(
            "[EXH] {n} items, {n_feasible} non-empty feasible subsets, best value {}",
            best.total_value
        );
        debug_assert!(assertions::solution_is_valid(instance, &best));
        debug_assert!(assertions::indices_ascending(&best));
        Ok(best)
    }

    fn is_exact(&self) -> bool {
        true
    }
}
