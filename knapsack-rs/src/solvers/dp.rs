use crate::entities::{KPInstance, KPSolution};
use crate::error::{KnapsackError, Result};
use crate::solvers::Solver;
use crate::util::assertions;
use log::{debug, trace};
use ndarray::Array2;

/// Default upper bound on the number of cells of the tabulation (2 GiB of `u64`s).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 28;

/// Exact solver using bottom-up tabulation.
///
/// `dp[i][w]` holds the maximum value achievable with the first `i` items and a budget of `w`.
/// The chosen items are recovered by walking the table backwards from `dp[n][capacity]`:
/// item `i - 1` was taken iff `dp[i][w] != dp[i - 1][w]`.
///
/// Runs in `O(n * capacity)` time and space. Capacity and weights must therefore be expressed in integral units
/// small enough for the table to fit within [`DPSolver::max_table_cells`].
#[derive(Debug, Clone, Copy)]
pub struct DPSolver {
    pub max_table_cells: usize,
}

impl DPSolver {
    pub fn new(max_table_cells: usize) -> Self {
        Self { max_table_cells }
    }

    /// Dimensions `(n + 1, capacity + 1)` of the table, if it fits within the cell limit.
    fn table_dims(&self, instance: &KPInstance) -> Result<(usize, usize)> {
        let rows = instance.n_items() as u128 + 1;
        let cols = instance.capacity() as u128 + 1;
        let cells = rows.checked_mul(cols).unwrap_or(u128::MAX);

        if cells > self.max_table_cells as u128 {
            return Err(KnapsackError::TableTooLarge {
                cells,
                limit: self.max_table_cells,
            });
        }
        // both fit in usize since their product does not exceed a usize
        Ok((rows as usize, cols as usize))
    }
}

impl Default for DPSolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TABLE_CELLS)
    }
}

impl Solver for DPSolver {
    fn name(&self) -> &'static str {
        "dynamic programming"
    }

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution> {
        if instance.n_items() == 0 {
            return Ok(KPSolution::empty());
        }
        let (rows, cols) = self.table_dims(instance)?;
        debug!("[DP] allocating {rows}x{cols} table");

        let mut dp = Array2::<u64>::zeros((rows, cols));
        for i in 1..rows {
            let v_i = instance.value(i - 1);
            // weights that do not fit in a usize never fit in the table either
            let w_i = usize::try_from(instance.weight(i - 1)).unwrap_or(usize::MAX);
            for w in 0..cols {
                let without = dp[[i - 1, w]];
                dp[[i, w]] = if w_i <= w {
                    without.max(dp[[i - 1, w - w_i]] + v_i)
                } else {
                    without
                };
            }
        }

        // backward walk over the rows to recover the chosen items
        let mut chosen = vec![];
        let mut w = cols - 1;
        for i in (1..rows).rev() {
            if dp[[i, w]] != dp[[i - 1, w]] {
                trace!("[DP] item {} taken at residual capacity {w}", i - 1);
                chosen.push(i - 1);
                // the item was taken, so its weight is at most w
                w -= instance.weight(i - 1) as usize;
            }
        }
        chosen.reverse();

        let solution = KPSolution::from_indices(instance, chosen);
        debug_assert_eq!(solution.total_value, dp[[rows - 1, cols - 1]]);
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        debug_assert!(assertions::indices_ascending(&solution));

        debug!(
            "[DP] optimum {} using {} items",
            solution.total_value,
            solution.n_chosen()
        );
        Ok(solution)
    }

    fn is_exact(&self) -> bool {
        true
    }
}
