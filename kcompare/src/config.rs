use anyhow::{Result, ensure};
use knapsack_rs::io::{DEFAULT_CAPACITY_BUDGET, DEFAULT_PRICE_SCALE, Importer};
use knapsack_rs::solvers::{Algorithm, DEFAULT_MAX_TABLE_CELLS, DPSolver, KPSolver};
use serde::{Deserialize, Serialize};

/// Configuration of a comparison run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompareConfig {
    /// Algorithms to run, in this order
    pub algorithms: Vec<Algorithm>,
    /// Fraction of the catalog (taken from the front) to solve, in (0, 1]
    pub dataset_fraction: f32,
    /// Number of times every algorithm is run to measure its runtime
    pub batch_runs: usize,
    /// Budget in currency units, becomes the capacity of the knapsack
    pub capacity_budget: f64,
    /// Factor converting prices and budget to integral weights (100: dollars to cents)
    pub price_scale: u32,
    /// A warning is logged when the exhaustive solver is run on more items than this
    pub exhaustive_warn_limit: usize,
    /// Maximum number of cells of the dynamic programming table
    pub dp_max_table_cells: usize,
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.algorithms.is_empty(), "no algorithms selected");
        ensure!(
            self.dataset_fraction > 0.0 && self.dataset_fraction <= 1.0,
            "dataset fraction should be in (0, 1], got {}",
            self.dataset_fraction
        );
        ensure!(self.batch_runs > 0, "at least one batch run is required");
        ensure!(
            self.capacity_budget.is_finite() && self.capacity_budget >= 0.0,
            "capacity budget should be a non-negative number, got {}",
            self.capacity_budget
        );
        ensure!(self.price_scale > 0, "price scale should be positive");
        ensure!(
            self.dp_max_table_cells > 0,
            "dynamic programming table limit should be positive"
        );
        Ok(())
    }

    pub fn importer(&self) -> Importer {
        Importer::new(self.price_scale, self.capacity_budget)
    }

    pub fn solver(&self, algorithm: Algorithm) -> KPSolver {
        match algorithm {
            Algorithm::DynamicProgramming => KPSolver::DP(DPSolver::new(self.dp_max_table_cells)),
            _ => KPSolver::from(algorithm),
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            dataset_fraction: 1.0,
            batch_runs: 1,
            capacity_budget: DEFAULT_CAPACITY_BUDGET,
            price_scale: DEFAULT_PRICE_SCALE,
            exhaustive_warn_limit: 25,
            dp_max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}
