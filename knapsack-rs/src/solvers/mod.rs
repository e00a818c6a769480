mod dp;
mod exhaustive;
mod greedy;

#[doc(inline)]
pub use dp::{DEFAULT_MAX_TABLE_CELLS, DPSolver};
#[doc(inline)]
pub use exhaustive::ExhaustiveSolver;
#[doc(inline)]
pub use greedy::{Density, GreedySolver};

use crate::entities::{KPInstance, KPSolution};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Common contract of all knapsack solvers.
///
/// Solvers hold configuration only. Every call to [`Solver::solve`] recomputes its answer from scratch,
/// and a successful call always returns a solution whose total weight does not exceed the capacity.
pub trait Solver {
    fn name(&self) -> &'static str;

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution>;

    /// Whether the solver guarantees an optimal total value.
    fn is_exact(&self) -> bool;
}

/// Validates `(values, weights, capacity)` into a [`KPInstance`] and solves it.
/// Invalid input is rejected before the solver runs.
pub fn solve(
    solver: &impl Solver,
    values: &[u64],
    weights: &[u64],
    capacity: u64,
) -> Result<KPSolution> {
    let instance = KPInstance::new(values.to_vec(), weights.to_vec(), capacity)?;
    solver.solve(&instance)
}

/// Identifies one of the solution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Exhaustive,
    DynamicProgramming,
    Greedy,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Exhaustive,
        Algorithm::DynamicProgramming,
        Algorithm::Greedy,
    ];

    pub fn is_exact(&self) -> bool {
        !matches!(self, Algorithm::Greedy)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::DynamicProgramming => "dynamic programming",
            Algorithm::Greedy => "greedy",
        };
        write!(f, "{name}")
    }
}

/// Any of the solvers, selectable at runtime.
#[derive(Debug, Clone, Copy)]
pub enum KPSolver {
    Exhaustive(ExhaustiveSolver),
    DP(DPSolver),
    Greedy(GreedySolver),
}

impl KPSolver {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            KPSolver::Exhaustive(_) => Algorithm::Exhaustive,
            KPSolver::DP(_) => Algorithm::DynamicProgramming,
            KPSolver::Greedy(_) => Algorithm::Greedy,
        }
    }
}

impl From<Algorithm> for KPSolver {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Exhaustive => KPSolver::Exhaustive(ExhaustiveSolver),
            Algorithm::DynamicProgramming => KPSolver::DP(DPSolver::default()),
            Algorithm::Greedy => KPSolver::Greedy(GreedySolver),
        }
    }
}

impl Solver for KPSolver {
    fn name(&self) -> &'static str {
        match self {
            KPSolver::Exhaustive(s) => s.name(),
            KPSolver::DP(s) => s.name(),
            KPSolver::Greedy(s) => s.name(),
        }
    }

    fn solve(&self, instance: &KPInstance) -> Result<KPSolution> {
        match self {
            KPSolver::Exhaustive(s) => s.solve(instance),
            KPSolver::DP(s) => s.solve(instance),
            KPSolver::Greedy(s) => s.solve(instance),
        }
    }

    fn is_exact(&self) -> bool {
        self.algorithm().is_exact()
    }
}
