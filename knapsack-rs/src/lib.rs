//!
//! Exact and heuristic solvers for the 0-1 knapsack problem.
//!
//! Three interchangeable strategies share one input contract ([`KPInstance`](entities::KPInstance))
//! and one output contract ([`KPSolution`](entities::KPSolution)):
//! * [`ExhaustiveSolver`](solvers::ExhaustiveSolver): enumerates every subset, exact, exponential.
//! * [`DPSolver`](solvers::DPSolver): bottom-up tabulation, exact, `O(n * capacity)`.
//! * [`GreedySolver`](solvers::GreedySolver): density ordering, fast, not guaranteed optimal.
//!

/// Problem instances and solutions
pub mod entities;

/// Error taxonomy shared by every solver and the import layer
pub mod error;

/// Importing and exporting external (serializable) representations
pub mod io;

/// The solution strategies
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::KnapsackError;
