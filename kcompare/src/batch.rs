use std::time::{Duration, Instant};

use anyhow::{Result, ensure};
use knapsack_rs::entities::{KPInstance, KPSolution};
use knapsack_rs::solvers::{Algorithm, KPSolver, Solver};
use log::{debug, info};
use thousands::Separable;

/// Outcome of solving the same instance repeatedly with one algorithm.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub algorithm: Algorithm,
    pub solution: KPSolution,
    /// Wall-clock duration of every individual call
    pub run_times: Vec<Duration>,
}

impl BatchReport {
    pub fn n_runs(&self) -> usize {
        self.run_times.len()
    }

    pub fn mean(&self) -> Duration {
        match self.run_times.len() {
            0 => Duration::ZERO,
            n => {
                let total = self.run_times.iter().sum::<Duration>();
                let nanos = total.as_nanos() / n as u128;
                Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
            }
        }
    }

    pub fn min(&self) -> Duration {
        self.run_times.iter().min().copied().unwrap_or_default()
    }

    pub fn max(&self) -> Duration {
        self.run_times.iter().max().copied().unwrap_or_default()
    }
}

/// Solves `instance` `n_runs` times from scratch, timing every call.
/// Fails if the solver fails, or if two runs disagree on the solution.
pub fn run_batch(solver: &KPSolver, instance: &KPInstance, n_runs: usize) -> Result<BatchReport> {
    ensure!(n_runs > 0, "at least one run is required");

    let mut run_times = Vec::with_capacity(n_runs);
    let mut solution: Option<KPSolution> = None;

    for run in 0..n_runs {
        let start = Instant::now();
        let sol = solver.solve(instance)?;
        let elapsed = start.elapsed();
        debug!(
            "[CMP] {} run {}/{n_runs}: {:.3}ms",
            solver.name(),
            run + 1,
            elapsed.as_secs_f64() * 1000.0
        );
        run_times.push(elapsed);

        if let Some(prev) = &solution {
            ensure!(
                prev == &sol,
                "{} returned different solutions for identical input",
                solver.name()
            );
        }
        solution = Some(sol);
    }

    let report = BatchReport {
        algorithm: solver.algorithm(),
        solution: solution.unwrap_or_default(),
        run_times,
    };
    info!(
        "[CMP] {} finished {} runs, mean {:.3}ms ({} items, value {})",
        solver.name(),
        report.n_runs().separate_with_commas(),
        report.mean().as_secs_f64() * 1000.0,
        instance.n_items().separate_with_commas(),
        report.solution.total_value.separate_with_commas()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(run_times: Vec<Duration>) -> BatchReport {
        BatchReport {
            algorithm: Algorithm::Greedy,
            solution: KPSolution::empty(),
            run_times,
        }
    }

    #[test]
    fn run_time_statistics() {
        let r = report(vec![
            Duration::from_millis(1),
            Duration::from_millis(3),
            Duration::from_millis(2),
        ]);
        assert_eq!(r.mean(), Duration::from_millis(2));
        assert_eq!(r.min(), Duration::from_millis(1));
        assert_eq!(r.max(), Duration::from_millis(3));
    }

    #[test]
    fn mean_of_no_runs_is_zero() {
        assert_eq!(report(vec![]).mean(), Duration::ZERO);
    }

    #[test]
    fn mean_over_many_runs() {
        let mut r = report(vec![Duration::ZERO; 1 << 20]);
        r.run_times[0] = Duration::from_secs(1 << 20);
        assert_eq!(r.mean(), Duration::from_secs(1));
    }
}
