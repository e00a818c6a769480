use itertools::Itertools;
use knapsack_rs::io::ext_repr::ExtProduct;
use knapsack_rs::io::export;
use log::{error, info};

use crate::batch::BatchReport;
use crate::io::output::RunOutput;

/// Best value found by any exact algorithm, `None` if no exact algorithm was run.
pub fn best_exact_value(reports: &[BatchReport]) -> Option<u64> {
    reports
        .iter()
        .filter(|r| r.algorithm.is_exact())
        .map(|r| r.solution.total_value)
        .max()
}

/// All exact algorithms should reach the same value, even if they pick different items.
pub fn exact_algorithms_agree(reports: &[BatchReport]) -> bool {
    reports
        .iter()
        .filter(|r| r.algorithm.is_exact())
        .map(|r| r.solution.total_value)
        .all_equal()
}

pub fn to_run_output(
    report: &BatchReport,
    products: &[ExtProduct],
    best_exact: Option<u64>,
) -> RunOutput {
    let ms = |d: std::time::Duration| d.as_secs_f64() * 1000.0;
    RunOutput {
        algorithm: report.algorithm,
        selection: export(products, &report.solution),
        batch_runs: report.n_runs(),
        mean_run_time_ms: ms(report.mean()),
        min_run_time_ms: ms(report.min()),
        max_run_time_ms: ms(report.max()),
        optimality_gap: best_exact.map(|best| best.saturating_sub(report.solution.total_value)),
    }
}

/// Logs the result of one algorithm: value, cost, runtime and the chosen products.
pub fn log_run(run: &RunOutput) {
    info!("[CMP] === {} ===", run.algorithm);
    info!("[CMP] value: {}", run.selection.total_value);
    info!("[CMP] cost: ${:.2}", run.selection.total_cost);
    info!(
        "[CMP] runtime: {:.6}s (mean of {} runs, min {:.6}s, max {:.6}s)",
        run.mean_run_time_ms / 1000.0,
        run.batch_runs,
        run.min_run_time_ms / 1000.0,
        run.max_run_time_ms / 1000.0
    );
    info!("[CMP] items chosen: {}", run.selection.products.len());
    for p in &run.selection.products {
        info!(
            "[CMP]   {} | {} | ${:.2} | util {}",
            p.id, p.category, p.price, p.utility
        );
    }
}

/// Logs a one-line summary per algorithm and flags exact algorithms which disagree.
pub fn log_summary(reports: &[BatchReport], runs: &[RunOutput]) {
    if !exact_algorithms_agree(reports) {
        error!(
            "[CMP] exact algorithms disagree on the optimum: {:?}",
            reports
                .iter()
                .filter(|r| r.algorithm.is_exact())
                .map(|r| (r.algorithm, r.solution.total_value))
                .collect_vec()
        );
    }
    info!("[CMP] {:<20} {:>10} {:>12} {:>14} {:>6}", "algorithm", "value", "cost", "runtime (ms)", "gap");
    for run in runs {
        let gap = run
            .optimality_gap
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        info!(
            "[CMP] {:<20} {:>10} {:>12.2} {:>14.3} {:>6}",
            run.algorithm.to_string(),
            run.selection.total_value,
            run.selection.total_cost,
            run.mean_run_time_ms,
            gap
        );
    }
}
