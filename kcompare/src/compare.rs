use anyhow::{Context, Result};
use knapsack_rs::io::ext_repr::ExtProduct;
use knapsack_rs::solvers::Algorithm;
use log::{info, warn};

use crate::batch::{BatchReport, run_batch};
use crate::config::CompareConfig;
use crate::io::output::CompareOutput;
use crate::report;

/// Imports `products`, runs every configured algorithm on them and collects the results.
pub fn compare(
    catalog_name: &str,
    products: &[ExtProduct],
    config: &CompareConfig,
) -> Result<CompareOutput> {
    let instance = config
        .importer()
        .import(products)
        .context("could not convert catalog into a knapsack instance")?;

    info!(
        "[CMP] {} items, capacity: ${:.2} ({} units)",
        instance.n_items(),
        config.capacity_budget,
        instance.capacity()
    );
    if instance.is_degenerate() {
        warn!("[CMP] no items or no capacity, only zero-weight items can be selected");
    }

    let mut reports: Vec<BatchReport> = vec![];
    for &algorithm in &config.algorithms {
        if algorithm == Algorithm::Exhaustive && instance.n_items() > config.exhaustive_warn_limit
        {
            warn!(
                "[CMP] {} items may be slow for exhaustive search (2^{} subsets)",
                instance.n_items(),
                instance.n_items()
            );
        }
        let solver = config.solver(algorithm);
        let report = run_batch(&solver, &instance, config.batch_runs)
            .with_context(|| format!("{algorithm} failed"))?;
        reports.push(report);
    }

    let best_exact = report::best_exact_value(&reports);
    let runs = reports
        .iter()
        .map(|r| report::to_run_output(r, products, best_exact))
        .collect::<Vec<_>>();

    runs.iter().for_each(report::log_run);
    report::log_summary(&reports, &runs);

    Ok(CompareOutput {
        catalog: catalog_name.to_string(),
        n_items: instance.n_items(),
        capacity: instance.capacity(),
        config: config.clone(),
        runs,
    })
}
