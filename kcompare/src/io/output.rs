use knapsack_rs::io::ext_repr::ExtSelection;
use knapsack_rs::solvers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::config::CompareConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CompareOutput {
    /// Name of the catalog the items were taken from
    pub catalog: String,
    /// Number of items in the (sliced) instance
    pub n_items: usize,
    /// Capacity in integral weight units
    pub capacity: u64,
    pub config: CompareConfig,
    pub runs: Vec<RunOutput>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct RunOutput {
    pub algorithm: Algorithm,
    pub selection: ExtSelection,
    pub batch_runs: usize,
    pub mean_run_time_ms: f64,
    pub min_run_time_ms: f64,
    pub max_run_time_ms: f64,
    /// Difference with the best value found by an exact algorithm, if any exact algorithm was run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimality_gap: Option<u64>,
}
