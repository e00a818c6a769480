use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use knapsack_rs::solvers::Algorithm;
use log::LevelFilter;

use crate::config::CompareConfig;
use crate::dataset::DatasetSize;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Catalog of products (.csv or .json)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the JSON report to, no report is written if absent
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmChoice>,
    #[arg(short, long, value_enum, conflicts_with = "dataset_fraction")]
    pub dataset_size: Option<DatasetSize>,
    #[arg(long, value_name = "FRACTION")]
    pub dataset_fraction: Option<f32>,
    #[arg(short, long, value_name = "N")]
    pub batch_runs: Option<usize>,
    /// Budget in currency units
    #[arg(long, value_name = "BUDGET")]
    pub capacity: Option<f64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Command line arguments take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut CompareConfig) {
        if let Some(choice) = self.algorithm {
            config.algorithms = choice.algorithms();
        }
        if let Some(size) = self.dataset_size {
            config.dataset_fraction = size.fraction();
        }
        if let Some(fraction) = self.dataset_fraction {
            config.dataset_fraction = fraction;
        }
        if let Some(runs) = self.batch_runs {
            config.batch_runs = runs;
        }
        if let Some(budget) = self.capacity {
            config.capacity_budget = budget;
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Exhaustive,
    Dp,
    Greedy,
    /// Exhaustive and dynamic programming
    Exact,
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Exhaustive => vec![Algorithm::Exhaustive],
            AlgorithmChoice::Dp => vec![Algorithm::DynamicProgramming],
            AlgorithmChoice::Greedy => vec![Algorithm::Greedy],
            AlgorithmChoice::Exact => vec![Algorithm::Exhaustive, Algorithm::DynamicProgramming],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}
