use clap::ValueEnum;
use knapsack_rs::io::ext_repr::ExtProduct;
use serde::{Deserialize, Serialize};

/// Named portions of a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl DatasetSize {
    pub fn fraction(&self) -> f32 {
        match self {
            DatasetSize::Tiny => 0.05,
            DatasetSize::Small => 0.10,
            DatasetSize::Medium => 0.25,
            DatasetSize::Large => 0.50,
            DatasetSize::Huge => 1.00,
        }
    }
}

/// Number of records kept from a catalog of `n` records: `max(1, floor(n * fraction))`, never more than `n`.
pub fn slice_len(n: usize, fraction: f32) -> usize {
    if n == 0 {
        return 0;
    }
    let k = (n as f64 * fraction as f64).floor() as usize;
    k.clamp(1, n)
}

/// The first records of the catalog, see [`slice_len`].
pub fn slice_catalog(products: &[ExtProduct], fraction: f32) -> &[ExtProduct] {
    &products[..slice_len(products.len(), fraction)]
}
