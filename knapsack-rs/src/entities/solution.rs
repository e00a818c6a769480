use crate::entities::KPInstance;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A selection of items of a [`KPInstance`], together with its total value and weight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KPSolution {
    pub total_value: u64,
    pub total_weight: u64,
    /// Indices of the selected items, in the order the solver chose them
    pub chosen: Vec<usize>,
}

impl KPSolution {
    /// The empty selection: no items, no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from a set of chosen indices, computing the totals from the instance.
    pub fn from_indices(instance: &KPInstance, chosen: Vec<usize>) -> Self {
        Self {
            total_value: instance.value_of(&chosen),
            total_weight: instance.weight_of(&chosen),
            chosen,
        }
    }

    pub fn n_chosen(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Chosen indices in ascending order, regardless of the order the solver produced them in.
    pub fn sorted_indices(&self) -> Vec<usize> {
        self.chosen.iter().copied().sorted_unstable().collect()
    }
}
