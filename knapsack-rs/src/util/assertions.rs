use crate::entities::{KPInstance, KPSolution};
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_is_consistent(instance: &KPInstance) -> bool {
    instance.values().len() == instance.weights().len()
}

/// Checks every invariant of a solution with respect to its instance:
/// distinct indices within bounds, correct totals and a total weight within capacity.
pub fn solution_is_valid(instance: &KPInstance, solution: &KPSolution) -> bool {
    let KPSolution {
        total_value,
        total_weight,
        chosen,
    } = solution;

    if !chosen.iter().all(|&i| i < instance.n_items()) {
        error!("solution contains out of bounds index: {chosen:?}");
        return false;
    }
    if !chosen.iter().all_unique() {
        error!("solution contains duplicate indices: {chosen:?}");
        return false;
    }
    if *total_value != instance.value_of(chosen) || *total_weight != instance.weight_of(chosen) {
        error!("solution totals do not match its items");
        return false;
    }
    solution_is_feasible(instance, solution)
}

pub fn solution_is_feasible(instance: &KPInstance, solution: &KPSolution) -> bool {
    instance.weight_of(&solution.chosen) <= instance.capacity()
}

pub fn indices_ascending(solution: &KPSolution) -> bool {
    solution.chosen.iter().tuple_windows().all(|(a, b)| a < b)
}
