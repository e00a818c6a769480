use crate::entities::KPSolution;
use crate::io::ext_repr::{ExtProduct, ExtSelection};

/// Maps the chosen indices of a solution back onto the records the instance was imported from.
///
/// `products` must be the same slice that was passed to [`Importer::import`](crate::io::Importer::import).
pub fn export(products: &[ExtProduct], solution: &KPSolution) -> ExtSelection {
    let products = solution
        .chosen
        .iter()
        .map(|&i| products[i].clone())
        .collect::<Vec<_>>();

    ExtSelection {
        total_value: solution.total_value,
        total_weight: solution.total_weight,
        total_cost: products.iter().map(|p| p.price).sum(),
        products,
    }
}
