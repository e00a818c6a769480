use serde::{Deserialize, Serialize};

/// External representation of an item: a product with a monetary price and an integer utility.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtProduct {
    /// Identifier of the product
    pub id: u64,
    /// Free form category label, only used for display
    #[serde(default)]
    pub category: String,
    /// Price in currency units (e.g. dollars), may be fractional
    pub price: f64,
    /// Utility of the product, used as the value of the item
    pub utility: i64,
}

/// External representation of a catalog of products.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCatalog {
    /// The name of the catalog
    pub name: String,
    pub products: Vec<ExtProduct>,
}

/// External representation of a solution: the selected products and their totals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSelection {
    /// Sum of the utilities of the selected products
    pub total_value: u64,
    /// Sum of the integral weights of the selected products
    pub total_weight: u64,
    /// Sum of the prices of the selected products, in currency units
    pub total_cost: f64,
    /// Selected products, in the order the solver chose them
    pub products: Vec<ExtProduct>,
}

impl ExtSelection {
    pub fn product_ids(&self) -> Vec<u64> {
        self.products.iter().map(|p| p.id).collect()
    }
}
