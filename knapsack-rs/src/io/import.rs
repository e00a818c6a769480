use crate::entities::KPInstance;
use crate::error::{KnapsackError, Result};
use crate::io::ext_repr::ExtProduct;
use log::debug;

/// Prices are multiplied by this factor to obtain integral weights (dollars to cents).
pub const DEFAULT_PRICE_SCALE: u32 = 100;

/// Default budget in currency units.
pub const DEFAULT_CAPACITY_BUDGET: f64 = 100.0;

/// Converts a fractional price into an integral weight: `round(price * scale)`.
/// Exact halves round to the nearest even integer, so `0.125` dollars is `12` cents.
///
/// Fails for negative or non-finite prices and for results which do not fit in a `u64`.
pub fn price_to_weight(price: f64, scale: u32) -> Option<u64> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    let scaled = (price * scale as f64).round_ties_even();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    match scaled < u64::MAX as f64 {
        true => Some(scaled as u64),
        false => None,
    }
}

/// Converts external product records into a [`KPInstance`].
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Factor applied to prices and the budget before rounding to integral units
    pub price_scale: u32,
    /// Budget in currency units, converted into the capacity of the instance
    pub capacity_budget: f64,
}

impl Importer {
    pub fn new(price_scale: u32, capacity_budget: f64) -> Importer {
        Importer {
            price_scale,
            capacity_budget,
        }
    }

    /// Capacity of the instance: the budget converted with the same scaling as the prices.
    pub fn capacity(&self) -> Result<u64> {
        price_to_weight(self.capacity_budget, self.price_scale)
            .ok_or(KnapsackError::InvalidBudget(self.capacity_budget))
    }

    /// Values are the utilities of the products, weights are their converted prices.
    /// Item `i` of the instance corresponds to `products[i]`.
    pub fn import(&self, products: &[ExtProduct]) -> Result<KPInstance> {
        let values = products
            .iter()
            .enumerate()
            .map(|(index, p)| {
                u64::try_from(p.utility).map_err(|_| KnapsackError::NegativeValue {
                    index,
                    value: p.utility,
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let weights = products
            .iter()
            .enumerate()
            .map(|(index, p)| {
                price_to_weight(p.price, self.price_scale).ok_or(KnapsackError::InvalidPrice {
                    index,
                    price: p.price,
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        let capacity = self.capacity()?;
        debug!(
            "[IMP] imported {} products, capacity {capacity} (budget {:.2}, scale {})",
            products.len(),
            self.capacity_budget,
            self.price_scale
        );

        KPInstance::new(values, weights, capacity)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_SCALE, DEFAULT_CAPACITY_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, utility: i64) -> ExtProduct {
        ExtProduct {
            id,
            category: "misc".to_string(),
            price,
            utility,
        }
    }

    #[test]
    fn prices_are_rounded_to_cents() {
        assert_eq!(price_to_weight(12.34, 100), Some(1234));
        assert_eq!(price_to_weight(0.0049, 100), Some(0));
        assert_eq!(price_to_weight(19.999, 100), Some(2000));
        assert_eq!(price_to_weight(0.0, 100), Some(0));
        assert_eq!(price_to_weight(7.0, 1), Some(7));
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(price_to_weight(0.125, 100), Some(12));
        assert_eq!(price_to_weight(0.375, 100), Some(38));
        assert_eq!(price_to_weight(2.5, 1), Some(2));
        assert_eq!(price_to_weight(3.5, 1), Some(4));
        assert_eq!(price_to_weight(0.5, 1), Some(0));
    }

    #[test]
    fn halves_summing_to_the_budget_fit_exactly() {
        let products = vec![product(1, 50.125, 10), product(2, 49.875, 10)];
        let instance = Importer::default().import(&products).unwrap();

        assert_eq!(instance.weights(), &[5012, 4988]);
        assert_eq!(instance.weights().iter().sum::<u64>(), instance.capacity());
    }

    #[test]
    fn invalid_prices_are_rejected() {
        assert_eq!(price_to_weight(-0.01, 100), None);
        assert_eq!(price_to_weight(f64::NAN, 100), None);
        assert_eq!(price_to_weight(f64::INFINITY, 100), None);
        assert_eq!(price_to_weight(1e300, 100), None);
    }

    #[test]
    fn import_maps_records_in_order() {
        let products = vec![product(7, 1.5, 10), product(3, 0.25, 4)];
        let instance = Importer::default().import(&products).unwrap();

        assert_eq!(instance.values(), &[10, 4]);
        assert_eq!(instance.weights(), &[150, 25]);
        assert_eq!(instance.capacity(), 10_000);
    }

    #[test]
    fn import_rejects_negative_utility() {
        let products = vec![product(1, 1.0, 5), product(2, 1.0, -1)];
        let err = Importer::default().import(&products).unwrap_err();
        assert_eq!(err, KnapsackError::NegativeValue { index: 1, value: -1 });
    }

    #[test]
    fn import_rejects_negative_price() {
        let products = vec![product(1, -2.0, 5)];
        let err = Importer::default().import(&products).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidPrice { index: 0, .. }));
    }

    #[test]
    fn negative_budget_is_rejected() {
        let importer = Importer::new(100, -5.0);
        assert_eq!(
            importer.import(&[]).unwrap_err(),
            KnapsackError::InvalidBudget(-5.0)
        );
    }
}
