mod export;
mod import;

///External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Maps a solution back onto the records it was imported from.
pub use export::export;

/// Converts records into a knapsack instance.
pub use import::{DEFAULT_CAPACITY_BUDGET, DEFAULT_PRICE_SCALE, Importer, price_to_weight};
