//! Product domain model.

use serde::{Deserialize, Serialize};

use stockroom_core::{Price, ProductId};

/// A product record.
///
/// The serde shape doubles as the inventory file format: an array of these
/// objects, with `price` as a plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label used for search.
    pub category: String,
    /// Unit price, non-negative.
    pub price: Price,
    /// Units in stock, never negative.
    pub stock_quantity: u32,
}

impl Product {
    /// Case-insensitive substring match on name or category.
    ///
    /// An empty query matches every product.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}
