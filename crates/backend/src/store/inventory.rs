//! Inventory store: product CRUD and stock adjustment over a file-backed
//! product list.

use std::path::{Path, PathBuf};

use thiserror::Error;

use stockroom_core::ProductId;

use super::StorageError;
use crate::models::product::Product;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product with this ID already exists.
    #[error("product {0} already exists")]
    DuplicateProductId(ProductId),

    /// Product not found.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The adjustment would reduce stock below zero.
    #[error("cannot reduce stock below zero ({available} available, adjustment {delta})")]
    InsufficientStock {
        /// Units currently in stock.
        available: u32,
        /// The rejected adjustment.
        delta: i64,
    },

    /// The adjustment would overflow the stock counter.
    #[error("stock adjustment overflows ({available} available, adjustment {delta})")]
    StockOverflow {
        /// Units currently in stock.
        available: u32,
        /// The rejected adjustment.
        delta: i64,
    },

    /// Storage error while persisting the collection.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// File-backed inventory store.
///
/// Products are kept in insertion order, matching the on-disk array. Every
/// successful mutation rewrites the backing file.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    products: Vec<Product>,
}

impl InventoryStore {
    /// Open the store, loading the inventory file into memory.
    ///
    /// A missing or malformed file yields an empty store. The parent
    /// directory is created so the first mutation can persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        super::ensure_parent_dir(&path)?;

        let products: Vec<Product> = super::load_or_default(&path)?;

        let store = Self { path, products };
        tracing::debug!(
            path = %store.path.display(),
            products = store.products.len(),
            "inventory store opened"
        );
        Ok(store)
    }

    /// Add a product.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateProductId` if a product with the same ID exists, or
    /// `Storage` if persisting the collection fails.
    pub fn add_product(&mut self, product: Product) -> Result<(), InventoryError> {
        if self.get(product.product_id).is_some() {
            return Err(InventoryError::DuplicateProductId(product.product_id));
        }

        let id = product.product_id;
        self.products.push(product);
        self.persist()?;

        tracing::info!(product_id = %id, "added product");
        Ok(())
    }

    /// Remove all products with the given ID.
    ///
    /// Removing an absent ID is a no-op, not an error. Returns whether
    /// anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if persisting the collection fails.
    pub fn remove_product(&mut self, id: ProductId) -> Result<bool, InventoryError> {
        let before = self.products.len();
        self.products.retain(|p| p.product_id != id);
        let removed = self.products.len() < before;

        self.persist()?;
        if removed {
            tracing::info!(product_id = %id, "removed product");
        }
        Ok(removed)
    }

    /// Adjust a product's stock by `delta` (negative to reduce), returning
    /// the new quantity.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if the ID is absent, `InsufficientStock` if
    /// the adjustment would take stock below zero (stock is left unchanged),
    /// `StockOverflow` if it would exceed the counter range, or `Storage` if
    /// persisting the collection fails.
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> Result<u32, InventoryError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.product_id == id)
            .ok_or(InventoryError::ProductNotFound(id))?;

        let available = product.stock_quantity;
        let adjusted = i64::from(available).checked_add(delta).ok_or(
            InventoryError::StockOverflow { available, delta },
        )?;
        if adjusted < 0 {
            return Err(InventoryError::InsufficientStock { available, delta });
        }
        let adjusted =
            u32::try_from(adjusted).map_err(|_| InventoryError::StockOverflow { available, delta })?;

        product.stock_quantity = adjusted;
        self.persist()?;

        tracing::info!(product_id = %id, delta, stock = adjusted, "adjusted stock");
        Ok(adjusted)
    }

    /// The full collection, in insertion order, as of the last successful
    /// mutation.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose name or category matches the query, case-insensitively.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(query)).collect()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == id)
    }

    /// The IDs of all products, in collection order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.product_id).collect()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file with the full collection.
    fn persist(&self) -> Result<(), StorageError> {
        super::save(&self.path, &self.products)
    }
}
