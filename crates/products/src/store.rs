//! Authoritative in-memory product collection.
//!
//! The store is the single owner of the catalog. It assigns ids, keeps
//! insertion order, and applies the three mutations (add, update, delete).
//!
//! `update` and `delete` on an unknown id are silent no-ops; callers that
//! need to know use [`ProductStore::try_update`] / [`ProductStore::try_delete`].

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{NewProduct, Product};
use crate::query::{self, FilterCriteria};
use crate::sample;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, kept in the given order.
    ///
    /// Duplicate ids are not rejected here; later lookups hit the first one.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Store pre-loaded with [`sample::products`].
    pub fn with_sample_data() -> Self {
        Self::from_products(sample::products())
    }

    /// Current collection, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        position_of(&self.products, id).map(|i| &self.products[i])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Id the next `add` will assign: `max(existing ids, 0) + 1`.
    ///
    /// Fails only when the largest id is already `u64::MAX`.
    pub fn next_id(&self) -> DomainResult<ProductId> {
        let max = self
            .products
            .iter()
            .map(Product::id)
            .max()
            .unwrap_or(ProductId::new(0));
        max.checked_next()
            .ok_or_else(|| DomainError::invariant(format!("no product id follows {max}")))
    }

    /// Append a new product and return it with its assigned id.
    pub fn add(&mut self, data: NewProduct) -> DomainResult<Product> {
        let product = Product::new(self.next_id()?, data);
        tracing::debug!(product_id = %product.id(), name = product.name(), "product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace the product with the same id, keeping its position.
    ///
    /// No-op if the id is unknown.
    pub fn update(&mut self, product: Product) {
        if let Err(e) = self.try_update(product) {
            tracing::debug!(error = %e, "update ignored");
        }
    }

    /// Like [`update`](Self::update), but reports a missing id.
    pub fn try_update(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id();
        let index = position_of(&self.products, id).ok_or(DomainError::not_found(id))?;
        self.products[index] = product;
        tracing::debug!(product_id = %id, "product updated");
        Ok(())
    }

    /// Remove the product with this id. No-op if the id is unknown.
    pub fn delete(&mut self, id: ProductId) {
        if let Err(e) = self.try_delete(id) {
            tracing::debug!(error = %e, "delete ignored");
        }
    }

    /// Like [`delete`](Self::delete), but reports a missing id and returns the removed product.
    pub fn try_delete(&mut self, id: ProductId) -> DomainResult<Product> {
        let index = position_of(&self.products, id).ok_or(DomainError::not_found(id))?;
        let removed = self.products.remove(index);
        tracing::debug!(product_id = %id, "product deleted");
        Ok(removed)
    }

    /// Run a filter/sort query over the current collection.
    pub fn query(&self, criteria: &FilterCriteria) -> Vec<Product> {
        query::apply(&self.products, criteria)
    }
}

/// Index of the first entity with this id.
fn position_of<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
