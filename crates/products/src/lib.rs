//! Product catalog domain module.
//!
//! This crate contains the catalog's business rules, implemented purely as
//! deterministic in-memory logic (no IO, no HTTP, no storage):
//!
//! - [`query`]: the filter-and-sort pipeline over a product slice
//! - [`store`]: the authoritative product collection and its mutations
//! - [`editor`]: the admin add/edit form state machine
//! - [`form`]: coercion of raw user-entered strings into typed values

pub mod editor;
pub mod form;
pub mod product;
pub mod query;
pub mod sample;
pub mod store;

pub use catalog_core::{DomainError, DomainResult, ProductId};
pub use editor::{AdminEditor, EditorState};
pub use form::{ProductForm, SearchForm, SearchResults};
pub use product::{Category, NewProduct, Price, Product};
pub use query::{DateRange, FilterCriteria, PriceRange, SortKey};
pub use store::ProductStore;
