//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are interchangeable (a price of 49.99 is a price of 49.99).

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (e.g. `Price`, `Category`, `PriceRange`)
/// - **Entity**: has identity (e.g. `Product`, keyed by `ProductId`)
///
/// Value objects are immutable: to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
