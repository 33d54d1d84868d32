use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Closed category vocabulary shared by validation and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Sports,
    Home,
}

impl Category {
    /// Every category, in the order the selectors list them.
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Sports, Category::Home];

    /// Canonical (stored) label, e.g. `"Electronics"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Sports => "Sports",
            Category::Home => "Home",
        }
    }

    /// Label shown to users of the catalog UI.
    pub fn display_label(self) -> &'static str {
        match self {
            Category::Electronics => "Electrónicos",
            Category::Sports => "Deportes",
            Category::Home => "Hogar",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

/// Non-negative, finite unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(value))
    }

    /// Build a price from a literal known to be valid (seed data).
    pub(crate) const fn from_trusted(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Total order over prices; equal amounts compare `Equal`.
    pub fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Two decimals, e.g. `49.99` or `20.00`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Product payload without an id (what the admin form submits for a new product).
///
/// No field is re-validated here: the store accepts whatever it is handed.
/// Required-field checks happen in [`crate::form::ProductForm::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub date: NaiveDate,
}

/// A catalog entry.
///
/// The id is assigned by [`crate::store::ProductStore::add`] and never changes;
/// edits replace the whole record under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
    date: NaiveDate,
}

impl Product {
    pub fn new(id: ProductId, data: NewProduct) -> Self {
        Self {
            id,
            name: data.name,
            category: data.category,
            price: data.price,
            date: data.date,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Split into id and payload (e.g. to pre-fill an edit form).
    pub fn into_parts(self) -> (ProductId, NewProduct) {
        (
            self.id,
            NewProduct {
                name: self.name,
                category: self.category,
                price: self.price,
                date: self.date,
            },
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
