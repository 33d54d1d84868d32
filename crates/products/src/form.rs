//! Raw user input → typed catalog values.
//!
//! Both forms hold exactly what the user typed. [`ProductForm`] is strict: a
//! submission either yields a complete [`NewProduct`] or a validation error.
//! [`SearchForm`] is lenient: anything it cannot make sense of becomes an
//! absent bound, never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

use crate::product::{Category, NewProduct, Price, Product};
use crate::query::{self, DateRange, FilterCriteria, PriceRange, SortKey};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Admin add/edit form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub date: String,
}

impl ProductForm {
    /// Pre-fill from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            category: product.category().as_str().to_string(),
            price: product.price().value().to_string(),
            date: product.date().format(DATE_FORMAT).to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Coerce every field, failing on the first one that is missing or malformed.
    pub fn validate(&self) -> DomainResult<NewProduct> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }

        let category = match self.category.trim() {
            "" => return Err(DomainError::validation("category is required")),
            raw => raw.parse::<Category>()?,
        };

        let price = match self.price.trim() {
            "" => return Err(DomainError::validation("price is required")),
            raw => {
                let value = raw
                    .parse::<f64>()
                    .map_err(|_| DomainError::validation(format!("price is not a number: {raw:?}")))?;
                Price::new(value)?
            }
        };

        let date = match self.date.trim() {
            "" => return Err(DomainError::validation("date is required")),
            raw => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                DomainError::validation(format!("date must be YYYY-MM-DD: {raw:?}"))
            })?,
        };

        Ok(NewProduct {
            name: self.name.clone(),
            category,
            price,
            date,
        })
    }
}

/// Search page filter inputs.
///
/// `category` and `sort` carry the selector values (`""` meaning "all" /
/// "no sort"); the bounds carry whatever was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub text: String,
    pub category: String,
    pub price_min: String,
    pub price_max: String,
    pub date_start: String,
    pub date_end: String,
    pub sort: String,
}

/// Outcome of running a [`SearchForm`] against a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub total: usize,
    pub items: Vec<Product>,
}

impl SearchForm {
    /// Back to "no filters, no sort".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            text: self.text.clone(),
            category: parse_category(&self.category),
            price: PriceRange::new(parse_amount(&self.price_min), parse_amount(&self.price_max)),
            dates: DateRange::new(parse_date(&self.date_start), parse_date(&self.date_end)),
            sort: SortKey::parse_lenient(self.sort.trim()),
        }
    }

    pub fn run(&self, products: &[Product]) -> SearchResults {
        let items = query::apply(products, &self.criteria());
        SearchResults {
            total: items.len(),
            items,
        }
    }
}

fn parse_category(raw: &str) -> Option<Category> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(category) => Some(category),
        Err(_) => {
            tracing::debug!(category = raw, "ignoring unknown category filter");
            None
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
