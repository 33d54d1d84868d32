//! Filter-and-sort pipeline over a product collection.
//!
//! A [`FilterCriteria`] is built fresh for every query. [`apply`] keeps the
//! products that satisfy *all* of its predicates and then orders them by the
//! chosen [`SortKey`]. The input is never mutated and nothing here can fail:
//! malformed user input is turned into "bound absent" before it gets here
//! (see [`crate::form::SearchForm`]).

use core::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use catalog_core::{DomainError, ValueObject};

use crate::product::{Category, Product};

/// Ordering applied after filtering. All orders are ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep input order.
    #[default]
    None,
    Name,
    Price,
    Date,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Date => "date",
        }
    }

    /// Parse a sort selector value; anything unrecognised means "no sort".
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Name => compare_names(a.name(), b.name()),
            SortKey::Price => a.price().total_cmp(&b.price()),
            SortKey::Date => a.date().cmp(&b.date()),
        }
    }
}

impl core::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "date" => Ok(SortKey::Date),
            other => Err(DomainError::validation(format!("unknown sort key: {other:?}"))),
        }
    }
}

/// Collation-style name order.
///
/// Letters compare without accents or case first (`"Cámara"` sits between
/// `"apple"` and `"Zapatos"`), then accented after unaccented, then lowercase
/// before uppercase. Only identical names tie.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with combining accents removed.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Inclusive price bounds; either end may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl ValueObject for PriceRange {}

/// Inclusive calendar-date bounds; either end may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl ValueObject for DateRange {}

/// One query's worth of filter and sort parameters.
///
/// `FilterCriteria::default()` matches every product and keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the product name. Empty matches all.
    pub text: String,
    pub category: Option<Category>,
    pub price: PriceRange,
    pub dates: DateRange,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price = PriceRange::new(min, max);
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.dates = DateRange::new(start, end);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when no predicate is active (sorting aside).
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty()
            && self.category.is_none()
            && self.price.is_unbounded()
            && self.dates.is_unbounded()
    }

    pub fn matches_text(&self, product: &Product) -> bool {
        self.text.is_empty() || name_contains(product.name(), &self.text.to_lowercase())
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.is_none_or(|c| product.category() == c)
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price.contains(product.price().value())
    }

    pub fn matches_date(&self, product: &Product) -> bool {
        self.dates.contains(product.date())
    }

    /// Conjunction of the four predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_date(product)
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        apply(products, self)
    }
}

fn name_contains(name: &str, needle_lower: &str) -> bool {
    name.to_lowercase().contains(needle_lower)
}

/// Filter `products` by `criteria`, then sort (stably) by `criteria.sort`.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.text.to_lowercase();

    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || name_contains(p.name(), &needle))
        .filter(|p| {
            criteria.matches_category(p) && criteria.matches_price(p) && criteria.matches_date(p)
        })
        .cloned()
        .collect();

    if criteria.sort != SortKey::None {
        // `sort_by` is stable: ties keep their filtered order.
        out.sort_by(|a, b| criteria.sort.compare(a, b));
    }

    tracing::trace!(
        input = products.len(),
        output = out.len(),
        sort = criteria.sort.as_str(),
        "applied filter criteria"
    );

    out
}
