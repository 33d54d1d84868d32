//! Seed catalog loaded at startup.

use chrono::NaiveDate;

use catalog_core::ProductId;

use crate::product::{Category, NewProduct, Price, Product};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const SEED: [(u64, &str, Category, f64, NaiveDate); 5] = [
    (1, "Laptop Pro", Category::Electronics, 999.99, ymd(2024, 3, 1)),
    (2, "Smart Watch", Category::Electronics, 199.99, ymd(2024, 2, 15)),
    (3, "Running Shoes", Category::Sports, 89.99, ymd(2024, 3, 10)),
    (4, "Coffee Maker", Category::Home, 49.99, ymd(2024, 1, 20)),
    (5, "Wireless Mouse", Category::Electronics, 29.99, ymd(2024, 3, 5)),
];

/// The five seed products, ids 1 through 5.
pub fn products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, category, price, date)| {
            Product::new(
                ProductId::new(id),
                NewProduct {
                    name: name.to_string(),
                    category,
                    price: Price::from_trusted(price),
                    date,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_sequential_ids() {
        let ids: Vec<u64> = products().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn seed_prices_are_valid() {
        for p in products() {
            assert!(Price::new(p.price().value()).is_ok(), "{p:?}");
        }
    }
}
