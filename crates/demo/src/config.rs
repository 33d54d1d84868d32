//! Demo configuration, read from `CATALOG_*` environment variables.

use std::env;

use catalog_products::SearchForm;

/// Which catalog to start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Seed {
    #[default]
    Sample,
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: Seed,
    pub search: SearchForm,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = match lookup("CATALOG_SEED").as_deref().map(str::trim) {
            None | Some("") | Some("sample") => Seed::Sample,
            Some("empty") => Seed::Empty,
            Some(other) => {
                tracing::warn!(seed = other, "unknown CATALOG_SEED; using sample data");
                Seed::Sample
            }
        };

        let field = |key: &str| lookup(key).unwrap_or_default();
        let search = SearchForm {
            text: field("CATALOG_TEXT"),
            category: field("CATALOG_CATEGORY"),
            price_min: field("CATALOG_PRICE_MIN"),
            price_max: field("CATALOG_PRICE_MAX"),
            date_start: field("CATALOG_DATE_START"),
            date_end: field("CATALOG_DATE_END"),
            sort: field("CATALOG_SORT"),
        };

        Self { seed, search }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> DemoConfig {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        DemoConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn nothing_set_means_sample_and_no_filters() {
        assert_eq!(from_pairs(&[]), DemoConfig::default());
    }

    #[test]
    fn reads_search_fields() {
        let config = from_pairs(&[
            ("CATALOG_SEED", "empty"),
            ("CATALOG_TEXT", "lap"),
            ("CATALOG_CATEGORY", "Electronics"),
            ("CATALOG_SORT", "price"),
            ("CATALOG_DATE_END", "2024-03-31"),
        ]);
        assert_eq!(config.seed, Seed::Empty);
        assert_eq!(config.search.text, "lap");
        assert_eq!(config.search.category, "Electronics");
        assert_eq!(config.search.sort, "price");
        assert_eq!(config.search.date_end, "2024-03-31");
        assert_eq!(config.search.price_min, "");
    }

    #[test]
    fn unknown_seed_falls_back_to_sample() {
        assert_eq!(from_pairs(&[("CATALOG_SEED", "prod")]).seed, Seed::Sample);
    }
}
