//! Command-line demo of the catalog core: seed, query, print JSON.

pub mod config;

use catalog_products::{Category, FilterCriteria, ProductStore, SearchResults};

pub use config::{DemoConfig, Seed};

/// Build the store described by `config` and run its search against it.
pub fn run(config: &DemoConfig) -> SearchResults {
    let store = match config.seed {
        Seed::Sample => ProductStore::with_sample_data(),
        Seed::Empty => ProductStore::new(),
    };

    let criteria = config.search.criteria();
    tracing::info!(
        products = store.len(),
        category = category_label(&criteria),
        criteria = ?criteria,
        "running catalog search"
    );

    config.search.run(store.list())
}

/// Category selector label for `criteria`, as the search page shows it.
pub fn category_label(criteria: &FilterCriteria) -> &'static str {
    criteria.category.map_or("Todas", Category::display_label)
}
