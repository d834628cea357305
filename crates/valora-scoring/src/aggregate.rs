//! Per-category aggregation of item ratings.

use valora_core::models::category::{CategoryAggregate, CategoryConfig};
use valora_core::models::item::Ratings;
use valora_core::models::rating::RiskRating;

use crate::scale::{rounded_mean, to_numeric, to_qualitative};

/// Aggregate the ratings of the listed items.
///
/// `total_items` is the length of `items` regardless of what `ratings`
/// holds; an item id with no entry is simply not evaluated. The returned
/// aggregate has an empty `key` and `category`; [`aggregate_all`] fills
/// them from the category configuration.
pub fn aggregate_category<S: AsRef<str>>(ratings: &Ratings, items: &[S]) -> CategoryAggregate {
    let values: Vec<f64> = items
        .iter()
        .filter_map(|id| ratings.get(id.as_ref()))
        .filter_map(|item| to_numeric(item.rating))
        .collect();

    let (numeric_average, qualitative_average) = match rounded_mean(&values) {
        Some(average) => (average, to_qualitative(average)),
        None => (0.0, RiskRating::Unrated),
    };

    CategoryAggregate {
        key: String::new(),
        category: String::new(),
        numeric_average,
        qualitative_average,
        total_items: items.len(),
        evaluated_items: values.len(),
    }
}

/// Aggregate every configured category, in configuration order.
pub fn aggregate_all(ratings: &Ratings, categories: &[CategoryConfig]) -> Vec<CategoryAggregate> {
    categories
        .iter()
        .map(|config| {
            let aggregate = CategoryAggregate {
                key: config.key.clone(),
                category: config.title.clone(),
                ..aggregate_category(ratings, &config.items)
            };
            tracing::debug!(
                category = %config.key,
                evaluated = aggregate.evaluated_items,
                total = aggregate.total_items,
                average = aggregate.numeric_average,
                "aggregated category"
            );
            aggregate
        })
        .collect()
}

/// Find the aggregate for a category key.
pub fn find<'a>(aggregates: &'a [CategoryAggregate], key: &str) -> Option<&'a CategoryAggregate> {
    aggregates.iter().find(|a| a.key == key)
}
