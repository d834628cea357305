use proptest::prelude::*;
use valora_core::models::category::CategoryConfig;
use valora_core::models::item::{Ratings, RiskItem};
use valora_core::models::rating::RiskRating;
use valora_scoring::aggregate::{aggregate_all, aggregate_category};
use valora_scoring::scale::{to_numeric, to_qualitative};
use valora_scoring::synthesize::synthesize_overall;

fn any_rating() -> impl Strategy<Value = RiskRating> {
    prop_oneof![
        Just(RiskRating::Low),
        Just(RiskRating::Medium),
        Just(RiskRating::High),
        Just(RiskRating::Unrated),
    ]
}

fn explicit_rating() -> impl Strategy<Value = RiskRating> {
    prop_oneof![
        Just(RiskRating::Low),
        Just(RiskRating::Medium),
        Just(RiskRating::High),
    ]
}

/// Categories of 1–8 items, each item rated, unrated or missing from the
/// ratings map altogether.
fn form() -> impl Strategy<Value = (Ratings, Vec<CategoryConfig>)> {
    prop::collection::vec(prop::collection::vec(prop::option::of(any_rating()), 1..8), 0..7)
        .prop_map(|categories| {
            let mut ratings = Ratings::new();
            let mut configs = Vec::new();
            for (c, items) in categories.iter().enumerate() {
                let mut ids = Vec::new();
                for (i, rating) in items.iter().enumerate() {
                    let id = format!("cat{c}_item{i}");
                    if let Some(rating) = rating {
                        ratings.insert(id.clone(), RiskItem::rated(*rating));
                    }
                    ids.push(id);
                }
                configs.push(CategoryConfig {
                    key: format!("cat{c}"),
                    title: format!("Categoría {c}"),
                    items: ids,
                });
            }
            (ratings, configs)
        })
}

proptest! {
    #[test]
    fn band_is_total_over_finite_values(average in -1.0e6f64..1.0e6) {
        prop_assert!(to_qualitative(average).is_rated());
    }

    #[test]
    fn identical_ratings_round_trip(rating in explicit_rating(), n in 1usize..40) {
        let ids: Vec<String> = (0..n).map(|i| format!("item{i}")).collect();
        let ratings: Ratings = ids
            .iter()
            .map(|id| (id.clone(), RiskItem::rated(rating)))
            .collect();

        let aggregate = aggregate_category(&ratings, &ids);
        prop_assert_eq!(aggregate.qualitative_average, rating);
        prop_assert_eq!(Some(aggregate.numeric_average), to_numeric(rating));
    }

    #[test]
    fn empty_aggregates_are_exactly_the_unevaluated_ones((ratings, categories) in form()) {
        for aggregate in aggregate_all(&ratings, &categories) {
            let unevaluated = aggregate.evaluated_items == 0;
            prop_assert_eq!(unevaluated, aggregate.qualitative_average == RiskRating::Unrated);
            prop_assert_eq!(unevaluated, aggregate.numeric_average == 0.0);
            prop_assert!(aggregate.evaluated_items <= aggregate.total_items);
        }
    }

    #[test]
    fn every_evaluated_category_lands_in_exactly_one_partition((ratings, categories) in form()) {
        let aggregates = aggregate_all(&ratings, &categories);
        let profile = synthesize_overall(&aggregates);

        for aggregate in &aggregates {
            let hits = [
                &profile.high_risk_categories,
                &profile.medium_risk_categories,
                &profile.low_risk_categories,
            ]
            .iter()
            .filter(|list| list.contains(&aggregate.category))
            .count();
            prop_assert_eq!(hits, usize::from(aggregate.is_evaluated()));
        }
        prop_assert_eq!(profile.is_empty(), aggregates.iter().all(|a| !a.is_evaluated()));
    }

    #[test]
    fn pipeline_is_idempotent((ratings, categories) in form()) {
        let first = aggregate_all(&ratings, &categories);
        let second = aggregate_all(&ratings, &categories);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(synthesize_overall(&first), synthesize_overall(&second));
    }
}
