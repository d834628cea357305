use pretty_assertions::assert_eq;
use valora_core::models::category::{CategoryAggregate, CategoryConfig};
use valora_core::models::item::{Ratings, RiskItem};
use valora_core::models::rating::RiskRating;
use valora_scoring::aggregate::{aggregate_all, aggregate_category, find};

fn ratings(entries: &[(&str, RiskRating)]) -> Ratings {
    entries
        .iter()
        .map(|(id, rating)| (id.to_string(), RiskItem::rated(*rating)))
        .collect()
}

#[test]
fn mostly_low_category_is_low() {
    let ratings = ratings(&[
        ("a", RiskRating::Low),
        ("b", RiskRating::Low),
        ("c", RiskRating::Medium),
    ]);

    let aggregate = aggregate_category(&ratings, &["a", "b", "c"]);
    assert_eq!(aggregate.numeric_average, 1.33);
    assert_eq!(aggregate.qualitative_average, RiskRating::Low);
    assert_eq!(aggregate.evaluated_items, 3);
    assert_eq!(aggregate.total_items, 3);
}

#[test]
fn unrated_items_are_excluded_but_counted_in_total() {
    let ratings = ratings(&[
        ("a", RiskRating::High),
        ("b", RiskRating::High),
        ("c", RiskRating::Unrated),
    ]);

    let aggregate = aggregate_category(&ratings, &["a", "b", "c"]);
    assert_eq!(aggregate.numeric_average, 3.0);
    assert_eq!(aggregate.qualitative_average, RiskRating::High);
    assert_eq!(aggregate.evaluated_items, 2);
    assert_eq!(aggregate.total_items, 3);
}

#[test]
fn configured_items_missing_from_input_are_not_evaluated() {
    let ratings = ratings(&[("a", RiskRating::Medium)]);

    let aggregate = aggregate_category(&ratings, &["a", "missing", "also_missing"]);
    assert_eq!(aggregate.numeric_average, 2.0);
    assert_eq!(aggregate.evaluated_items, 1);
    assert_eq!(aggregate.total_items, 3);
}

#[test]
fn ratings_outside_the_category_are_ignored() {
    let ratings = ratings(&[("a", RiskRating::Low), ("elsewhere", RiskRating::High)]);

    let aggregate = aggregate_category(&ratings, &["a"]);
    assert_eq!(aggregate.numeric_average, 1.0);
    assert_eq!(aggregate.evaluated_items, 1);
}

#[test]
fn category_with_nothing_rated_is_empty() {
    let aggregate = aggregate_category(&Ratings::new(), &["a", "b"]);
    assert_eq!(
        aggregate,
        CategoryAggregate {
            key: String::new(),
            category: String::new(),
            numeric_average: 0.0,
            qualitative_average: RiskRating::Unrated,
            total_items: 2,
            evaluated_items: 0,
        }
    );
}

#[test]
fn aggregate_all_keeps_configuration_order_and_titles() {
    let categories = vec![
        CategoryConfig::new("jornada", "Demandas de la Jornada de Trabajo", &["noche", "dias"]),
        CategoryConfig::new("rol", "Consistencia de Rol", &["ordenes"]),
        CategoryConfig::new("carga", "Demandas de Carga Mental", &["memoria"]),
    ];
    let ratings = ratings(&[
        ("noche", RiskRating::High),
        ("dias", RiskRating::Medium),
        ("ordenes", RiskRating::Low),
    ]);

    let aggregates = aggregate_all(&ratings, &categories);
    let keys: Vec<&str> = aggregates.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, vec!["jornada", "rol", "carga"]);

    let jornada = find(&aggregates, "jornada").unwrap();
    assert_eq!(jornada.category, "Demandas de la Jornada de Trabajo");
    assert_eq!(jornada.numeric_average, 2.5);
    assert_eq!(jornada.qualitative_average, RiskRating::Medium);

    let carga = find(&aggregates, "carga").unwrap();
    assert_eq!(carga.category, "Demandas de Carga Mental");
    assert!(!carga.is_evaluated());
    assert_eq!(carga.qualitative_average, RiskRating::Unrated);
}

#[test]
fn aggregation_does_not_touch_its_input() {
    let ratings = ratings(&[("a", RiskRating::High)]);
    let before = ratings.clone();
    let categories = vec![CategoryConfig::new("k", "K", &["a"])];

    let first = aggregate_all(&ratings, &categories);
    let second = aggregate_all(&ratings, &categories);
    assert_eq!(first, second);
    assert_eq!(ratings, before);
}
