//! Reduction of category aggregates to one overall risk profile.

use valora_core::models::category::CategoryAggregate;
use valora_core::models::profile::OverallRiskProfile;
use valora_core::models::rating::RiskRating;

use crate::scale::{rounded_mean, to_qualitative};

/// Combine every evaluated category into an [`OverallRiskProfile`].
///
/// Categories with no rated items are ignored. Each evaluated category is
/// listed under its own band, not the overall one, keeping input order.
/// Low-risk titles are collected even though the narrative never prints
/// them.
pub fn synthesize_overall(aggregates: &[CategoryAggregate]) -> OverallRiskProfile {
    let evaluated: Vec<&CategoryAggregate> =
        aggregates.iter().filter(|a| a.is_evaluated()).collect();

    let averages: Vec<f64> = evaluated.iter().map(|a| a.numeric_average).collect();
    let Some(overall_average) = rounded_mean(&averages) else {
        tracing::debug!("no evaluated categories, empty risk profile");
        return OverallRiskProfile::default();
    };

    let mut profile = OverallRiskProfile {
        level: to_qualitative(overall_average),
        overall_average,
        ..OverallRiskProfile::default()
    };

    for aggregate in evaluated {
        let bucket = match aggregate.qualitative_average {
            RiskRating::High => &mut profile.high_risk_categories,
            RiskRating::Medium => &mut profile.medium_risk_categories,
            RiskRating::Low => &mut profile.low_risk_categories,
            // Unreachable once evaluated_items > 0, skipped all the same.
            RiskRating::Unrated => continue,
        };
        bucket.push(aggregate.category.clone());
    }

    tracing::debug!(
        level = %profile.level,
        average = profile.overall_average,
        high = profile.high_risk_categories.len(),
        medium = profile.medium_risk_categories.len(),
        low = profile.low_risk_categories.len(),
        "synthesized risk profile"
    );
    profile
}
