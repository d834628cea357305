//! Plain-text panels shown next to the generated concept: category
//! averages for rated batteries, dimension scores for the work trial.

use valora_core::models::category::CategoryAggregate;
use valora_core::models::profile::OverallRiskProfile;
use valora_core::models::rating::RiskRating;
use valora_core::models::work_trial::{Concordance, DimensionScore};

fn band_label(rating: RiskRating, empty: &str) -> String {
    match rating {
        RiskRating::Unrated => empty.to_string(),
        rated => rated.as_str().to_uppercase(),
    }
}

/// Render the overall level, one line per category and the risk
/// partitions (low risk included, unlike the concept).
pub fn render_summary(aggregates: &[CategoryAggregate], profile: &OverallRiskProfile) -> String {
    let mut output = format!(
        "Nivel de riesgo general: {} ({:.2}/3.0)\n\nPromedios por categoría:\n",
        band_label(profile.level, "SIN EVALUAR"),
        profile.overall_average,
    );

    for aggregate in aggregates {
        let average = if aggregate.is_evaluated() {
            format!("{:.2}", aggregate.numeric_average)
        } else {
            "-".to_string()
        };
        output.push_str(&format!(
            "- {}: {} [{}] ({} de {} items evaluados)\n",
            aggregate.category,
            average,
            band_label(aggregate.qualitative_average, "N/A"),
            aggregate.evaluated_items,
            aggregate.total_items,
        ));
    }

    let partitions = [
        ("Alto riesgo", &profile.high_risk_categories),
        ("Riesgo medio", &profile.medium_risk_categories),
        ("Bajo riesgo", &profile.low_risk_categories),
    ];
    let mut wrote_heading = false;
    for (heading, categories) in partitions {
        if categories.is_empty() {
            continue;
        }
        if !wrote_heading {
            output.push('\n');
            wrote_heading = true;
        }
        output.push_str(&format!("{heading}: {}\n", categories.join(", ")));
    }

    output
}

/// Render the work-trial dimensions with their baremo level, the expert's
/// level where given, and the concordance lists.
pub fn render_work_trial_summary(dimensions: &[DimensionScore], concordance: &Concordance) -> String {
    let mut output = String::from("Puntuación por dimensión:\n");
    for dimension in dimensions {
        output.push_str(&format!(
            "- {}: {} [{}] ({} de {} condiciones calificadas)",
            dimension.dimension,
            dimension.total,
            dimension.level,
            dimension.scored_conditions,
            dimension.total_conditions,
        ));
        if let Some(expert) = dimension.expert_level {
            output.push_str(&format!(" experto: {expert}"));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\nConcordancia: {}\nNo concordancia: {}\n",
        concordance.matching_text(),
        concordance.differing_text(),
    ));
    output
}
