//! Conversion between the three-point qualitative scale and numbers.

use valora_core::models::rating::RiskRating;

/// Inclusive upper bound of the low band on the 1–3 scale.
pub const LOW_UPPER_BOUND: f64 = 1.5;
/// Inclusive upper bound of the medium band on the 1–3 scale.
pub const MEDIUM_UPPER_BOUND: f64 = 2.5;

/// `bajo = 1`, `medio = 2`, `alto = 3`. Unrated items yield `None` and
/// must be left out of any average.
pub fn to_numeric(rating: RiskRating) -> Option<f64> {
    match rating {
        RiskRating::Low => Some(1.0),
        RiskRating::Medium => Some(2.0),
        RiskRating::High => Some(3.0),
        RiskRating::Unrated => None,
    }
}

/// Same as [`to_numeric`] for a raw form label.
pub fn label_to_numeric(label: &str) -> Option<f64> {
    to_numeric(RiskRating::from_label(label))
}

/// Band of a numeric average. Never returns `Unrated`.
pub fn to_qualitative(average: f64) -> RiskRating {
    if average <= LOW_UPPER_BOUND {
        RiskRating::Low
    } else if average <= MEDIUM_UPPER_BOUND {
        RiskRating::Medium
    } else {
        RiskRating::High
    }
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean rounded to two decimals, `None` for an empty slice.
pub(crate) fn rounded_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round2(sum / values.len() as f64))
}
