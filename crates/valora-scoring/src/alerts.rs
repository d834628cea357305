//! Early warnings shown while the risk-factor form is being filled.

use valora_core::models::alert::RiskAlert;
use valora_core::models::category::CategoryConfig;
use valora_core::models::item::Ratings;
use valora_core::models::rating::RiskRating;

/// Share of high ratings (percent) at or above which a category alerts.
pub const HIGH_SHARE_THRESHOLD: f64 = 50.0;
/// Share of high plus medium ratings (percent) at or above which a
/// category alerts.
pub const ELEVATED_SHARE_THRESHOLD: f64 = 60.0;

/// Flag categories whose rated items lean towards high risk.
///
/// Only rated items count. A category alerts when at least half of them
/// are high, or at least 60% are high or medium. Categories with nothing
/// rated never alert.
pub fn detect_alerts(ratings: &Ratings, categories: &[CategoryConfig]) -> Vec<RiskAlert> {
    categories
        .iter()
        .filter_map(|config| {
            let rated: Vec<RiskRating> = config
                .items
                .iter()
                .filter_map(|id| ratings.get(id))
                .map(|item| item.rating)
                .filter(|r| r.is_rated())
                .collect();
            if rated.is_empty() {
                return None;
            }

            let total = rated.len() as f64;
            let high = rated.iter().filter(|r| **r == RiskRating::High).count() as f64;
            let medium = rated.iter().filter(|r| **r == RiskRating::Medium).count() as f64;
            let high_share = high / total * 100.0;
            let elevated_share = (high + medium) / total * 100.0;

            (high_share >= HIGH_SHARE_THRESHOLD || elevated_share >= ELEVATED_SHARE_THRESHOLD)
                .then(|| RiskAlert {
                    category_key: config.key.clone(),
                    category: config.title.clone(),
                    high_share,
                    elevated_share,
                })
        })
        .collect()
}
