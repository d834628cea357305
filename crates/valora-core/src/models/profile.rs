use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rating::RiskRating;

/// Cross-category summary built from every evaluated category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallRiskProfile {
    #[ts(type = "\"bajo\" | \"medio\" | \"alto\" | \"\"")]
    pub level: RiskRating,
    pub overall_average: f64,
    pub high_risk_categories: Vec<String>,
    pub medium_risk_categories: Vec<String>,
    pub low_risk_categories: Vec<String>,
}

impl OverallRiskProfile {
    /// True when no category had a single rated item.
    pub fn is_empty(&self) -> bool {
        self.level == RiskRating::Unrated
    }
}
