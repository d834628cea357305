use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raised while the form is being filled when a category leans towards
/// high risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAlert {
    pub category_key: String,
    pub category: String,
    /// Percentage of rated items marked high.
    pub high_share: f64,
    /// Percentage of rated items marked high or medium.
    pub elevated_share: f64,
}

impl RiskAlert {
    pub fn message(&self) -> String {
        format!("Riesgo en {}", self.category)
    }
}
