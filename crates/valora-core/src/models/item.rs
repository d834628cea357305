use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rating::RiskRating;

/// A rated item as captured by the evaluation form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskItem {
    #[serde(default, alias = "calificacion")]
    #[ts(type = "\"bajo\" | \"medio\" | \"alto\" | \"\"")]
    pub rating: RiskRating,
    #[serde(default, alias = "observaciones")]
    pub observations: String,
}

impl RiskItem {
    pub fn rated(rating: RiskRating) -> Self {
        Self {
            rating,
            observations: String::new(),
        }
    }
}

/// Item id to rated item. Items absent from the map are unrated.
pub type Ratings = HashMap<String, RiskItem>;
