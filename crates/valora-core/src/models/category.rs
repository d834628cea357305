use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rating::RiskRating;

/// Static description of a risk category: a display title and the ids of
/// the items that belong to it, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryConfig {
    pub key: String,
    #[serde(alias = "titulo")]
    pub title: String,
    pub items: Vec<String>,
}

impl CategoryConfig {
    pub fn new(key: &str, title: &str, items: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Per-category summary of the ratings. Recomputed on every call.
///
/// When no item has been rated, `numeric_average` is `0.0` and
/// `qualitative_average` is [`RiskRating::Unrated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryAggregate {
    pub key: String,
    pub category: String,
    pub numeric_average: f64,
    #[ts(type = "\"bajo\" | \"medio\" | \"alto\" | \"\"")]
    pub qualitative_average: RiskRating,
    pub total_items: usize,
    pub evaluated_items: usize,
}

impl CategoryAggregate {
    pub fn is_evaluated(&self) -> bool {
        self.evaluated_items > 0
    }
}
