use std::path::Path;

use serde::{Deserialize, Serialize};
use valora_core::models::category::CategoryConfig;
use valora_core::models::item::Ratings;
use valora_core::models::subject::Subject;
use valora_core::models::work_trial::{ConditionScores, ExpertLevels};
use valora_scoring::catalog::validate_categories;
use valora_scoring::error::ScoringError;
use valora_scoring::{Battery, ScoringMethod, require_battery};

/// An evaluation exported from the portal form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationFile {
    pub subject: Subject,
    /// Built-in battery to score against.
    #[serde(default)]
    pub battery: Option<String>,
    /// Inline categories; take precedence over `battery`.
    #[serde(default)]
    pub categories: Option<Vec<CategoryConfig>>,
    #[serde(default, alias = "factores_riesgo")]
    pub ratings: Ratings,
    /// Work-trial condition scores, keyed by condition name.
    #[serde(default, alias = "condiciones")]
    pub conditions: ConditionScores,
    /// Work-trial levels assigned by the expert, keyed by dimension.
    #[serde(default, alias = "niveles_experto")]
    pub expert_levels: ExpertLevels,
}

/// What an evaluation is scored against.
pub enum Scoring {
    /// Rated items averaged over these categories.
    Ratings(Vec<CategoryConfig>),
    /// Condition scores read against the battery's baremos.
    Baremo(Box<dyn Battery>),
}

impl EvaluationFile {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read evaluation at {}: {e}", path.display()))?;
        let evaluation: Self = serde_json::from_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            rated = evaluation.ratings.len(),
            conditions = evaluation.conditions.len(),
            "loaded evaluation"
        );
        Ok(evaluation)
    }

    /// Inline categories, else the named battery, else `default_battery`.
    /// Inline categories are always rated and averaged.
    pub fn resolve(&self, default_battery: &str) -> Result<Scoring, ScoringError> {
        if let Some(categories) = &self.categories {
            validate_categories(categories)?;
            return Ok(Scoring::Ratings(categories.clone()));
        }
        let id = self.battery.as_deref().unwrap_or(default_battery);
        let battery = require_battery(id)?;
        tracing::debug!(battery = %battery.id(), method = %battery.method(), "scoring against built-in battery");
        Ok(match battery.method() {
            ScoringMethod::RatingAverage => Scoring::Ratings(battery.categories().to_vec()),
            ScoringMethod::Baremo => Scoring::Baremo(battery),
        })
    }
}
