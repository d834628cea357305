//! Work-trial scoring. Each condition scores frequency + exposure +
//! intensity, conditions are summed per dimension, and the sum is read
//! against that dimension's baremo (five bands with inclusive upper cut
//! points).

use tracing::{debug, warn};
use valora_core::models::category::CategoryConfig;
use valora_core::models::work_trial::{
    Concordance, ConditionScores, DimensionScore, ExpertLevels, WorkTrialLevel,
};

use crate::Battery;
use crate::error::ScoringError;

/// Highest value a frequency, exposure or intensity may take.
pub const MAX_COMPONENT: u8 = 7;

/// Cut points of one dimension. A total at or below `no_risk` is
/// [`WorkTrialLevel::NoRisk`], at or below `low` is [`WorkTrialLevel::Low`],
/// and so on; above `high` is [`WorkTrialLevel::VeryHigh`]. `very_high` is
/// the dimension's maximum possible total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baremo {
    pub no_risk: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub very_high: f64,
}

impl Baremo {
    pub const fn new(no_risk: f64, low: f64, medium: f64, high: f64, very_high: f64) -> Self {
        Self {
            no_risk,
            low,
            medium,
            high,
            very_high,
        }
    }

    pub fn classify(&self, total: u32) -> WorkTrialLevel {
        let total = f64::from(total);
        if total <= self.no_risk {
            WorkTrialLevel::NoRisk
        } else if total <= self.low {
            WorkTrialLevel::Low
        } else if total <= self.medium {
            WorkTrialLevel::Medium
        } else if total <= self.high {
            WorkTrialLevel::High
        } else {
            WorkTrialLevel::VeryHigh
        }
    }
}

/// Reject any component above [`MAX_COMPONENT`].
pub fn validate_conditions(scores: &ConditionScores) -> Result<(), ScoringError> {
    for (condition, score) in scores {
        if let Some(value) = score
            .components()
            .into_iter()
            .flatten()
            .find(|v| *v > MAX_COMPONENT)
        {
            return Err(ScoringError::ConditionOutOfRange {
                condition: condition.clone(),
                value,
            });
        }
    }
    Ok(())
}

/// Score one dimension against its baremo.
pub fn score_dimension(
    scores: &ConditionScores,
    config: &CategoryConfig,
    baremo: &Baremo,
    expert_level: Option<WorkTrialLevel>,
) -> DimensionScore {
    let totals: Vec<u32> = config
        .items
        .iter()
        .filter_map(|condition| scores.get(condition))
        .filter_map(|score| score.total())
        .collect();
    let total: u32 = totals.iter().sum();
    let level = baremo.classify(total);

    debug!(
        dimension = %config.key,
        total,
        scored = totals.len(),
        level = %level,
        "scored dimension"
    );

    DimensionScore {
        key: config.key.clone(),
        dimension: config.title.clone(),
        total,
        scored_conditions: totals.len(),
        total_conditions: config.items.len(),
        level,
        expert_level,
    }
}

/// Score every dimension of a baremo battery, in battery order.
pub fn score_dimensions(
    battery: &dyn Battery,
    scores: &ConditionScores,
    expert_levels: &ExpertLevels,
) -> Result<Vec<DimensionScore>, ScoringError> {
    validate_conditions(scores)?;

    for key in expert_levels.keys() {
        if !battery.categories().iter().any(|c| &c.key == key) {
            warn!(battery = %battery.id(), dimension = %key, "expert level for unknown dimension ignored");
        }
    }

    battery
        .categories()
        .iter()
        .map(|config| -> Result<DimensionScore, ScoringError> {
            let baremo = battery
                .baremo(&config.key)
                .ok_or_else(|| ScoringError::MissingBaremo(config.key.clone()))?;
            let expert_level = expert_levels.get(&config.key).copied();
            Ok(score_dimension(scores, config, &baremo, expert_level))
        })
        .collect()
}

/// Split the dimensions the expert rated into agreeing and disagreeing
/// titles, in dimension order.
pub fn concordance(dimensions: &[DimensionScore]) -> Concordance {
    let mut result = Concordance::default();
    for dimension in dimensions {
        match dimension.agrees_with_expert() {
            Some(true) => result.matching.push(dimension.dimension.clone()),
            Some(false) => result.differing.push(dimension.dimension.clone()),
            None => {}
        }
    }
    result
}
