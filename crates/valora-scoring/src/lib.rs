//! valora-scoring
//!
//! Risk-factor scoring engine. Pure, synchronous and stateless: per-item
//! ratings go in, category aggregates and an overall risk profile come
//! out. Work-trial batteries are scored instead by condition totals read
//! against per-dimension baremos. Also carries the built-in batteries
//! (fixed category catalogs) the evaluation forms use.

pub mod aggregate;
pub mod alerts;
pub mod baremo;
pub mod batteries;
pub mod catalog;
pub mod error;
pub mod scale;
pub mod synthesize;

use std::fmt;

use valora_core::models::category::CategoryConfig;

use baremo::Baremo;
use error::ScoringError;

/// How a battery's items are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    /// Items rated bajo/medio/alto, averaged per category.
    RatingAverage,
    /// Conditions scored 0–7 on frequency, exposure and intensity, summed
    /// per dimension and read against a baremo.
    Baremo,
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatingAverage => f.write_str("rating average"),
            Self::Baremo => f.write_str("baremo"),
        }
    }
}

/// A fixed catalog of risk categories used by one kind of evaluation.
pub trait Battery: Send + Sync {
    /// Unique identifier (e.g., "valoracion_psicologica").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Valoración Psicológica").
    fn name(&self) -> &str;

    /// Categories in form order.
    fn categories(&self) -> &[CategoryConfig];

    /// Number of items across all categories.
    fn item_count(&self) -> usize {
        self.categories().iter().map(|c| c.items.len()).sum()
    }

    fn method(&self) -> ScoringMethod {
        ScoringMethod::RatingAverage
    }

    /// Cut points of a dimension. Only baremo batteries have any.
    fn baremo(&self, _key: &str) -> Option<Baremo> {
        None
    }
}

/// Return all built-in batteries.
pub fn all_batteries() -> Vec<Box<dyn Battery>> {
    vec![
        Box::new(batteries::psychological_assessment::PsychologicalAssessment),
        Box::new(batteries::work_trial::WorkTrial),
    ]
}

/// Look up a battery by ID.
pub fn get_battery(id: &str) -> Option<Box<dyn Battery>> {
    all_batteries().into_iter().find(|b| b.id() == id)
}

/// Like [`get_battery`], but an unknown ID is an error.
pub fn require_battery(id: &str) -> Result<Box<dyn Battery>, ScoringError> {
    get_battery(id).ok_or_else(|| ScoringError::UnknownBattery(id.to_string()))
}
