use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Frequency, exposure and intensity of one work-trial condition, each
/// on a 0–7 scale. A component left blank on the form is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionScore {
    #[serde(default, alias = "fr")]
    pub frequency: Option<u8>,
    #[serde(default, alias = "exp")]
    pub exposure: Option<u8>,
    #[serde(default, alias = "int")]
    pub intensity: Option<u8>,
}

impl ConditionScore {
    pub fn new(frequency: u8, exposure: u8, intensity: u8) -> Self {
        Self {
            frequency: Some(frequency),
            exposure: Some(exposure),
            intensity: Some(intensity),
        }
    }

    /// `frequency + exposure + intensity`, only once all three are filled.
    pub fn total(&self) -> Option<u32> {
        match (self.frequency, self.exposure, self.intensity) {
            (Some(f), Some(e), Some(i)) => Some(u32::from(f) + u32::from(e) + u32::from(i)),
            _ => None,
        }
    }

    pub fn components(&self) -> [Option<u8>; 3] {
        [self.frequency, self.exposure, self.intensity]
    }
}

/// Condition name to its scores. Conditions absent from the map score 0.
pub type ConditionScores = HashMap<String, ConditionScore>;

/// Five-band level of a work-trial dimension, as read from its baremo or
/// as assigned by the expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkTrialLevel {
    #[serde(rename = "sin_riesgo")]
    NoRisk,
    #[serde(rename = "riesgo_bajo")]
    Low,
    #[serde(rename = "riesgo_medio")]
    Medium,
    #[serde(rename = "riesgo_alto")]
    High,
    #[serde(rename = "riesgo_muy_alto")]
    VeryHigh,
}

impl WorkTrialLevel {
    /// Report label, e.g. `RIESGO MUY ALTO`.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRisk => "SIN RIESGO",
            Self::Low => "RIESGO BAJO",
            Self::Medium => "RIESGO MEDIO",
            Self::High => "RIESGO ALTO",
            Self::VeryHigh => "RIESGO MUY ALTO",
        }
    }
}

impl fmt::Display for WorkTrialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dimension key to the level the expert assigned.
pub type ExpertLevels = HashMap<String, WorkTrialLevel>;

/// Scored work-trial dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub key: String,
    pub dimension: String,
    /// Sum of the condition totals. Incomplete conditions add 0.
    pub total: u32,
    /// Conditions with all three components filled.
    pub scored_conditions: usize,
    pub total_conditions: usize,
    /// Level read from the dimension's baremo.
    pub level: WorkTrialLevel,
    pub expert_level: Option<WorkTrialLevel>,
}

impl DimensionScore {
    /// `None` until the expert has assigned a level.
    pub fn agrees_with_expert(&self) -> Option<bool> {
        self.expert_level.map(|expert| expert == self.level)
    }
}

/// Dimensions where the computed level and the expert's level agree or
/// differ. Dimensions without an expert level are in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Concordance {
    pub matching: Vec<String>,
    pub differing: Vec<String>,
}

impl Concordance {
    pub fn matching_text(&self) -> String {
        join_or_none(&self.matching)
    }

    pub fn differing_text(&self) -> String {
        join_or_none(&self.differing)
    }
}

fn join_or_none(titles: &[String]) -> String {
    if titles.is_empty() {
        "Ninguna".to_string()
    } else {
        titles.join(", ")
    }
}
