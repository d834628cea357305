use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Qualitative rating of a single item, or the band of an average.
///
/// On the wire this is the portal's Spanish label. `Unrated` is the empty
/// string and is distinct from any explicit rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum RiskRating {
    Low,
    Medium,
    High,
    #[default]
    Unrated,
}

impl RiskRating {
    /// Lossy, case-insensitive parse. Anything that is not exactly one of
    /// the three labels (including `"na"`, blank and padded input) is
    /// `Unrated`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "bajo" => Self::Low,
            "medio" => Self::Medium,
            "alto" => Self::High,
            _ => Self::Unrated,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "bajo",
            Self::Medium => "medio",
            Self::High => "alto",
            Self::Unrated => "",
        }
    }

    pub fn is_rated(self) -> bool {
        self != Self::Unrated
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskRating {
    type Err = CoreError;

    /// Strict parse for command-line input. Accepts the Spanish labels and
    /// their English equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bajo" | "low" => Ok(Self::Low),
            "medio" | "medium" => Ok(Self::Medium),
            "alto" | "high" => Ok(Self::High),
            "" => Ok(Self::Unrated),
            other => Err(CoreError::UnknownRating(other.to_string())),
        }
    }
}

impl From<Option<String>> for RiskRating {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from_label).unwrap_or_default()
    }
}

impl From<RiskRating> for &'static str {
    fn from(value: RiskRating) -> Self {
        value.as_str()
    }
}
