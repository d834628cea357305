use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Grammatical gender used to pick referring expressions in report text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Masculine,
    Feminine,
    /// Not supplied; report text falls back to guessing from the name.
    #[default]
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Unspecified => "unspecified",
        })
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculine" | "m" | "masculino" => Ok(Self::Masculine),
            "feminine" | "f" | "femenino" => Ok(Self::Feminine),
            "unspecified" | "" => Ok(Self::Unspecified),
            other => Err(CoreError::UnknownGender(other.to_string())),
        }
    }
}

/// The person the report is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subject {
    #[serde(alias = "nombre_trabajador")]
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, alias = "diagnostico")]
    pub diagnosis: Option<String>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = Some(diagnosis.into());
        self
    }

    /// The diagnosis, treating an empty string as absent.
    pub fn diagnosis(&self) -> Option<&str> {
        self.diagnosis.as_deref().filter(|d| !d.is_empty())
    }
}
