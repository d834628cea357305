use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown battery: {0}")]
    UnknownBattery(String),

    #[error("duplicate category key: {0}")]
    DuplicateCategory(String),

    #[error("duplicate item '{item}' in category '{category}'")]
    DuplicateItem { category: String, item: String },

    #[error("category '{0}' has no items")]
    EmptyCategory(String),

    #[error("no baremo for dimension '{0}'")]
    MissingBaremo(String),

    #[error("condition '{condition}' has a component of {value} (maximum is 7)")]
    ConditionOutOfRange { condition: String, value: u8 },

    #[error("invalid category catalog: {0}")]
    Serialization(#[from] serde_json::Error),
}
