use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown risk rating: '{0}' (expected bajo, medio or alto)")]
    UnknownRating(String),

    #[error("unknown gender: '{0}' (expected masculine, feminine or unspecified)")]
    UnknownGender(String),
}
