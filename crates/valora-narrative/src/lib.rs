//! valora-narrative
//!
//! Spanish-language clinical concept text generated from a risk profile,
//! plus the plain-text averages summary shown next to it. Output is a
//! deterministic function of the inputs.

pub mod error;
pub mod gender;
pub mod render;
pub mod sections;
pub mod summary;
