//! valora-core
//!
//! Shared vocabulary of the Valora workspace: risk ratings, rated items,
//! category configuration, work-trial condition scores and the derived
//! aggregate shapes. No scoring logic lives here beyond label handling.

pub mod error;
pub mod models;
