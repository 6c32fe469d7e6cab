//! Need-assessment engine for trust beneficiary intake records.
//!
//! The scoring and avatar classification live in [`beneficiary`]; the remaining
//! modules carry the configuration, error and telemetry plumbing used by callers.

pub mod beneficiary;
pub mod config;
pub mod error;
pub mod telemetry;

pub use beneficiary::{
    assess, classify_avatar_category, compute_assessment_score, normalize_income_range,
    AssessmentScore, AvatarCategory, BeneficiaryRecord,
};
