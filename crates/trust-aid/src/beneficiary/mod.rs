//! Beneficiary need assessment: income normalization, additive scoring, avatar
//! classification, plus intake import and priority reporting for batch callers.
//!
//! The scorer and classifier are pure functions of a single [`BeneficiaryRecord`].

pub mod assessment;
pub mod avatar;
pub mod domain;
pub mod income;
pub mod intake;
mod lenient;
pub mod report;

#[cfg(test)]
mod tests;

pub use assessment::{
    assess, compute_assessment_score, AssessmentFactor, AssessmentOutcome, AssessmentScore,
    ScoreComponent,
};
pub use avatar::{classify_avatar_category, AgeTier, AvatarCategory};
pub use domain::{Answer, BeneficiaryRecord, Gender, PriorityLevel};
pub use income::{normalize_income_range, IncomeBracket};
pub use intake::{BeneficiaryImporter, ImportError, IntakeFormat};
pub use report::{PriorityEntry, PriorityReport, PrioritySummary};
