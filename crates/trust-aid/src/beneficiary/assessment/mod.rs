pub(crate) mod rules;

use super::domain::BeneficiaryRecord;
use rules::AssessmentContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Need priority in `0..=100`; higher means assist sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AssessmentScore(u8);

impl AssessmentScore {
    pub const MIN: AssessmentScore = AssessmentScore(0);
    pub const MAX: AssessmentScore = AssessmentScore(100);

    /// Clamps a running total into the score range.
    pub fn from_total(total: i32) -> Self {
        // Clamped to 0..=100 first, so the narrowing cast is lossless.
        Self(total.clamp(0, 100) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AssessmentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Rule that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentFactor {
    Income,
    Dependents,
    EducationExpense,
    PoorHealth,
    ChronicIllness,
    Disability,
    NoHealthInsurance,
    RentedHousing,
    EarnerImbalance,
    AssistanceNeeds,
    SchemeGap,
    AssetOwnership,
}

impl AssessmentFactor {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentFactor::Income => "Income",
            AssessmentFactor::Dependents => "Dependents",
            AssessmentFactor::EducationExpense => "Education expense",
            AssessmentFactor::PoorHealth => "Poor health",
            AssessmentFactor::ChronicIllness => "Chronic illness",
            AssessmentFactor::Disability => "Disability",
            AssessmentFactor::NoHealthInsurance => "No health insurance",
            AssessmentFactor::RentedHousing => "Rented housing",
            AssessmentFactor::EarnerImbalance => "Earner imbalance",
            AssessmentFactor::AssistanceNeeds => "Assistance needs",
            AssessmentFactor::SchemeGap => "Scheme gap",
            AssessmentFactor::AssetOwnership => "Asset ownership",
        }
    }
}

/// Discrete contribution to an assessment, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: AssessmentFactor,
    pub points: i32,
    pub notes: String,
}

/// Assessment output: the clamped score and the trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub score: AssessmentScore,
    /// Sum of all components before clamping. May fall outside `0..=100`.
    pub raw_total: i32,
    pub components: Vec<ScoreComponent>,
}

/// Runs every scoring rule in order and keeps the non-zero contributions.
pub fn assess(record: &BeneficiaryRecord) -> AssessmentOutcome {
    let context = AssessmentContext::new(record);
    let components: Vec<ScoreComponent> = rules::RULES
        .iter()
        .filter_map(|rule| rule(&context))
        .filter(|component| component.points != 0)
        .collect();

    let raw_total = components
        .iter()
        .fold(0i32, |total, component| total.saturating_add(component.points));

    AssessmentOutcome {
        score: AssessmentScore::from_total(raw_total),
        raw_total,
        components,
    }
}

/// Need-priority score for a single record. Never fails; missing data scores neutrally.
pub fn compute_assessment_score(record: &BeneficiaryRecord) -> AssessmentScore {
    assess(record).score
}
