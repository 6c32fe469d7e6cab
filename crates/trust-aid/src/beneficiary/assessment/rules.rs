use super::super::domain::{Answer, BeneficiaryRecord};
use super::super::income::{normalize_income_range, IncomeBracket};
use super::{AssessmentFactor, ScoreComponent};

/// Midpoint below which owned assets reduce the score.
const ASSET_DEDUCTION_CEILING: u64 = 25_000;

pub(crate) type Rule = fn(&AssessmentContext<'_>) -> Option<ScoreComponent>;

/// Scoring order. The total is additive, but the breakdown lists components in this order.
pub(crate) const RULES: [Rule; 12] = [
    income,
    dependents,
    education_expense,
    poor_health,
    chronic_illness,
    disability,
    no_health_insurance,
    rented_housing,
    earner_imbalance,
    assistance_needs,
    scheme_gap,
    asset_ownership,
];

/// Values derived once per record and shared by the rules.
pub(crate) struct AssessmentContext<'a> {
    pub record: &'a BeneficiaryRecord,
    /// Midpoint of the reported income range, when one can be derived.
    pub income_midpoint: Option<u64>,
    pub total_children: u32,
}

impl<'a> AssessmentContext<'a> {
    pub(crate) fn new(record: &'a BeneficiaryRecord) -> Self {
        Self {
            record,
            income_midpoint: normalize_income_range(record.monthly_income.as_deref()),
            total_children: record.total_children(),
        }
    }
}

fn component(factor: AssessmentFactor, points: i32, notes: String) -> Option<ScoreComponent> {
    Some(ScoreComponent {
        factor,
        points,
        notes,
    })
}

fn per_item(count: usize, points: i32) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(points)
}

pub(crate) fn income(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    let bracket = IncomeBracket::classify(ctx.record.income_label());
    component(
        AssessmentFactor::Income,
        bracket.points(),
        bracket.label().to_string(),
    )
}

pub(crate) fn dependents(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    let points = match ctx.total_children {
        0 => return None,
        1 => 5,
        2 => 10,
        _ => 15,
    };
    component(
        AssessmentFactor::Dependents,
        points,
        format!("{} children in household", ctx.total_children),
    )
}

pub(crate) fn education_expense(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    // A zero midpoint gives no usable ratio.
    let income = ctx.income_midpoint.filter(|income| *income > 0)?;
    let expense = ctx.record.education_expense?;

    let ratio = expense / income as f64;
    let points = if ratio > 0.3 {
        20
    } else if ratio > 0.1 {
        10
    } else {
        return None;
    };

    component(
        AssessmentFactor::EducationExpense,
        points,
        format!("education spend is {:.0}% of income {income}", ratio * 100.0),
    )
}

pub(crate) fn poor_health(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    ctx.record
        .reports_poor_health()
        .then(|| ScoreComponent {
            factor: AssessmentFactor::PoorHealth,
            points: 10,
            notes: "health condition reported as poor".to_string(),
        })
}

pub(crate) fn chronic_illness(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    if !ctx.record.has_chronic_illness() {
        return None;
    }
    component(
        AssessmentFactor::ChronicIllness,
        10,
        "chronic illness recorded".to_string(),
    )
}

pub(crate) fn disability(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    if ctx.record.disability != Some(Answer::Yes) {
        return None;
    }
    component(
        AssessmentFactor::Disability,
        10,
        "disability recorded".to_string(),
    )
}

pub(crate) fn no_health_insurance(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    if ctx.record.health_insurance != Some(Answer::No) {
        return None;
    }
    component(
        AssessmentFactor::NoHealthInsurance,
        5,
        "no health insurance".to_string(),
    )
}

pub(crate) fn rented_housing(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    if !ctx.record.is_renting() {
        return None;
    }
    component(
        AssessmentFactor::RentedHousing,
        10,
        "household rents its housing".to_string(),
    )
}

pub(crate) fn earner_imbalance(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    let earners = ctx.record.earners();
    if earners == 0 || ctx.total_children <= earners {
        return None;
    }
    component(
        AssessmentFactor::EarnerImbalance,
        10,
        format!(
            "{} children supported by {earners} earner(s)",
            ctx.total_children
        ),
    )
}

pub(crate) fn assistance_needs(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    let needs = ctx.record.assistance_need_count();
    if needs == 0 {
        return None;
    }
    component(
        AssessmentFactor::AssistanceNeeds,
        per_item(needs, 5),
        format!("{needs} assistance need(s) requested"),
    )
}

pub(crate) fn scheme_gap(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    if ctx.record.government_scheme_count() > 0 || ctx.record.assistance_need_count() == 0 {
        return None;
    }
    component(
        AssessmentFactor::SchemeGap,
        10,
        "needs assistance but receives no government scheme".to_string(),
    )
}

pub(crate) fn asset_ownership(ctx: &AssessmentContext<'_>) -> Option<ScoreComponent> {
    let income = ctx
        .income_midpoint
        .filter(|income| *income < ASSET_DEDUCTION_CEILING)?;
    let assets = ctx.record.asset_count();
    if assets == 0 {
        return None;
    }
    component(
        AssessmentFactor::AssetOwnership,
        per_item(assets, -5),
        format!("{assets} asset(s) owned on income {income}"),
    )
}
