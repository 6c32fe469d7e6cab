use super::common::*;
use crate::beneficiary::avatar::AvatarCategory;
use crate::beneficiary::domain::{BeneficiaryRecord, PriorityLevel};
use crate::beneficiary::report::PriorityReport;
use chrono::NaiveDate;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

fn named(id: &str, record: BeneficiaryRecord) -> BeneficiaryRecord {
    BeneficiaryRecord {
        id: Some(id.to_string()),
        ..record
    }
}

#[test]
fn entries_are_ranked_by_score_with_stable_ties() {
    let records = vec![
        named("low", BeneficiaryRecord {
            monthly_income: Some("50001-100000".to_string()),
            ..blank_record()
        }),
        named("blank-a", blank_record()),
        named("high", struggling_household()),
        named("blank-b", blank_record()),
    ];

    let report = PriorityReport::build(&records, as_of());

    let order: Vec<(usize, Option<&str>, u8)> = report
        .entries
        .iter()
        .map(|entry| (entry.rank, entry.id.as_deref(), entry.score.value()))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, Some("high"), 90),
            (2, Some("blank-a"), 20),
            (3, Some("blank-b"), 20),
            (4, Some("low"), 0),
        ]
    );
    assert_eq!(report.entries[0].avatar, AvatarCategory::FemaleUnmarried);
}

#[test]
fn summary_counts_extremes() {
    let mut capped = struggling_household();
    capped.assistance_needs = items(&["Food", "Medical", "Education", "Housing"]);
    capped.priority_level = Some(PriorityLevel::High);
    let floored = BeneficiaryRecord {
        monthly_income: Some("0-10000".to_string()),
        assets: items(&["Land", "Vehicle", "Livestock", "Savings", "Gold", "Shop"]),
        ..blank_record()
    };

    let report = PriorityReport::build(&[capped, floored, blank_record()], as_of());
    let summary = report.summary();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.at_ceiling, 1);
    assert_eq!(summary.at_floor, 1);
    assert!((summary.mean_score - 40.0).abs() < f64::EPSILON);
    assert_eq!(report.entries[0].recorded_priority, Some(PriorityLevel::High));
}

#[test]
fn empty_batches_summarize_to_zero() {
    let report = PriorityReport::build(&[], as_of());

    assert!(report.top(5).is_empty());
    assert_eq!(report.summary().total, 0);
    assert_eq!(report.summary().mean_score, 0.0);
}

#[test]
fn top_limits_entries() {
    let records = vec![blank_record(), struggling_household(), blank_record()];
    let report = PriorityReport::build(&records, as_of());

    assert_eq!(report.top(2).len(), 2);
    assert_eq!(report.top(10).len(), 3);
    assert_eq!(report.top(1)[0].score.value(), 90);
}
